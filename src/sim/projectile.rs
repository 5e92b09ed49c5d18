//! Projectile pools: friendly throwing stars and hostile shots
//!
//! Integration only; all hit-testing is centralized in `combat` so a
//! projectile can be consumed at most once per tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::Rect;
use crate::consts::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Remaining lifetime in ticks; removed when it reaches zero
    pub life: u32,
    /// Cosmetic spin, radians
    pub rot: f32,
    pub hostile: bool,
}

impl Projectile {
    pub fn friendly(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            life: STAR_LIFE,
            rot: 0.0,
            hostile: false,
        }
    }

    pub fn hostile(pos: Vec2, vel: Vec2, radius: f32, life: u32) -> Self {
        Self {
            pos,
            vel,
            radius,
            life,
            rot: 0.0,
            hostile: true,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_circle(self.pos, self.radius)
    }
}

/// Advance every projectile by its velocity and expire old ones.
pub fn integrate(projectiles: &mut Vec<Projectile>) {
    for p in projectiles.iter_mut() {
        p.pos += p.vel;
        p.rot += 0.3;
        p.life -= 1;
    }
    projectiles.retain(|p| p.life > 0);
}
