//! Axis-aligned rectangle geometry
//!
//! Every hitbox in the game is an axis-aligned rectangle; circles
//! (throwing stars) are tested through their bounding box.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned box. `w` and `h` are never negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        debug_assert!(w >= 0.0 && h >= 0.0);
        Self { x, y, w, h }
    }

    /// Bounding box of a circle; used for projectile hit tests.
    pub fn from_circle(center: Vec2, r: f32) -> Self {
        Self::new(center.x - r, center.y - r, r * 2.0, r * 2.0)
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Strict overlap test; touching edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}
