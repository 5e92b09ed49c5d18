//! Arena model: platforms, traps, and the between-wave reshuffle logic
//!
//! The layout is a fixed set of rectangles: one full-width ground strip plus
//! "high" platforms. A few high platforms oscillate horizontally; grounded
//! entities standing on one are carried by the per-tick delta it records.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geom::Rect;
use crate::consts::*;

/// Horizontal oscillation descriptor for a moving platform.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Oscillation {
    pub base_x: f32,
    pub range: f32,
    pub speed: f32,
    /// +1 or -1
    pub direction: f32,
    /// Signed delta applied this tick; riders add this to their position.
    pub last_dx: f32,
}

impl Oscillation {
    fn new(base_x: f32, range: f32, speed: f32, direction: f32) -> Self {
        Self {
            base_x,
            range,
            speed,
            direction,
            last_dx: 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
    pub oscillation: Option<Oscillation>,
}

impl Platform {
    fn fixed(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
            oscillation: None,
        }
    }

    fn moving(x: f32, y: f32, w: f32, h: f32, range: f32, speed: f32, direction: f32) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
            oscillation: Some(Oscillation::new(x, range, speed, direction)),
        }
    }

    /// The ground strip spans the arena bottom and is exempt from reshuffles.
    pub fn is_ground(&self) -> bool {
        self.rect.bottom() >= ARENA_H
    }

    /// Horizontal delta applied this tick (zero for stationary platforms).
    pub fn carry_dx(&self) -> f32 {
        self.oscillation.map_or(0.0, |o| o.last_dx)
    }
}

/// Always-damaging spike strip; sits on top of a platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trap {
    pub rect: Rect,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arena {
    pub platforms: Vec<Platform>,
    pub traps: Vec<Trap>,
}

impl Arena {
    pub fn new() -> Self {
        let platforms = vec![
            Platform::fixed(0.0, ARENA_H - 40.0, ARENA_W, 40.0),
            Platform::fixed(80.0, 420.0, 200.0, 16.0),
            Platform::fixed(330.0, 360.0, 200.0, 16.0),
            Platform::fixed(580.0, 300.0, 220.0, 16.0),
            Platform::moving(120.0, 260.0, 160.0, 16.0, 60.0, 0.6, 1.0),
            Platform::fixed(350.0, 220.0, 160.0, 16.0),
            Platform::fixed(640.0, 180.0, 160.0, 16.0),
            Platform::fixed(40.0, 330.0, 140.0, 14.0),
            Platform::fixed(240.0, 300.0, 120.0, 14.0),
            Platform::fixed(520.0, 250.0, 140.0, 14.0),
            Platform::fixed(20.0, 210.0, 120.0, 14.0),
            Platform::moving(220.0, 170.0, 120.0, 14.0, 50.0, 0.8, -1.0),
            Platform::fixed(440.0, 140.0, 120.0, 14.0),
            Platform::fixed(680.0, 120.0, 120.0, 14.0),
            Platform::fixed(80.0, 90.0, 120.0, 12.0),
            Platform::moving(280.0, 80.0, 140.0, 12.0, 70.0, 0.5, 1.0),
            Platform::fixed(520.0, 70.0, 140.0, 12.0),
            Platform::fixed(680.0, 60.0, 120.0, 12.0),
        ];

        let traps = [
            (220.0, ARENA_H - 56.0, 60.0),
            (380.0, 344.0, 50.0),
            (610.0, 284.0, 50.0),
            (160.0, 244.0, 40.0),
            (470.0, 134.0, 50.0),
            (700.0, 104.0, 50.0),
        ]
        .into_iter()
        .map(|(x, y, w)| Trap {
            rect: Rect::new(x, y, w, 16.0),
        })
        .collect();

        Self { platforms, traps }
    }

    /// Non-ground platforms, eligible for reshuffles and trap/power-up placement.
    pub fn high_platforms(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.iter().filter(|p| !p.is_ground())
    }

    /// Platform whose top supports the given body (feet on top, x-overlap).
    pub fn supporting_platform(&self, body: &Rect) -> Option<&Platform> {
        self.platforms.iter().find(|p| {
            (body.bottom() - p.rect.y).abs() < 2.0
                && body.x < p.rect.right()
                && body.right() > p.rect.x
        })
    }

    /// Advance oscillating platforms one tick, reflecting at `base_x ± range`.
    pub fn advance_platforms(&mut self) {
        for p in &mut self.platforms {
            if let Some(osc) = &mut p.oscillation {
                let old = p.rect.x;
                let mut x = old + osc.direction * osc.speed;
                if x >= osc.base_x + osc.range {
                    x = osc.base_x + osc.range;
                    osc.direction = -1.0;
                } else if x <= osc.base_x - osc.range {
                    x = osc.base_x - osc.range;
                    osc.direction = 1.0;
                }
                p.rect.x = x;
                osc.last_dx = x - old;
            }
        }
    }

    /// Bounded random walk of every high platform's x, keeping the arena
    /// interior. Invoked on wave clear and on player death.
    pub fn reshuffle_high_platforms(&mut self, rng: &mut Pcg32) {
        for p in &mut self.platforms {
            if p.is_ground() {
                continue;
            }
            let drift: f32 = rng.random_range(-80.0..80.0);
            let slack = p.oscillation.map_or(0.0, |o| o.range);
            let min_x = WALL_MARGIN + slack;
            let max_x = (ARENA_W - p.rect.w - WALL_MARGIN - slack).max(min_x);
            let x = (p.rect.x + drift).clamp(min_x, max_x);
            p.rect.x = x;
            if let Some(osc) = &mut p.oscillation {
                osc.base_x = x;
                osc.last_dx = 0.0;
            }
        }
    }

    /// Resample every trap onto a random high platform. Bounded retries: the
    /// new spot must move at least `MIN_SHIFT` and not overlap another trap;
    /// when retries exhaust, the last sample stands (best-effort, never loops).
    pub fn reposition_traps(&mut self, rng: &mut Pcg32) {
        const TRIES: u32 = 12;
        const MIN_SHIFT: f32 = 60.0;

        let spots: Vec<Rect> = self.high_platforms().map(|p| p.rect).collect();
        if spots.is_empty() {
            return;
        }

        for i in 0..self.traps.len() {
            let old = self.traps[i].rect;
            let mut placed = old;
            for _ in 0..TRIES {
                let plat = spots[rng.random_range(0..spots.len())];
                let x = if plat.w > old.w + 8.0 {
                    plat.x + 4.0 + rng.random_range(0.0..plat.w - old.w - 8.0)
                } else {
                    plat.x
                };
                placed = Rect::new(x, plat.y - old.h, old.w, old.h);

                let moved = (placed.x - old.x).abs() + (placed.y - old.y).abs() >= MIN_SHIFT;
                let clear = self
                    .traps
                    .iter()
                    .enumerate()
                    .all(|(j, t)| j == i || !placed.overlaps(&t.rect));
                if moved && clear {
                    break;
                }
            }
            self.traps[i].rect = placed;
        }
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}
