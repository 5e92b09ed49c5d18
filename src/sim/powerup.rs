//! Power-up spawning, expiry, and effect application
//!
//! Pickups appear on random high platforms, age out if untouched, and apply
//! timed boosts (or an immediate extra life) when collected. Collection
//! itself lives in `combat` with the rest of the overlap checks.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geom::Rect;
use super::state::{GameEvent, GameState};
use crate::consts::*;

pub const POWERUP_SIZE: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Wider throwing stars for a while
    StarSize,
    /// Faster throw cadence and star speed for a while
    ThrowRate,
    /// Immediate extra life (capped)
    ExtraLife,
    /// Quicker passive healing for a while
    Regen,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub pos: Vec2,
    pub kind: PowerUpKind,
    /// Remaining ticks before the pickup despawns
    pub life: u32,
}

impl PowerUp {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, POWERUP_SIZE, POWERUP_SIZE)
    }
}

fn roll_kind(r: f32) -> PowerUpKind {
    if r < 0.25 {
        PowerUpKind::ThrowRate
    } else if r < 0.50 {
        PowerUpKind::ExtraLife
    } else if r < 0.70 {
        PowerUpKind::Regen
    } else {
        PowerUpKind::StarSize
    }
}

/// Place one pickup on a random high platform.
pub fn spawn(state: &mut GameState) {
    let GameState {
        arena,
        rng,
        powerups,
        ..
    } = state;

    let spots: Vec<Rect> = arena.high_platforms().map(|p| p.rect).collect();
    if spots.is_empty() {
        return;
    }
    let plat = spots[rng.random_range(0..spots.len())];
    let x = if plat.w > POWERUP_SIZE + 24.0 {
        plat.x + 12.0 + rng.random::<f32>() * (plat.w - POWERUP_SIZE - 24.0)
    } else {
        plat.center().x - POWERUP_SIZE / 2.0
    };
    let kind = roll_kind(rng.random::<f32>());
    powerups.push(PowerUp {
        pos: Vec2::new(x, plat.y - POWERUP_SIZE - 4.0),
        kind,
        life: POWERUP_LIFE,
    });
}

/// Low-probability per-tick spawn, capped.
pub fn maybe_spawn(state: &mut GameState) {
    if state.powerups.len() < POWERUP_CAP && state.rng.random::<f32>() < POWERUP_SPAWN_CHANCE {
        spawn(state);
    }
}

/// Age pickups and drop the expired ones.
pub fn update(state: &mut GameState) {
    for p in &mut state.powerups {
        p.life = p.life.saturating_sub(1);
    }
    state.powerups.retain(|p| p.life > 0);
}

/// Apply a collected pickup's effect and announce it.
pub fn apply(state: &mut GameState, kind: PowerUpKind) -> GameEvent {
    match kind {
        PowerUpKind::StarSize => {
            state.boosts.size_ticks = BOOST_TICKS;
            state.announce("Star size up!", 1000.0);
        }
        PowerUpKind::ThrowRate => {
            state.boosts.rate_ticks = BOOST_TICKS;
            state.announce("Faster throws!", 1000.0);
        }
        PowerUpKind::ExtraLife => {
            state.grant_life();
            state.boosts.bonus_life_ticks = BONUS_LIFE_TICKS;
            state.announce("Extra life!", 1000.0);
        }
        PowerUpKind::Regen => {
            state.boosts.regen_ticks = BOOST_TICKS;
            state.announce("Regeneration!", 1000.0);
        }
    }
    GameEvent::PowerUpCollected { kind }
}

/// Run down boost timers and the passive heal clock. The heal interval is
/// re-read each expiry so an active regen boost shortens the next cycle too.
pub fn tick_boosts(state: &mut GameState) {
    let b = &mut state.boosts;
    b.size_ticks = b.size_ticks.saturating_sub(1);
    b.rate_ticks = b.rate_ticks.saturating_sub(1);
    b.regen_ticks = b.regen_ticks.saturating_sub(1);
    b.bonus_life_ticks = b.bonus_life_ticks.saturating_sub(1);

    b.heal_countdown = b.heal_countdown.saturating_sub(1);
    if b.heal_countdown == 0 {
        b.heal_countdown = b.heal_interval();
        state.grant_life();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_lands_on_a_high_platform() {
        let mut state = GameState::new(21);
        spawn(&mut state);
        let p = state.powerups.last().unwrap();
        assert_eq!(p.life, POWERUP_LIFE);

        let resting = state.arena.high_platforms().any(|plat| {
            (p.rect().bottom() - (plat.rect.y - 4.0)).abs() < 1e-3
                && p.pos.x >= plat.rect.x - 1e-3
                && p.rect().right() <= plat.rect.right() + 1e-3
        });
        assert!(resting, "pickup must sit on top of a high platform");
    }

    #[test]
    fn test_cap_blocks_spawns() {
        let mut state = GameState::new(5);
        for _ in 0..POWERUP_CAP {
            spawn(&mut state);
        }
        assert_eq!(state.powerups.len(), POWERUP_CAP);
        for _ in 0..20_000 {
            maybe_spawn(&mut state);
        }
        assert_eq!(state.powerups.len(), POWERUP_CAP);
    }

    #[test]
    fn test_untouched_pickup_expires() {
        let mut state = GameState::new(5);
        spawn(&mut state);
        for _ in 0..POWERUP_LIFE {
            update(&mut state);
        }
        assert!(state.powerups.is_empty());
    }

    #[test]
    fn test_extra_life_respects_cap() {
        let mut state = GameState::new(5);
        state.lives = MAX_LIVES;
        let ev = apply(&mut state, PowerUpKind::ExtraLife);
        assert_eq!(state.lives, MAX_LIVES);
        assert_eq!(
            ev,
            GameEvent::PowerUpCollected {
                kind: PowerUpKind::ExtraLife
            }
        );
        assert!(state.boosts.bonus_life_ticks > 0);
    }

    #[test]
    fn test_regen_shortens_heal_cycle() {
        let mut state = GameState::new(5);
        state.lives = 1;
        apply(&mut state, PowerUpKind::Regen);

        state.boosts.heal_countdown = 1;
        tick_boosts(&mut state);
        assert_eq!(state.lives, 2);
        assert_eq!(state.boosts.heal_countdown, HEAL_INTERVAL_REGEN);

        // Once the boost lapses the cycle reverts to the slow interval
        state.boosts.regen_ticks = 0;
        state.boosts.heal_countdown = 1;
        tick_boosts(&mut state);
        assert_eq!(state.boosts.heal_countdown, HEAL_INTERVAL);
    }
}
