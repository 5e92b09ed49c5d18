//! Game state and core run-level types
//!
//! The simulation context object: owned by the top-level loop, passed to every
//! phase each tick, and reconstructible from constants via [`GameState::new`].

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::enemy::{Archetype, Enemy};
use super::player::Player;
use super::powerup::{PowerUp, PowerUpKind};
use super::projectile::Projectile;
use crate::consts::*;

/// Global run status. The loop stops advancing physics/AI/combat once
/// terminal; only a restart (handled by the adapter) leaves `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunStatus {
    Playing,
    GameOver,
}

/// What killed the player this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    EnemyContact,
    Projectile,
    Trap,
    Fell,
}

/// Things that happened during a tick, reported to the caller for
/// logging/HUD feedback. State mutation already happened when these are
/// emitted; consuming them is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PlayerDied { cause: DeathCause },
    EnemyKilled { archetype: Archetype, score: u64 },
    PowerUpCollected { kind: PowerUpKind },
    WaveCleared { wave: u32 },
    GameOver { score: u64 },
}

/// Transient on-screen message. Expiry is an absolute timestamp captured at
/// post time, so pausing the tick clock does not extend a message. `None`
/// expiry means the message persists (game over).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub text: String,
    pub expires_at_ms: Option<f64>,
}

impl Announcement {
    pub fn is_visible(&self, now_ms: f64) -> bool {
        self.expires_at_ms.is_none_or(|t| now_ms <= t)
    }
}

/// Timed player buffs, all plain per-tick countdowns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Boosts {
    pub size_ticks: u32,
    pub rate_ticks: u32,
    pub regen_ticks: u32,
    /// Cosmetic timer started by an extra-life pickup
    pub bonus_life_ticks: u32,
    /// Ticks until the next passive heal
    pub heal_countdown: u32,
}

impl Boosts {
    pub fn new() -> Self {
        Self {
            heal_countdown: HEAL_INTERVAL,
            ..Default::default()
        }
    }

    pub fn size_active(&self) -> bool {
        self.size_ticks > 0
    }

    pub fn rate_active(&self) -> bool {
        self.rate_ticks > 0
    }

    pub fn regen_active(&self) -> bool {
        self.regen_ticks > 0
    }

    pub fn heal_interval(&self) -> u32 {
        if self.regen_active() {
            HEAL_INTERVAL_REGEN
        } else {
            HEAL_INTERVAL
        }
    }
}

/// Complete simulation state (deterministic for a given seed + input stream).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    /// Simulation tick counter
    pub tick: u64,
    pub status: RunStatus,
    pub score: u64,
    pub lives: u8,
    /// Current wave number (1-based)
    pub wave: u32,
    /// Enemies spawned per normal wave
    pub quota: u32,
    /// Wall-clock milliseconds supplied by the adapter each tick; only used
    /// for announcement expiry.
    pub clock_ms: f64,
    pub announcement: Option<Announcement>,
    pub arena: Arena,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    pub powerups: Vec<PowerUp>,
    pub boosts: Boosts,
}

impl GameState {
    /// Fresh run: wave 1 populated, player at spawn, everything else from
    /// constants.
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tick: 0,
            status: RunStatus::Playing,
            score: 0,
            lives: START_LIVES,
            wave: 1,
            quota: START_QUOTA,
            clock_ms: 0.0,
            announcement: None,
            arena: Arena::new(),
            player: Player::new(),
            enemies: Vec::new(),
            projectiles: Vec::new(),
            powerups: Vec::new(),
            boosts: Boosts::new(),
        };
        super::wave::spawn_wave(&mut state);
        state.announce("Explore the dungeon", 1200.0);
        state
    }

    /// Restart in place, keeping nothing from the previous run.
    pub fn reset(&mut self, seed: u64) {
        *self = Self::new(seed);
    }

    pub fn announce(&mut self, text: &str, duration_ms: f64) {
        self.announcement = Some(Announcement {
            text: text.to_string(),
            expires_at_ms: Some(self.clock_ms + duration_ms),
        });
    }

    /// Post a message that never expires (game over banner).
    pub fn announce_sticky(&mut self, text: &str) {
        self.announcement = Some(Announcement {
            text: text.to_string(),
            expires_at_ms: None,
        });
    }

    /// Whether the HUD should currently show the announcement.
    pub fn announcement_visible(&self) -> bool {
        self.announcement
            .as_ref()
            .is_some_and(|a| a.is_visible(self.clock_ms))
    }

    /// Count of enemies that block wave progression (fliers are exempt).
    pub fn wave_enemy_count(&self) -> usize {
        self.enemies.iter().filter(|e| !e.archetype.is_flier()).count()
    }

    pub fn flier_count(&self) -> usize {
        self.enemies.iter().filter(|e| e.archetype.is_flier()).count()
    }

    pub fn grant_life(&mut self) {
        self.lives = (self.lives + 1).min(MAX_LIVES);
    }

    pub fn add_score(&mut self, points: u64, archetype: Archetype) -> GameEvent {
        self.score += points;
        GameEvent::EnemyKilled {
            archetype,
            score: points,
        }
    }
}
