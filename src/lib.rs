//! Dungeon Ninja - a wave-based dungeon platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, enemy AI, combat, wave progression)
//! - `input`: Abstract intent adapter between raw input events and the simulation
//!
//! Rendering, HUD text, and raw event capture are external collaborators; they
//! consume read-only state snapshots and feed [`sim::TickInput`] once per tick.

pub mod input;
pub mod sim;

pub use input::IntentState;
pub use sim::{GameState, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Nominal simulation rate; all per-tick constants assume this
    pub const TICK_HZ: u32 = 60;
    /// Milliseconds per tick at the nominal rate
    pub const TICK_MS: f64 = 1000.0 / TICK_HZ as f64;

    /// Arena dimensions (y grows downward)
    pub const ARENA_W: f32 = 840.0;
    pub const ARENA_H: f32 = 560.0;
    /// Player horizontal clamp margin
    pub const WALL_MARGIN: f32 = 10.0;
    /// Enemies reverse direction at this distance from the walls
    pub const ENEMY_EDGE_MARGIN: f32 = 20.0;
    /// Falling past this y counts as a fall death
    pub const FALL_LIMIT: f32 = ARENA_H + 200.0;

    /// Physics
    pub const GRAVITY: f32 = 0.55;
    pub const GROUND_FRICTION: f32 = 0.8;
    /// Enemies fall slightly slower than the player
    pub const ENEMY_GRAVITY_SCALE: f32 = 0.9;

    /// Player defaults
    pub const PLAYER_W: f32 = 28.0;
    pub const PLAYER_H: f32 = 52.0;
    pub const PLAYER_SPEED: f32 = 3.4;
    pub const PLAYER_JUMP: f32 = 11.0;
    pub const SPAWN_X: f32 = 120.0;
    pub const SPAWN_Y: f32 = ARENA_H - 92.0;
    /// Invulnerability window granted on every death (ticks)
    pub const INVULN_TICKS: u32 = 45;

    /// Throwing stars
    pub const STAR_RADIUS: f32 = 6.0;
    pub const STAR_SIZE_BONUS: f32 = 3.0;
    pub const STAR_SPEED: f32 = 6.5;
    pub const STAR_SPEED_BONUS: f32 = 1.5;
    pub const STAR_LIFE: u32 = 90;
    pub const THROW_COOLDOWN: u32 = 16;
    pub const THROW_COOLDOWN_FAST: u32 = 9;

    /// Hostile projectiles
    pub const ENEMY_STAR_SPEED: f32 = 5.0;
    pub const ENEMY_STAR_LIFE: u32 = 120;
    pub const BOSS_STAR_SPEED: f32 = 5.5;
    pub const BOSS_STAR_RADIUS: f32 = 7.0;
    pub const BOSS_STAR_LIFE: u32 = 140;

    /// Power-ups
    pub const POWERUP_SPAWN_CHANCE: f32 = 0.002;
    pub const POWERUP_CAP: usize = 3;
    pub const POWERUP_LIFE: u32 = 600;
    pub const BOOST_TICKS: u32 = 480;
    pub const BONUS_LIFE_TICKS: u32 = 300;
    /// Passive heal interval, normal and under a regen boost (ticks)
    pub const HEAL_INTERVAL: u32 = 3600;
    pub const HEAL_INTERVAL_REGEN: u32 = 900;

    /// Run state
    pub const START_LIVES: u8 = 3;
    pub const WAVE_LIVES: u8 = 3;
    pub const MAX_LIVES: u8 = 5;
    pub const START_QUOTA: u32 = 3;

    /// Ethereal fliers
    pub const GHOST_SPEED: f32 = 1.6;
    pub const GHOST_CAP: usize = 2;
    pub const GHOST_SPAWN_CHANCE: f32 = 0.003;
    pub const GHOST_DRIFT_STEP: f32 = 0.08;
    pub const GHOST_DRIFT_AMPL: f32 = 0.6;

    /// Floor under direction normalization when aiming at a coincident target
    pub const MIN_AIM_DIST: f32 = 1.0;
}
