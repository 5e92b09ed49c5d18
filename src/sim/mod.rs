//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! Phase order within a tick is the concurrency contract: input intents,
//! platform motion, player physics, projectiles, enemy AI, power-ups, combat
//! resolution, wave progression. No collection is read while another phase
//! mutates it out of order.

pub mod arena;
pub mod combat;
pub mod enemy;
pub mod geom;
pub mod player;
pub mod powerup;
pub mod projectile;
pub mod state;
pub mod tick;
pub mod wave;

pub use arena::{Arena, Oscillation, Platform, Trap};
pub use combat::player_death;
pub use enemy::{Archetype, Decision, Enemy, decide};
pub use geom::Rect;
pub use player::Player;
pub use powerup::{PowerUp, PowerUpKind};
pub use projectile::Projectile;
pub use state::{Announcement, Boosts, DeathCause, GameEvent, GameState, RunStatus};
pub use tick::{TickInput, tick};
pub use wave::spawn_wave;
