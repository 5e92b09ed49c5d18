//! Enemy archetypes and their behavior policies
//!
//! Each archetype is a tagged variant selecting a decision policy; physics
//! integration is shared across all grounded archetypes (and skipped entirely
//! for ethereal fliers). `decide` is the per-tick policy: it reads the world
//! and produces a direction plus jump/fire wishes, and the shared update
//! applies them.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::geom::Rect;
use super::player::Player;
use super::projectile::Projectile;
use super::state::GameState;
use crate::consts::*;

/// Immutable behavioral category; fixes AI policy, stats, and reward value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Archetype {
    /// Plain patroller
    LightMelee,
    /// Patroller that shoots at the player; tougher, fires more as waves rise
    HeavyRanged,
    /// Chases the player, hopping traps and climbing toward their platform
    Pursuer,
    /// Works sideways across platforms between itself and the player
    Flanker,
    /// Harmless patroller worth an extra life when killed
    LifeDrain,
    /// Every-third-wave solo spawn: big, tough, constant fire
    Boss,
    /// Ethereal flier; exempt from gravity, platforms, and wave accounting
    Ghost,
}

impl Archetype {
    pub fn is_flier(&self) -> bool {
        matches!(self, Archetype::Ghost)
    }

    pub fn hp(&self) -> i32 {
        match self {
            Archetype::Boss => 8,
            Archetype::HeavyRanged => 2,
            _ => 1,
        }
    }

    pub fn size(&self) -> (f32, f32) {
        match self {
            Archetype::Boss => (48.0, 68.0),
            Archetype::Ghost => (26.0, 36.0),
            _ => (26.0, 40.0),
        }
    }

    /// Score delta awarded on kill.
    pub fn score(&self) -> u64 {
        match self {
            Archetype::Boss => 600,
            Archetype::Ghost | Archetype::HeavyRanged => 200,
            Archetype::LifeDrain => 160,
            _ => 120,
        }
    }

    pub fn grants_life_on_kill(&self) -> bool {
        matches!(self, Archetype::LifeDrain)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    /// `vel.x` is the patrol speed magnitude (signed by `dir`); `vel.y` is the
    /// usual vertical velocity.
    pub vel: Vec2,
    pub archetype: Archetype,
    pub hp: i32,
    /// +1 or -1
    pub dir: f32,
    pub grounded: bool,
    pub jump_cooldown: f32,
    pub fire_cooldown: f32,
    /// Sinusoidal wobble phase, fliers only
    pub drift_phase: f32,
}

impl Enemy {
    /// Grounded wave spawn dropping in from the arena top.
    pub fn new(archetype: Archetype, x: f32, rng: &mut Pcg32) -> Self {
        Self {
            pos: Vec2::new(x, 0.0),
            vel: Vec2::new(1.1 + rng.random::<f32>() * 0.8, 0.0),
            archetype,
            hp: archetype.hp(),
            dir: if rng.random::<f32>() < 0.5 { -1.0 } else { 1.0 },
            grounded: false,
            jump_cooldown: rng.random::<f32>() * 40.0,
            fire_cooldown: 40.0 + rng.random::<f32>() * 60.0,
            drift_phase: 0.0,
        }
    }

    pub fn boss() -> Self {
        Self {
            pos: Vec2::new(ARENA_W / 2.0 - 24.0, 0.0),
            vel: Vec2::new(0.5, 0.0),
            archetype: Archetype::Boss,
            hp: Archetype::Boss.hp(),
            dir: 1.0,
            grounded: false,
            jump_cooldown: 0.0,
            fire_cooldown: 40.0,
            drift_phase: 0.0,
        }
    }

    /// Flier entering from a random arena edge at a random height.
    pub fn ghost(rng: &mut Pcg32) -> Self {
        let (w, _) = Archetype::Ghost.size();
        let x = if rng.random::<f32>() < 0.5 {
            ENEMY_EDGE_MARGIN
        } else {
            ARENA_W - ENEMY_EDGE_MARGIN - w
        };
        Self {
            pos: Vec2::new(x, rng.random_range(60.0..ARENA_H - 120.0)),
            vel: Vec2::ZERO,
            archetype: Archetype::Ghost,
            hp: Archetype::Ghost.hp(),
            dir: 1.0,
            grounded: false,
            jump_cooldown: 0.0,
            fire_cooldown: 0.0,
            drift_phase: rng.random_range(0.0..std::f32::consts::TAU),
        }
    }

    pub fn rect(&self) -> Rect {
        let (w, h) = self.archetype.size();
        Rect::new(self.pos.x, self.pos.y, w, h)
    }
}

/// What an archetype's policy wants to do this tick.
#[derive(Debug, Clone, Copy)]
pub struct Decision {
    pub dir: f32,
    pub wants_jump: bool,
}

/// Read-only view of everything a policy may consult.
pub struct WorldView<'a> {
    pub player: &'a Player,
    pub arena: &'a Arena,
    pub wave: u32,
}

/// Per-archetype decision policy for grounded enemies.
pub fn decide(e: &Enemy, world: &WorldView, rng: &mut Pcg32) -> Decision {
    match e.archetype {
        Archetype::Pursuer => pursue(e, world),
        Archetype::Flanker => flank(e, world, rng),
        Archetype::Boss => Decision {
            dir: face_player(e, world.player),
            wants_jump: false,
        },
        // Patrollers keep their current heading; the shared update handles
        // edge bounces and spontaneous reversals.
        _ => Decision {
            dir: e.dir,
            wants_jump: false,
        },
    }
}

fn face_player(e: &Enemy, player: &Player) -> f32 {
    if player.center().x < e.rect().center().x {
        -1.0
    } else {
        1.0
    }
}

/// Pursuer: bias toward the player, hop traps ahead, climb toward the
/// player's platform when they are above, head for an edge when below.
fn pursue(e: &Enemy, world: &WorldView) -> Decision {
    const TRAP_LOOKAHEAD: f32 = 90.0;
    const EDGE_ALIGN: f32 = 30.0;

    let me = e.rect();
    let my_center = me.center();
    let player_rect = world.player.rect();
    let mut dir = face_player(e, world.player);
    let mut wants_jump = false;

    // Trap ahead at roughly this height: jump it
    for trap in &world.arena.traps {
        let ahead = (trap.rect.center().x - my_center.x) * dir;
        if ahead > 0.0 && ahead < TRAP_LOOKAHEAD && (trap.rect.y - me.bottom()).abs() < 24.0 {
            wants_jump = true;
        }
    }

    if player_rect.bottom() < me.bottom() - 20.0 {
        // Player above: walk to the near edge of their platform, jump when aligned
        if let Some(plat) = world.arena.supporting_platform(&player_rect) {
            let near_edge = if my_center.x < plat.rect.center().x {
                plat.rect.x
            } else {
                plat.rect.right()
            };
            dir = if near_edge < my_center.x { -1.0 } else { 1.0 };
            if (near_edge - my_center.x).abs() < EDGE_ALIGN {
                wants_jump = true;
            }
        }
    } else if player_rect.bottom() > me.bottom() + 20.0 {
        // Player below: head for the edge of our own platform facing them
        if let Some(own) = world.arena.supporting_platform(&me) {
            if !own.is_ground() {
                let edge = if world.player.center().x < my_center.x {
                    own.rect.x
                } else {
                    own.rect.right()
                };
                dir = if edge < my_center.x { -1.0 } else { 1.0 };
            }
        }
    }

    Decision { dir, wants_jump }
}

/// Flanker: pick the nearest platform horizontally between us and the player
/// at a reachable height gap, walk to our edge, and jump across sometimes.
fn flank(e: &Enemy, world: &WorldView, rng: &mut Pcg32) -> Decision {
    const JUMP_REACH: f32 = 160.0;
    const EDGE_ALIGN: f32 = 24.0;
    const JUMP_CHANCE: f32 = 0.25;

    let me = e.rect();
    let my_center = me.center();
    let player_x = world.player.center().x;
    let lo = my_center.x.min(player_x);
    let hi = my_center.x.max(player_x);

    let target = world
        .arena
        .high_platforms()
        .filter(|p| {
            let cx = p.rect.center().x;
            cx > lo && cx < hi
        })
        .filter(|p| {
            let gap = me.bottom() - p.rect.y;
            gap > 20.0 && gap < JUMP_REACH
        })
        .min_by(|a, b| {
            let da = (a.rect.center().x - my_center.x).abs();
            let db = (b.rect.center().x - my_center.x).abs();
            da.total_cmp(&db)
        });

    match target {
        Some(plat) => {
            let dir = if plat.rect.center().x < my_center.x {
                -1.0
            } else {
                1.0
            };
            let at_edge = world.arena.supporting_platform(&me).is_some_and(|own| {
                let edge = if dir < 0.0 {
                    own.rect.x
                } else {
                    own.rect.right()
                };
                (edge - my_center.x).abs() < EDGE_ALIGN
            });
            Decision {
                dir,
                wants_jump: at_edge && rng.random::<f32>() < JUMP_CHANCE,
            }
        }
        None => Decision {
            dir: e.dir,
            wants_jump: false,
        },
    }
}

/// Heavy-ranged fire probability; tightens as waves climb.
pub fn fire_chance(wave: u32) -> f32 {
    (0.03 + 0.002 * wave.saturating_sub(1) as f32).min(0.08)
}

/// Heavy-ranged cooldown refill base; shrinks with waves, floored.
pub fn fire_cooldown(wave: u32) -> f32 {
    (90.0 - 4.0 * wave.saturating_sub(1) as f32).max(30.0)
}

/// Unit vector from `from` toward `to`, with a distance floor so a coincident
/// target never divides by zero.
fn aim_at(from: Vec2, to: Vec2) -> Vec2 {
    let d = to - from;
    if d.length() < MIN_AIM_DIST {
        Vec2::new(1.0, 0.0)
    } else {
        d.normalize()
    }
}

/// Advance every enemy one tick: decision policy, shared grounded physics,
/// and fire attempts. Fliers steer directly and skip all platform logic.
pub fn update_enemies(state: &mut GameState) {
    let GameState {
        enemies,
        projectiles,
        player,
        arena,
        rng,
        wave,
        ..
    } = state;
    let wave = *wave;

    for e in enemies.iter_mut() {
        if e.jump_cooldown > 0.0 {
            e.jump_cooldown -= 1.0;
        }
        if e.fire_cooldown > 0.0 {
            e.fire_cooldown -= 1.0;
        }

        if e.archetype.is_flier() {
            update_ghost(e, player);
            continue;
        }

        let decision = decide(
            e,
            &WorldView {
                player,
                arena,
                wave,
            },
            rng,
        );
        e.dir = decision.dir;
        e.pos.x += e.vel.x * e.dir;

        let body = e.rect();
        if body.x < ENEMY_EDGE_MARGIN || body.right() > ARENA_W - ENEMY_EDGE_MARGIN {
            e.dir = -e.dir;
        }
        // Spontaneous reversal keeps patrols from looking robotic
        if rng.random::<f32>() < 0.01 {
            e.dir = -e.dir;
        }

        e.vel.y += GRAVITY * ENEMY_GRAVITY_SCALE;
        e.pos.y += e.vel.y;
        e.grounded = false;
        let (_, h) = e.archetype.size();
        for p in &arena.platforms {
            if e.vel.y >= 0.0 && e.rect().overlaps(&p.rect) {
                e.pos.y = p.rect.y - h;
                e.vel.y = 0.0;
                e.grounded = true;
            }
        }

        let hop_chance = if e.archetype == Archetype::Boss {
            0.01
        } else {
            0.02
        };
        if e.grounded
            && e.jump_cooldown <= 0.0
            && (decision.wants_jump || rng.random::<f32>() < hop_chance)
        {
            e.vel.y = -8.0 - rng.random::<f32>() * 3.0;
            e.grounded = false;
            e.jump_cooldown = 40.0 + rng.random::<f32>() * 40.0;
        }

        maybe_fire(e, player, wave, rng, projectiles);
    }
}

fn update_ghost(e: &mut Enemy, player: &Player) {
    let heading = aim_at(e.rect().center(), player.center());
    e.vel = heading * GHOST_SPEED;
    e.pos += e.vel;
    e.drift_phase += GHOST_DRIFT_STEP;
    e.pos.y += e.drift_phase.sin() * GHOST_DRIFT_AMPL;
    e.dir = if heading.x < 0.0 { -1.0 } else { 1.0 };
}

fn maybe_fire(
    e: &mut Enemy,
    player: &Player,
    wave: u32,
    rng: &mut Pcg32,
    projectiles: &mut Vec<Projectile>,
) {
    match e.archetype {
        Archetype::HeavyRanged => {
            if e.fire_cooldown <= 0.0 && rng.random::<f32>() < fire_chance(wave) {
                let origin = e.rect().center();
                let vel = aim_at(origin, player.center()) * ENEMY_STAR_SPEED;
                projectiles.push(Projectile::hostile(origin, vel, STAR_RADIUS, ENEMY_STAR_LIFE));
                e.fire_cooldown = fire_cooldown(wave) + rng.random::<f32>() * 60.0;
            }
        }
        Archetype::Boss => {
            if e.fire_cooldown <= 0.0 {
                let origin = e.rect().center();
                let sign = if player.center().x > origin.x { 1.0 } else { -1.0 };
                projectiles.push(Projectile::hostile(
                    origin,
                    Vec2::new(sign * BOSS_STAR_SPEED, -0.2),
                    BOSS_STAR_RADIUS,
                    BOSS_STAR_LIFE,
                ));
                e.fire_cooldown = 55.0 + rng.random::<f32>() * 30.0;
            }
        }
        _ => {}
    }
}
