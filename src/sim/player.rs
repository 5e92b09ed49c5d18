//! Player state machine
//!
//! Grounded/airborne, vulnerable/invulnerable, and throw-ready/on-cooldown are
//! all derived states: the collision pass recomputes `grounded` every tick and
//! the other two are countdowns compared against zero.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::geom::Rect;
use super::projectile::Projectile;
use super::state::Boosts;
use crate::consts::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    /// +1 facing right, -1 facing left
    pub facing: i8,
    pub grounded: bool,
    /// Set while a horizontal intent is held (render adapter reads this)
    pub moving: bool,
    /// Throw cooldown, ticks
    pub cooldown: u32,
    /// Invulnerability countdown, ticks
    pub invuln: u32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(SPAWN_X, SPAWN_Y),
            vel: Vec2::ZERO,
            facing: 1,
            grounded: false,
            moving: false,
            cooldown: 0,
            invuln: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, PLAYER_W, PLAYER_H)
    }

    pub fn center(&self) -> Vec2 {
        self.rect().center()
    }

    /// Back to the spawn point with zero velocity; used by every death path.
    pub fn respawn(&mut self) {
        self.pos = Vec2::new(SPAWN_X, SPAWN_Y);
        self.vel = Vec2::ZERO;
        self.invuln = INVULN_TICKS;
    }

    pub fn tick_timers(&mut self) {
        self.invuln = self.invuln.saturating_sub(1);
        self.cooldown = self.cooldown.saturating_sub(1);
    }

    /// Translate held intents into velocity. When left and right are both
    /// held, right wins (the later assignment overwrites the earlier one).
    pub fn apply_intents(&mut self, left: bool, right: bool, jump: bool) {
        self.moving = false;
        if left {
            self.vel.x = -PLAYER_SPEED;
            self.facing = -1;
            self.moving = true;
        }
        if right {
            self.vel.x = PLAYER_SPEED;
            self.facing = 1;
            self.moving = true;
        }
        if jump && self.grounded {
            self.vel.y = -PLAYER_JUMP;
            self.grounded = false;
        }
    }

    /// Gravity, integration, and platform resolution for one tick.
    ///
    /// A platform collision only counts while moving non-upward; the player
    /// snaps to the platform top, vertical velocity zeroes, and an oscillating
    /// platform carries the player by its per-tick delta. Returns `true` when
    /// the player fell past the world bottom (a fall death the loop resolves).
    #[must_use]
    pub fn integrate(&mut self, arena: &Arena) -> bool {
        self.vel.y += GRAVITY;
        self.pos += self.vel;

        self.grounded = false;
        for p in &arena.platforms {
            if self.vel.y >= 0.0 && self.rect().overlaps(&p.rect) {
                self.pos.y = p.rect.y - PLAYER_H;
                self.vel.y = 0.0;
                self.grounded = true;
                self.pos.x += p.carry_dx();
            }
        }

        if self.grounded {
            self.vel.x *= GROUND_FRICTION;
        }

        self.pos.x = self
            .pos
            .x
            .clamp(WALL_MARGIN, ARENA_W - PLAYER_W - WALL_MARGIN);

        self.pos.y > FALL_LIMIT
    }

    /// Throw a star if off cooldown. Size boost widens the star, rate boost
    /// adds speed and shortens the cooldown. `aim_up` throws straight up,
    /// otherwise horizontal toward facing with a slight lift.
    pub fn throw(&mut self, aim_up: bool, boosts: &Boosts, projectiles: &mut Vec<Projectile>) {
        if self.cooldown > 0 {
            return;
        }
        let radius = STAR_RADIUS + if boosts.size_active() { STAR_SIZE_BONUS } else { 0.0 };
        let speed = STAR_SPEED + if boosts.rate_active() { STAR_SPEED_BONUS } else { 0.0 };

        let origin = self.center() + Vec2::new(self.facing as f32 * 10.0, 0.0);
        let vel = if aim_up {
            Vec2::new(0.0, -speed)
        } else {
            Vec2::new(self.facing as f32 * speed, -0.5)
        };

        projectiles.push(Projectile::friendly(origin, vel, radius));
        self.cooldown = if boosts.rate_active() {
            THROW_COOLDOWN_FAST
        } else {
            THROW_COOLDOWN
        };
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(player: &mut Player, arena: &Arena) {
        for _ in 0..120 {
            let _ = player.integrate(arena);
            if player.grounded {
                break;
            }
        }
    }

    #[test]
    fn test_right_wins_when_both_held() {
        let mut player = Player::new();
        player.apply_intents(true, true, false);
        assert_eq!(player.vel.x, PLAYER_SPEED);
        assert_eq!(player.facing, 1);
    }

    #[test]
    fn test_grounded_snap_zeroes_vertical_velocity() {
        let arena = Arena::new();
        let mut player = Player::new();
        settle(&mut player, &arena);

        assert!(player.grounded);
        assert_eq!(player.vel.y, 0.0);
        // Feet exactly on the ground strip
        let ground_top = arena.platforms[0].rect.y;
        assert_eq!(player.rect().bottom(), ground_top);
    }

    #[test]
    fn test_jump_requires_ground() {
        let arena = Arena::new();
        let mut player = Player::new();

        player.apply_intents(false, false, true);
        assert_eq!(player.vel.y, 0.0, "airborne jump must be ignored");

        settle(&mut player, &arena);
        player.apply_intents(false, false, true);
        assert_eq!(player.vel.y, -PLAYER_JUMP);
        assert!(!player.grounded);
    }

    #[test]
    fn test_horizontal_clamp() {
        let arena = Arena::new();
        let mut player = Player::new();
        settle(&mut player, &arena);

        for _ in 0..500 {
            player.apply_intents(false, true, false);
            let _ = player.integrate(&arena);
        }
        assert!(player.pos.x <= ARENA_W - PLAYER_W - WALL_MARGIN);

        for _ in 0..500 {
            player.apply_intents(true, false, false);
            let _ = player.integrate(&arena);
        }
        assert!(player.pos.x >= WALL_MARGIN);
    }

    #[test]
    fn test_fall_death_reported() {
        let arena = Arena::new();
        let mut player = Player::new();
        player.pos = Vec2::new(400.0, FALL_LIMIT + 10.0);
        player.vel.y = 5.0;
        assert!(player.integrate(&arena));
    }

    #[test]
    fn test_throw_cooldown_gates_fire() {
        let mut player = Player::new();
        let boosts = Boosts::new();
        let mut stars = Vec::new();

        player.throw(false, &boosts, &mut stars);
        player.throw(false, &boosts, &mut stars);
        assert_eq!(stars.len(), 1, "second throw must be blocked by cooldown");
        assert_eq!(player.cooldown, THROW_COOLDOWN);
        assert_eq!(stars[0].radius, STAR_RADIUS);
    }

    #[test]
    fn test_size_boost_widens_star() {
        let mut player = Player::new();
        let mut boosts = Boosts::new();
        boosts.size_ticks = BOOST_TICKS;
        let mut stars = Vec::new();

        player.throw(false, &boosts, &mut stars);
        assert_eq!(stars[0].radius, STAR_RADIUS + STAR_SIZE_BONUS);

        // Lapsed boost reverts to the base radius
        boosts.size_ticks = 0;
        player.cooldown = 0;
        player.throw(false, &boosts, &mut stars);
        assert_eq!(stars[1].radius, STAR_RADIUS);
    }

    #[test]
    fn test_aim_up_throws_vertically() {
        let mut player = Player::new();
        let boosts = Boosts::new();
        let mut stars = Vec::new();

        player.throw(true, &boosts, &mut stars);
        assert_eq!(stars[0].vel.x, 0.0);
        assert!(stars[0].vel.y < 0.0);
    }

    #[test]
    fn test_moving_platform_carries_rider() {
        let mut arena = Arena::new();
        let idx = arena
            .platforms
            .iter()
            .position(|p| p.oscillation.is_some())
            .unwrap();
        let plat = arena.platforms[idx].rect;

        let mut player = Player::new();
        player.pos = Vec2::new(plat.x + 40.0, plat.y - PLAYER_H - 1.0);
        player.vel = Vec2::ZERO;

        // Land on the platform, then ride it for a few ticks.
        let _ = player.integrate(&arena);
        assert!(player.grounded);

        let x_before = player.pos.x;
        arena.advance_platforms();
        let dx = arena.platforms[idx].carry_dx();
        let _ = player.integrate(&arena);
        assert!((player.pos.x - (x_before + dx)).abs() < 1e-4);
    }
}
