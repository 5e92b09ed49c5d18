//! Per-tick combat resolution
//!
//! All overlap consequences run here, in a fixed order: friendly star hits,
//! enemy contact, hostile shots, pickups, then traps. A projectile is
//! consumed by at most one target, and at most one friendly hit lands per
//! tick. Every death path funnels through [`player_death`], which also
//! rearranges the arena so a respawn never lands in the same ambush.

use super::powerup;
use super::state::{DeathCause, GameEvent, GameState};

/// Subtract a life, respawn with invulnerability, and scramble the layout.
pub fn player_death(state: &mut GameState, cause: DeathCause, events: &mut Vec<GameEvent>) {
    state.lives = state.lives.saturating_sub(1);
    state.player.respawn();

    let GameState { arena, rng, .. } = state;
    arena.reshuffle_high_platforms(rng);
    arena.reposition_traps(rng);

    let text = match cause {
        DeathCause::EnemyContact => "Ambushed!",
        DeathCause::Projectile => "Hit by shuriken!",
        DeathCause::Trap => "Trap sprung!",
        DeathCause::Fell => "Watch your step!",
    };
    state.announce(text, 1200.0);
    events.push(GameEvent::PlayerDied { cause });
}

pub fn resolve(state: &mut GameState, events: &mut Vec<GameEvent>) {
    // Friendly stars: the first overlapping (star, enemy) pair lands; the
    // star is spent whether or not the enemy dies.
    let mut hit: Option<(usize, usize)> = None;
    'scan: for (pi, p) in state.projectiles.iter().enumerate() {
        if p.hostile {
            continue;
        }
        for (ei, e) in state.enemies.iter().enumerate() {
            if p.rect().overlaps(&e.rect()) {
                hit = Some((pi, ei));
                break 'scan;
            }
        }
    }
    if let Some((pi, ei)) = hit {
        state.projectiles.remove(pi);
        state.enemies[ei].hp -= 1;
        if state.enemies[ei].hp <= 0 {
            let dead = state.enemies.remove(ei);
            events.push(state.add_score(dead.archetype.score(), dead.archetype));
            if dead.archetype.grants_life_on_kill() {
                state.grant_life();
                state.announce("Life stolen back!", 1000.0);
            }
        }
    }

    // Enemy contact applies per enemy, invulnerability notwithstanding; only
    // traps honor the window. A death respawns the player mid-pass, so later
    // enemies test against the post-respawn rect.
    for i in 0..state.enemies.len() {
        if state.enemies[i].rect().overlaps(&state.player.rect()) {
            player_death(state, DeathCause::EnemyContact, events);
        }
    }

    // Hostile shots
    let mut i = 0;
    while i < state.projectiles.len() {
        let lethal = state.projectiles[i].hostile
            && state.projectiles[i].rect().overlaps(&state.player.rect());
        if lethal {
            state.projectiles.remove(i);
            player_death(state, DeathCause::Projectile, events);
        } else {
            i += 1;
        }
    }

    // Pickups collect regardless of invulnerability.
    let mut i = 0;
    while i < state.powerups.len() {
        if state.powerups[i].rect().overlaps(&state.player.rect()) {
            let kind = state.powerups[i].kind;
            state.powerups.remove(i);
            events.push(powerup::apply(state, kind));
        } else {
            i += 1;
        }
    }

    // Traps: one death at most, and the reposition inside player_death
    // invalidates the rest of the scan anyway.
    if state.player.invuln == 0 {
        let sprung = state
            .arena
            .traps
            .iter()
            .any(|t| t.rect.overlaps(&state.player.rect()));
        if sprung {
            player_death(state, DeathCause::Trap, events);
        }
    }
}
