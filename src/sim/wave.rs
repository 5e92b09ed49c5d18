//! Wave director: spawning, progression, and run termination
//!
//! Waves are quota-sized batches of grounded enemies; every third wave is a
//! lone boss instead. Fliers live outside the wave accounting entirely: they
//! trickle in on their own clock, survive wave transitions, and never hold a
//! wave open.

use log::info;
use rand::Rng;

use super::enemy::{Archetype, Enemy};
use super::state::{GameEvent, GameState, RunStatus};
use crate::consts::*;

/// Home columns for grounded spawns; jitter is added per enemy.
const BASE_XS: [f32; 9] = [
    200.0, 420.0, 640.0, 300.0, 520.0, 740.0, 120.0, 560.0, 380.0,
];

fn roll_archetype(r: f32) -> Archetype {
    if r < 0.16 {
        Archetype::HeavyRanged
    } else if r < 0.30 {
        Archetype::Pursuer
    } else if r < 0.46 {
        Archetype::Flanker
    } else if r < 0.54 {
        Archetype::LifeDrain
    } else {
        Archetype::LightMelee
    }
}

/// Populate the current wave. Grounded leftovers are discarded, fliers stay.
pub fn spawn_wave(state: &mut GameState) {
    state.enemies.retain(|e| e.archetype.is_flier());

    if state.wave % 3 == 0 {
        state.enemies.push(Enemy::boss());
        info!("wave {}: boss", state.wave);
        return;
    }

    let count = state.quota as usize;
    for i in 0..count {
        let base = BASE_XS[i % BASE_XS.len()];
        let x = (base + state.rng.random_range(-40.0..40.0)).clamp(40.0, ARENA_W - 60.0);
        let archetype = roll_archetype(state.rng.random::<f32>());
        let e = Enemy::new(archetype, x, &mut state.rng);
        state.enemies.push(e);
    }
    info!("wave {}: {} enemies", state.wave, count);
}

/// Low-probability flier spawn; needs at least one grounded enemy alive so a
/// cleared arena stays cleared.
pub fn maybe_spawn_ghost(state: &mut GameState) {
    if state.flier_count() >= GHOST_CAP || state.wave_enemy_count() == 0 {
        return;
    }
    if state.rng.random::<f32>() < GHOST_SPAWN_CHANCE {
        let ghost = Enemy::ghost(&mut state.rng);
        state.enemies.push(ghost);
        state.announce("A ghost stirs...", 900.0);
    }
}

/// End-of-tick bookkeeping: advance to the next wave once every grounded
/// enemy is down, then flip to game over if lives ran out. The clear check
/// runs first so killing the last enemy on the tick lives hit zero rescues
/// the run through the per-wave lives reset.
pub fn check_progress(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.status != RunStatus::Playing {
        return;
    }

    if state.wave_enemy_count() == 0 {
        events.push(GameEvent::WaveCleared { wave: state.wave });
        state.wave += 1;
        state.quota += 1;
        state.lives = WAVE_LIVES;

        let GameState { arena, rng, .. } = state;
        arena.reshuffle_high_platforms(rng);
        arena.reposition_traps(rng);

        spawn_wave(state);
        state.announce("More ninjas incoming", 1200.0);
    }

    if state.lives == 0 {
        state.status = RunStatus::GameOver;
        state.announce_sticky("Game over! Press R");
        events.push(GameEvent::GameOver { score: state.score });
        info!(
            "game over: wave {}, final score {}",
            state.wave, state.score
        );
    }
}
