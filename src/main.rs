//! Headless demo runner
//!
//! Drives the simulation with a scripted input pattern for a fixed number of
//! ticks, logging notable events, then prints a JSON snapshot of the final
//! state. Useful for eyeballing balance changes and as a smoke test that a
//! full run stays stable without a renderer attached.

use std::time::{SystemTime, UNIX_EPOCH};

use log::info;

use dungeon_ninja::consts::TICK_MS;
use dungeon_ninja::input::{Intent, IntentState};
use dungeon_ninja::sim::{GameEvent, GameState, RunStatus, tick};

const DEMO_TICKS: u64 = 3600;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    info!("starting demo run, seed {seed}");

    let mut state = GameState::new(seed);
    let mut intents = IntentState::new();
    intents.press(Intent::Throw);

    for step in 0..DEMO_TICKS {
        // Pace back and forth, hopping now and then
        match (step / 120) % 4 {
            0 => {
                intents.press(Intent::Right);
                intents.release(Intent::Left);
            }
            2 => {
                intents.press(Intent::Left);
                intents.release(Intent::Right);
            }
            _ => {
                intents.release(Intent::Left);
                intents.release(Intent::Right);
            }
        }
        if step % 90 == 0 {
            intents.press(Intent::Jump);
        } else {
            intents.release(Intent::Jump);
        }

        let events = tick(&mut state, &intents.sample(step as f64 * TICK_MS));
        for event in &events {
            match event {
                GameEvent::EnemyKilled { archetype, score } => {
                    info!("killed {archetype:?} (+{score})");
                }
                GameEvent::PlayerDied { cause } => info!("died: {cause:?}"),
                GameEvent::PowerUpCollected { kind } => info!("picked up {kind:?}"),
                GameEvent::WaveCleared { wave } => info!("wave {wave} cleared"),
                GameEvent::GameOver { score } => info!("game over, score {score}"),
            }
        }
        if state.status == RunStatus::GameOver {
            break;
        }
    }

    let summary = serde_json::json!({
        "seed": state.seed,
        "ticks": state.tick,
        "status": state.status,
        "score": state.score,
        "wave": state.wave,
        "lives": state.lives,
        "enemies_alive": state.enemies.len(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
