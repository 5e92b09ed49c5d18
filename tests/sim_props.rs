//! Property tests over whole-run invariants

use proptest::prelude::*;

use dungeon_ninja::consts::*;
use dungeon_ninja::sim::{GameState, RunStatus, TickInput, tick};

proptest! {
    /// No input sequence can push the player through a side wall.
    #[test]
    fn player_stays_in_horizontal_bounds(
        seed in 0u64..1000,
        moves in proptest::collection::vec(0u8..8, 1..400),
    ) {
        let mut state = GameState::new(seed);
        for (i, m) in moves.iter().enumerate() {
            let input = TickInput {
                left: m & 1 != 0,
                right: m & 2 != 0,
                jump: m & 4 != 0,
                throw: i % 3 == 0,
                aim_up: false,
                now_ms: i as f64 * TICK_MS,
            };
            let _ = tick(&mut state, &input);
            prop_assert!(state.player.pos.x >= WALL_MARGIN - 1e-3);
            prop_assert!(state.player.pos.x <= ARENA_W - PLAYER_W - WALL_MARGIN + 1e-3);
        }
    }

    /// Score never decreases and lives never exceed the cap, whatever happens.
    #[test]
    fn score_monotone_and_lives_capped(seed in 0u64..500) {
        let mut state = GameState::new(seed);
        let mut last_score = state.score;
        for i in 0..600u32 {
            let input = TickInput {
                right: i % 7 < 4,
                jump: i % 45 == 0,
                throw: true,
                now_ms: i as f64 * TICK_MS,
                ..Default::default()
            };
            let _ = tick(&mut state, &input);
            prop_assert!(state.score >= last_score);
            prop_assert!(state.lives <= MAX_LIVES);
            last_score = state.score;
            if state.status == RunStatus::GameOver {
                break;
            }
        }
    }

    /// A terminal run stays terminal under any further input.
    #[test]
    fn game_over_is_sticky(seed in 0u64..200, extra in 1u32..100) {
        let mut state = GameState::new(seed);
        state.lives = 0;
        let _ = tick(&mut state, &TickInput::default());
        prop_assert_eq!(state.status, RunStatus::GameOver);

        let frozen_tick = state.tick;
        for i in 0..extra {
            let _ = tick(&mut state, &TickInput {
                left: true,
                jump: true,
                throw: true,
                now_ms: i as f64 * TICK_MS,
                ..Default::default()
            });
        }
        prop_assert_eq!(state.status, RunStatus::GameOver);
        prop_assert_eq!(state.tick, frozen_tick);
    }
}
