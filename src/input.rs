//! Intent layer between raw input events and the simulation
//!
//! The adapter translates key/button edges into held intents and samples them
//! into a [`TickInput`] once per tick. Holding throw is legal; the player's
//! cooldown is the rate limiter, not the input layer.

use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

/// Abstract actions the simulation understands, independent of bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    Left,
    Right,
    Jump,
    Throw,
    AimUp,
}

/// Currently-held intents.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct IntentState {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub throw: bool,
    pub aim_up: bool,
}

impl IntentState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, intent: Intent) {
        self.set(intent, true);
    }

    pub fn release(&mut self, intent: Intent) {
        self.set(intent, false);
    }

    fn set(&mut self, intent: Intent, held: bool) {
        match intent {
            Intent::Left => self.left = held,
            Intent::Right => self.right = held,
            Intent::Jump => self.jump = held,
            Intent::Throw => self.throw = held,
            Intent::AimUp => self.aim_up = held,
        }
    }

    /// Drop everything. Called when the window loses focus so keys released
    /// while unfocused cannot stick.
    pub fn focus_lost(&mut self) {
        *self = Self::default();
    }

    /// Snapshot the held intents for one simulation step.
    pub fn sample(&self, now_ms: f64) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
            jump: self.jump,
            throw: self.throw,
            aim_up: self.aim_up,
            now_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_release_round_trip() {
        let mut intents = IntentState::new();
        intents.press(Intent::Right);
        intents.press(Intent::Throw);
        let input = intents.sample(16.0);
        assert!(input.right && input.throw);
        assert!(!input.left && !input.jump && !input.aim_up);
        assert_eq!(input.now_ms, 16.0);

        intents.release(Intent::Right);
        assert!(!intents.sample(32.0).right);
        assert!(intents.sample(32.0).throw, "unreleased intents stay held");
    }

    #[test]
    fn test_focus_loss_clears_held_intents() {
        let mut intents = IntentState::new();
        intents.press(Intent::Left);
        intents.press(Intent::Jump);
        intents.press(Intent::Throw);

        intents.focus_lost();
        let input = intents.sample(0.0);
        assert!(!input.left && !input.right && !input.jump && !input.throw && !input.aim_up);
    }
}
