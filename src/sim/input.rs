//! Keyboard input tracking
//!
//! Press/release events flip a per-key flag; the simulation samples the flags
//! once per frame through `TickInput`.

use std::collections::HashMap;

use crate::consts::{KEY_LEFT, KEY_RIGHT};

/// Currently held keys, keyed by the browser's `KeyboardEvent.key` string
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    held: HashMap<String, bool>,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: &str) {
        self.held.insert(key.to_string(), true);
    }

    pub fn release(&mut self, key: &str) {
        self.held.insert(key.to_string(), false);
    }

    /// Unknown keys are not held
    pub fn is_held(&self, key: &str) -> bool {
        self.held.get(key).copied().unwrap_or(false)
    }

    /// Snapshot of the directional keys for one frame
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left: self.is_held(KEY_LEFT),
            right: self.is_held(KEY_RIGHT),
        }
    }
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_not_held() {
        let input = InputTracker::new();
        assert!(!input.is_held("q"));
        assert_eq!(input.tick_input(), TickInput::default());
    }

    #[test]
    fn test_press_release() {
        let mut input = InputTracker::new();
        input.press(KEY_LEFT);
        assert!(input.is_held(KEY_LEFT));
        assert!(input.tick_input().left);

        input.press(KEY_RIGHT);
        input.release(KEY_LEFT);
        assert_eq!(
            input.tick_input(),
            TickInput {
                left: false,
                right: true
            }
        );
    }
}
