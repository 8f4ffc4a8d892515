/// Held-control state and the frame-stamped key tracker that produces it.

use std::collections::HashMap;

use crossterm::event::KeyCode;

/// Controls currently held down, sampled once at the start of a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

const LEFT_KEYS: [KeyCode; 3] = [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
const RIGHT_KEYS: [KeyCode; 3] = [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];
const FIRE_KEYS: [KeyCode; 1] = [KeyCode::Char(' ')];

/// Records the frame each key was last pressed or repeated.
///
/// Terminals with keyboard enhancement report releases and the key is
/// dropped at once.  Classic terminals only repeat presses, so a key also
/// counts as released once `hold_window` frames pass without a repeat.
#[derive(Debug)]
pub struct KeyTracker {
    last_seen: HashMap<KeyCode, u64>,
    frame: u64,
    hold_window: u64,
}

impl KeyTracker {
    pub fn new(hold_window: u64) -> Self {
        Self {
            last_seen: HashMap::new(),
            frame: 0,
            hold_window,
        }
    }

    pub fn advance_frame(&mut self) {
        self.frame += 1;
    }

    /// Press or repeat.
    pub fn press(&mut self, key: KeyCode) {
        self.last_seen.insert(key, self.frame);
    }

    pub fn release(&mut self, key: &KeyCode) {
        self.last_seen.remove(key);
    }

    pub fn is_held(&self, key: &KeyCode) -> bool {
        self.last_seen
            .get(key)
            .map(|&last| self.frame.saturating_sub(last) <= self.hold_window)
            .unwrap_or(false)
    }

    fn any_held(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|k| self.is_held(k))
    }

    pub fn input_state(&self) -> InputState {
        InputState {
            left: self.any_held(&LEFT_KEYS),
            right: self.any_held(&RIGHT_KEYS),
            fire: self.any_held(&FIRE_KEYS),
        }
    }
}
