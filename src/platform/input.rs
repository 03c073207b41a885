//! Key bindings
//!
//! Backends report raw key-down/key-up events; the control table turns them
//! into [`Action`]s on the shared [`InputState`].

use serde::{Deserialize, Serialize};

use crate::sim::input::{Action, InputState};

/// Physical key as reported by a backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Space,
    Enter,
    Escape,
    Left,
    Right,
    Up,
    Down,
    Char(char),
}

/// One key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub pressed: bool,
}

impl KeyEvent {
    pub fn down(key: Key) -> Self {
        Self { key, pressed: true }
    }

    pub fn up(key: Key) -> Self {
        Self {
            key,
            pressed: false,
        }
    }
}

/// Which key drives each action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlTable {
    pub left: Key,
    pub right: Key,
    pub run: Key,
    pub jump: Key,
    pub pause: Key,
    pub confirm: Key,
    pub controls: Key,
    pub tutorials: Key,
}

impl Default for ControlTable {
    fn default() -> Self {
        Self {
            left: Key::Char('a'),
            right: Key::Char('d'),
            run: Key::Char('w'),
            jump: Key::Space,
            pause: Key::Escape,
            confirm: Key::Enter,
            controls: Key::Char('c'),
            tutorials: Key::Char('t'),
        }
    }
}

impl ControlTable {
    /// Action bound to `key`; the first binding wins if a key is bound twice
    pub fn action_for(&self, key: Key) -> Option<Action> {
        [
            (self.left, Action::MoveLeft),
            (self.right, Action::MoveRight),
            (self.run, Action::Run),
            (self.jump, Action::Jump),
            (self.pause, Action::Pause),
            (self.confirm, Action::Confirm),
            (self.controls, Action::ToggleControls),
            (self.tutorials, Action::ToggleTutorials),
        ]
        .into_iter()
        .find(|(bound, _)| *bound == key)
        .map(|(_, action)| action)
    }

    /// Apply a key transition to the input state. Unbound keys are ignored.
    pub fn apply(&self, event: KeyEvent, input: &mut InputState) {
        let Some(action) = self.action_for(event.key) else {
            return;
        };
        if event.pressed {
            input.press(action);
        } else {
            input.release(action);
        }
    }
}
