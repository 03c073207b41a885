//! Control state shared between the frame loop and the simulation
//!
//! Key events write it, the tick reads it. Held flags follow key-down/key-up,
//! jump flags are latched until the robot lands, one-shot flags are taken by
//! the tick that consumes them.

use serde::{Deserialize, Serialize};

/// Logical game actions a key can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Run,
    Jump,
    Pause,
    Confirm,
    ToggleControls,
    ToggleTutorials,
}

/// Input record for the simulation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub to_left: bool,
    pub to_right: bool,
    pub running: bool,
    /// Set on the first jump press, cleared on landing
    pub jumping: bool,
    /// Set on a jump press while already jumping, cleared on landing
    pub double_jump: bool,
    /// One-shot: pause key pressed since the last tick
    pub pause: bool,
    /// One-shot: confirm key pressed since the last tick
    pub confirm: bool,
    /// One-shot: controls overlay key pressed
    pub controls: bool,
    /// One-shot: tutorial toggle key pressed
    pub tutorials: bool,
}

impl InputState {
    pub fn press(&mut self, action: Action) {
        match action {
            Action::MoveLeft => self.to_left = true,
            Action::MoveRight => self.to_right = true,
            Action::Run => self.running = true,
            Action::Jump => {
                if !self.jumping {
                    self.jumping = true;
                } else if !self.double_jump {
                    self.double_jump = true;
                }
            }
            Action::Pause => self.pause = true,
            Action::Confirm => self.confirm = true,
            Action::ToggleControls => self.controls = true,
            Action::ToggleTutorials => self.tutorials = true,
        }
    }

    pub fn release(&mut self, action: Action) {
        match action {
            Action::MoveLeft => self.to_left = false,
            Action::MoveRight => self.to_right = false,
            Action::Run => self.running = false,
            _ => {}
        }
    }

    /// Clear the latched jump flags (landing, death)
    pub fn clear_jump(&mut self) {
        self.jumping = false;
        self.double_jump = false;
    }

    /// Fresh movement state for a newly loaded level
    pub fn reset_motion(&mut self) {
        self.to_left = false;
        self.to_right = false;
        self.running = false;
        self.clear_jump();
    }
}
