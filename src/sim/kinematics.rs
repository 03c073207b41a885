//! Horizontal movement rules shared by both robots

use super::input::InputState;

/// Speed lost per frame when no direction is held
pub const DECELERATION: f32 = 0.25;

/// Direction and modifier flags feeding the horizontal velocity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Steering {
    pub left: bool,
    pub right: bool,
    pub running: bool,
}

impl Steering {
    pub fn from_input(input: &InputState) -> Self {
        Self {
            left: input.to_left,
            right: input.to_right,
            running: input.running,
        }
    }

    /// Same modifiers, directions released
    pub fn without_direction(self) -> Self {
        Self {
            left: false,
            right: false,
            ..self
        }
    }

    /// -1, 0 or 1; opposite keys cancel out
    pub fn direction(&self) -> f32 {
        (self.right as i8 - self.left as i8) as f32
    }

    pub fn is_idle(&self) -> bool {
        !self.left && !self.right
    }
}

/// Move `previous` toward zero by [`DECELERATION`] without crossing it
pub fn decelerate(previous: f32) -> f32 {
    if previous < 0.0 {
        (previous + DECELERATION).min(0.0)
    } else if previous > 0.0 {
        (previous - DECELERATION).max(0.0)
    } else {
        0.0
    }
}

/// Clamp `x` into `[0, max_x]`; velocity pointing out of the window is dropped
pub fn clamp_to_window(x: &mut f32, vx: &mut f32, max_x: f32) {
    if *x <= 0.0 {
        *x = 0.0;
        if *vx < 0.0 {
            *vx = 0.0;
        }
    } else if *x >= max_x {
        *x = max_x;
        if *vx > 0.0 {
            *vx = 0.0;
        }
    }
}
