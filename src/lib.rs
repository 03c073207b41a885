//! Jumpbot - two small arcade games on a fixed-rate simulation core
//!
//! Core modules:
//! - `sim`: Per-frame simulation (entity controllers, collision, state machines)
//! - `renderer`: Canvas seam and draw-list tessellation
//! - `platform`: Key mapping, frame clock and the frame-loop driver
//! - `persistence`: Single-integer high score files
//! - `settings`: JSON configuration

pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use highscores::HighScore;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Blocking pause after a level transition or game over
    pub const TRANSITION_DELAY_MS: u32 = 500;

    /// Jumpbot window
    pub const JUMPBOT_WINDOW_WIDTH: f32 = 1280.0;
    pub const JUMPBOT_WINDOW_HEIGHT: f32 = 720.0;

    /// Asteroids window
    pub const ASTEROIDS_WINDOW_WIDTH: f32 = 640.0;
    pub const ASTEROIDS_WINDOW_HEIGHT: f32 = 480.0;

    /// Robot sprite size (shared by both games)
    pub const ROBOT_WIDTH: f32 = 50.0;
    pub const ROBOT_HEIGHT: f32 = 86.0;

    /// Lives at the start of a fresh game
    pub const STARTING_LIVES: u32 = 3;
}

/// Size of the bounding box of a `w` x `h` image rotated by `degrees`
#[inline]
pub fn rotated_bounds(w: f32, h: f32, degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vec2::new(
        (w * cos.abs() + h * sin.abs()).round(),
        (w * sin.abs() + h * cos.abs()).round(),
    )
}
