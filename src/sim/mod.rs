//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call to `tick` per frame)
//! - Seeded RNG only, behind [`Randomness`]
//! - Stable iteration order (tables and spawn order)
//! - No rendering backend: draw calls go to a [`Canvas`]

pub mod asteroids;
pub mod geometry;
pub mod input;
pub mod jumpbot;
pub mod kinematics;
pub mod rng;

use serde::{Deserialize, Serialize};

use crate::renderer::Canvas;

pub use asteroids::AsteroidsState;
pub use geometry::{Rect, Segment, SideOffsets, side_offsets};
pub use input::{Action, InputState};
pub use jumpbot::JumpbotState;
pub use rng::{GameRng, Randomness};

/// Top-level phase shared by both games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Title screen, waiting for confirm
    StartMenu,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Run ended, waiting for confirm to restart
    GameOver,
}

/// Something that happened during a tick, for the driver to act on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    LifeLost { lives_left: u32 },
    CoinGrabbed,
    LevelComplete { next_level: u32 },
    GameWon,
    GameOver { score: u64 },
    AsteroidCaught { points: u32 },
    AsteroidMissed,
    HeartCollected,
    /// Final score beat the stored best and should be persisted
    NewHighScore(u64),
}

/// Result of one simulation tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub events: Vec<GameEvent>,
    /// Blocking pause the frame clock should insert after this frame
    pub delay_ms: u32,
}

impl TickOutcome {
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn delay(&mut self, ms: u32) {
        self.delay_ms = self.delay_ms.max(ms);
    }
}

/// A game the frame loop can drive
pub trait Simulation {
    /// Advance one frame, consuming input and emitting draw calls
    fn tick(&mut self, input: &mut InputState, canvas: &mut dyn Canvas) -> TickOutcome;

    fn phase(&self) -> Phase;

    fn score(&self) -> u64;

    fn high_score(&self) -> u64;

    /// Window size in pixels this game is laid out for
    fn window_size(&self) -> (u32, u32);
}
