//! Platform layer
//!
//! Everything between a windowing backend and the simulation:
//! - Key events mapped through the control table
//! - Frame pacing and the blocking delays the games request
//! - The frame loop itself, which also persists new high scores

pub mod input;
pub mod time;

pub use input::{ControlTable, Key, KeyEvent};
pub use time::{FrameClock, ManualClock, SystemClock};

use crate::highscores::HighScore;
use crate::renderer::Canvas;
use crate::sim::{GameEvent, InputState, Phase, Simulation};

/// Totals for one run of the frame loop
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub final_phase: Option<Phase>,
    pub final_score: u64,
    pub high_score: u64,
    pub game_overs: u32,
    pub lives_lost: u32,
    pub levels_completed: u32,
}

/// Drive `sim` for `frames` ticks.
///
/// Each frame polls `keys` for the frame index, feeds the events through
/// `controls`, ticks, then waits on `clock` (plus any delay the tick asked for).
pub fn run_frames<S, K>(
    sim: &mut S,
    controls: &ControlTable,
    mut keys: K,
    canvas: &mut dyn Canvas,
    clock: &mut dyn FrameClock,
    high_score: &mut HighScore,
    frames: u64,
) -> RunSummary
where
    S: Simulation + ?Sized,
    K: FnMut(u64) -> Vec<KeyEvent>,
{
    let mut input = InputState::default();
    let mut summary = RunSummary::default();

    for frame in 0..frames {
        for event in keys(frame) {
            controls.apply(event, &mut input);
        }

        let outcome = sim.tick(&mut input, canvas);
        for event in &outcome.events {
            match event {
                GameEvent::NewHighScore(score) => {
                    if let Err(e) = high_score.record(*score) {
                        log::warn!(
                            "Failed to save high score to {}: {}",
                            high_score.path().display(),
                            e
                        );
                    }
                }
                GameEvent::GameOver { score } => {
                    log::debug!("Frame {}: game over at {}", frame, score);
                    summary.game_overs += 1;
                }
                GameEvent::LifeLost { .. } | GameEvent::AsteroidMissed => summary.lives_lost += 1,
                GameEvent::LevelComplete { .. } | GameEvent::GameWon => {
                    summary.levels_completed += 1
                }
                _ => {}
            }
        }

        if outcome.delay_ms > 0 {
            clock.delay(outcome.delay_ms);
        }
        clock.wait_next_tick();
        summary.frames += 1;
    }

    summary.final_phase = Some(sim.phase());
    summary.final_score = sim.score();
    summary.high_score = high_score.best().max(sim.high_score());
    summary
}
