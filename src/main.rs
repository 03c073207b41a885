//! Jumpbot entry point
//!
//! Runs one of the games headless with a scripted autopilot:
//!
//! ```text
//! jumpbot [jumpbot|asteroids] [frames] [--realtime]
//! ```
//!
//! Settings come from `jumpbot_settings.json` in the working directory.

use std::path::Path;

use jumpbot::platform::{self, FrameClock, Key, KeyEvent, ManualClock, SystemClock};
use jumpbot::renderer::DrawList;
use jumpbot::renderer::shapes::tessellate;
use jumpbot::sim::{AsteroidsState, JumpbotState, Simulation};
use jumpbot::{HighScore, Settings};

const SETTINGS_PATH: &str = "jumpbot_settings.json";
const DEFAULT_FRAMES: u64 = 3600;

/// Scripted key events for a frame index
type Autopilot = fn(u64) -> Vec<KeyEvent>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Game {
    Jumpbot,
    Asteroids,
}

struct Args {
    game: Game,
    frames: u64,
    realtime: bool,
}

fn parse_args() -> Args {
    let mut args = Args {
        game: Game::Jumpbot,
        frames: DEFAULT_FRAMES,
        realtime: false,
    };
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "jumpbot" => args.game = Game::Jumpbot,
            "asteroids" => args.game = Game::Asteroids,
            "--realtime" => args.realtime = true,
            other => match other.parse() {
                Ok(frames) => args.frames = frames,
                Err(_) => log::warn!("Ignoring unknown argument {:?}", other),
            },
        }
    }
    args
}

/// Start, then run right with a jump every 40 frames; confirm again after game over
fn jumpbot_autopilot(frame: u64) -> Vec<KeyEvent> {
    let mut keys = Vec::new();
    if frame % 600 == 0 {
        keys.push(KeyEvent::down(Key::Enter));
    }
    if frame == 1 {
        keys.push(KeyEvent::down(Key::Char('d')));
    }
    if frame % 40 == 20 {
        keys.push(KeyEvent::down(Key::Space));
        keys.push(KeyEvent::up(Key::Space));
    }
    keys
}

/// Sweep the floor left and right, hopping now and then
fn asteroids_autopilot(frame: u64) -> Vec<KeyEvent> {
    let mut keys = Vec::new();
    match frame % 240 {
        0 => {
            keys.push(KeyEvent::up(Key::Char('a')));
            keys.push(KeyEvent::down(Key::Char('d')));
        }
        120 => {
            keys.push(KeyEvent::up(Key::Char('d')));
            keys.push(KeyEvent::down(Key::Char('a')));
        }
        _ => {}
    }
    if frame % 90 == 45 {
        keys.push(KeyEvent::down(Key::Space));
    }
    if frame % 900 == 899 {
        keys.push(KeyEvent::down(Key::Enter));
    }
    keys
}

fn main() {
    env_logger::init();

    let args = parse_args();
    let settings = Settings::load(Path::new(SETTINGS_PATH));
    log::info!(
        "Starting {:?} for {} frames ({})",
        args.game,
        args.frames,
        if args.realtime { "realtime" } else { "batch" }
    );

    let mut clock: Box<dyn FrameClock> = if args.realtime {
        Box::new(SystemClock::new(settings.fps))
    } else {
        Box::new(ManualClock::new(settings.fps))
    };
    let mut canvas = DrawList::new();

    let (mut game, mut high_score, autopilot): (Box<dyn Simulation>, HighScore, Autopilot) =
        match args.game {
            Game::Jumpbot => {
                let high_score = HighScore::load(&settings.jumpbot_high_score_path);
                let mut state = JumpbotState::new(high_score.best());
                state.show_hitboxes = settings.show_hitboxes;
                (Box::new(state) as Box<dyn Simulation>, high_score, jumpbot_autopilot as Autopilot)
            }
            Game::Asteroids => {
                let high_score = HighScore::load(&settings.asteroids_high_score_path);
                let mut state = AsteroidsState::new(settings.seed, high_score.best());
                state.show_hitboxes = settings.show_hitboxes;
                (Box::new(state) as Box<dyn Simulation>, high_score, asteroids_autopilot as Autopilot)
            }
        };

    let (width, height) = game.window_size();
    log::info!("Window {}x{}", width, height);

    let summary = platform::run_frames(
        game.as_mut(),
        &settings.controls,
        autopilot,
        &mut canvas,
        clock.as_mut(),
        &mut high_score,
        args.frames,
    );

    let mesh = tessellate(&canvas);
    log::info!(
        "Last frame: {} draw commands, {} vertices",
        canvas.commands.len(),
        mesh.vertices.len()
    );
    log::info!(
        "Ran {} frames ({} ms game time): phase {:?}, score {}, best {}, {} lives lost, {} levels, {} game overs",
        summary.frames,
        clock.elapsed_ms(),
        summary.final_phase,
        summary.final_score,
        summary.high_score,
        summary.lives_lost,
        summary.levels_completed,
        summary.game_overs,
    );
}
