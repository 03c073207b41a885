//! Jumpbot per-frame update

use std::mem::take;

use super::level::TOTAL_LEVELS;
use super::robot::Robot;
use super::screens::{self, Banner};
use super::state::JumpbotState;
use super::world::build_world;
use crate::consts::{JUMPBOT_WINDOW_HEIGHT, JUMPBOT_WINDOW_WIDTH, TRANSITION_DELAY_MS};
use crate::renderer::{Canvas, Sprite, SpriteDraw, colors};
use crate::sim::input::InputState;
use crate::sim::{GameEvent, Phase, Simulation, TickOutcome};

/// Levels below this show tutorial lines
const TUTORIAL_LEVELS: u32 = 5;

/// Advance the game by one frame
pub fn tick(state: &mut JumpbotState, input: &mut InputState, canvas: &mut dyn Canvas) -> TickOutcome {
    let mut out = TickOutcome::default();
    let width = JUMPBOT_WINDOW_WIDTH;

    let pause = take(&mut input.pause);
    let confirm = take(&mut input.confirm);
    let controls = take(&mut input.controls);
    let tutorials = take(&mut input.tutorials);

    canvas.clear(colors::BACKGROUND);

    match state.phase {
        Phase::StartMenu | Phase::GameOver => {
            if confirm {
                if state.phase == Phase::GameOver {
                    state.new_game(input);
                }
                state.won = false;
                state.controls_overlay = false;
                state.phase = Phase::Playing;
                log::info!("Game started");
                return out;
            }
            // The game over screen is the start menu with a banner
            if controls {
                state.controls_overlay = true;
            }
            if state.controls_overlay {
                screens::controls_menu(canvas, width);
                if pause {
                    state.controls_overlay = false;
                }
            } else {
                let banner = match (state.phase, state.won) {
                    (Phase::GameOver, _) => Banner::GameOver,
                    (_, true) => Banner::Won,
                    _ => Banner::None,
                };
                screens::start_menu(canvas, width, banner, state.high_score);
            }
            return out;
        }
        Phase::Playing | Phase::Paused => {}
    }

    if controls && state.phase == Phase::Paused {
        state.controls_overlay = true;
    }
    if pause && !state.controls_overlay {
        state.phase = match state.phase {
            Phase::Playing => Phase::Paused,
            _ => Phase::Playing,
        };
    }
    if state.phase == Phase::Paused {
        if state.controls_overlay {
            screens::controls_menu(canvas, width);
            if pause {
                state.controls_overlay = false;
            }
        } else {
            screens::pause_menu(canvas, width);
        }
        return out;
    }

    if tutorials {
        state.show_tutorials = !state.show_tutorials;
    }

    // Out of lives since the previous frame
    if state.lives == 0 {
        let score = state.score();
        log::info!("Game over on level {} with {} coins", state.level, score);
        state.phase = Phase::GameOver;
        out.push(GameEvent::GameOver { score });
        record_high_score(state, &mut out);
        out.delay(TRANSITION_DELAY_MS);
        screens::start_menu(canvas, width, Banner::GameOver, state.high_score);
        return out;
    }

    if state.robot.is_dead(state.hit_monster) {
        canvas.clear(colors::DEATH_FLASH);
        state.lives -= 1;
        state.hit_monster = false;
        state.robot.reset();
        input.clear_jump();
        log::info!("Life lost, {} left", state.lives);
        out.push(GameEvent::LifeLost {
            lives_left: state.lives,
        });
    }

    let robot_hitbox = state.robot.hitbox();
    for coin in &mut state.coins {
        if coin.place(&robot_hitbox, canvas) {
            out.push(GameEvent::CoinGrabbed);
        }
    }

    let coins_grabbed = state.coins_grabbed();
    if state.all_coins_grabbed() && state.portal.place(&robot_hitbox, canvas) {
        complete_level(state, input, &mut out);
        return out;
    }

    let platforms = build_world(state.level_data().platforms, JUMPBOT_WINDOW_HEIGHT, canvas);

    if state.show_hitboxes {
        for hitbox in &platforms {
            canvas.rect_outline(*hitbox, colors::HITBOX);
        }
        canvas.rect_outline(robot_hitbox, colors::HITBOX);
    }

    if state.show_tutorials && state.level < TUTORIAL_LEVELS {
        screens::tutorial(canvas, width, state.level, coins_grabbed);
    }

    for monster in &mut state.monsters {
        monster.place(canvas);
        if monster.touches(&robot_hitbox) {
            state.hit_monster = true;
        }
    }

    state.robot.step(input, &platforms);
    canvas.sprite(SpriteDraw::new(Sprite::Robot, state.robot.pos, Robot::size()));

    screens::hud(
        canvas,
        state.lives,
        coins_grabbed,
        state.coins.len(),
        state.level,
        TOTAL_LEVELS,
    );

    out
}

fn complete_level(state: &mut JumpbotState, input: &mut InputState, out: &mut TickOutcome) {
    state.lives += 1;
    out.delay(TRANSITION_DELAY_MS);

    if state.level < TOTAL_LEVELS {
        let next_level = state.level + 1;
        state.banked_coins += state.coins.len() as u64;
        out.push(GameEvent::LevelComplete { next_level });
        state.load_level(next_level, input);
    } else {
        log::info!("All {} levels cleared", TOTAL_LEVELS);
        out.push(GameEvent::GameWon);
        record_high_score(state, out);
        state.new_game(input);
        state.won = true;
        state.phase = Phase::StartMenu;
    }
}

fn record_high_score(state: &mut JumpbotState, out: &mut TickOutcome) {
    let score = state.score();
    if score > state.high_score {
        log::info!("New high score: {} (was {})", score, state.high_score);
        state.high_score = score;
        out.push(GameEvent::NewHighScore(score));
    }
}

impl Simulation for JumpbotState {
    fn tick(&mut self, input: &mut InputState, canvas: &mut dyn Canvas) -> TickOutcome {
        tick(self, input, canvas)
    }

    fn phase(&self) -> Phase {
        self.phase
    }

    fn score(&self) -> u64 {
        JumpbotState::score(self)
    }

    fn high_score(&self) -> u64 {
        self.high_score
    }

    fn window_size(&self) -> (u32, u32) {
        (JUMPBOT_WINDOW_WIDTH as u32, JUMPBOT_WINDOW_HEIGHT as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawList;
    use crate::sim::input::Action;
    use crate::sim::jumpbot::pickups::CoinState;
    use glam::Vec2;

    fn playing() -> (JumpbotState, InputState, DrawList) {
        let mut state = JumpbotState::new(0);
        state.phase = Phase::Playing;
        (state, InputState::default(), DrawList::new())
    }

    fn step(state: &mut JumpbotState, input: &mut InputState, canvas: &mut DrawList) -> TickOutcome {
        canvas.clear_commands();
        tick(state, input, canvas)
    }

    #[test]
    fn test_confirm_starts_game() {
        let mut state = JumpbotState::new(0);
        let mut input = InputState::default();
        let mut canvas = DrawList::new();

        step(&mut state, &mut input, &mut canvas);
        assert_eq!(state.phase, Phase::StartMenu);
        assert!(canvas.texts().any(|t| t == "JUMPBOT"));

        input.press(Action::Confirm);
        step(&mut state, &mut input, &mut canvas);
        assert_eq!(state.phase, Phase::Playing);
        assert!(!input.confirm);
    }

    #[test]
    fn test_controls_overlay_in_menu() {
        let mut state = JumpbotState::new(0);
        let mut input = InputState::default();
        let mut canvas = DrawList::new();

        input.press(Action::ToggleControls);
        step(&mut state, &mut input, &mut canvas);
        assert!(state.controls_overlay);
        assert!(canvas.texts().any(|t| t == "Controls:"));

        input.press(Action::Pause);
        step(&mut state, &mut input, &mut canvas);
        assert!(!state.controls_overlay);
        assert_eq!(state.phase, Phase::StartMenu);
    }

    #[test]
    fn test_pause_toggle_and_overlay() {
        let (mut state, mut input, mut canvas) = playing();

        input.press(Action::Pause);
        step(&mut state, &mut input, &mut canvas);
        assert_eq!(state.phase, Phase::Paused);

        // Controls overlay swallows the pause key
        input.press(Action::ToggleControls);
        step(&mut state, &mut input, &mut canvas);
        assert!(state.controls_overlay);
        input.press(Action::Pause);
        step(&mut state, &mut input, &mut canvas);
        assert!(!state.controls_overlay);
        assert_eq!(state.phase, Phase::Paused);

        input.press(Action::Pause);
        step(&mut state, &mut input, &mut canvas);
        assert_eq!(state.phase, Phase::Playing);
    }

    #[test]
    fn test_controls_key_ignored_while_playing() {
        let (mut state, mut input, mut canvas) = playing();
        input.press(Action::ToggleControls);
        step(&mut state, &mut input, &mut canvas);
        assert!(!state.controls_overlay);
    }

    #[test]
    fn test_paused_world_is_frozen() {
        let (mut state, mut input, mut canvas) = playing();
        state.load_level(4, &mut input);
        input.press(Action::Pause);
        step(&mut state, &mut input, &mut canvas);
        let before = state.monsters[0].pos;
        for _ in 0..10 {
            step(&mut state, &mut input, &mut canvas);
        }
        assert_eq!(state.monsters[0].pos, before);
    }

    #[test]
    fn test_last_life_then_game_over() {
        let (mut state, mut input, mut canvas) = playing();
        state.lives = 1;
        state.robot.pos.y = 800.0;

        let out = step(&mut state, &mut input, &mut canvas);
        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(out.events, vec![GameEvent::LifeLost { lives_left: 0 }]);

        let out = step(&mut state, &mut input, &mut canvas);
        assert_eq!(state.phase, Phase::GameOver);
        assert_eq!(out.delay_ms, TRANSITION_DELAY_MS);
        assert_eq!(out.events, vec![GameEvent::GameOver { score: 0 }]);

        // Captured once
        let out = step(&mut state, &mut input, &mut canvas);
        assert!(out.events.is_empty());
        assert_eq!(state.phase, Phase::GameOver);
    }

    #[test]
    fn test_game_over_records_high_score() {
        let (mut state, mut input, mut canvas) = playing();
        state.high_score = 2;
        state.banked_coins = 5;
        state.lives = 0;
        let out = step(&mut state, &mut input, &mut canvas);
        assert_eq!(state.phase, Phase::GameOver);
        assert_eq!(
            out.events,
            vec![GameEvent::GameOver { score: 5 }, GameEvent::NewHighScore(5)]
        );
        assert_eq!(state.high_score, 5);
        assert!(canvas.texts().any(|t| t == "High score: 5"));

        // Restarting only resets the run
        input.press(Action::Confirm);
        let out = step(&mut state, &mut input, &mut canvas);
        assert!(out.events.is_empty());
        assert_eq!(state.high_score, 5);
        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.level, 1);
        assert_eq!(state.lives, 3);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_game_over_below_best_keeps_high_score() {
        let (mut state, mut input, mut canvas) = playing();
        state.high_score = 9;
        state.banked_coins = 5;
        state.lives = 0;
        let out = step(&mut state, &mut input, &mut canvas);
        assert_eq!(out.events, vec![GameEvent::GameOver { score: 5 }]);
        assert_eq!(state.high_score, 9);
    }

    #[test]
    fn test_controls_overlay_from_game_over() {
        let (mut state, mut input, mut canvas) = playing();
        state.lives = 0;
        step(&mut state, &mut input, &mut canvas);
        assert_eq!(state.phase, Phase::GameOver);
        assert!(canvas.texts().any(|t| t == "Press 'c' to view game controls."));

        input.press(Action::ToggleControls);
        step(&mut state, &mut input, &mut canvas);
        assert!(state.controls_overlay);
        assert!(canvas.texts().any(|t| t == "Controls:"));

        input.press(Action::Pause);
        step(&mut state, &mut input, &mut canvas);
        assert!(!state.controls_overlay);
        assert_eq!(state.phase, Phase::GameOver);
        step(&mut state, &mut input, &mut canvas);
        assert!(canvas.texts().any(|t| t == "GAME OVER!"));
    }

    #[test]
    fn test_death_keeps_level_progress() {
        let (mut state, mut input, mut canvas) = playing();
        state.coins[0].state = CoinState::Grabbed;
        state.hit_monster = true;
        input.jumping = true;

        step(&mut state, &mut input, &mut canvas);
        assert_eq!(state.lives, 2);
        assert!(!state.hit_monster);
        assert!(!input.jumping);
        assert!(state.coins[0].is_grabbed());
        assert_eq!(state.robot.pos, crate::sim::jumpbot::robot::SPAWN_POINT);
    }

    #[test]
    fn test_monster_contact_kills_next_frame() {
        let (mut state, mut input, mut canvas) = playing();
        state.load_level(0, &mut input);
        // The test stage monster stands still at the origin; park it on the robot
        state.monsters[0].pos = Vec2::new(0.0, 585.0);
        state.monsters[0].path.start = state.monsters[0].pos;
        state.monsters[0].path.end = state.monsters[0].pos;

        step(&mut state, &mut input, &mut canvas);
        assert!(state.hit_monster);
        assert_eq!(state.lives, 3);
        step(&mut state, &mut input, &mut canvas);
        assert_eq!(state.lives, 2);
    }

    #[test]
    fn test_portal_closed_until_all_coins() {
        let (mut state, mut input, mut canvas) = playing();
        // Park the robot inside the portal
        state.robot.pos = Vec2::new(1160.0, 579.0);
        state.robot.prev_pos = state.robot.pos;
        state.coins[0].state = CoinState::Grabbed;
        state.coins[1].state = CoinState::Grabbed;

        for _ in 0..5 {
            step(&mut state, &mut input, &mut canvas);
            assert!(!state.portal.entered);
            assert!(canvas.sprites().all(|s| s.sprite != Sprite::Portal));
        }
    }

    #[test]
    fn test_portal_advances_level_and_grants_life() {
        let (mut state, mut input, mut canvas) = playing();
        state.robot.pos = Vec2::new(1160.0, 579.0);
        for coin in &mut state.coins {
            coin.state = CoinState::Grabbed;
        }

        let out = step(&mut state, &mut input, &mut canvas);
        assert_eq!(out.events, vec![GameEvent::LevelComplete { next_level: 2 }]);
        assert_eq!(out.delay_ms, TRANSITION_DELAY_MS);
        assert_eq!(state.level, 2);
        assert_eq!(state.lives, 4);
        assert_eq!(state.score(), 3);
        assert!(!state.portal.entered);
    }

    #[test]
    fn test_clearing_last_level_wins() {
        let (mut state, mut input, mut canvas) = playing();
        state.load_level(TOTAL_LEVELS, &mut input);
        let portal = state.portal.pos;
        state.robot.pos = portal + Vec2::new(10.0, 4.0);
        for coin in &mut state.coins {
            coin.state = CoinState::Grabbed;
        }

        let out = step(&mut state, &mut input, &mut canvas);
        assert!(out.events.contains(&GameEvent::GameWon));
        assert!(out.events.contains(&GameEvent::NewHighScore(4)));
        assert_eq!(state.phase, Phase::StartMenu);
        assert!(state.won);
        assert_eq!(state.level, 1);

        step(&mut state, &mut input, &mut canvas);
        assert!(canvas.texts().any(|t| t == "YOU WON!!!"));

        input.press(Action::Confirm);
        step(&mut state, &mut input, &mut canvas);
        assert_eq!(state.phase, Phase::Playing);
        assert!(!state.won);
    }

    #[test]
    fn test_grabbing_coin_reports_event() {
        let (mut state, mut input, mut canvas) = playing();
        state.robot.pos = Vec2::new(110.0, 579.0);
        let out = step(&mut state, &mut input, &mut canvas);
        assert_eq!(out.events, vec![GameEvent::CoinGrabbed]);
        assert_eq!(state.score(), 1);
    }

    #[test]
    fn test_tutorial_toggle() {
        let (mut state, mut input, mut canvas) = playing();
        step(&mut state, &mut input, &mut canvas);
        assert!(canvas.texts().any(|t| t.starts_with("Press 'a' to move left")));

        input.press(Action::ToggleTutorials);
        step(&mut state, &mut input, &mut canvas);
        assert!(!state.show_tutorials);
        assert!(!canvas.texts().any(|t| t.starts_with("Press 'a' to move left")));
    }

    #[test]
    fn test_hitbox_overlay() {
        let (mut state, mut input, mut canvas) = playing();
        state.show_hitboxes = true;
        step(&mut state, &mut input, &mut canvas);
        let outlines = canvas
            .commands
            .iter()
            .filter(|c| matches!(c, crate::renderer::DrawCommand::Rect { fill: None, .. }))
            .count();
        assert_eq!(outlines, 2);
    }
}
