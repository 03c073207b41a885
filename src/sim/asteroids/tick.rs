//! Asteroids per-frame update

use std::mem::take;

use glam::Vec2;

use super::falling::HEART_SIZE;
use super::state::AsteroidsState;
use crate::consts::{ASTEROIDS_WINDOW_HEIGHT, ASTEROIDS_WINDOW_WIDTH, ROBOT_HEIGHT, ROBOT_WIDTH};
use crate::renderer::{Canvas, Sprite, SpriteDraw, colors};
use crate::sim::input::InputState;
use crate::sim::rng::Randomness;
use crate::sim::{GameEvent, Phase, Simulation, TickOutcome};

/// Hearts drawn in the HUD before the overflow marker
const HUD_HEART_SLOTS: u32 = 11;
const FONT_SMALL: f32 = 15.0;
const FONT_TEXT: f32 = 20.0;
const FONT_HEADER: f32 = 40.0;

/// Advance the game by one frame
pub fn tick<R: Randomness>(
    state: &mut AsteroidsState<R>,
    input: &mut InputState,
    canvas: &mut dyn Canvas,
) -> TickOutcome {
    let mut out = TickOutcome::default();

    let pause = take(&mut input.pause);
    let confirm = take(&mut input.confirm);
    // Menus only exist in the platformer
    input.controls = false;
    input.tutorials = false;

    if pause && state.phase != Phase::GameOver {
        state.phase = match state.phase {
            Phase::Playing => Phase::Paused,
            _ => Phase::Playing,
        };
    }

    if state.lives == 0 {
        if state.phase != Phase::GameOver {
            log::info!("Game over with score {}", state.score);
            state.phase = Phase::GameOver;
            out.push(GameEvent::GameOver { score: state.score });
            record_high_score(state, &mut out);
        } else if confirm {
            state.restart();
            input.reset_motion();
        }
    }

    canvas.clear(colors::BACKGROUND);

    let center_x = ASTEROIDS_WINDOW_WIDTH / 2.0;
    match state.phase {
        Phase::Playing => play(state, input, canvas, &mut out),
        Phase::Paused => canvas.text_centered(
            "Game paused. Press 'Esc' to continue...",
            Vec2::new(center_x, ASTEROIDS_WINDOW_HEIGHT / 2.0),
            colors::TEXT,
            FONT_TEXT,
        ),
        Phase::GameOver => {
            canvas.text_centered(
                "GAME OVER",
                Vec2::new(center_x, 220.0),
                colors::TEXT,
                FONT_HEADER,
            );
            canvas.text_centered(
                "Press 'Enter' to restart",
                Vec2::new(center_x, 270.0),
                colors::TEXT,
                FONT_TEXT,
            );
        }
        // Asteroids opens straight into play
        Phase::StartMenu => {}
    }

    out
}

fn play<R: Randomness>(
    state: &mut AsteroidsState<R>,
    input: &mut InputState,
    canvas: &mut dyn Canvas,
    out: &mut TickOutcome,
) {
    state.robot.step(input);
    canvas.sprite(SpriteDraw::new(
        state.robot.sprite(input),
        state.robot.pos,
        Vec2::new(ROBOT_WIDTH, ROBOT_HEIGHT),
    ));

    state.spawn();

    // Catches from the previous frame
    for asteroid in state.asteroids.iter().filter(|a| a.collected) {
        let points = asteroid.points();
        state.score += u64::from(points);
        out.push(GameEvent::AsteroidCaught { points });
    }

    let height = ASTEROIDS_WINDOW_HEIGHT;
    for asteroid in &state.asteroids {
        if !asteroid.collected && !asteroid.on_screen(height) {
            state.lives = state.lives.saturating_sub(1);
            log::debug!("Asteroid missed, {} lives left", state.lives);
            out.push(GameEvent::AsteroidMissed);
        }
    }
    let hearts_collected = state.hearts.values().filter(|h| h.collected).count();
    for _ in 0..hearts_collected {
        state.lives += 1;
        out.push(GameEvent::HeartCollected);
    }

    state.asteroids.retain(|a| a.on_screen(height));
    state.hearts.retain(|_, h| h.on_screen(height));

    let robot_hitbox = state.robot.hitbox();
    for asteroid in &mut state.asteroids {
        asteroid.fall(canvas);
        asteroid.collide(&robot_hitbox);
    }
    for heart in state.hearts.values_mut() {
        heart.fall(canvas);
        heart.collide(&robot_hitbox);
    }

    if state.show_hitboxes {
        canvas.rect_outline(robot_hitbox, colors::HITBOX);
        for object in state.asteroids.iter().chain(state.hearts.values()) {
            canvas.rect_outline(object.hitbox(), colors::HITBOX);
        }
    }

    hud(canvas, state.score, state.high_score, state.lives);
}

fn hud(canvas: &mut dyn Canvas, score: u64, high_score: u64, lives: u32) {
    canvas.text(
        &format!("Score: {score}"),
        Vec2::new(500.0, 20.0),
        colors::SCORE,
        FONT_TEXT,
    );
    canvas.text(
        &format!("(High score: {high_score})"),
        Vec2::new(500.0, 45.0),
        colors::SCORE,
        FONT_SMALL,
    );

    for i in 0..lives.min(HUD_HEART_SLOTS) {
        let x = 30.0 + HEART_SIZE.x * i as f32;
        canvas.sprite(SpriteDraw::new(Sprite::Heart, Vec2::new(x, 20.0), HEART_SIZE));
    }
    if lives > HUD_HEART_SLOTS {
        let x = 30.0 + HEART_SIZE.x * HUD_HEART_SLOTS as f32 + 3.0;
        canvas.text("+", Vec2::new(x, 14.0), colors::SCORE, FONT_TEXT);
    }
}

fn record_high_score<R: Randomness>(state: &mut AsteroidsState<R>, out: &mut TickOutcome) {
    if state.score > state.high_score {
        log::info!("New high score: {} (was {})", state.score, state.high_score);
        state.high_score = state.score;
        out.push(GameEvent::NewHighScore(state.score));
    }
}

impl<R: Randomness> Simulation for AsteroidsState<R> {
    fn tick(&mut self, input: &mut InputState, canvas: &mut dyn Canvas) -> TickOutcome {
        tick(self, input, canvas)
    }

    fn phase(&self) -> Phase {
        self.phase
    }

    fn score(&self) -> u64 {
        self.score
    }

    fn high_score(&self) -> u64 {
        self.high_score
    }

    fn window_size(&self) -> (u32, u32) {
        (ASTEROIDS_WINDOW_WIDTH as u32, ASTEROIDS_WINDOW_HEIGHT as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawList;
    use crate::sim::asteroids::falling::{FallingKind, FallingObject};
    use crate::sim::input::Action;
    use crate::sim::rng::scripted::ScriptedRng;

    /// Every spawn roll comes back 1000 unless scripted, so nothing spawns
    fn quiet() -> (AsteroidsState<ScriptedRng>, InputState, DrawList) {
        let rng = ScriptedRng::new(&[], &[]);
        let mut state = AsteroidsState::with_rng(rng, 0);
        state.rng.ints.extend(std::iter::repeat_n(1000, 10_000));
        (state, InputState::default(), DrawList::new())
    }

    fn step(
        state: &mut AsteroidsState<ScriptedRng>,
        input: &mut InputState,
        canvas: &mut DrawList,
    ) -> TickOutcome {
        canvas.clear_commands();
        tick(state, input, canvas)
    }

    fn asteroid_at(x: f32, y: f32, points: u32) -> FallingObject {
        FallingObject {
            kind: FallingKind::Asteroid { points },
            pos: Vec2::new(x, y),
            size: Vec2::new(40.0, 40.0),
            vel: Vec2::new(0.0, 1.0),
            rotation_deg: 0.0,
            flip_x: false,
            flip_y: false,
            collected: false,
        }
    }

    #[test]
    fn test_catch_scores_once() {
        let (mut state, mut input, mut canvas) = quiet();
        // Right on top of the robot
        state.asteroids.push(asteroid_at(330.0, 400.0, 2));

        let out = step(&mut state, &mut input, &mut canvas);
        assert!(out.events.is_empty());
        assert!(state.asteroids[0].collected);

        let out = step(&mut state, &mut input, &mut canvas);
        assert_eq!(out.events, vec![GameEvent::AsteroidCaught { points: 2 }]);
        assert_eq!(state.score, 2);
        assert!(state.asteroids.is_empty());

        step(&mut state, &mut input, &mut canvas);
        assert_eq!(state.score, 2);
        assert_eq!(state.lives, 3);
    }

    #[test]
    fn test_missed_asteroid_costs_life() {
        let (mut state, mut input, mut canvas) = quiet();
        state.asteroids.push(asteroid_at(0.0, 480.0, 1));

        // Falls past the floor this frame, counted on the next
        step(&mut state, &mut input, &mut canvas);
        assert_eq!(state.lives, 3);
        let out = step(&mut state, &mut input, &mut canvas);
        assert_eq!(out.events, vec![GameEvent::AsteroidMissed]);
        assert_eq!(state.lives, 2);
        assert!(state.asteroids.is_empty());
    }

    #[test]
    fn test_heart_grants_life() {
        let (mut state, mut input, mut canvas) = quiet();
        let mut rng = ScriptedRng::new(&[330], &[]);
        let mut heart = FallingObject::spawn_heart(&mut rng, ASTEROIDS_WINDOW_WIDTH);
        heart.pos.y = 420.0;
        state.hearts.insert(10, heart);

        step(&mut state, &mut input, &mut canvas);
        let out = step(&mut state, &mut input, &mut canvas);
        assert_eq!(out.events, vec![GameEvent::HeartCollected]);
        assert_eq!(state.lives, 4);
        assert!(state.hearts.is_empty());
    }

    #[test]
    fn test_spawned_asteroid_falls_in() {
        let (mut state, mut input, mut canvas) = quiet();
        // Spawn roll, then angle, scale, tier, flip x, flip y, x, speed
        state.rng = ScriptedRng::new(&[0, 0, 2, 50, 0, 0, 10, 5], &[0.0]);
        step(&mut state, &mut input, &mut canvas);
        assert_eq!(state.asteroids.len(), 1);
        let a = &state.asteroids[0];
        assert_eq!(a.vel, Vec2::new(0.0, 1.5));
        // Drawn at the spawn point, then moved
        assert_eq!(a.pos, Vec2::new(10.0, -20.0 + 1.5));
        assert!(canvas.sprites().any(|s| s.sprite == Sprite::Asteroid));
    }

    #[test]
    fn test_out_of_lives_game_over_then_restart() {
        let (mut state, mut input, mut canvas) = quiet();
        state.high_score = 4;
        state.score = 7;
        state.lives = 1;
        state.asteroids.push(asteroid_at(0.0, 481.0, 1));

        let out = step(&mut state, &mut input, &mut canvas);
        assert_eq!(out.events, vec![GameEvent::AsteroidMissed]);
        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, Phase::Playing);

        let out = step(&mut state, &mut input, &mut canvas);
        assert_eq!(state.phase, Phase::GameOver);
        assert_eq!(
            out.events,
            vec![GameEvent::GameOver { score: 7 }, GameEvent::NewHighScore(7)]
        );
        assert_eq!(state.high_score, 7);
        assert!(canvas.texts().any(|t| t == "GAME OVER"));

        // Captured once; pause does nothing here
        input.press(Action::Pause);
        let out = step(&mut state, &mut input, &mut canvas);
        assert!(out.events.is_empty());
        assert_eq!(state.phase, Phase::GameOver);

        input.press(Action::Confirm);
        let out = step(&mut state, &mut input, &mut canvas);
        assert!(out.events.is_empty());
        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.high_score, 7);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
    }

    #[test]
    fn test_pause_freezes_objects() {
        let (mut state, mut input, mut canvas) = quiet();
        state.asteroids.push(asteroid_at(0.0, 100.0, 1));

        input.press(Action::Pause);
        step(&mut state, &mut input, &mut canvas);
        assert_eq!(state.phase, Phase::Paused);
        assert!(canvas.texts().any(|t| t.starts_with("Game paused")));
        step(&mut state, &mut input, &mut canvas);
        assert_eq!(state.asteroids[0].pos.y, 100.0);

        input.press(Action::Pause);
        step(&mut state, &mut input, &mut canvas);
        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.asteroids[0].pos.y, 101.0);
    }

    #[test]
    fn test_hud_overflow_marker() {
        let (mut state, mut input, mut canvas) = quiet();
        state.lives = 14;
        step(&mut state, &mut input, &mut canvas);
        let hearts = canvas.sprites().filter(|s| s.sprite == Sprite::Heart).count();
        assert_eq!(hearts, 11);
        assert!(canvas.texts().any(|t| t == "+"));
        assert!(canvas.texts().any(|t| t == "Score: 0"));
    }
}
