//! Asteroids game state

use std::collections::BTreeMap;

use super::falling::FallingObject;
use super::robot::CatcherRobot;
use crate::consts::{ASTEROIDS_WINDOW_HEIGHT, ASTEROIDS_WINDOW_WIDTH, STARTING_LIVES};
use crate::sim::Phase;
use crate::sim::rng::{GameRng, Randomness};

/// Base asteroid spawn chance, out of 1000 per frame
pub const ASTEROID_BASE_CHANCE: f32 = 8.0;
/// Score points per extra unit of asteroid spawn chance
pub const ASTEROID_CHANCE_DIVISOR: f32 = 5.0;
/// A heart may spawn at every multiple of this score
pub const HEART_SCORE_STEP: u64 = 10;
/// Heart spawn chance is `HEART_CHANCE_CEILING - score` out of 1000
pub const HEART_CHANCE_CEILING: i64 = 1010;

#[derive(Debug, Clone)]
pub struct AsteroidsState<R: Randomness = GameRng> {
    pub phase: Phase,
    pub score: u64,
    pub lives: u32,
    pub high_score: u64,
    pub show_hitboxes: bool,
    pub robot: CatcherRobot,
    pub asteroids: Vec<FallingObject>,
    /// Hearts keyed by the score they spawned at, so one score spawns at most one
    pub hearts: BTreeMap<u64, FallingObject>,
    pub rng: R,
}

impl AsteroidsState<GameRng> {
    pub fn new(seed: u64, high_score: u64) -> Self {
        Self::with_rng(GameRng::new(seed), high_score)
    }
}

impl<R: Randomness> AsteroidsState<R> {
    pub fn with_rng(rng: R, high_score: u64) -> Self {
        Self {
            phase: Phase::Playing,
            score: 0,
            lives: STARTING_LIVES,
            high_score,
            show_hitboxes: false,
            robot: CatcherRobot::new(ASTEROIDS_WINDOW_WIDTH, ASTEROIDS_WINDOW_HEIGHT),
            asteroids: Vec::new(),
            hearts: BTreeMap::new(),
            rng,
        }
    }

    /// Fresh run; the generator keeps its sequence
    pub fn restart(&mut self) {
        self.phase = Phase::Playing;
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.robot.reset();
        self.asteroids.clear();
        self.hearts.clear();
        log::info!("Asteroids restarted");
    }

    /// Roll for a new asteroid and, at score milestones, a heart
    pub fn spawn(&mut self) {
        let chance = ASTEROID_BASE_CHANCE + self.score as f32 / ASTEROID_CHANCE_DIVISOR;
        if (self.rng.int_inclusive(0, 1000) as f32) < chance {
            let asteroid = FallingObject::spawn_asteroid(&mut self.rng, ASTEROIDS_WINDOW_WIDTH);
            self.asteroids.push(asteroid);
        }

        let milestone = self.score != 0 && self.score % HEART_SCORE_STEP == 0;
        if milestone && !self.hearts.contains_key(&self.score) {
            let chance = HEART_CHANCE_CEILING - self.score as i64;
            if i64::from(self.rng.int_inclusive(0, 1000)) < chance {
                let heart = FallingObject::spawn_heart(&mut self.rng, ASTEROIDS_WINDOW_WIDTH);
                self.hearts.insert(self.score, heart);
            }
        }
    }
}
