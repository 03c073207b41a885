//! Jumpbot game state

use glam::Vec2;

use super::level::{self, LevelData};
use super::monster::Monster;
use super::pickups::{Coin, Portal};
use super::robot::Robot;
use crate::consts::{JUMPBOT_WINDOW_HEIGHT, JUMPBOT_WINDOW_WIDTH, STARTING_LIVES};
use crate::sim::Phase;
use crate::sim::input::InputState;

#[derive(Debug, Clone)]
pub struct JumpbotState {
    pub phase: Phase,
    /// Controls list drawn over the start menu or the pause menu
    pub controls_overlay: bool,
    pub show_tutorials: bool,
    pub show_hitboxes: bool,

    pub level: u32,
    pub lives: u32,
    /// Set when the last level was cleared; shown on the start menu
    pub won: bool,
    /// Coins grabbed on levels already completed in this run
    pub banked_coins: u64,
    pub high_score: u64,

    pub robot: Robot,
    pub coins: Vec<Coin>,
    pub monsters: Vec<Monster>,
    pub portal: Portal,
    /// A monster touched the robot during the last frame
    pub hit_monster: bool,
}

impl JumpbotState {
    pub fn new(high_score: u64) -> Self {
        let data = level::level(1);
        Self {
            phase: Phase::StartMenu,
            controls_overlay: false,
            show_tutorials: true,
            show_hitboxes: false,
            level: 1,
            lives: STARTING_LIVES,
            won: false,
            banked_coins: 0,
            high_score,
            robot: Robot::new(JUMPBOT_WINDOW_WIDTH, JUMPBOT_WINDOW_HEIGHT),
            coins: spawn_coins(data),
            monsters: spawn_monsters(data),
            portal: Portal::new(Vec2::from(data.portal)),
            hit_monster: false,
        }
    }

    pub fn window_size() -> Vec2 {
        Vec2::new(JUMPBOT_WINDOW_WIDTH, JUMPBOT_WINDOW_HEIGHT)
    }

    pub fn level_data(&self) -> &'static LevelData {
        level::level(self.level)
    }

    /// Fresh entities for `level`; lives and score carry over
    pub fn load_level(&mut self, level: u32, input: &mut InputState) {
        let data = level::level(level);
        self.level = level;
        self.coins = spawn_coins(data);
        self.monsters = spawn_monsters(data);
        self.portal = Portal::new(Vec2::from(data.portal));
        self.robot.reset();
        self.hit_monster = false;
        input.reset_motion();
        log::info!("Loaded level {}", level);
    }

    /// Back to level 1 with full lives and no score
    pub fn new_game(&mut self, input: &mut InputState) {
        self.lives = STARTING_LIVES;
        self.banked_coins = 0;
        self.show_tutorials = true;
        self.load_level(1, input);
    }

    pub fn coins_grabbed(&self) -> usize {
        self.coins.iter().filter(|c| c.is_grabbed()).count()
    }

    pub fn all_coins_grabbed(&self) -> bool {
        self.coins.iter().all(Coin::is_grabbed)
    }

    /// Coins collected over the whole run
    pub fn score(&self) -> u64 {
        self.banked_coins + self.coins_grabbed() as u64
    }
}

fn spawn_coins(data: &LevelData) -> Vec<Coin> {
    data.coins.iter().map(|&p| Coin::new(Vec2::from(p))).collect()
}

fn spawn_monsters(data: &LevelData) -> Vec<Monster> {
    data.monsters.iter().map(|&path| Monster::new(path)).collect()
}
