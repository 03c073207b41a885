//! Menus, tutorial lines and the in-game HUD

use glam::Vec2;

use super::pickups::COIN_SIZE;
use super::robot::Robot;
use crate::renderer::{Canvas, Sprite, SpriteDraw, colors};

const TITLE: &str = "JUMPBOT";
const FONT_SMALL: f32 = 18.0;
const FONT_MEDIUM: f32 = 24.0;
const FONT_MENU: f32 = 26.0;
const FONT_TITLE: f32 = 36.0;

const INSTRUCTIONS: [&str; 5] = [
    "Instructions:",
    "Collect all coins to open the portal.",
    "Enter the portal to go to the next level.",
    "Avoid gaps and monsters.",
    "Press 'c' to show controls.",
];

const TUTORIALS: [&str; 6] = [
    "Press 'a' to move left and 'd' to move right ... (press 't' to toggle tutorials)",
    "... and press 'Space' to jump.",
    "Now enter the portal and gain a life \u{2665}",
    "Press 'Space' twice to double jump.",
    "Avoid gaps. Hold 'w' to sprint.",
    "Avoid monsters.",
];

const CONTROLS: [(&str, &str); 8] = [
    ("Controls:", ""),
    ("'a'", "move left"),
    ("'d'", "move right"),
    ("'w'", "sprint"),
    ("'Space'", "jump / double jump"),
    ("'Esc'", "pause game"),
    ("'t'", "toggle in-game tutorials"),
    ("Press 'Esc' to return ...", ""),
];

/// Banner next to the title on the start menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    None,
    GameOver,
    Won,
}

/// Left edge of menu text
fn menu_x(window_width: f32) -> f32 {
    window_width / 2.0 - 200.0
}

pub fn start_menu(canvas: &mut dyn Canvas, window_width: f32, banner: Banner, high_score: u64) {
    let x = menu_x(window_width);
    canvas.text(TITLE, Vec2::new(x, 100.0), colors::TITLE, FONT_TITLE);
    match banner {
        Banner::GameOver => canvas.text(
            "GAME OVER!",
            Vec2::new(x + 200.0, 100.0),
            colors::GAME_OVER,
            FONT_TITLE,
        ),
        Banner::Won => canvas.text(
            "YOU WON!!!",
            Vec2::new(x + 200.0, 100.0),
            colors::WON,
            FONT_TITLE,
        ),
        Banner::None => {}
    }
    canvas.text(
        "Press 'Enter' to start a new game.",
        Vec2::new(x, 200.0),
        colors::TEXT,
        FONT_MENU,
    );
    canvas.text(
        "Press 'c' to view game controls.",
        Vec2::new(x, 250.0),
        colors::TEXT,
        FONT_MENU,
    );
    canvas.text(
        &format!("High score: {high_score}"),
        Vec2::new(x, 290.0),
        colors::TUTORIAL,
        FONT_SMALL,
    );
    basic_instructions(canvas, window_width, 330.0, true);

    // Big robot next to the menu
    canvas.sprite(SpriteDraw::new(
        Sprite::Robot,
        Vec2::new(100.0, 100.0),
        Robot::size() * 5.0,
    ));
}

pub fn controls_menu(canvas: &mut dyn Canvas, window_width: f32) {
    let x = menu_x(window_width);
    let mut y = 200.0;
    for (i, (key, action)) in CONTROLS.iter().enumerate() {
        canvas.text(key, Vec2::new(x, y), colors::TEXT, FONT_MENU);
        canvas.text(action, Vec2::new(x + 150.0, y), colors::TEXT, FONT_MENU);
        y += if i == 0 || i == CONTROLS.len() - 2 {
            50.0
        } else {
            30.0
        };
    }
}

pub fn pause_menu(canvas: &mut dyn Canvas, window_width: f32) {
    let x = menu_x(window_width);
    canvas.text(
        "Game paused. Press 'Esc' to continue ...",
        Vec2::new(x, 250.0),
        colors::TEXT,
        FONT_MENU,
    );
    basic_instructions(canvas, window_width, 330.0, false);
}

/// The start menu already names the controls key, so that line is skipped there
fn basic_instructions(canvas: &mut dyn Canvas, window_width: f32, mut y: f32, in_start_menu: bool) {
    let x = menu_x(window_width);
    for (i, line) in INSTRUCTIONS.iter().enumerate() {
        if in_start_menu && i == INSTRUCTIONS.len() - 1 {
            continue;
        }
        canvas.text(line, Vec2::new(x, y), colors::TUTORIAL, FONT_MEDIUM);
        y += if i == 0 { 40.0 } else { 30.0 };
    }
}

/// Tutorial line for the early levels, chosen by coin progress on level 1
pub fn tutorial_line(level: u32, coins_grabbed: usize) -> Option<&'static str> {
    let index = match level {
        1 if coins_grabbed < 2 => 0,
        1 if coins_grabbed == 2 => 1,
        1 => 2,
        2 => 3,
        3 => 4,
        4 => 5,
        _ => return None,
    };
    Some(TUTORIALS[index])
}

pub fn tutorial(canvas: &mut dyn Canvas, window_width: f32, level: u32, coins_grabbed: usize) {
    if let Some(line) = tutorial_line(level, coins_grabbed) {
        let y = if level == 3 { 400.0 } else { 200.0 };
        canvas.text_centered(line, Vec2::new(window_width / 2.0, y), colors::TEXT, FONT_SMALL);
    }
}

pub fn hud(canvas: &mut dyn Canvas, lives: u32, coins_grabbed: usize, coins_total: usize, level: u32, total_levels: u32) {
    canvas.text("\u{2665}", Vec2::new(24.0, 13.0), colors::LIVES, FONT_MEDIUM);
    canvas.text(&lives.to_string(), Vec2::new(45.0, 18.0), colors::LIVES, FONT_SMALL);

    canvas.sprite(SpriteDraw::new(Sprite::Coin, Vec2::new(20.0, 45.0), COIN_SIZE * 0.5));
    canvas.text(
        &format!("{coins_grabbed}/{coins_total}"),
        Vec2::new(45.0, 45.0),
        colors::TEXT,
        FONT_SMALL,
    );

    canvas.text(
        &format!("Level {level}/{total_levels}"),
        Vec2::new(24.0, 70.0),
        colors::TEXT,
        FONT_SMALL,
    );
}
