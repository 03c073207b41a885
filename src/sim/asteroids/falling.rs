//! Falling objects: asteroids to catch for points, hearts for lives
//!
//! Both kinds share the same fall and collide routine; only spawning differs.

use glam::Vec2;

use crate::renderer::{Canvas, Sprite, SpriteDraw};
use crate::rotated_bounds;
use crate::sim::geometry::Rect;
use crate::sim::rng::Randomness;

/// Side of the square source image asteroids are cut from
pub const ASTEROID_IMAGE_SIZE: f32 = 100.0;
pub const HEART_SIZE: Vec2 = Vec2::new(30.0, 26.0);
/// Base vertical speed
pub const FALL_SPEED: f32 = 1.0;
/// Lateral drift standard deviation per unit of vertical speed
pub const DRIFT_SPREAD: f32 = 0.08;
pub const HITBOX_SCALE: f32 = 0.9;
/// How far a caught object is pushed down so it leaves the screen
pub const CATCH_DISPLACEMENT: f32 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallingKind {
    Asteroid { points: u32 },
    Heart,
}

/// Size multiplier and points for one tier roll in `0..=100`
pub fn size_tier(roll: i32) -> (f32, u32) {
    if roll < 3 {
        (2.0, 3)
    } else if roll < 13 {
        (1.5, 2)
    } else {
        (1.0, 1)
    }
}

#[derive(Debug, Clone)]
pub struct FallingObject {
    pub kind: FallingKind,
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    pub rotation_deg: f32,
    pub flip_x: bool,
    pub flip_y: bool,
    /// Touched the robot; counted by the next score/lives pass
    pub collected: bool,
}

impl FallingObject {
    /// Random asteroid just above the window
    pub fn spawn_asteroid<R: Randomness + ?Sized>(rng: &mut R, window_width: f32) -> Self {
        let rotation_deg = rng.int_inclusive(0, 359) as f32;
        let bounds = rotated_bounds(ASTEROID_IMAGE_SIZE, ASTEROID_IMAGE_SIZE, rotation_deg);
        let scale = rng.int_inclusive(2, 5) as f32 / 10.0;
        let (multiplier, points) = size_tier(rng.int_inclusive(0, 100));
        let size = (bounds * scale * multiplier).floor();
        let flip_x = rng.int_inclusive(0, 1) == 1;
        let flip_y = rng.int_inclusive(0, 1) == 1;

        let x = rng.int_inclusive(0, (window_width - size.x) as i32) as f32;
        let vy = FALL_SPEED + rng.int_inclusive(-5, 10) as f32 / 10.0;
        let vx = rng.normal(0.0, vy * DRIFT_SPREAD);

        Self {
            kind: FallingKind::Asteroid { points },
            pos: Vec2::new(x, -size.y),
            size,
            vel: Vec2::new(vx, vy),
            rotation_deg,
            flip_x,
            flip_y,
            collected: false,
        }
    }

    /// Heart falling straight down at base speed
    pub fn spawn_heart<R: Randomness + ?Sized>(rng: &mut R, window_width: f32) -> Self {
        let x = rng.int_inclusive(0, (window_width - HEART_SIZE.x) as i32) as f32;
        Self {
            kind: FallingKind::Heart,
            pos: Vec2::new(x, -HEART_SIZE.y),
            size: HEART_SIZE,
            vel: Vec2::new(0.0, FALL_SPEED),
            rotation_deg: 0.0,
            flip_x: false,
            flip_y: false,
            collected: false,
        }
    }

    pub fn points(&self) -> u32 {
        match self.kind {
            FallingKind::Asteroid { points } => points,
            FallingKind::Heart => 0,
        }
    }

    pub fn hitbox(&self) -> Rect {
        Rect::at(self.pos, self.size).scale_by(HITBOX_SCALE)
    }

    /// False once the object has dropped below the window
    pub fn on_screen(&self, window_height: f32) -> bool {
        self.pos.y <= window_height
    }

    /// Draw at the current position, then move
    pub fn fall(&mut self, canvas: &mut dyn Canvas) {
        let sprite = match self.kind {
            FallingKind::Asteroid { .. } => Sprite::Asteroid,
            FallingKind::Heart => Sprite::Heart,
        };
        let mut draw = SpriteDraw::new(sprite, self.pos, self.size);
        draw.rotation_deg = self.rotation_deg;
        draw.flip_x = self.flip_x;
        draw.flip_y = self.flip_y;
        canvas.sprite(draw);

        self.pos += self.vel;
    }

    /// On contact, push the object off screen and mark it collected
    pub fn collide(&mut self, robot_hitbox: &Rect) -> bool {
        if self.collected || !robot_hitbox.overlaps(&self.hitbox()) {
            return false;
        }
        self.pos.y += CATCH_DISPLACEMENT;
        self.collected = true;
        true
    }
}
