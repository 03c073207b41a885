//! Patrolling monsters
//!
//! A monster oscillates between two endpoints at constant speed. Each axis
//! reflects independently when it reaches or passes an endpoint.

use glam::Vec2;

use crate::renderer::{Canvas, Sprite, SpriteDraw};
use crate::sim::geometry::Rect;

pub const MONSTER_SIZE: Vec2 = Vec2::new(60.0, 80.0);
pub const MONSTER_HITBOX: Vec2 = Vec2::new(38.0, 64.0);

/// Static description of a patrol route
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatrolPath {
    pub start: Vec2,
    pub end: Vec2,
    pub speed: f32,
}

impl PatrolPath {
    pub const fn new(start: (f32, f32), end: (f32, f32), speed: f32) -> Self {
        Self {
            start: Vec2::new(start.0, start.1),
            end: Vec2::new(end.0, end.1),
            speed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Monster {
    pub path: PatrolPath,
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Monster {
    pub fn new(path: PatrolPath) -> Self {
        let delta = path.end - path.start;
        let length = delta.length();
        let vel = if length > 0.0 {
            delta * path.speed / length
        } else {
            Vec2::ZERO
        };
        Self {
            path,
            pos: path.start,
            vel,
        }
    }

    /// Fixed-size box centered on the sprite
    pub fn hitbox(&self) -> Rect {
        Rect::with_center(Rect::at(self.pos, MONSTER_SIZE).center(), MONSTER_HITBOX)
    }

    pub fn touches(&self, robot_hitbox: &Rect) -> bool {
        robot_hitbox.overlaps(&self.hitbox())
    }

    /// Draw at the current position, then advance
    pub fn place(&mut self, canvas: &mut dyn Canvas) {
        let mut draw = SpriteDraw::new(Sprite::Monster, self.pos.trunc(), MONSTER_SIZE);
        draw.flip_x = self.vel.x < 0.0;
        canvas.sprite(draw);
        self.advance();
    }

    pub fn advance(&mut self) {
        let (x, vx) = reflect_axis(self.pos.x, self.vel.x, self.path.start.x, self.path.end.x);
        let (y, vy) = reflect_axis(self.pos.y, self.vel.y, self.path.start.y, self.path.end.y);
        self.pos = Vec2::new(x, y);
        self.vel = Vec2::new(vx, vy);
    }
}

/// One axis of the patrol: move, or clamp to the endpoint and turn around
fn reflect_axis(pos: f32, vel: f32, a: f32, b: f32) -> (f32, f32) {
    if a == b {
        return (pos, vel);
    }
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    let next = pos + vel;
    if next >= hi {
        (hi, -vel)
    } else if next <= lo {
        (lo, -vel)
    } else {
        (next, vel)
    }
}
