//! Rendering seam
//!
//! The simulation never owns a rendering backend. It emits [`DrawCommand`]s
//! into a [`Canvas`]; [`DrawList`] records them and [`shapes`] tessellates a
//! recorded list into GPU-ready vertices.

pub mod shapes;
pub mod vertex;

use glam::Vec2;

use crate::sim::geometry::Rect;

pub use vertex::{Color, Vertex, colors};

/// Images the games blit; the backend owns the actual pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Robot,
    RobotJumpingLeft,
    RobotJumpingRight,
    Coin,
    Portal,
    Monster,
    Asteroid,
    Heart,
}

/// A positioned sprite blit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteDraw {
    pub sprite: Sprite,
    /// Top-left corner in window pixels
    pub pos: Vec2,
    /// Destination size (scaled/rotated bounds)
    pub size: Vec2,
    pub rotation_deg: f32,
    pub flip_x: bool,
    pub flip_y: bool,
    /// Multiply tint, 1.0 = untouched, 0.0 = black
    pub lightness: f32,
}

impl SpriteDraw {
    pub fn new(sprite: Sprite, pos: Vec2, size: Vec2) -> Self {
        Self {
            sprite,
            pos,
            size,
            rotation_deg: 0.0,
            flip_x: false,
            flip_y: false,
            lightness: 1.0,
        }
    }
}

/// One drawing operation for the external canvas
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Rect {
        rect: Rect,
        fill: Option<Color>,
        outline: Option<Color>,
    },
    Polygon {
        points: Vec<Vec2>,
        fill: Color,
        outline: Option<Color>,
    },
    Sprite(SpriteDraw),
    Text {
        text: String,
        pos: Vec2,
        color: Color,
        size: f32,
    },
}

/// Receiver of draw commands
pub trait Canvas {
    fn submit(&mut self, command: DrawCommand);

    fn clear(&mut self, color: Color) {
        self.submit(DrawCommand::Clear(color));
    }

    fn rect(&mut self, rect: Rect, fill: Color, outline: Option<Color>) {
        self.submit(DrawCommand::Rect {
            rect,
            fill: Some(fill),
            outline,
        });
    }

    fn rect_outline(&mut self, rect: Rect, color: Color) {
        self.submit(DrawCommand::Rect {
            rect,
            fill: None,
            outline: Some(color),
        });
    }

    fn polygon(&mut self, points: &[Vec2], fill: Color, outline: Option<Color>) {
        self.submit(DrawCommand::Polygon {
            points: points.to_vec(),
            fill,
            outline,
        });
    }

    fn sprite(&mut self, draw: SpriteDraw) {
        self.submit(DrawCommand::Sprite(draw));
    }

    fn text(&mut self, text: &str, pos: Vec2, color: Color, size: f32) {
        self.submit(DrawCommand::Text {
            text: text.to_string(),
            pos,
            color,
            size,
        });
    }

    /// Text centered on `center`, using an average glyph width of half the font size
    fn text_centered(&mut self, text: &str, center: Vec2, color: Color, size: f32) {
        let width = text.chars().count() as f32 * size * 0.5;
        let pos = center - Vec2::new(width, size) / 2.0;
        self.text(text, pos, color, size);
    }
}

/// Canvas that records every command for one frame
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    pub fn sprites(&self) -> impl Iterator<Item = &SpriteDraw> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Sprite(s) => Some(s),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Canvas for DrawList {
    /// A clear paints over everything, so earlier commands are dropped
    fn submit(&mut self, command: DrawCommand) {
        if matches!(command, DrawCommand::Clear(_)) {
            self.commands.clear();
        }
        self.commands.push(command);
    }
}
