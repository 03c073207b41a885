//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Scale the RGB channels, keeping alpha
pub fn shade(color: Color, lightness: f32) -> Color {
    let l = lightness.clamp(0.0, 1.0);
    [color[0] * l, color[1] * l, color[2] * l, color[3]]
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [0.0, 0.0, 0.0, 1.0];
    pub const DEATH_FLASH: Color = [100.0 / 255.0, 0.0, 0.0, 1.0];
    pub const OUTLINE: Color = [0.0, 0.0, 0.0, 1.0];
    pub const BRICK_FRONT: Color = [153.0 / 255.0, 76.0 / 255.0, 0.0, 1.0];
    pub const BRICK_SIDE: Color = [102.0 / 255.0, 51.0 / 255.0, 0.0, 1.0];
    pub const TILE_FRONT: Color = [150.0 / 255.0, 150.0 / 255.0, 150.0 / 255.0, 1.0];
    pub const TILE_SURFACE: Color = [181.0 / 255.0, 181.0 / 255.0, 181.0 / 255.0, 1.0];
    pub const TILE_SIDE: Color = [125.0 / 255.0, 125.0 / 255.0, 125.0 / 255.0, 1.0];
    pub const HITBOX: Color = [1.0, 0.0, 0.0, 1.0];
    pub const TEXT: Color = [1.0, 1.0, 1.0, 1.0];
    pub const TUTORIAL: Color = [150.0 / 255.0, 150.0 / 255.0, 150.0 / 255.0, 1.0];
    pub const TITLE: Color = [1.0, 1.0, 0.0, 1.0];
    pub const GAME_OVER: Color = [1.0, 0.0, 0.0, 1.0];
    pub const WON: Color = [0.0, 1.0, 0.0, 1.0];
    pub const LIVES: Color = [1.0, 0.0, 0.0, 1.0];
    pub const SCORE: Color = [1.0, 0.0, 0.0, 1.0];

    /// Placeholder fills used when tessellating sprites without textures
    pub const SPRITE_ROBOT: Color = [0.7, 0.75, 0.8, 1.0];
    pub const SPRITE_COIN: Color = [1.0, 0.85, 0.1, 1.0];
    pub const SPRITE_PORTAL: Color = [0.55, 0.35, 0.9, 1.0];
    pub const SPRITE_MONSTER: Color = [0.3, 0.85, 0.3, 1.0];
    pub const SPRITE_ASTEROID: Color = [0.55, 0.45, 0.4, 1.0];
    pub const SPRITE_HEART: Color = [0.95, 0.2, 0.3, 1.0];
}
