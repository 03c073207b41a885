//! Platform rows to hitboxes, drawing the tiles in the same pass

use glam::Vec2;

use crate::renderer::{Canvas, Color, colors};
use crate::sim::geometry::Rect;

/// Horizontal pixels per build unit
pub const BUILD_UNIT: f32 = 120.0;
/// Vertical distance between platform rows
pub const ROW_SPACING: f32 = 120.0;
/// Rows start left of the window so the first run can pass the border
pub const ROW_START_X: f32 = -60.0;
/// Distance from the window bottom to the lowest row's top
pub const FLOOR_OFFSET: f32 = 70.0;
/// Collidable slab thickness
pub const PLATFORM_HITBOX_HEIGHT: f32 = 35.0;
/// Hitbox width per build unit (slightly wider than the unit)
pub const HITBOX_UNIT_WIDTH: f32 = 122.0;
const HITBOX_INSET: f32 = 15.0;

const BRICK_WIDTH: f32 = 31.0;
const BRICK_HEIGHT: f32 = 15.0;
const BRICK_HALF_WIDTH: f32 = 16.0;
const TILE_WIDTH: f32 = 121.0;
const TILE_HEIGHT: f32 = 5.0;

/// Walk every row and return the platform hitboxes in row order
pub fn build_world(rows: &[&[i32]], window_height: f32, canvas: &mut dyn Canvas) -> Vec<Rect> {
    let mut hitboxes = Vec::new();

    for (r, row) in rows.iter().enumerate() {
        let mut x = ROW_START_X;
        let y = window_height - FLOOR_OFFSET - r as f32 * ROW_SPACING;

        for (i, &entry) in row.iter().enumerate() {
            if i % 2 == 0 {
                x += entry as f32;
                continue;
            }
            let units = entry.max(0) as u32;
            hitboxes.push(Rect::new(
                x + HITBOX_INSET,
                y + HITBOX_INSET,
                units as f32 * HITBOX_UNIT_WIDTH,
                PLATFORM_HITBOX_HEIGHT,
            ));
            draw_platform(canvas, units, Vec2::new(x, y));
            x += units as f32 * BUILD_UNIT;
        }
    }

    hitboxes
}

#[derive(Debug, Clone, Copy)]
enum Block {
    FullBrick,
    HalfBrick,
    BrickSide,
    BrickHalfSide,
    TileFront,
    TileSurface,
    TileSide,
    SideVisualFix,
}

fn draw_block(canvas: &mut dyn Canvas, block: Block, x: f32, y: f32) {
    let rect = |w: f32, h: f32| Rect::new(x, y, w, h);
    let quad = |pts: [(f32, f32); 4]| pts.map(|(px, py)| Vec2::new(px, py));
    let hw = BRICK_HALF_WIDTH;
    let qw = BRICK_HALF_WIDTH / 2.0;
    let bw = BRICK_WIDTH;

    let outline = Some(colors::OUTLINE);
    let (points, color): ([Vec2; 4], Color) = match block {
        Block::FullBrick => {
            return canvas.rect(rect(bw, BRICK_HEIGHT), colors::BRICK_FRONT, outline);
        }
        Block::HalfBrick => {
            return canvas.rect(rect(hw, BRICK_HEIGHT), colors::BRICK_FRONT, outline);
        }
        Block::TileFront => {
            return canvas.rect(rect(TILE_WIDTH, TILE_HEIGHT), colors::TILE_FRONT, outline);
        }
        Block::SideVisualFix => {
            return canvas.rect(rect(1.0, 33.0), colors::OUTLINE, outline);
        }
        Block::BrickSide => (
            quad([(x + hw, y), (x, y + hw), (x, y + hw + 14.0), (x + hw, y + 14.0)]),
            colors::BRICK_SIDE,
        ),
        Block::BrickHalfSide => (
            quad([(x + qw, y), (x, y + qw), (x, y + qw + 14.0), (x + qw, y + 14.0)]),
            colors::BRICK_SIDE,
        ),
        Block::TileSurface => (
            quad([
                (x + bw, y),
                (x, y + bw),
                (x + TILE_WIDTH, y + bw),
                (x + TILE_WIDTH + bw, y),
            ]),
            colors::TILE_SURFACE,
        ),
        Block::TileSide => (
            quad([(x + bw, y), (x, y + bw), (x, y + bw + 4.0), (x + bw, y + 4.0)]),
            colors::TILE_SIDE,
        ),
    };
    canvas.polygon(&points, color, outline);
}

/// Tiles and brick courses for a run of `units` build units at `top_left`
pub fn draw_platform(canvas: &mut dyn Canvas, units: u32, top_left: Vec2) {
    let (x0, y0) = (top_left.x, top_left.y);

    for i in 0..units {
        let x = x0 + BUILD_UNIT * i as f32;

        draw_block(canvas, Block::TileSurface, x - 1.0, y0);
        draw_block(canvas, Block::TileFront, x, y0 + 31.0);
        if i == 0 {
            draw_block(canvas, Block::HalfBrick, x, y0 + 35.0);
            for j in 0..3 {
                draw_block(canvas, Block::FullBrick, x + 15.0 + 30.0 * j as f32, y0 + 35.0);
            }
        } else {
            for j in -1..3 {
                draw_block(canvas, Block::FullBrick, x + 15.0 + 30.0 * j as f32, y0 + 35.0);
            }
        }
        for j in 0..4 {
            draw_block(canvas, Block::FullBrick, x + 30.0 * j as f32, y0 + 49.0);
        }

        if i + 1 == units {
            draw_block(canvas, Block::TileSide, x + 120.0, y0);
            draw_block(canvas, Block::HalfBrick, x + 105.0, y0 + 35.0);
            draw_block(canvas, Block::BrickSide, x + 120.0, y0 + 19.0);
            draw_block(canvas, Block::BrickSide, x + 136.0, y0 + 3.0);
            draw_block(canvas, Block::BrickHalfSide, x + 120.0, y0 + 41.0);
            draw_block(canvas, Block::BrickSide, x + 128.0, y0 + 25.0);
            draw_block(canvas, Block::BrickHalfSide, x + 144.0, y0 + 17.0);
            draw_block(canvas, Block::SideVisualFix, x + 151.0, y0);
        }
    }
}
