//! Shape generation for 2D primitives
//!
//! Turns a recorded [`DrawList`] into triangle lists. Text is left to the
//! backend's font path and sprites become tinted placeholder quads.

use glam::Vec2;

use super::vertex::{Color, Vertex, colors, shade};
use super::{DrawCommand, DrawList, Sprite, SpriteDraw};
use crate::sim::geometry::Rect;

/// Line width used for outlines
pub const OUTLINE_WIDTH: f32 = 1.0;

/// Triangles for one frame plus the color the target is cleared to
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub clear_color: Option<Color>,
    pub vertices: Vec<Vertex>,
}

/// Tessellate every command in submission order
pub fn tessellate(list: &DrawList) -> Mesh {
    let mut mesh = Mesh::default();

    for command in &list.commands {
        match command {
            DrawCommand::Clear(color) => {
                // A clear wipes everything drawn before it
                mesh.vertices.clear();
                mesh.clear_color = Some(*color);
            }
            DrawCommand::Rect {
                rect,
                fill,
                outline,
            } => {
                if let Some(fill) = fill {
                    mesh.vertices.extend(quad(rect, *fill));
                }
                if let Some(outline) = outline {
                    mesh.vertices
                        .extend(rect_outline(rect, OUTLINE_WIDTH, *outline));
                }
            }
            DrawCommand::Polygon {
                points,
                fill,
                outline,
            } => {
                mesh.vertices.extend(convex_polygon(points, *fill));
                if let Some(outline) = outline {
                    mesh.vertices
                        .extend(polyline(points, OUTLINE_WIDTH, *outline, true));
                }
            }
            DrawCommand::Sprite(draw) => mesh.vertices.extend(sprite(draw)),
            DrawCommand::Text { .. } => {}
        }
    }

    mesh
}

/// Two triangles covering `rect`
pub fn quad(rect: &Rect, color: Color) -> Vec<Vertex> {
    let (l, t, r, b) = (rect.left, rect.top, rect.right(), rect.bottom());
    vec![
        Vertex::new(l, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, b, color),
    ]
}

/// Four thin quads along the inside of `rect`
pub fn rect_outline(rect: &Rect, width: f32, color: Color) -> Vec<Vertex> {
    let w = width.min(rect.width / 2.0).min(rect.height / 2.0);
    if w <= 0.0 {
        return Vec::new();
    }
    let mut vertices = Vec::with_capacity(24);
    vertices.extend(quad(&Rect::new(rect.left, rect.top, rect.width, w), color));
    vertices.extend(quad(
        &Rect::new(rect.left, rect.bottom() - w, rect.width, w),
        color,
    ));
    vertices.extend(quad(&Rect::new(rect.left, rect.top, w, rect.height), color));
    vertices.extend(quad(
        &Rect::new(rect.right() - w, rect.top, w, rect.height),
        color,
    ));
    vertices
}

/// Triangle fan over a convex polygon
pub fn convex_polygon(points: &[Vec2], color: Color) -> Vec<Vertex> {
    if points.len() < 3 {
        return Vec::new();
    }
    let mut vertices = Vec::with_capacity((points.len() - 2) * 3);
    let first = points[0];
    for pair in points[1..].windows(2) {
        vertices.push(Vertex::new(first.x, first.y, color));
        vertices.push(Vertex::new(pair[0].x, pair[0].y, color));
        vertices.push(Vertex::new(pair[1].x, pair[1].y, color));
    }
    vertices
}

/// Thick line through `points`, optionally closing the loop
pub fn polyline(points: &[Vec2], width: f32, color: Color, closed: bool) -> Vec<Vertex> {
    if points.len() < 2 {
        return Vec::new();
    }
    let mut edges: Vec<(Vec2, Vec2)> = points.windows(2).map(|p| (p[0], p[1])).collect();
    if closed && points.len() > 2 {
        edges.push((points[points.len() - 1], points[0]));
    }

    let half = width / 2.0;
    let mut vertices = Vec::with_capacity(edges.len() * 6);
    for (p1, p2) in edges {
        let dir = (p2 - p1).normalize_or_zero();
        let perp = Vec2::new(-dir.y, dir.x) * half;

        let v1a = p1 + perp;
        let v1b = p1 - perp;
        let v2a = p2 + perp;
        let v2b = p2 - perp;

        vertices.push(Vertex::new(v1a.x, v1a.y, color));
        vertices.push(Vertex::new(v1b.x, v1b.y, color));
        vertices.push(Vertex::new(v2a.x, v2a.y, color));

        vertices.push(Vertex::new(v2a.x, v2a.y, color));
        vertices.push(Vertex::new(v1b.x, v1b.y, color));
        vertices.push(Vertex::new(v2b.x, v2b.y, color));
    }
    vertices
}

fn sprite_color(sprite: Sprite) -> Color {
    match sprite {
        Sprite::Robot | Sprite::RobotJumpingLeft | Sprite::RobotJumpingRight => {
            colors::SPRITE_ROBOT
        }
        Sprite::Coin => colors::SPRITE_COIN,
        Sprite::Portal => colors::SPRITE_PORTAL,
        Sprite::Monster => colors::SPRITE_MONSTER,
        Sprite::Asteroid => colors::SPRITE_ASTEROID,
        Sprite::Heart => colors::SPRITE_HEART,
    }
}

/// Placeholder quad for a sprite, darkened by its lightness
pub fn sprite(draw: &SpriteDraw) -> Vec<Vertex> {
    let rect = Rect::at(draw.pos, draw.size);
    quad(&rect, shade(sprite_color(draw.sprite), draw.lightness))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Canvas;

    #[test]
    fn test_quad_covers_corners() {
        let v = quad(&Rect::new(1.0, 2.0, 3.0, 4.0), colors::TEXT);
        assert_eq!(v.len(), 6);
        let xs: Vec<f32> = v.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = v.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 1.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 4.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 2.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 6.0);
    }

    #[test]
    fn test_polygon_fan_size() {
        let pts = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(12.0, 5.0),
            Vec2::new(2.0, 5.0),
        ];
        assert_eq!(convex_polygon(&pts, colors::TEXT).len(), 6);
        assert!(convex_polygon(&pts[..2], colors::TEXT).is_empty());
        assert_eq!(polyline(&pts, 1.0, colors::OUTLINE, true).len(), 24);
    }

    #[test]
    fn test_tessellate_clear_resets_and_skips_text() {
        let mut list = DrawList::new();
        list.rect(Rect::new(0.0, 0.0, 5.0, 5.0), colors::TEXT, None);
        list.clear(colors::DEATH_FLASH);
        list.text("hi", Vec2::ZERO, colors::TEXT, 12.0);
        let mut faded = SpriteDraw::new(Sprite::Portal, Vec2::ZERO, Vec2::new(64.0, 96.0));
        faded.lightness = 0.0;
        list.sprite(faded);

        let mesh = tessellate(&list);
        assert_eq!(mesh.clear_color, Some(colors::DEATH_FLASH));
        assert_eq!(mesh.vertices.len(), 6);
        assert_eq!(mesh.vertices[0].color, [0.0, 0.0, 0.0, 1.0]);
    }
}
