//! Axis-aligned rectangle geometry and directional collision offsets
//!
//! The tricky part of the platformer: turning "the robot overlaps some
//! platforms" into per-side translations that push it back out.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, covering `[left, right) x [top, bottom)`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Rectangle with its top-left corner at `pos`
    pub fn at(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    /// Rectangle of `size` centered on `center`
    pub fn with_center(center: Vec2, size: Vec2) -> Self {
        Self::new(
            center.x - size.x / 2.0,
            center.y - size.y / 2.0,
            size.x,
            size.y,
        )
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Grow (or shrink, with negative amounts) around the center
    pub fn inflate(&self, dw: f32, dh: f32) -> Self {
        Self::new(
            self.left - dw / 2.0,
            self.top - dh / 2.0,
            self.width + dw,
            self.height + dh,
        )
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.left + dx, self.top + dy, self.width, self.height)
    }

    /// Scale both dimensions by `factor`, keeping the center fixed
    pub fn scale_by(&self, factor: f32) -> Self {
        Self::with_center(self.center(), self.size() * factor)
    }

    /// Strict overlap test; touching edges and empty rectangles never overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }

    /// Whether any point of the closed segment lies inside this rectangle.
    /// Exact for axis-aligned segments, a bounding-box test otherwise.
    pub fn clips(&self, segment: &Segment) -> bool {
        if self.is_empty() {
            return false;
        }
        let (x0, x1) = min_max(segment.start.x, segment.end.x);
        let (y0, y1) = min_max(segment.start.y, segment.end.y);
        x0 < self.right() && x1 >= self.left && y0 < self.bottom() && y1 >= self.top
    }

    pub fn left_border(&self) -> Segment {
        Segment::new(
            Vec2::new(self.left, self.top),
            Vec2::new(self.left, self.bottom()),
        )
    }

    pub fn right_border(&self) -> Segment {
        Segment::new(
            Vec2::new(self.right(), self.top),
            Vec2::new(self.right(), self.bottom()),
        )
    }

    pub fn top_border(&self) -> Segment {
        Segment::new(
            Vec2::new(self.left, self.top),
            Vec2::new(self.right(), self.top),
        )
    }

    pub fn bottom_border(&self) -> Segment {
        Segment::new(
            Vec2::new(self.left, self.bottom()),
            Vec2::new(self.right(), self.bottom()),
        )
    }
}

#[inline]
fn min_max(a: f32, b: f32) -> (f32, f32) {
    if a <= b { (a, b) } else { (b, a) }
}

/// A closed line segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }
}

/// Per-side translation needed to separate a moving rectangle from obstacles.
///
/// Zero means no contact on that side. `left`/`top` are positive (push right/down),
/// `right`/`bottom` are negative (push left/up).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SideOffsets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl SideOffsets {
    pub fn is_clear(&self) -> bool {
        self.left == 0.0 && self.right == 0.0 && self.top == 0.0 && self.bottom == 0.0
    }
}

/// Test each edge of `moving` against the four borders of every obstacle.
///
/// When several obstacles touch the same side, the last one in iteration
/// order wins.
pub fn side_offsets(moving: &Rect, obstacles: &[Rect]) -> SideOffsets {
    let mut offsets = SideOffsets::default();

    for obstacle in obstacles {
        if moving.clips(&obstacle.right_border()) {
            offsets.left = obstacle.right() - moving.left;
        }
        if moving.clips(&obstacle.left_border()) {
            offsets.right = obstacle.left - moving.right();
        }
        if moving.clips(&obstacle.bottom_border()) {
            offsets.top = obstacle.bottom() - moving.top;
        }
        if moving.clips(&obstacle.top_border()) {
            offsets.bottom = obstacle.top - moving.bottom();
        }
    }

    offsets
}
