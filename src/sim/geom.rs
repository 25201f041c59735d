//! Axis-aligned geometry: rectangles, arena bounds, orientation
//!
//! Rectangles are stored by center so entities can keep sub-pixel positions
//! while still exposing pixel edges for bounds tests.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (center + size, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// Build from the top-left corner, as walls are laid out
    pub fn from_top_left(x: f32, y: f32, width: f32, height: f32) -> Self {
        let size = Vec2::new(width, height);
        Self {
            center: Vec2::new(x, y) + size / 2.0,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.size.x / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.size.x / 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.size.y / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.size.y / 2.0
    }

    #[inline]
    pub fn top_left(&self) -> Vec2 {
        self.center - self.size / 2.0
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }
}

/// Fixed playfield bounds. Immutable once the game is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Per-axis containment test: `(inside_x, inside_y)`
    ///
    /// An axis reports `false` as soon as either edge of the rectangle crosses
    /// the arena edge on that axis; touching an edge still counts as inside.
    pub fn bounds(&self, rect: &Rect) -> (bool, bool) {
        let inside_x = !(rect.left() < 0.0 || rect.right() > self.width);
        let inside_y = !(rect.top() < 0.0 || rect.bottom() > self.height);
        (inside_x, inside_y)
    }

    /// True only when both axes are inside
    #[inline]
    pub fn contains(&self, rect: &Rect) -> bool {
        self.bounds(rect) == (true, true)
    }
}

/// Unit vector pointing from `from`'s center toward `to`'s center
///
/// Coincident centers yield `Vec2::ZERO`. Intended for homing behavior; the
/// live frame loop does not use it.
pub fn orientation(from: &Rect, to: &Rect) -> Vec2 {
    (to.center - from.center).normalize_or_zero()
}
