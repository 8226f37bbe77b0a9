//! Axis-aligned geometry primitives
//!
//! Ball and paddle positions are `glam::DVec2`; the only shape the collision
//! model needs beyond that is an axis-aligned rectangle with a half-open
//! point-containment test.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open containment test: the left/top edges are inside, the
    /// right/bottom edges are not. Adjacent grid cells never both claim
    /// a point on their shared edge.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// Viewport dimensions handed in by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: crate::consts::DEFAULT_VIEWPORT_WIDTH,
            height: crate::consts::DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}
