// File: crates/graphic-core/src/geometry.rs
// Summary: Pixel-space points used by connector and layout math.

use serde::{Deserialize, Serialize};

/// A position in pixel space, produced by running data through a scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance(&self, other: Point2D) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    #[inline]
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}
