//! Axis-aligned bounding boxes
//!
//! Entity-vs-entity overlap is the strict test: boxes that exactly touch
//! along an edge do NOT overlap. Arena-bound checks (walls, score lines)
//! are inclusive and live with the systems that make them; the two
//! conventions are deliberately not unified.

use crate::ecs::components::{Body, Position};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Left edge
    pub min_x: f32,

    /// Top edge
    pub min_y: f32,

    /// Right edge
    pub max_x: f32,

    /// Bottom edge
    pub max_y: f32,
}

impl Aabb {
    /// Build a box from a top-left corner and extents
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x + width,
            max_y: y + height,
        }
    }

    /// Build a box from position and body components
    pub fn from_parts(position: &Position, body: &Body) -> Self {
        Self::new(position.x, position.y, body.width, body.height)
    }

    /// Strict overlap test
    ///
    /// `a.min < b.max && a.max > b.min` on both axes; symmetric, and
    /// boxes that merely share an edge are not overlapping.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min_x < other.max_x
            && self.max_x > other.min_x
            && self.min_y < other.max_y
            && self.max_y > other.min_y
    }

    /// Box width
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// Box height
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}
