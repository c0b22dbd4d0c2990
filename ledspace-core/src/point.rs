//! Point types and related functionality

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One addressable location in a point cloud.
///
/// Positions are fixed once the point is created; anything that moves points
/// around per frame works on a [`crate::Vector`] derived from it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    x: f32,
    y: f32,
    z: f32,
    index: usize,
}

impl Point {
    /// Create a point at the given position with a collection index
    pub fn new(index: usize, x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z, index }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn z(&self) -> f32 {
        self.z
    }

    /// Stable position of this point within its cloud
    pub fn index(&self) -> usize {
        self.index
    }

    /// Position as an array
    pub fn position(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}
