//! Point cloud data structures and functionality

use crate::error::{Error, Result};
use crate::point::Point;
use crate::vector::Vector;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ops::Index;
use tracing::{debug, trace};

/// An ordered collection of points.
///
/// Each point's index is its position in the cloud, assigned when it is
/// added and never reused.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SerializedPointCloud"))]
pub struct PointCloud {
    points: Vec<Point>,
}

/// Wire form of [`PointCloud`]; indices are checked before it becomes a cloud.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct SerializedPointCloud {
    points: Vec<Point>,
}

#[cfg(feature = "serde")]
impl TryFrom<SerializedPointCloud> for PointCloud {
    type Error = Error;

    fn try_from(raw: SerializedPointCloud) -> Result<Self> {
        Self::from_points(raw.points)
    }
}

impl PointCloud {
    /// Create a new empty point cloud
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a new point cloud with specified capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Create a point cloud from positions, indexed in iteration order
    pub fn from_positions<I>(positions: I) -> Self
    where
        I: IntoIterator<Item = [f32; 3]>,
    {
        let points: Vec<Point> = positions
            .into_iter()
            .enumerate()
            .map(|(index, [x, y, z])| Point::new(index, x, y, z))
            .collect();
        debug!(points = points.len(), "built point cloud");
        Self { points }
    }

    /// Create a point cloud from existing points.
    ///
    /// Every point must carry its own position in `points` as its index.
    pub fn from_points(points: Vec<Point>) -> Result<Self> {
        if let Some((position, point)) = points
            .iter()
            .enumerate()
            .find(|(position, point)| point.index() != *position)
        {
            trace!(index = point.index(), position, "point index does not match its position");
            return Err(Error::MisplacedPoint {
                index: point.index(),
                position,
            });
        }
        Ok(Self { points })
    }

    /// Add a point and return the index it was given
    pub fn push(&mut self, x: f32, y: f32, z: f32) -> usize {
        let index = self.points.len();
        self.points.push(Point::new(index, x, y, z));
        index
    }

    /// Get the number of points in the cloud
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the point cloud is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// Get an iterator over the points
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// All points as a slice, in index order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// One bound vector per point, in index order
    pub fn vectors(&self) -> Vec<Vector<'_>> {
        self.points.iter().map(Vector::from_point).collect()
    }

    /// Find the point a vector was derived from.
    ///
    /// Fails if the vector is unbound or was derived from a point that does
    /// not belong to this cloud.
    pub fn source_of(&self, vector: &Vector<'_>) -> Result<&Point> {
        let (Some(bound), Some(index)) = (vector.point(), vector.index()) else {
            trace!("lookup of unbound vector");
            return Err(Error::Unbound);
        };
        let point = self.points.get(index).ok_or_else(|| {
            trace!(index, len = self.points.len(), "vector index outside cloud");
            Error::IndexOutOfRange {
                index,
                len: self.points.len(),
            }
        })?;
        if !std::ptr::eq(point, bound) {
            trace!(index, "vector bound to a point of another cloud");
            return Err(Error::ForeignPoint { index });
        }
        Ok(point)
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for an empty cloud
    pub fn bounds(&self) -> Option<([f32; 3], [f32; 3])> {
        let first = self.points.first()?.position();
        let bounds = self.points.iter().skip(1).fold((first, first), |(mut min, mut max), p| {
            for (axis, value) in p.position().into_iter().enumerate() {
                min[axis] = min[axis].min(value);
                max[axis] = max[axis].max(value);
            }
            (min, max)
        });
        Some(bounds)
    }
}

impl Index<usize> for PointCloud {
    type Output = Point;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a PointCloud {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl FromIterator<[f32; 3]> for PointCloud {
    fn from_iter<I: IntoIterator<Item = [f32; 3]>>(iter: I) -> Self {
        Self::from_positions(iter)
    }
}
