//! Conversions between ledspace vectors and other math libraries
//!
//! Converting into a [`Vector`] always produces an unbound vector; there is no
//! point to attach it to.

use nalgebra::{Point3, Vector3};

use crate::point::Point;
use crate::vector::Vector;

impl Vector<'_> {
    /// Coordinates as an array
    pub fn to_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<&Vector<'_>> for [f32; 3] {
    fn from(v: &Vector<'_>) -> Self {
        v.to_array()
    }
}

impl From<[f32; 3]> for Vector<'_> {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Vector::new(x, y, z)
    }
}

impl From<&Vector<'_>> for Vector3<f32> {
    fn from(v: &Vector<'_>) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector3<f32>> for Vector<'_> {
    fn from(v: Vector3<f32>) -> Self {
        Vector::new(v.x, v.y, v.z)
    }
}

impl From<&Vector<'_>> for Point3<f32> {
    fn from(v: &Vector<'_>) -> Self {
        Point3::new(v.x, v.y, v.z)
    }
}

impl From<Point3<f32>> for Vector<'_> {
    fn from(p: Point3<f32>) -> Self {
        Vector::new(p.x, p.y, p.z)
    }
}

impl From<&Vector<'_>> for glam::Vec3 {
    fn from(v: &Vector<'_>) -> Self {
        glam::Vec3::new(v.x, v.y, v.z)
    }
}

impl From<glam::Vec3> for Vector<'_> {
    fn from(v: glam::Vec3) -> Self {
        Vector::new(v.x, v.y, v.z)
    }
}

impl From<&Point> for Point3<f32> {
    fn from(p: &Point) -> Self {
        Point3::new(p.x(), p.y(), p.z())
    }
}
