//! Mutable per-point vectors
//!
//! A [`Vector`] starts out as a copy of a [`Point`] position and is then pushed
//! around in place by whatever transforms run for the current frame. Every
//! mutator returns `&mut Self` so transforms chain without temporaries:
//!
//! ```
//! use ledspace_core::Vector;
//!
//! let mut v = Vector::new(1.0, 0.0, 0.0);
//! v.rotate(std::f32::consts::FRAC_PI_2).mult(3.0).add(0.0, 0.0, 1.0);
//! assert!((v.y - 3.0).abs() < 1e-6);
//! ```
//!
//! The vector remembers which point it came from, so results can be mapped
//! back onto the cloud after any number of coordinate changes.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{AddAssign, DivAssign, MulAssign};

use crate::point::Point;
use crate::utils::lerp;

/// A mutable 3D vector, optionally bound to the [`Point`] it was derived from.
///
/// Numeric degeneracies are not guarded: dividing by zero, normalizing a
/// vector of non-finite length or rotating about a zero axis all propagate
/// NaN/infinity.
#[derive(Debug, Clone, Copy)]
pub struct Vector<'a> {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    point: Option<&'a Point>,
    index: Option<usize>,
}

impl<'a> Vector<'a> {
    /// Raw index reported by [`Vector::raw_index`] for unbound vectors
    pub const NO_INDEX: isize = -1;

    /// Create an unbound vector from raw coordinates
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            x,
            y,
            z,
            point: None,
            index: None,
        }
    }

    /// Create a vector at the position of `point`, bound to it
    pub fn from_point(point: &'a Point) -> Self {
        Self {
            x: point.x(),
            y: point.y(),
            z: point.z(),
            point: Some(point),
            index: Some(point.index()),
        }
    }

    /// Independent copy sharing the same source binding
    pub fn copy(&self) -> Self {
        *self
    }

    /// The point this vector was derived from, if any
    pub fn point(&self) -> Option<&'a Point> {
        self.point
    }

    /// Index of the source point, fixed at construction
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Index of the source point, or [`Vector::NO_INDEX`] when unbound
    pub fn raw_index(&self) -> isize {
        self.index.map_or(Self::NO_INDEX, |index| index as isize)
    }

    pub fn is_bound(&self) -> bool {
        self.point.is_some()
    }

    pub fn set(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    /// Overwrite x and y, leaving z alone
    pub fn set_xy(&mut self, x: f32, y: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Overwrite the coordinates with those of `other`; the binding is kept
    pub fn set_vector(&mut self, other: &Vector<'_>) -> &mut Self {
        self.set(other.x, other.y, other.z)
    }

    pub fn add(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.x += x;
        self.y += y;
        self.z += z;
        self
    }

    pub fn add_xy(&mut self, x: f32, y: f32) -> &mut Self {
        self.x += x;
        self.y += y;
        self
    }

    pub fn add_vector(&mut self, other: &Vector<'_>) -> &mut Self {
        self.add(other.x, other.y, other.z)
    }

    pub fn mult(&mut self, n: f32) -> &mut Self {
        self.x *= n;
        self.y *= n;
        self.z *= n;
        self
    }

    pub fn div(&mut self, n: f32) -> &mut Self {
        self.x /= n;
        self.y /= n;
        self.z /= n;
        self
    }

    /// Euclidean length
    pub fn mag(&self) -> f32 {
        self.mag_sq().sqrt()
    }

    /// Squared length, for comparisons that can skip the square root
    pub fn mag_sq(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean distance to `other`
    pub fn dist(&self, other: &Vector<'_>) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    pub fn dot(&self, x: f32, y: f32, z: f32) -> f32 {
        self.x * x + self.y * y + self.z * z
    }

    pub fn dot_vector(&self, other: &Vector<'_>) -> f32 {
        self.dot(other.x, other.y, other.z)
    }

    /// Replace this vector with `self × (x, y, z)`.
    ///
    /// Copy first if the original value is still needed.
    pub fn cross(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        let cx = self.y * z - self.z * y;
        let cy = self.z * x - self.x * z;
        let cz = self.x * y - self.y * x;
        self.set(cx, cy, cz)
    }

    pub fn cross_vector(&mut self, other: &Vector<'_>) -> &mut Self {
        self.cross(other.x, other.y, other.z)
    }

    /// Scale to unit length. Zero and already-unit vectors are left untouched.
    pub fn normalize(&mut self) -> &mut Self {
        let m = self.mag();
        if m != 0.0 && m != 1.0 {
            self.div(m);
        }
        self
    }

    /// Shrink to length `max` if currently longer
    pub fn limit(&mut self, max: f32) -> &mut Self {
        let mag_sq = self.mag_sq();
        if mag_sq > max * max {
            self.mult(max / mag_sq.sqrt());
        }
        self
    }

    pub fn set_mag(&mut self, mag: f32) -> &mut Self {
        self.normalize().mult(mag)
    }

    /// Move towards `other` by `amt`; values outside `[0, 1]` extrapolate
    pub fn lerp(&mut self, other: &Vector<'_>, amt: f32) -> &mut Self {
        self.set(
            lerp(self.x, other.x, amt),
            lerp(self.y, other.y, amt),
            lerp(self.z, other.z, amt),
        )
    }

    /// Rotate in the x-y plane by `theta` radians
    pub fn rotate(&mut self, theta: f32) -> &mut Self {
        let (sin, cos) = theta.sin_cos();
        let x = self.x;
        self.x = x * cos - self.y * sin;
        self.y = x * sin + self.y * cos;
        self
    }

    /// Rotate by `theta` radians about the axis `(l, m, n)`.
    ///
    /// The axis does not need to be unit length. Rotating many vectors about
    /// the same axis rebuilds the same matrix every call; batch callers should
    /// build it once themselves.
    pub fn rotate_about(&mut self, theta: f32, l: f32, m: f32, n: f32) -> &mut Self {
        // z axis in either direction reduces to the planar rotation
        if l == 0.0 && m == 0.0 && n.is_finite() {
            if n > 0.0 {
                return self.rotate(theta);
            }
            if n < 0.0 {
                return self.rotate(-theta);
            }
        }

        let (mut l, mut m, mut n) = (l, m, n);
        let ss = l * l + m * m + n * n;
        if ss != 1.0 {
            let sr = ss.sqrt();
            l /= sr;
            m /= sr;
            n /= sr;
        }

        let (sinv, cosv) = theta.sin_cos();
        let t = 1.0 - cosv;

        let a1 = l * l * t + cosv;
        let a2 = l * m * t - n * sinv;
        let a3 = l * n * t + m * sinv;
        let b1 = l * m * t + n * sinv;
        let b2 = m * m * t + cosv;
        let b3 = m * n * t - l * sinv;
        let c1 = l * n * t - m * sinv;
        let c2 = m * n * t + l * sinv;
        let c3 = n * n * t + cosv;

        let (x, y, z) = (self.x, self.y, self.z);
        self.set(
            x * a1 + y * a2 + z * a3,
            x * b1 + y * b2 + z * b3,
            x * c1 + y * c2 + z * c3,
        )
    }
}

impl fmt::Display for Vector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {}, {}, {} ]", self.x, self.y, self.z)
    }
}

/// Coordinates compare by bit pattern, the source point by identity.
impl PartialEq for Vector<'_> {
    fn eq(&self, other: &Self) -> bool {
        let same_point = match (self.point, other.point) {
            (Some(a), Some(b)) => std::ptr::eq(a, b),
            (None, None) => true,
            _ => false,
        };
        self.x.to_bits() == other.x.to_bits()
            && self.y.to_bits() == other.y.to_bits()
            && self.z.to_bits() == other.z.to_bits()
            && same_point
            && self.index == other.index
    }
}

impl Eq for Vector<'_> {}

// Only the coordinates are hashed; vectors differing just in their binding
// share a bucket.
impl Hash for Vector<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
        self.z.to_bits().hash(state);
    }
}

impl AddAssign<&Vector<'_>> for Vector<'_> {
    fn add_assign(&mut self, rhs: &Vector<'_>) {
        self.add_vector(rhs);
    }
}

impl MulAssign<f32> for Vector<'_> {
    fn mul_assign(&mut self, rhs: f32) {
        self.mult(rhs);
    }
}

impl DivAssign<f32> for Vector<'_> {
    fn div_assign(&mut self, rhs: f32) {
        self.div(rhs);
    }
}
