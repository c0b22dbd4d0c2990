//! Core data structures for ledspace
//!
//! This crate provides the per-point math used by lighting transforms: an
//! immutable [`Point`] describing one addressable LED, a [`PointCloud`] holding
//! the ordered collection, and the mutable [`Vector`] that transforms operate on.
//!
//! ```
//! use ledspace_core::PointCloud;
//!
//! let cloud = PointCloud::from_positions([[1.0, 0.0, 0.0], [0.0, 2.0, 0.0]]);
//! let mut vectors = cloud.vectors();
//! for v in &mut vectors {
//!     v.rotate(std::f32::consts::FRAC_PI_2).mult(2.0);
//! }
//! let origin = cloud.source_of(&vectors[1]).unwrap();
//! assert_eq!(origin.index(), 1);
//! ```

pub mod point;
pub mod point_cloud;
pub mod vector;
pub mod interop;
pub mod utils;
pub mod error;

pub use point::*;
pub use point_cloud::*;
pub use vector::*;
pub use error::*;

/// The math library the interop conversions target
pub use nalgebra;
