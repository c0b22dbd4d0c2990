//! Error types for ledspace

use thiserror::Error;

/// Errors raised when building a point cloud or mapping vectors back onto it.
///
/// The vector algebra itself never fails; degenerate input propagates as
/// NaN or infinity instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("vector is not bound to a source point")]
    Unbound,

    #[error("point index {index} out of range for cloud of {len} points")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("point index {index} stored at position {position}")]
    MisplacedPoint { index: usize, position: usize },

    #[error("vector is bound to point {index} of a different cloud")]
    ForeignPoint { index: usize },
}

/// Result type alias for ledspace operations
pub type Result<T> = std::result::Result<T, Error>;
