//! Error types for the voxel data model.

use thiserror::Error;

/// Result type for geometry queries.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Errors raised by a [`RegionGeometry`](crate::RegionGeometry) query.
///
/// A query error is a hard failure of the geometry backend. "No valid
/// result at this point" is not an error; `distance_to` signals it with
/// `Ok(None)` instead.
#[derive(Debug, Clone, Error)]
pub enum GeometryError {
    /// The geometry is degenerate and cannot answer the query.
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    /// The backend failed to evaluate the query.
    #[error("geometry query failed: {0}")]
    QueryFailed(String),
}

/// Result type for lattice construction.
pub type LatticeResult<T> = Result<T, LatticeError>;

/// Errors raised while constructing a [`SampleLattice`](crate::SampleLattice).
#[derive(Debug, Clone, Error)]
pub enum LatticeError {
    /// A spacing component is zero, negative, or non-finite.
    #[error("invalid spacing {spacing} on axis {axis}")]
    InvalidSpacing {
        /// Axis name (`x`, `y`, or `z`).
        axis: char,
        /// The offending spacing value.
        spacing: f64,
    },

    /// An axis has no sample points.
    #[error("axis {axis} has no sample points")]
    EmptyAxis {
        /// Axis name (`x`, `y`, or `z`).
        axis: char,
    },
}

/// Result type for label grid operations.
pub type GridResult<T> = Result<T, GridError>;

/// Errors raised by [`LabelGrid`](crate::LabelGrid) operations.
#[derive(Debug, Clone, Error)]
pub enum GridError {
    /// The flat label buffer does not match the declared shape.
    #[error("label buffer has {actual} entries, shape requires {expected}")]
    ShapeMismatch {
        /// Number of entries the shape requires.
        expected: usize,
        /// Number of entries actually provided.
        actual: usize,
    },

    /// A slice index is outside the grid.
    #[error("slice index {index} out of range (extent {extent})")]
    SliceIndexOutOfRange {
        /// The requested index along the slicing axis.
        index: usize,
        /// The extent of the grid along that axis.
        extent: usize,
    },
}
