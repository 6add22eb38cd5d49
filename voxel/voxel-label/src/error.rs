//! Error types for domain labeling.

use thiserror::Error;
use voxel_types::{GeometryError, GridError};

/// Result type for labeling runs.
pub type LabelResult<T> = Result<T, LabelError>;

/// Errors raised while validating a priority configuration.
///
/// Configuration errors are always fatal and are raised before any
/// geometry query runs.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// The configuration declares no tag rules.
    #[error("priority configuration has no tag rules")]
    Empty,

    /// A rule has an empty tag, which would match every region name.
    #[error("tag rule {index} has an empty tag")]
    EmptyTag {
        /// Position of the offending rule in declaration order.
        index: usize,
    },

    /// The same tag is declared twice (case-insensitive).
    #[error("tag \"{tag}\" is declared more than once")]
    DuplicateTag {
        /// The duplicated tag.
        tag: String,
    },
}

/// Errors that abort a labeling run.
///
/// Per-region conditions that merely skip a region (unmatched tag, empty
/// candidate set, lenient-mode query failures) are reported in the
/// [`RegionReport`](crate::RegionReport) log instead, never as errors.
#[derive(Debug, Error)]
pub enum LabelError {
    /// The priority configuration is malformed. Always fatal.
    #[error("invalid priority configuration: {0}")]
    Config(#[from] ConfigError),

    /// A label buffer does not match the lattice shape. Always fatal.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// A geometry query failed under [`FailurePolicy::Strict`](crate::FailurePolicy::Strict).
    #[error("geometry query failed for region \"{region}\": {source}")]
    Geometry {
        /// Name of the region whose query failed.
        region: String,
        /// The underlying geometry error.
        source: GeometryError,
    },
}
