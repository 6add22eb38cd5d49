//! Labeling entry point and run parameters.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use tracing::info;
use voxel_types::{Region, SampleLattice};

use crate::config::PriorityConfig;
use crate::error::LabelResult;
use crate::report::Labeling;
use crate::{layered, proximity};

/// Which composition strategy resolves overlapping regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CompositeMode {
    /// Priority-ordered overwrite over closed solids (the default).
    #[default]
    Layered,
    /// Per-point nearest-surface selection over surfaces/shells.
    Proximity,
}

/// What happens when a geometry query fails mid-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FailurePolicy {
    /// Abort the whole run on the first query failure (the default).
    #[default]
    Strict,
    /// Skip the failing region and keep going; failures are recorded in
    /// the processing log.
    Lenient,
}

/// Parameters for a labeling run.
///
/// # Example
///
/// ```
/// use voxel_label::{CompositeMode, FailurePolicy, LabelParams};
///
/// let params = LabelParams::proximity().lenient();
/// assert_eq!(params.mode, CompositeMode::Proximity);
/// assert_eq!(params.failure, FailurePolicy::Lenient);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LabelParams {
    /// Composition strategy.
    pub mode: CompositeMode,
    /// Geometry-failure propagation policy.
    pub failure: FailurePolicy,
}

impl LabelParams {
    /// Parameters for the layered (priority-overwrite) strategy.
    #[must_use]
    pub const fn layered() -> Self {
        Self {
            mode: CompositeMode::Layered,
            failure: FailurePolicy::Strict,
        }
    }

    /// Parameters for the proximity (nearest-surface) strategy.
    #[must_use]
    pub const fn proximity() -> Self {
        Self {
            mode: CompositeMode::Proximity,
            failure: FailurePolicy::Strict,
        }
    }

    /// Switch to lenient failure handling.
    #[must_use]
    pub const fn lenient(mut self) -> Self {
        self.failure = FailurePolicy::Lenient;
        self
    }

    /// Switch to strict failure handling.
    #[must_use]
    pub const fn strict(mut self) -> Self {
        self.failure = FailurePolicy::Strict;
        self
    }
}

/// Label every point of a sample lattice from a set of named regions.
///
/// The priority configuration is validated before any region or lattice
/// work happens; a malformed configuration aborts immediately. Per-region
/// skips (unmatched tags, bounding boxes outside the lattice) never abort
/// and are recorded in the returned [`Labeling`]'s report.
///
/// # Errors
///
/// Returns [`LabelError::Config`](crate::LabelError::Config) for a
/// malformed configuration and
/// [`LabelError::Geometry`](crate::LabelError::Geometry) when a geometry
/// query fails under [`FailurePolicy::Strict`].
pub fn label_domain(
    regions: &[Region],
    lattice: &SampleLattice,
    config: &PriorityConfig,
    params: &LabelParams,
) -> LabelResult<Labeling> {
    config.validate()?;

    info!(
        regions = regions.len(),
        shape = ?lattice.shape(),
        mode = ?params.mode,
        "starting domain labeling"
    );

    let labeling = match params.mode {
        CompositeMode::Layered => layered::compose(regions, lattice, config, params.failure)?,
        CompositeMode::Proximity => {
            proximity::compose(regions, lattice, config, params.failure)?
        }
    };

    info!(
        applied = labeling.applied_count(),
        skipped = labeling.reports().len() - labeling.applied_count(),
        "domain labeling finished"
    );
    Ok(labeling)
}
