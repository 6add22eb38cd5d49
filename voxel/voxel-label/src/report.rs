//! Structured per-region processing log and run output.

use voxel_types::LabelGrid;

/// How a region ended up after one labeling run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionOutcome {
    /// The region was resolved and (possibly zero) points were written.
    Applied,
    /// The region name matched no configured tag; the region was skipped.
    UnmatchedTag,
    /// The region's bounding box contains no lattice point; skipped.
    OutsideLattice,
    /// A geometry query failed in lenient mode; the region was skipped
    /// with no partial writes.
    QueryFailed {
        /// Human-readable failure description.
        reason: String,
    },
}

/// Per-region processing record.
///
/// One entry per input region, in processing order. This replaces ad hoc
/// progress printing: tests and tooling consume it directly, and every
/// skip carries enough detail to diagnose.
#[derive(Debug, Clone)]
pub struct RegionReport {
    /// The region name as given.
    pub name: String,
    /// The matched tag, or `None` for an unmatched (skipped) region.
    pub tag: Option<String>,
    /// The priority tier used, if the region was matched.
    pub tier: Option<i32>,
    /// The label assigned, if the region was matched.
    pub label: Option<i32>,
    /// Number of candidate points considered for this region.
    pub candidates: usize,
    /// Number of points this region actually labeled. For the layered
    /// strategy this counts the region's own writes (later regions may
    /// still overwrite them); for the proximity strategy it counts the
    /// points the region won.
    pub accepted: usize,
    /// Number of geometry query failures tolerated in lenient mode:
    /// per point for the proximity strategy, at most one for the layered
    /// strategy (which skips the whole region on the first failure).
    pub query_failures: usize,
    /// Final disposition of the region.
    pub outcome: RegionOutcome,
}

impl RegionReport {
    /// Create a report for a region whose name matched no tag.
    #[must_use]
    pub fn unmatched(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag: None,
            tier: None,
            label: None,
            candidates: 0,
            accepted: 0,
            query_failures: 0,
            outcome: RegionOutcome::UnmatchedTag,
        }
    }

    /// Check whether the region contributed any labels.
    #[must_use]
    pub fn wrote_labels(&self) -> bool {
        self.accepted > 0
    }
}

/// The output of a labeling run: the dense grid plus the processing log.
#[derive(Debug, Clone)]
pub struct Labeling {
    grid: LabelGrid,
    reports: Vec<RegionReport>,
}

impl Labeling {
    /// Assemble a run output.
    #[must_use]
    pub fn new(grid: LabelGrid, reports: Vec<RegionReport>) -> Self {
        Self { grid, reports }
    }

    /// Get the label grid.
    #[must_use]
    pub fn grid(&self) -> &LabelGrid {
        &self.grid
    }

    /// Consume the labeling, returning just the grid.
    #[must_use]
    pub fn into_grid(self) -> LabelGrid {
        self.grid
    }

    /// Get the per-region reports in processing order.
    #[must_use]
    pub fn reports(&self) -> &[RegionReport] {
        &self.reports
    }

    /// Find the report for a region by name.
    #[must_use]
    pub fn report_for(&self, name: &str) -> Option<&RegionReport> {
        self.reports.iter().find(|r| r.name == name)
    }

    /// Count the regions that were applied (not skipped).
    #[must_use]
    pub fn applied_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| r.outcome == RegionOutcome::Applied)
            .count()
    }
}
