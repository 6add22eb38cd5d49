//! Priority-ordered overwrite composition.
//!
//! Regions are processed from lowest to highest priority tier and write
//! their labels over whatever earlier regions left behind, so the final
//! value at any point belongs to the highest-priority region that accepts
//! it. The ordering is part of correctness and must not be reordered.

use rayon::prelude::*;
use tracing::{debug, info, warn};
use voxel_types::{GeometryError, LabelGrid, Region, SampleLattice};

use crate::config::{ContainmentPolicy, PriorityConfig};
use crate::error::{LabelError, LabelResult};
use crate::prefilter::candidate_indices;
use crate::report::{Labeling, RegionOutcome, RegionReport};
use crate::FailurePolicy;

pub(crate) fn compose(
    regions: &[Region],
    lattice: &SampleLattice,
    config: &PriorityConfig,
    failure: FailurePolicy,
) -> LabelResult<Labeling> {
    let mut grid = LabelGrid::new(lattice.shape(), config.background_label());
    let mut reports = Vec::with_capacity(regions.len());

    // Ascending tier; stable, so ties keep input order. Unmatched regions
    // sort first but are skipped before touching the grid.
    let mut order: Vec<usize> = (0..regions.len()).collect();
    order.sort_by_key(|&idx| {
        config
            .tier_of(regions[idx].name())
            .map_or(i64::MIN, i64::from)
    });

    for idx in order {
        let region = &regions[idx];

        let Some(rule) = config.match_rule(region.name()) else {
            warn!(region = region.name(), "no priority tag match, skipping");
            reports.push(RegionReport::unmatched(region.name()));
            continue;
        };

        let candidates = candidate_indices(lattice, &region.bounds());
        if candidates.is_empty() {
            debug!(
                region = region.name(),
                tag = %rule.tag,
                "bounding box contains no lattice points, skipping"
            );
            reports.push(RegionReport {
                name: region.name().to_string(),
                tag: Some(rule.tag.clone()),
                tier: Some(rule.tier),
                label: Some(rule.label),
                candidates: 0,
                accepted: 0,
                query_failures: 0,
                outcome: RegionOutcome::OutsideLattice,
            });
            continue;
        }

        let accepted = match rule.policy {
            ContainmentPolicy::Bulk => {
                for &cell in &candidates {
                    grid.set_linear(cell, rule.label);
                }
                candidates.len()
            }
            ContainmentPolicy::Exact => {
                // Candidate evaluations are independent; writes happen
                // after the whole region either succeeds or fails, so a
                // lenient skip leaves no partial writes behind.
                let inside: Result<Vec<usize>, GeometryError> = candidates
                    .par_iter()
                    .filter_map(|&cell| {
                        let point = lattice.point_at(cell);
                        match region.contains(&point) {
                            Ok(true) => Some(Ok(cell)),
                            Ok(false) => None,
                            Err(e) => Some(Err(e)),
                        }
                    })
                    .collect();

                match inside {
                    Ok(cells) => {
                        for &cell in &cells {
                            grid.set_linear(cell, rule.label);
                        }
                        cells.len()
                    }
                    Err(source) => {
                        if failure == FailurePolicy::Strict {
                            return Err(LabelError::Geometry {
                                region: region.name().to_string(),
                                source,
                            });
                        }
                        warn!(
                            region = region.name(),
                            error = %source,
                            "inside test failed, skipping region"
                        );
                        reports.push(RegionReport {
                            name: region.name().to_string(),
                            tag: Some(rule.tag.clone()),
                            tier: Some(rule.tier),
                            label: Some(rule.label),
                            candidates: candidates.len(),
                            accepted: 0,
                            query_failures: 1,
                            outcome: RegionOutcome::QueryFailed {
                                reason: source.to_string(),
                            },
                        });
                        continue;
                    }
                }
            }
        };

        info!(
            region = region.name(),
            tag = %rule.tag,
            tier = rule.tier,
            label = rule.label,
            candidates = candidates.len(),
            accepted,
            "region composited"
        );
        reports.push(RegionReport {
            name: region.name().to_string(),
            tag: Some(rule.tag.clone()),
            tier: Some(rule.tier),
            label: Some(rule.label),
            candidates: candidates.len(),
            accepted,
            query_failures: 0,
            outcome: RegionOutcome::Applied,
        });
    }

    Ok(Labeling::new(grid, reports))
}
