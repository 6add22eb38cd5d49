//! Nearest-surface composition.
//!
//! Every lattice point is labeled by the region whose surface is nearest,
//! with priority tier as the dominant key: a higher-tier region wins at a
//! point no matter how much closer a lower-tier surface is, and within a
//! tier the strictly smaller distance wins. The per-point winner is a
//! lexicographic maximum over `(tier, -distance)`, so the reduction is
//! commutative and associative and the result does not depend on region
//! order or parallel chunking.

use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use tracing::{info, warn};
use voxel_types::{LabelGrid, Region, SampleLattice};

use crate::config::{PriorityConfig, TagRule};
use crate::error::{LabelError, LabelResult};
use crate::report::{Labeling, RegionOutcome, RegionReport};
use crate::FailurePolicy;

/// Per-point winner candidate. Ties on tier are broken by strictly
/// smaller distance; an exact distance tie keeps the earlier region.
#[derive(Clone, Copy)]
struct Winner {
    tier: i32,
    distance: f64,
    label: i32,
    slot: usize,
}

impl Winner {
    fn beats(&self, other: &Self) -> bool {
        self.tier > other.tier || (self.tier == other.tier && self.distance < other.distance)
    }
}

pub(crate) fn compose(
    regions: &[Region],
    lattice: &SampleLattice,
    config: &PriorityConfig,
    failure: FailurePolicy,
) -> LabelResult<Labeling> {
    let mut reports = Vec::with_capacity(regions.len());
    let mut resolved: Vec<(&Region, &TagRule)> = Vec::with_capacity(regions.len());

    for region in regions {
        match config.match_rule(region.name()) {
            Some(rule) => resolved.push((region, rule)),
            None => {
                warn!(region = region.name(), "no priority tag match, skipping");
                reports.push(RegionReport::unmatched(region.name()));
            }
        }
    }

    if resolved.is_empty() {
        warn!("no region matched any tag, grid is all background");
        let grid = LabelGrid::new(lattice.shape(), config.background_label());
        return Ok(Labeling::new(grid, reports));
    }

    let failures: Vec<AtomicUsize> =
        (0..resolved.len()).map(|_| AtomicUsize::new(0)).collect();

    // One distance query per (point, region) pair; no prefilter, since a
    // far-away surface can still be the nearest one.
    let outcome: LabelResult<Vec<(i32, Option<usize>)>> = (0..lattice.len())
        .into_par_iter()
        .map(|index| {
            let point = lattice.point_at(index);
            let mut best: Option<Winner> = None;
            for (slot, &(region, rule)) in resolved.iter().enumerate() {
                // Non-finite distances cannot be ordered against real
                // surfaces; treat them as no answer at this point.
                let distance = match region.distance_to(&point) {
                    Ok(Some(d)) if d.is_finite() => d,
                    Ok(_) => continue,
                    Err(source) => {
                        if failure == FailurePolicy::Strict {
                            return Err(LabelError::Geometry {
                                region: region.name().to_string(),
                                source,
                            });
                        }
                        failures[slot].fetch_add(1, Ordering::Relaxed);
                        continue;
                    }
                };
                let candidate = Winner {
                    tier: rule.tier,
                    distance,
                    label: rule.label,
                    slot,
                };
                if best.as_ref().map_or(true, |b| candidate.beats(b)) {
                    best = Some(candidate);
                }
            }
            Ok(best.map_or((config.background_label(), None), |w| {
                (w.label, Some(w.slot))
            }))
        })
        .collect();
    let points = outcome?;

    let mut wins = vec![0_usize; resolved.len()];
    let mut labels = Vec::with_capacity(points.len());
    for (label, slot) in points {
        labels.push(label);
        if let Some(slot) = slot {
            wins[slot] += 1;
        }
    }
    let grid = LabelGrid::from_flat(labels, lattice.shape(), config.background_label())?;

    for (slot, (region, rule)) in resolved.iter().enumerate() {
        let query_failures = failures[slot].load(Ordering::Relaxed);
        if query_failures > 0 {
            warn!(
                region = region.name(),
                failures = query_failures,
                "distance queries failed at some points"
            );
        }
        info!(
            region = region.name(),
            tag = %rule.tag,
            tier = rule.tier,
            label = rule.label,
            won = wins[slot],
            "region composited"
        );
        reports.push(RegionReport {
            name: region.name().to_string(),
            tag: Some(rule.tag.clone()),
            tier: Some(rule.tier),
            label: Some(rule.label),
            candidates: lattice.len(),
            accepted: wins[slot],
            query_failures,
            outcome: RegionOutcome::Applied,
        });
    }

    Ok(Labeling::new(grid, reports))
}
