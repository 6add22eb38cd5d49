//! End-to-end labeling runs through the public API.

#![allow(clippy::unwrap_used)]

use voxel_label::{
    candidate_indices, label_domain, ConfigError, ContainmentPolicy, LabelError,
    LabelParams, PriorityConfig, RegionOutcome,
};
use voxel_mesh::{axis_aligned_box, MeshSolid};
use voxel_types::{
    Aabb, BoxSolid, GeometryError, GeometryResult, Point3, Region, RegionGeometry, SampleLattice,
    SphereSolid, Vector3,
};

fn unit_lattice(shape: (usize, usize, usize)) -> SampleLattice {
    SampleLattice::new(Point3::origin(), Vector3::new(1.0, 1.0, 1.0), shape).unwrap()
}

fn box_region(name: &str, min: [f64; 3], max: [f64; 3]) -> Region {
    Region::new(
        name,
        BoxSolid::from_corners(
            Point3::new(min[0], min[1], min[2]),
            Point3::new(max[0], max[1], max[2]),
        ),
    )
}

/// Geometry whose queries fail on one side of the plane `x = cutoff`.
/// `cutoff = f64::NEG_INFINITY` fails everywhere.
struct FlakyGeometry {
    bounds: Aabb,
    cutoff: f64,
}

impl RegionGeometry for FlakyGeometry {
    fn bounds(&self) -> Aabb {
        self.bounds
    }

    fn contains(&self, point: &Point3<f64>) -> GeometryResult<bool> {
        if point.x > self.cutoff {
            Err(GeometryError::QueryFailed(
                "containment query unavailable".to_string(),
            ))
        } else {
            Ok(true)
        }
    }

    fn distance_to(&self, point: &Point3<f64>) -> GeometryResult<Option<f64>> {
        if point.x > self.cutoff {
            Err(GeometryError::QueryFailed(
                "distance query unavailable".to_string(),
            ))
        } else {
            Ok(Some(0.0))
        }
    }
}

#[test]
fn bulk_air_with_exact_ice_sub_cube() {
    let lattice = unit_lattice((3, 3, 3));
    let config = PriorityConfig::new(0, 99)
        .with_rule("air", 0, 4, ContainmentPolicy::Bulk)
        .with_rule("ice", 1, 2, ContainmentPolicy::Exact);
    let regions = vec![
        box_region("air", [0.0; 3], [2.0; 3]),
        box_region("ice_block", [0.0; 3], [1.0; 3]),
    ];

    let labeling = label_domain(&regions, &lattice, &config, &LabelParams::layered()).unwrap();
    let grid = labeling.grid();

    assert_eq!(grid.count_of(2), 8);
    assert_eq!(grid.count_of(4), 19);
    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                let expected = if i <= 1 && j <= 1 && k <= 1 { 2 } else { 4 };
                assert_eq!(grid.get(i, j, k), Some(expected), "at ({i}, {j}, {k})");
            }
        }
    }
}

#[test]
fn unmatched_region_is_skipped_entirely() {
    let lattice = unit_lattice((3, 3, 3));
    let config = PriorityConfig::new(0, 99)
        .with_rule("air", 0, 4, ContainmentPolicy::Bulk)
        .with_rule("ice", 1, 2, ContainmentPolicy::Exact);
    let regions = vec![
        box_region("air", [0.0; 3], [2.0; 3]),
        box_region("debris", [0.0; 3], [2.0; 3]),
    ];

    let labeling = label_domain(&regions, &lattice, &config, &LabelParams::layered()).unwrap();

    assert_eq!(labeling.grid().count_of(4), 27);
    let report = labeling.report_for("debris").unwrap();
    assert_eq!(report.outcome, RegionOutcome::UnmatchedTag);
    assert!(!report.wrote_labels());
}

#[test]
fn proximity_prefers_the_nearer_surface_at_equal_tier() {
    let lattice = unit_lattice((1, 1, 1));
    let config = PriorityConfig::new(0, 99)
        .with_rule("a", 1, 10, ContainmentPolicy::Exact)
        .with_rule("b", 1, 20, ContainmentPolicy::Exact);
    // Surface distances from the single point (0,0,0): A 0.3, B 0.1.
    let regions = vec![
        Region::new("a_shell", SphereSolid::new(Point3::new(1.0, 0.0, 0.0), 0.7)),
        Region::new("b_shell", SphereSolid::new(Point3::new(-1.0, 0.0, 0.0), 0.9)),
    ];

    let labeling = label_domain(&regions, &lattice, &config, &LabelParams::proximity()).unwrap();
    assert_eq!(labeling.grid().get_linear(0), Some(20));
}

#[test]
fn empty_configuration_is_rejected_up_front() {
    let lattice = unit_lattice((3, 3, 3));
    let config = PriorityConfig::new(0, 99);
    let regions = vec![box_region("air", [0.0; 3], [2.0; 3])];

    let err = label_domain(&regions, &lattice, &config, &LabelParams::layered()).unwrap_err();
    assert!(matches!(err, LabelError::Config(ConfigError::Empty)));
}

#[test]
fn every_cell_gets_a_configured_or_background_label() {
    let lattice = unit_lattice((4, 4, 4));
    let config = PriorityConfig::new(0, 99)
        .with_rule("air", 0, 4, ContainmentPolicy::Bulk)
        .with_rule("ice", 1, 2, ContainmentPolicy::Exact)
        .with_rule("rock", 2, 3, ContainmentPolicy::Exact);
    let regions = vec![
        box_region("air", [0.0; 3], [2.0; 3]),
        box_region("ice_block", [1.0; 3], [3.0; 3]),
        Region::new("rock_core", SphereSolid::new(Point3::new(2.0, 2.0, 2.0), 1.1)),
    ];

    for params in [LabelParams::layered(), LabelParams::proximity()] {
        let labeling = label_domain(&regions, &lattice, &config, &params).unwrap();
        for &label in labeling.grid().as_slice() {
            assert!(matches!(label, 0 | 2 | 3 | 4), "unexpected label {label}");
        }
    }
}

#[test]
fn labeling_is_idempotent() {
    let lattice = unit_lattice((4, 4, 4));
    let config = PriorityConfig::new(0, 99)
        .with_rule("air", 0, 4, ContainmentPolicy::Bulk)
        .with_rule("ice", 1, 2, ContainmentPolicy::Exact);
    let regions = vec![
        box_region("air", [0.0; 3], [3.0; 3]),
        box_region("ice_block", [0.5; 3], [2.5; 3]),
    ];

    for params in [LabelParams::layered(), LabelParams::proximity()] {
        let first = label_domain(&regions, &lattice, &config, &params).unwrap();
        let second = label_domain(&regions, &lattice, &config, &params).unwrap();
        assert_eq!(first.grid().as_slice(), second.grid().as_slice());
    }
}

#[test]
fn raising_a_tier_only_grows_that_region() {
    let lattice = unit_lattice((3, 3, 3));
    let regions = vec![
        box_region("air", [0.0; 3], [2.0; 3]),
        box_region("ice_block", [0.0; 3], [1.0; 3]),
    ];

    let low = PriorityConfig::new(0, 99)
        .with_rule("air", 5, 4, ContainmentPolicy::Bulk)
        .with_rule("ice", 1, 2, ContainmentPolicy::Exact);
    let high = PriorityConfig::new(0, 99)
        .with_rule("air", 5, 4, ContainmentPolicy::Bulk)
        .with_rule("ice", 9, 2, ContainmentPolicy::Exact);

    let below = label_domain(&regions, &lattice, &low, &LabelParams::layered()).unwrap();
    let above = label_domain(&regions, &lattice, &high, &LabelParams::layered()).unwrap();

    // With the lower tier, air overwrites ice everywhere they overlap.
    assert_eq!(below.grid().count_of(2), 0);
    assert_eq!(above.grid().count_of(2), 8);
    // Cells that changed all changed to ice's label.
    for (b, a) in below
        .grid()
        .as_slice()
        .iter()
        .zip(above.grid().as_slice())
    {
        if b != a {
            assert_eq!(*a, 2);
        }
    }
}

#[test]
fn prefilter_never_drops_a_contained_point() {
    let lattice = SampleLattice::new(
        Point3::new(-1.0, -1.0, -1.0),
        Vector3::new(0.5, 0.5, 0.5),
        (9, 9, 9),
    )
    .unwrap();
    let solids: Vec<Box<dyn RegionGeometry>> = vec![
        Box::new(SphereSolid::new(Point3::new(0.3, -0.2, 0.7), 1.1)),
        Box::new(BoxSolid::from_corners(
            Point3::new(-0.75, -0.75, -0.75),
            Point3::new(1.25, 0.25, 3.0),
        )),
    ];

    for solid in solids {
        let candidates = candidate_indices(&lattice, &solid.bounds());
        for (index, point) in lattice.iter_points() {
            if solid.contains(&point).unwrap() {
                assert!(
                    candidates.contains(&index),
                    "prefilter dropped contained point {point:?}"
                );
            }
        }
    }
}

#[test]
fn strict_mode_aborts_on_query_failure() {
    let lattice = unit_lattice((3, 3, 3));
    let config = PriorityConfig::new(0, 99).with_rule("flaky", 1, 2, ContainmentPolicy::Exact);
    let regions = vec![Region::new(
        "flaky_zone",
        FlakyGeometry {
            bounds: Aabb::new(Point3::origin(), Point3::new(2.0, 2.0, 2.0)),
            cutoff: f64::NEG_INFINITY,
        },
    )];

    for params in [LabelParams::layered(), LabelParams::proximity()] {
        let err = label_domain(&regions, &lattice, &config, &params).unwrap_err();
        match err {
            LabelError::Geometry { region, .. } => assert_eq!(region, "flaky_zone"),
            other => panic!("expected geometry error, got {other}"),
        }
    }
}

#[test]
fn lenient_layered_skips_the_failing_region_without_partial_writes() {
    let lattice = unit_lattice((3, 3, 3));
    let config = PriorityConfig::new(0, 99)
        .with_rule("air", 0, 4, ContainmentPolicy::Bulk)
        .with_rule("flaky", 1, 2, ContainmentPolicy::Exact);
    let regions = vec![
        box_region("air", [0.0; 3], [2.0; 3]),
        Region::new(
            "flaky_zone",
            FlakyGeometry {
                bounds: Aabb::new(Point3::origin(), Point3::new(2.0, 2.0, 2.0)),
                // Succeeds for x <= 1, fails beyond: a partial write would
                // leave label 2 in the low-x half.
                cutoff: 1.5,
            },
        ),
    ];

    let params = LabelParams::layered().lenient();
    let labeling = label_domain(&regions, &lattice, &config, &params).unwrap();

    assert_eq!(labeling.grid().count_of(2), 0);
    assert_eq!(labeling.grid().count_of(4), 27);
    let report = labeling.report_for("flaky_zone").unwrap();
    assert!(matches!(report.outcome, RegionOutcome::QueryFailed { .. }));
}

#[test]
fn lenient_proximity_skips_failing_points_only() {
    let lattice = unit_lattice((3, 1, 1));
    let config = PriorityConfig::new(0, 99)
        .with_rule("flaky", 2, 2, ContainmentPolicy::Exact)
        .with_rule("base", 1, 4, ContainmentPolicy::Exact);
    let regions = vec![
        Region::new(
            "flaky_zone",
            FlakyGeometry {
                bounds: Aabb::new(Point3::origin(), Point3::new(2.0, 0.0, 0.0)),
                cutoff: 0.5,
            },
        ),
        Region::new("base_fill", SphereSolid::new(Point3::origin(), 5.0)),
    ];

    let params = LabelParams::proximity().lenient();
    let labeling = label_domain(&regions, &lattice, &config, &params).unwrap();

    // The flaky region answers only at x = 0; the base region covers the
    // points where it fails.
    assert_eq!(labeling.grid().as_slice(), &[2, 4, 4]);
    let report = labeling.report_for("flaky_zone").unwrap();
    assert_eq!(report.query_failures, 2);
    assert_eq!(report.accepted, 1);
}

#[test]
fn mesh_solid_labels_its_interior_exactly() {
    let lattice = unit_lattice((4, 4, 4));
    let config = PriorityConfig::new(0, 99)
        .with_rule("air", 0, 4, ContainmentPolicy::Bulk)
        .with_rule("hull", 1, 7, ContainmentPolicy::Exact);
    let mesh = axis_aligned_box(Point3::new(0.5, 0.5, 0.5), Point3::new(2.5, 2.5, 2.5));
    let regions = vec![
        box_region("air", [0.0; 3], [3.0; 3]),
        Region::new("hull_shell", MeshSolid::new(mesh).unwrap()),
    ];

    let labeling = label_domain(&regions, &lattice, &config, &LabelParams::layered()).unwrap();
    let grid = labeling.grid();

    // Interior lattice points are those with every coordinate in {1, 2}.
    assert_eq!(grid.count_of(7), 8);
    assert_eq!(grid.get(1, 1, 1), Some(7));
    assert_eq!(grid.get(2, 2, 2), Some(7));
    assert_eq!(grid.get(0, 1, 1), Some(4));
    assert_eq!(grid.get(3, 3, 3), Some(4));
}
