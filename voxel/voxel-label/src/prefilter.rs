//! Bounding-box candidate prefiltering.

use voxel_types::{Aabb, SampleLattice};

/// Index-snapping tolerance, in fractions of a spacing step.
///
/// Keeps lattice points that lie exactly on a bounding face in the
/// candidate set despite floating-point rounding. Over-inclusion is
/// harmless; the prefilter only has to be sound.
const SNAP_EPS: f64 = 1e-9;

/// Linear indices of all lattice points inside a bounding box, boundary
/// inclusive.
///
/// The candidate set is computed from per-axis index ranges, so it is
/// exactly the set of lattice points the box contains (up to a
/// conservative half-ulp of slack on the boundary). It is **sound**: no
/// point that a later exact or bulk test would accept is ever excluded.
/// An empty result means the region lies outside the lattice and the
/// caller short-circuits.
///
/// # Example
///
/// ```
/// use voxel_label::candidate_indices;
/// use voxel_types::{Aabb, Point3, SampleLattice, Vector3};
///
/// let lattice = SampleLattice::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Vector3::new(1.0, 1.0, 1.0),
///     (3, 3, 3),
/// )
/// .unwrap();
///
/// let bounds = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
/// assert_eq!(candidate_indices(&lattice, &bounds).len(), 8);
///
/// let far = Aabb::new(Point3::new(10.0, 10.0, 10.0), Point3::new(11.0, 11.0, 11.0));
/// assert!(candidate_indices(&lattice, &far).is_empty());
/// ```
#[must_use]
pub fn candidate_indices(lattice: &SampleLattice, bounds: &Aabb) -> Vec<usize> {
    if bounds.is_empty() || !bounds.intersects(&lattice.bounds()) {
        return Vec::new();
    }

    let origin = lattice.origin();
    let spacing = lattice.spacing();
    let (nx, ny, nz) = lattice.shape();

    let Some((i_lo, i_hi)) = axis_range(bounds.min.x, bounds.max.x, origin.x, spacing.x, nx)
    else {
        return Vec::new();
    };
    let Some((j_lo, j_hi)) = axis_range(bounds.min.y, bounds.max.y, origin.y, spacing.y, ny)
    else {
        return Vec::new();
    };
    let Some((k_lo, k_hi)) = axis_range(bounds.min.z, bounds.max.z, origin.z, spacing.z, nz)
    else {
        return Vec::new();
    };

    let mut indices =
        Vec::with_capacity((i_hi - i_lo + 1) * (j_hi - j_lo + 1) * (k_hi - k_lo + 1));
    for i in i_lo..=i_hi {
        for j in j_lo..=j_hi {
            for k in k_lo..=k_hi {
                indices.push(lattice.linear_index(i, j, k));
            }
        }
    }
    indices
}

/// Inclusive index range of samples with `min <= origin + idx*d <= max`,
/// clamped to `0..n`. `None` if the range is empty.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn axis_range(min: f64, max: f64, origin: f64, d: f64, n: usize) -> Option<(usize, usize)> {
    let lo = ((min - origin) / d - SNAP_EPS).ceil().max(0.0);
    let hi = ((max - origin) / d + SNAP_EPS).floor();
    if hi < lo || hi < 0.0 {
        return None;
    }
    let lo = lo as usize;
    let hi = (hi as usize).min(n - 1);
    (lo < n).then_some((lo, hi))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use voxel_types::{Point3, Vector3};

    fn lattice_3x3x3() -> SampleLattice {
        SampleLattice::new(
            Point3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 1.0),
            (3, 3, 3),
        )
        .unwrap()
    }

    #[test]
    fn full_cover_returns_all_points() {
        let lattice = lattice_3x3x3();
        let bounds = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 2.0, 2.0));
        assert_eq!(candidate_indices(&lattice, &bounds).len(), 27);
    }

    #[test]
    fn boundary_points_are_kept() {
        let lattice = lattice_3x3x3();
        // Box face exactly on the x=1 sample plane.
        let bounds = Aabb::new(Point3::new(1.0, 0.0, 0.0), Point3::new(2.0, 2.0, 2.0));
        let candidates = candidate_indices(&lattice, &bounds);
        assert_eq!(candidates.len(), 18);
        assert!(candidates.contains(&lattice.linear_index(1, 0, 0)));
    }

    #[test]
    fn disjoint_box_is_empty() {
        let lattice = lattice_3x3x3();
        let bounds = Aabb::new(Point3::new(5.0, 5.0, 5.0), Point3::new(6.0, 6.0, 6.0));
        assert!(candidate_indices(&lattice, &bounds).is_empty());
    }

    #[test]
    fn box_between_sample_planes_is_empty() {
        let lattice = lattice_3x3x3();
        // Intersects the lattice bounds but straddles no sample plane on x.
        let bounds = Aabb::new(Point3::new(0.2, 0.0, 0.0), Point3::new(0.8, 2.0, 2.0));
        assert!(candidate_indices(&lattice, &bounds).is_empty());
    }

    #[test]
    fn box_larger_than_lattice_is_clamped() {
        let lattice = lattice_3x3x3();
        let bounds = Aabb::new(Point3::new(-10.0, -10.0, -10.0), Point3::new(10.0, 10.0, 10.0));
        assert_eq!(candidate_indices(&lattice, &bounds).len(), 27);
    }

    #[test]
    fn candidates_superset_of_contained_points() {
        // Prefilter soundness: every lattice point inside the box appears.
        let lattice = lattice_3x3x3();
        let bounds = Aabb::new(Point3::new(0.5, 0.5, 0.5), Point3::new(2.0, 1.5, 2.0));
        let candidates = candidate_indices(&lattice, &bounds);
        for (idx, point) in lattice.iter_points() {
            if bounds.contains(&point) {
                assert!(candidates.contains(&idx), "missing point {point:?}");
            }
        }
    }

    #[test]
    fn fractional_spacing_boundary() {
        let lattice = SampleLattice::new(
            Point3::new(0.0, 0.0, 0.0),
            Vector3::new(0.1, 0.1, 0.1),
            (11, 1, 1),
        )
        .unwrap();
        // 0.3 is not exactly representable; the snap tolerance must keep
        // the sample at index 3.
        let bounds = Aabb::new(Point3::new(0.3, 0.0, 0.0), Point3::new(0.7, 0.0, 0.0));
        let candidates = candidate_indices(&lattice, &bounds);
        assert_eq!(candidates, vec![3, 4, 5, 6, 7]);
    }
}
