//! Mesh-backed region geometry.

use nalgebra::{Point3, Vector3};
use voxel_types::{Aabb, GeometryResult, RegionGeometry};

use crate::error::{MeshError, MeshResult};
use crate::mesh::TriMesh;
use crate::query::{closest_point_on_triangle, ray_triangle_intersect};

/// Squared-area threshold below which a face is treated as degenerate.
const DEGENERATE_AREA_SQ: f64 = 1e-24;

/// A triangle mesh exposed as a [`RegionGeometry`].
///
/// Containment uses ray-parity testing (a fixed ray, counting crossings),
/// which is only meaningful for closed meshes; the proximity strategy
/// ignores containment and uses nearest-surface distance, which is valid
/// for open shells too. Degenerate faces are excluded from distance
/// queries; a mesh with only degenerate faces reports no valid distance.
///
/// # Example
///
/// ```
/// use voxel_mesh::{axis_aligned_box, MeshSolid};
/// use voxel_types::{Point3, RegionGeometry};
///
/// let solid = MeshSolid::new(axis_aligned_box(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(2.0, 2.0, 2.0),
/// ))
/// .unwrap();
///
/// let d = solid.distance_to(&Point3::new(1.0, 1.0, 3.0)).unwrap();
/// assert!((d.unwrap() - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct MeshSolid {
    mesh: TriMesh,
    bounds: Aabb,
}

impl MeshSolid {
    /// Wrap a mesh, precomputing its bounds.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::EmptyMesh`] if the mesh has no faces.
    pub fn new(mesh: TriMesh) -> MeshResult<Self> {
        if mesh.is_empty() {
            return Err(MeshError::EmptyMesh);
        }
        let bounds = mesh.bounds();
        Ok(Self { mesh, bounds })
    }

    /// Get the underlying mesh.
    #[must_use]
    pub fn mesh(&self) -> &TriMesh {
        &self.mesh
    }
}

impl RegionGeometry for MeshSolid {
    fn bounds(&self) -> Aabb {
        self.bounds
    }

    fn contains(&self, point: &Point3<f64>) -> GeometryResult<bool> {
        // Outside the bounds is outside the mesh; also keeps the parity
        // ray short for far-away queries.
        if !self.bounds.contains(point) {
            return Ok(false);
        }

        // Tilted off the axes so rays cast from grid-aligned points do
        // not graze face diagonals or edges of axis-aligned meshes.
        let ray_dir = Vector3::new(1.0, 0.1, 0.07);
        let mut crossings = 0usize;
        for tri in self.mesh.triangles() {
            if ray_triangle_intersect(*point, ray_dir, &tri).is_some() {
                crossings += 1;
            }
        }
        Ok(crossings % 2 == 1)
    }

    fn distance_to(&self, point: &Point3<f64>) -> GeometryResult<Option<f64>> {
        let mut best_sq = f64::INFINITY;
        for tri in self.mesh.triangles() {
            if triangle_area_sq(&tri) < DEGENERATE_AREA_SQ {
                continue;
            }
            let closest = closest_point_on_triangle(*point, &tri);
            let dist_sq = (closest - point).norm_squared();
            if dist_sq < best_sq {
                best_sq = dist_sq;
            }
        }

        if best_sq.is_finite() {
            Ok(Some(best_sq.sqrt()))
        } else {
            Ok(None)
        }
    }
}

/// Squared area of a triangle, times four (|e1 x e2|^2).
fn triangle_area_sq(tri: &[Point3<f64>; 3]) -> f64 {
    let e1 = tri[1] - tri[0];
    let e2 = tri[2] - tri[0];
    e1.cross(&e2).norm_squared()
}
