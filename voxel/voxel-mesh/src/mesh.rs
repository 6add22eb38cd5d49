//! Indexed triangle mesh.

use nalgebra::Point3;
use voxel_types::Aabb;

use crate::error::{MeshError, MeshResult};

/// An indexed triangle mesh: vertex positions plus index triples.
///
/// This is deliberately minimal: the labeling queries only need positions
/// and connectivity. Normals, colors, and other attributes stay with the
/// scene loader.
///
/// # Example
///
/// ```
/// use nalgebra::Point3;
/// use voxel_mesh::TriMesh;
///
/// let mesh = TriMesh::from_parts(
///     vec![
///         Point3::new(0.0, 0.0, 0.0),
///         Point3::new(1.0, 0.0, 0.0),
///         Point3::new(0.0, 1.0, 0.0),
///     ],
///     vec![[0, 1, 2]],
/// )
/// .unwrap();
///
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TriMesh {
    vertices: Vec<Point3<f64>>,
    faces: Vec<[u32; 3]>,
}

impl TriMesh {
    /// Build a mesh from vertex positions and face index triples.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::FaceIndexOutOfRange`] if a face references a
    /// missing vertex.
    pub fn from_parts(vertices: Vec<Point3<f64>>, faces: Vec<[u32; 3]>) -> MeshResult<Self> {
        let vertex_count = vertices.len();
        for (face_idx, face) in faces.iter().enumerate() {
            for &v in face {
                if v as usize >= vertex_count {
                    return Err(MeshError::FaceIndexOutOfRange {
                        face: face_idx,
                        vertex: v,
                        vertex_count,
                    });
                }
            }
        }
        Ok(Self { vertices, faces })
    }

    /// Get the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check whether the mesh has no faces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Get the vertex positions.
    #[must_use]
    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    /// Get the face index triples.
    #[must_use]
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    /// Resolve a face into its three vertex positions.
    ///
    /// Returns `None` if the face index is out of bounds.
    #[must_use]
    pub fn triangle(&self, face_index: usize) -> Option<[Point3<f64>; 3]> {
        let face = self.faces.get(face_index)?;
        Some([
            self.vertices[face[0] as usize],
            self.vertices[face[1] as usize],
            self.vertices[face[2] as usize],
        ])
    }

    /// Iterate over all faces as resolved vertex-position triples.
    pub fn triangles(&self) -> impl Iterator<Item = [Point3<f64>; 3]> + '_ {
        self.faces.iter().map(|face| {
            [
                self.vertices[face[0] as usize],
                self.vertices[face[1] as usize],
                self.vertices[face[2] as usize],
            ]
        })
    }

    /// Compute the bounding box over all vertices.
    ///
    /// Returns an empty AABB for a vertexless mesh.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter())
    }
}

/// Build a closed axis-aligned box mesh (12 triangles, CCW outward).
///
/// # Example
///
/// ```
/// use nalgebra::Point3;
/// use voxel_mesh::axis_aligned_box;
///
/// let mesh = axis_aligned_box(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 1.0),
/// );
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.face_count(), 12);
/// ```
#[must_use]
pub fn axis_aligned_box(min: Point3<f64>, max: Point3<f64>) -> TriMesh {
    let vertices = vec![
        Point3::new(min.x, min.y, min.z), // 0
        Point3::new(max.x, min.y, min.z), // 1
        Point3::new(max.x, max.y, min.z), // 2
        Point3::new(min.x, max.y, min.z), // 3
        Point3::new(min.x, min.y, max.z), // 4
        Point3::new(max.x, min.y, max.z), // 5
        Point3::new(max.x, max.y, max.z), // 6
        Point3::new(min.x, max.y, max.z), // 7
    ];
    let faces = vec![
        [0, 2, 1],
        [0, 3, 2], // bottom (-z)
        [4, 5, 6],
        [4, 6, 7], // top (+z)
        [0, 1, 5],
        [0, 5, 4], // front (-y)
        [2, 3, 7],
        [2, 7, 6], // back (+y)
        [0, 4, 7],
        [0, 7, 3], // left (-x)
        [1, 2, 6],
        [1, 6, 5], // right (+x)
    ];
    // Indices are constructed in range; from_parts cannot fail here.
    TriMesh { vertices, faces }
}
