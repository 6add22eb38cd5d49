//! Triangle-mesh geometry backend for voxel domain labeling.
//!
//! This crate turns an indexed triangle mesh into a
//! [`RegionGeometry`](voxel_types::RegionGeometry) the labeling engine can
//! query: ray-parity inside/outside testing for closed solids and
//! nearest-surface distance for solids and open shells alike.
//!
//! # Example
//!
//! ```
//! use voxel_mesh::{axis_aligned_box, MeshSolid};
//! use voxel_types::{Point3, RegionGeometry};
//!
//! let mesh = axis_aligned_box(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 1.0, 1.0),
//! );
//! let solid = MeshSolid::new(mesh).unwrap();
//!
//! assert!(solid.contains(&Point3::new(0.5, 0.5, 0.5)).unwrap());
//! assert!(!solid.contains(&Point3::new(2.0, 0.5, 0.5)).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod mesh;
mod query;
mod solid;

pub use error::{MeshError, MeshResult};
pub use mesh::{axis_aligned_box, TriMesh};
pub use query::{closest_point_on_triangle, ray_triangle_intersect};
pub use solid::MeshSolid;
