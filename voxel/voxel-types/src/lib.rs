//! Core types for voxel domain labeling.
//!
//! This crate provides the foundational data model for discretizing a
//! geometric scene onto a regular sample lattice:
//!
//! - [`SampleLattice`] - A regular 3D grid of sample coordinates
//! - [`LabelGrid`] - The dense array of material labels produced by labeling
//! - [`Region`] - A named 3D solid or surface with a geometry handle
//! - [`RegionGeometry`] - The capability set every geometry backend exposes
//! - [`Aabb`] - Axis-aligned bounding box
//! - [`BoxSolid`], [`SphereSolid`] - Analytic solids
//!
//! # Layer 0 Crate
//!
//! This crate depends only on math, collection, and error-handling
//! libraries. Mesh backends and the labeling engine build on top of it.
//!
//! # Units & Coordinates
//!
//! The library is unit-agnostic; all coordinates are `f64` in a
//! right-handed coordinate system. Lattice indices `(i, j, k)` map to the
//! x, y, and z axes respectively.
//!
//! # Example
//!
//! ```
//! use voxel_types::{Point3, SampleLattice, Vector3};
//!
//! let lattice = SampleLattice::new(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Vector3::new(1.0, 1.0, 1.0),
//!     (3, 3, 3),
//! )
//! .unwrap();
//!
//! assert_eq!(lattice.len(), 27);
//! assert_eq!(lattice.point(2, 0, 1), Point3::new(2.0, 0.0, 1.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod error;
mod grid;
mod lattice;
mod region;
mod solid;

pub use bounds::Aabb;
pub use error::{
    GeometryError, GeometryResult, GridError, GridResult, LatticeError, LatticeResult,
};
pub use grid::{LabelGrid, PlaneSlice, SlicePlane};
pub use lattice::SampleLattice;
pub use region::{Region, RegionGeometry};
pub use solid::{BoxSolid, SphereSolid};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
