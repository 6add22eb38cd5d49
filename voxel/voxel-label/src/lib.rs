//! Priority-based region labeling of regular 3D sample lattices.
//!
//! This crate is the discretization core that turns a set of named,
//! possibly-overlapping 3D regions into a dense
//! [`LabelGrid`](voxel_types::LabelGrid): one material label per lattice
//! point, reconciled by a priority ranking of region types.
//!
//! # Strategies
//!
//! Two composition strategies share the same region/lattice data model and
//! are chosen per run with [`CompositeMode`]:
//!
//! - **Layered** ([`CompositeMode::Layered`]): regions are processed from
//!   lowest to highest priority tier and written over each other, so the
//!   highest-priority region accepting a point owns its label. Suited to
//!   closed solids with a well-defined inside.
//! - **Proximity** ([`CompositeMode::Proximity`]): every region is judged
//!   at every point by nearest-surface distance; the highest tier wins and
//!   equal tiers go to the smaller distance. Suited to open surfaces where
//!   "inside" is undefined.
//!
//! # Example
//!
//! ```
//! use voxel_label::{label_domain, ContainmentPolicy, LabelParams, PriorityConfig};
//! use voxel_types::{BoxSolid, Point3, Region, SampleLattice, Vector3};
//!
//! let config = PriorityConfig::new(0, 99)
//!     .with_rule("air", 0, 4, ContainmentPolicy::Bulk)
//!     .with_rule("ice", 1, 2, ContainmentPolicy::Exact);
//!
//! let lattice = SampleLattice::new(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Vector3::new(1.0, 1.0, 1.0),
//!     (3, 3, 3),
//! )
//! .unwrap();
//!
//! let regions = vec![
//!     Region::new(
//!         "air",
//!         BoxSolid::from_corners(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 2.0, 2.0)),
//!     ),
//!     Region::new(
//!         "ice_block",
//!         BoxSolid::from_corners(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0)),
//!     ),
//! ];
//!
//! let labeling = label_domain(&regions, &lattice, &config, &LabelParams::default()).unwrap();
//! assert_eq!(labeling.grid().count_of(2), 8);
//! assert_eq!(labeling.grid().count_of(4), 19);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod compose;
mod config;
mod error;
mod layered;
mod prefilter;
mod proximity;
mod report;

pub use compose::{label_domain, CompositeMode, FailurePolicy, LabelParams};
pub use config::{ContainmentPolicy, PriorityConfig, TagRule};
pub use error::{ConfigError, LabelError, LabelResult};
pub use prefilter::candidate_indices;
pub use report::{Labeling, RegionOutcome, RegionReport};
