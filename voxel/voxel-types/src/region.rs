//! Named regions and the geometry capability set.

use std::fmt;

use nalgebra::Point3;

use crate::bounds::Aabb;
use crate::error::GeometryResult;

/// The capability set every region geometry backend exposes.
///
/// A single abstraction covers both closed solids and open surfaces: the
/// labeling strategies decide which capabilities they use. Closed solids
/// answer [`contains`](Self::contains); open shells only need
/// [`distance_to`](Self::distance_to). Implementations must be cheap to
/// query repeatedly and side-effect free; callers may issue queries from
/// multiple threads.
pub trait RegionGeometry: Send + Sync {
    /// The axis-aligned bounding box of the geometry.
    fn bounds(&self) -> Aabb;

    /// Test whether a point is inside the geometry.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`](crate::GeometryError) if the backend
    /// cannot evaluate the test.
    fn contains(&self, point: &Point3<f64>) -> GeometryResult<bool>;

    /// Distance from a point to the nearest surface of the geometry.
    ///
    /// Returns `Ok(None)` when the geometry has no valid answer at this
    /// point (for example, every face is degenerate); callers skip the
    /// region for that point only.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`](crate::GeometryError) if the query
    /// itself fails.
    fn distance_to(&self, point: &Point3<f64>) -> GeometryResult<Option<f64>>;
}

/// A named 3D solid or surface to be composited onto the lattice.
///
/// Regions are constructed once per run from external scene input and are
/// read-only to the labeling core. The region name is what the priority
/// configuration matches its tag rules against.
///
/// # Example
///
/// ```
/// use voxel_types::{Aabb, BoxSolid, Point3, Region};
///
/// let solid = BoxSolid::new(Aabb::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 1.0),
/// ));
/// let region = Region::new("ice_block", solid);
///
/// assert_eq!(region.name(), "ice_block");
/// assert!(region.contains(&Point3::new(0.5, 0.5, 0.5)).unwrap());
/// ```
pub struct Region {
    name: String,
    geometry: Box<dyn RegionGeometry>,
}

impl Region {
    /// Create a region from a name and a geometry backend.
    #[must_use]
    pub fn new(name: impl Into<String>, geometry: impl RegionGeometry + 'static) -> Self {
        Self {
            name: name.into(),
            geometry: Box::new(geometry),
        }
    }

    /// Create a region from an already-boxed geometry.
    #[must_use]
    pub fn from_boxed(name: impl Into<String>, geometry: Box<dyn RegionGeometry>) -> Self {
        Self {
            name: name.into(),
            geometry,
        }
    }

    /// Get the region name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the geometry's bounding box.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        self.geometry.bounds()
    }

    /// Test whether a point is inside the region geometry.
    ///
    /// # Errors
    ///
    /// Propagates the backend's [`GeometryError`](crate::GeometryError).
    pub fn contains(&self, point: &Point3<f64>) -> GeometryResult<bool> {
        self.geometry.contains(point)
    }

    /// Distance from a point to the region's nearest surface.
    ///
    /// # Errors
    ///
    /// Propagates the backend's [`GeometryError`](crate::GeometryError).
    pub fn distance_to(&self, point: &Point3<f64>) -> GeometryResult<Option<f64>> {
        self.geometry.distance_to(point)
    }
}

impl fmt::Debug for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Region")
            .field("name", &self.name)
            .field("bounds", &self.geometry.bounds())
            .finish_non_exhaustive()
    }
}
