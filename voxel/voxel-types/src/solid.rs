//! Analytic solid geometries.
//!
//! Simple closed solids with exact containment and surface-distance
//! queries. Axis-aligned boxes cover the common case of rectangular
//! material blocks in a simulation scene; spheres are mostly useful for
//! heterogeneity inclusions and tests.

use nalgebra::Point3;

use crate::bounds::Aabb;
use crate::error::GeometryResult;
use crate::region::RegionGeometry;

/// An axis-aligned box solid.
///
/// # Example
///
/// ```
/// use voxel_types::{Aabb, BoxSolid, Point3, RegionGeometry};
///
/// let solid = BoxSolid::new(Aabb::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(2.0, 2.0, 2.0),
/// ));
///
/// assert!(solid.contains(&Point3::new(2.0, 1.0, 1.0)).unwrap());
/// let d = solid.distance_to(&Point3::new(3.0, 1.0, 1.0)).unwrap();
/// assert!((d.unwrap() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSolid {
    aabb: Aabb,
}

impl BoxSolid {
    /// Create a box solid from its bounding box.
    #[must_use]
    pub const fn new(aabb: Aabb) -> Self {
        Self { aabb }
    }

    /// Create a box solid from min and max corners.
    #[must_use]
    pub fn from_corners(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self {
            aabb: Aabb::new(min, max),
        }
    }
}

impl RegionGeometry for BoxSolid {
    fn bounds(&self) -> Aabb {
        self.aabb
    }

    fn contains(&self, point: &Point3<f64>) -> GeometryResult<bool> {
        Ok(self.aabb.contains(point))
    }

    fn distance_to(&self, point: &Point3<f64>) -> GeometryResult<Option<f64>> {
        let (min, max) = (self.aabb.min, self.aabb.max);

        if self.aabb.contains(point) {
            // Inside: distance to the closest face.
            let d = (point.x - min.x)
                .min(max.x - point.x)
                .min(point.y - min.y)
                .min(max.y - point.y)
                .min(point.z - min.z)
                .min(max.z - point.z);
            return Ok(Some(d));
        }

        // Outside: distance to the clamped surface point.
        let closest = Point3::new(
            point.x.clamp(min.x, max.x),
            point.y.clamp(min.y, max.y),
            point.z.clamp(min.z, max.z),
        );
        Ok(Some((point - closest).norm()))
    }
}

/// A sphere solid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereSolid {
    center: Point3<f64>,
    radius: f64,
}

impl SphereSolid {
    /// Create a sphere from its center and radius.
    ///
    /// The radius is clamped to be non-negative.
    #[must_use]
    pub fn new(center: Point3<f64>, radius: f64) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    /// Get the sphere center.
    #[must_use]
    pub const fn center(&self) -> Point3<f64> {
        self.center
    }

    /// Get the sphere radius.
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }
}

impl RegionGeometry for SphereSolid {
    fn bounds(&self) -> Aabb {
        let r = self.radius;
        Aabb::new(
            Point3::new(self.center.x - r, self.center.y - r, self.center.z - r),
            Point3::new(self.center.x + r, self.center.y + r, self.center.z + r),
        )
    }

    fn contains(&self, point: &Point3<f64>) -> GeometryResult<bool> {
        Ok((point - self.center).norm_squared() <= self.radius * self.radius)
    }

    fn distance_to(&self, point: &Point3<f64>) -> GeometryResult<Option<f64>> {
        Ok(Some(((point - self.center).norm() - self.radius).abs()))
    }
}
