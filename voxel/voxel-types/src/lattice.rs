//! Regular 3D sample lattice.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bounds::Aabb;
use crate::error::{LatticeError, LatticeResult};

/// An immutable, regular 3D lattice of sample coordinates.
///
/// Coordinates are `origin + index * spacing` per axis, indexed by
/// `(i, j, k)` over a fixed shape `(nx, ny, nz)`. Linear indices are
/// row-major in `(i, j, k)`: `idx = (i * ny + j) * nz + k`.
///
/// A lattice is constructed once per run and read-only afterwards.
///
/// # Example
///
/// ```
/// use voxel_types::{Point3, SampleLattice, Vector3};
///
/// let lattice = SampleLattice::new(
///     Point3::new(-1.0, 0.0, 0.0),
///     Vector3::new(0.5, 0.5, 0.5),
///     (5, 4, 3),
/// )
/// .unwrap();
///
/// assert_eq!(lattice.shape(), (5, 4, 3));
/// assert_eq!(lattice.point(4, 0, 0), Point3::new(1.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SampleLattice {
    origin: Point3<f64>,
    spacing: Vector3<f64>,
    shape: (usize, usize, usize),
}

impl SampleLattice {
    /// Create a lattice from an origin, per-axis spacing, and shape.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::InvalidSpacing`] if any spacing component is
    /// zero, negative, or non-finite, and [`LatticeError::EmptyAxis`] if any
    /// shape dimension is zero.
    pub fn new(
        origin: Point3<f64>,
        spacing: Vector3<f64>,
        shape: (usize, usize, usize),
    ) -> LatticeResult<Self> {
        for (axis, d) in [('x', spacing.x), ('y', spacing.y), ('z', spacing.z)] {
            if !d.is_finite() || d <= 0.0 {
                return Err(LatticeError::InvalidSpacing { axis, spacing: d });
            }
        }
        for (axis, n) in [('x', shape.0), ('y', shape.1), ('z', shape.2)] {
            if n == 0 {
                return Err(LatticeError::EmptyAxis { axis });
            }
        }

        Ok(Self {
            origin,
            spacing,
            shape,
        })
    }

    /// Create a lattice covering `[min, max]` with the given spacing.
    ///
    /// Each axis gets the samples `min + k * d` with `k * d` strictly less
    /// than `(max - min) + d / 2`, so the last sample lands on `max` when
    /// the span divides evenly and strictly within half a step past it
    /// otherwise. This is the conventional inclusive-extent grid
    /// construction for finite-difference domains.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::InvalidSpacing`] for invalid spacings and
    /// [`LatticeError::EmptyAxis`] if `max < min` on any axis.
    ///
    /// # Example
    ///
    /// ```
    /// use voxel_types::{Point3, SampleLattice, Vector3};
    ///
    /// let lattice = SampleLattice::from_extents(
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(10.0, 10.0, 10.0),
    ///     Vector3::new(1.0, 2.0, 5.0),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(lattice.shape(), (11, 6, 3));
    /// ```
    pub fn from_extents(
        min: Point3<f64>,
        max: Point3<f64>,
        spacing: Vector3<f64>,
    ) -> LatticeResult<Self> {
        let nx = axis_count('x', min.x, max.x, spacing.x)?;
        let ny = axis_count('y', min.y, max.y, spacing.y)?;
        let nz = axis_count('z', min.z, max.z, spacing.z)?;
        Self::new(min, spacing, (nx, ny, nz))
    }

    /// Get the lattice origin (minimum-corner sample).
    #[inline]
    #[must_use]
    pub const fn origin(&self) -> Point3<f64> {
        self.origin
    }

    /// Get the per-axis spacing.
    #[inline]
    #[must_use]
    pub const fn spacing(&self) -> Vector3<f64> {
        self.spacing
    }

    /// Get the shape `(nx, ny, nz)`.
    #[inline]
    #[must_use]
    pub const fn shape(&self) -> (usize, usize, usize) {
        self.shape
    }

    /// Get the total number of sample points (`nx * ny * nz`).
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.shape.0 * self.shape.1 * self.shape.2
    }

    /// Always `false`; every constructed lattice has at least one point.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Get the coordinate of the sample at `(i, j, k)`.
    ///
    /// Indices are not bounds-checked; out-of-shape indices extrapolate.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn point(&self, i: usize, j: usize, k: usize) -> Point3<f64> {
        Point3::new(
            self.spacing.x.mul_add(i as f64, self.origin.x),
            self.spacing.y.mul_add(j as f64, self.origin.y),
            self.spacing.z.mul_add(k as f64, self.origin.z),
        )
    }

    /// Get the coordinate of the sample at a linear index.
    #[inline]
    #[must_use]
    pub fn point_at(&self, index: usize) -> Point3<f64> {
        let (i, j, k) = self.coords_of(index);
        self.point(i, j, k)
    }

    /// Convert `(i, j, k)` to a linear index.
    #[inline]
    #[must_use]
    pub const fn linear_index(&self, i: usize, j: usize, k: usize) -> usize {
        (i * self.shape.1 + j) * self.shape.2 + k
    }

    /// Convert a linear index back to `(i, j, k)`.
    #[inline]
    #[must_use]
    pub const fn coords_of(&self, index: usize) -> (usize, usize, usize) {
        let (_, ny, nz) = self.shape;
        let k = index % nz;
        let j = (index / nz) % ny;
        let i = index / (ny * nz);
        (i, j, k)
    }

    /// Iterate over all sample points with their linear indices,
    /// in linear-index order.
    pub fn iter_points(&self) -> impl Iterator<Item = (usize, Point3<f64>)> + '_ {
        (0..self.len()).map(|idx| (idx, self.point_at(idx)))
    }

    /// Get the bounding box of the lattice (first through last sample).
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        let (nx, ny, nz) = self.shape;
        let far = self.point(nx - 1, ny - 1, nz - 1);
        Aabb::new(self.origin, far)
    }
}

/// Tolerance, in steps, for the half-step stop of [`axis_count`].
///
/// The stop is exclusive: a span of exactly `n + 0.5` steps yields `n + 1`
/// samples, not `n + 2`.
const HALF_STEP_EPS: f64 = 1e-9;

/// Number of samples on one axis covering `[min, max]` with spacing `d`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn axis_count(axis: char, min: f64, max: f64, d: f64) -> LatticeResult<usize> {
    if !d.is_finite() || d <= 0.0 {
        return Err(LatticeError::InvalidSpacing { axis, spacing: d });
    }
    let span = max - min;
    if !span.is_finite() || span < 0.0 {
        return Err(LatticeError::EmptyAxis { axis });
    }
    Ok((span / d + 0.5 - HALF_STEP_EPS).floor() as usize + 1)
}
