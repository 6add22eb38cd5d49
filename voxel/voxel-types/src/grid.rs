//! Dense label grid produced by domain labeling.

use hashbrown::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};

/// A principal plane for 2D slice extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SlicePlane {
    /// Fixed `k`; rows run along `i`, columns along `j`.
    Xy,
    /// Fixed `j`; rows run along `i`, columns along `k`.
    Xz,
    /// Fixed `i`; rows run along `j`, columns along `k`.
    Yz,
}

/// A 2D slice of label values extracted from a [`LabelGrid`].
///
/// `values` is row-major with `rows * cols` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaneSlice {
    /// The plane this slice was taken from.
    pub plane: SlicePlane,
    /// The fixed index along the slicing axis.
    pub index: usize,
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
    /// Row-major label values.
    pub values: Vec<i32>,
}

/// The dense array of labels for a sample lattice.
///
/// A grid is created filled with a background label, mutated in place
/// during composition, and handed back to the caller as the sole output
/// artifact. Every cell always holds exactly one label.
///
/// # Example
///
/// ```
/// use voxel_types::LabelGrid;
///
/// let mut grid = LabelGrid::new((2, 2, 2), 0);
/// grid.set_linear(3, 7);
///
/// assert_eq!(grid.get(0, 1, 1), Some(7));
/// assert_eq!(grid.get(0, 0, 0), Some(0));
/// assert_eq!(grid.count_of(7), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LabelGrid {
    shape: (usize, usize, usize),
    background: i32,
    labels: Vec<i32>,
}

impl LabelGrid {
    /// Create a grid of the given shape, filled with the background label.
    #[must_use]
    pub fn new(shape: (usize, usize, usize), background: i32) -> Self {
        Self {
            shape,
            background,
            labels: vec![background; shape.0 * shape.1 * shape.2],
        }
    }

    /// Wrap an existing flat label buffer.
    ///
    /// The buffer must be row-major in `(i, j, k)` with `k` fastest,
    /// matching [`SampleLattice`](crate::SampleLattice) linear indices.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ShapeMismatch`] if the buffer length is not
    /// `nx * ny * nz`.
    pub fn from_flat(
        labels: Vec<i32>,
        shape: (usize, usize, usize),
        background: i32,
    ) -> GridResult<Self> {
        let expected = shape.0 * shape.1 * shape.2;
        if labels.len() != expected {
            return Err(GridError::ShapeMismatch {
                expected,
                actual: labels.len(),
            });
        }
        Ok(Self {
            shape,
            background,
            labels,
        })
    }

    /// Get the shape `(nx, ny, nz)`.
    #[inline]
    #[must_use]
    pub const fn shape(&self) -> (usize, usize, usize) {
        self.shape
    }

    /// Get the number of cells.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check whether the grid has zero cells.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Get the background label the grid was initialized with.
    #[inline]
    #[must_use]
    pub const fn background(&self) -> i32 {
        self.background
    }

    /// Get the label at `(i, j, k)`, or `None` out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize, j: usize, k: usize) -> Option<i32> {
        let (nx, ny, nz) = self.shape;
        if i >= nx || j >= ny || k >= nz {
            return None;
        }
        Some(self.labels[(i * ny + j) * nz + k])
    }

    /// Get the label at a linear index, or `None` out of bounds.
    #[inline]
    #[must_use]
    pub fn get_linear(&self, index: usize) -> Option<i32> {
        self.labels.get(index).copied()
    }

    /// Write a label at a linear index.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds; compositors only write
    /// indices produced by the lattice the grid was shaped from.
    #[inline]
    pub fn set_linear(&mut self, index: usize, label: i32) {
        self.labels[index] = label;
    }

    /// View the full label buffer in linear-index order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[i32] {
        &self.labels
    }

    /// Consume the grid, returning the flat label buffer.
    #[must_use]
    pub fn into_flat(self) -> Vec<i32> {
        self.labels
    }

    /// Count the cells holding a given label.
    #[must_use]
    pub fn count_of(&self, label: i32) -> usize {
        self.labels.iter().filter(|&&l| l == label).count()
    }

    /// Tally every label present in the grid.
    ///
    /// # Example
    ///
    /// ```
    /// use voxel_types::LabelGrid;
    ///
    /// let grid = LabelGrid::new((2, 2, 1), 3);
    /// let counts = grid.label_counts();
    /// assert_eq!(counts.get(&3), Some(&4));
    /// ```
    #[must_use]
    pub fn label_counts(&self) -> HashMap<i32, usize> {
        let mut counts = HashMap::new();
        for &label in &self.labels {
            *counts.entry(label).or_insert(0) += 1;
        }
        counts
    }

    /// Extract a 2D slice along one of the principal planes.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::SliceIndexOutOfRange`] if `index` exceeds the
    /// grid extent along the slicing axis.
    ///
    /// # Example
    ///
    /// ```
    /// use voxel_types::{LabelGrid, SlicePlane};
    ///
    /// let grid = LabelGrid::new((3, 4, 5), 0);
    /// let slice = grid.plane_slice(SlicePlane::Xz, 2).unwrap();
    /// assert_eq!((slice.rows, slice.cols), (3, 5));
    /// ```
    pub fn plane_slice(&self, plane: SlicePlane, index: usize) -> GridResult<PlaneSlice> {
        let (nx, ny, nz) = self.shape;
        let (extent, rows, cols) = match plane {
            SlicePlane::Xy => (nz, nx, ny),
            SlicePlane::Xz => (ny, nx, nz),
            SlicePlane::Yz => (nx, ny, nz),
        };
        if index >= extent {
            return Err(GridError::SliceIndexOutOfRange { index, extent });
        }

        let mut values = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                let (i, j, k) = match plane {
                    SlicePlane::Xy => (r, c, index),
                    SlicePlane::Xz => (r, index, c),
                    SlicePlane::Yz => (index, r, c),
                };
                values.push(self.labels[(i * ny + j) * nz + k]);
            }
        }

        Ok(PlaneSlice {
            plane,
            index,
            rows,
            cols,
            values,
        })
    }
}
