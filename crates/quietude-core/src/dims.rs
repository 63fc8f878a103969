//! Grid dimensions and the coordinate ⇄ linear-index transform.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Validated dimensions of a grid layer.
///
/// Slots are laid out row-major: `index = y * size_x + x`. Both axes are
/// non-zero and every coordinate fits in an `i32`.
///
/// # Examples
///
/// ```
/// use quietude_core::GridDims;
///
/// let dims = GridDims::new(2, 3).unwrap();
/// assert_eq!(dims.layer_size(), 6);
/// assert_eq!(dims.coords_to_index(1, 2).unwrap(), 5);
/// assert_eq!(dims.index_to_coords(4).unwrap(), (1, 1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DimsRepr", into = "DimsRepr")]
pub struct GridDims {
    size_y: u32,
    size_x: u32,
}

#[derive(Clone, Copy, Serialize, Deserialize)]
struct DimsRepr {
    size_y: u32,
    size_x: u32,
}

impl GridDims {
    /// Create dimensions of `size_y` rows by `size_x` columns.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDims`] if either axis is zero, exceeds
    /// `i32::MAX`, or the product overflows `usize`.
    pub fn new(size_y: u32, size_x: u32) -> Result<Self, CoreError> {
        let invalid = || CoreError::InvalidDims { size_y, size_x };
        if size_y == 0 || size_x == 0 {
            return Err(invalid());
        }
        if i32::try_from(size_y).is_err() || i32::try_from(size_x).is_err() {
            return Err(invalid());
        }
        (size_y as usize)
            .checked_mul(size_x as usize)
            .ok_or_else(invalid)?;
        Ok(Self { size_y, size_x })
    }

    /// Number of rows.
    pub fn size_y(&self) -> u32 {
        self.size_y
    }

    /// Number of columns.
    pub fn size_x(&self) -> u32 {
        self.size_x
    }

    /// Total slot count of a layer with these dimensions.
    pub fn layer_size(&self) -> usize {
        self.size_y as usize * self.size_x as usize
    }

    /// Whether `(y, x)` lies inside the grid.
    pub fn contains(&self, y: i32, x: i32) -> bool {
        y >= 0 && x >= 0 && (y as u32) < self.size_y && (x as u32) < self.size_x
    }

    /// Convert `(y, x)` to its row-major linear index.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::CoordOutOfBounds`] outside the grid.
    pub fn coords_to_index(&self, y: i32, x: i32) -> Result<usize, CoreError> {
        if !self.contains(y, x) {
            return Err(CoreError::CoordOutOfBounds {
                y,
                x,
                size_y: self.size_y,
                size_x: self.size_x,
            });
        }
        Ok(y as usize * self.size_x as usize + x as usize)
    }

    /// Convert a linear index back to `(y, x)`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::IndexOutOfRange`] if `index >= layer_size()`.
    pub fn index_to_coords(&self, index: usize) -> Result<(i32, i32), CoreError> {
        let len = self.layer_size();
        if index >= len {
            return Err(CoreError::IndexOutOfRange { index, len });
        }
        let cols = self.size_x as usize;
        Ok(((index / cols) as i32, (index % cols) as i32))
    }
}

impl TryFrom<DimsRepr> for GridDims {
    type Error = CoreError;

    fn try_from(repr: DimsRepr) -> Result<Self, Self::Error> {
        Self::new(repr.size_y, repr.size_x)
    }
}

impl From<GridDims> for DimsRepr {
    fn from(dims: GridDims) -> Self {
        Self {
            size_y: dims.size_y,
            size_x: dims.size_x,
        }
    }
}
