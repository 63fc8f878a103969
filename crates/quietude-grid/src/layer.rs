//! Grid layers: fixed-capacity, append-only planes of slots.

use quietude_core::{CoreError, GridDims, LayerCategory};

use crate::attr::AttrTable;

/// Upper bound on the slots a new layer reserves before any are populated.
pub const PREALLOC_SLOTS: usize = 4096;

/// One populated position of a layer.
#[derive(Debug, PartialEq)]
pub struct Slot {
    y: i32,
    x: i32,
    attrs: AttrTable,
}

impl Slot {
    /// Row.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Column.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// The object's attributes.
    pub fn attrs(&self) -> &AttrTable {
        &self.attrs
    }

    /// Mutable access to the object's attributes.
    pub fn attrs_mut(&mut self) -> &mut AttrTable {
        &mut self.attrs
    }
}

/// A `size_y × size_x` plane of attribute tables.
///
/// Slot storage grows as slots are populated, with at most
/// [`PREALLOC_SLOTS`] reserved up front. Slots are populated strictly
/// in increasing index order; `filled()` is the watermark below which every
/// slot exists. Slots can be mutated in place but never removed.
///
/// # Examples
///
/// ```
/// use quietude_core::{GridDims, LayerCategory};
/// use quietude_grid::{AttrTable, GridLayer};
///
/// let dims = GridDims::new(1, 2).unwrap();
/// let mut layer = GridLayer::new(dims, LayerCategory::Earth);
/// layer.slot_set(0, 0, AttrTable::defaults_for(LayerCategory::Earth)).unwrap();
/// assert_eq!(layer.filled(), 1);
/// assert!(!layer.is_complete());
/// assert!(layer.object_get(1).unwrap().is_none());
/// ```
#[derive(Debug, PartialEq)]
pub struct GridLayer {
    dims: GridDims,
    category: LayerCategory,
    slots: Vec<Slot>,
}

impl GridLayer {
    /// An empty layer that will hold `dims.layer_size()` slots.
    pub fn new(dims: GridDims, category: LayerCategory) -> Self {
        Self {
            dims,
            category,
            slots: Vec::with_capacity(dims.layer_size().min(PREALLOC_SLOTS)),
        }
    }

    /// Dimensions of the layer.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Which plane this layer represents.
    pub fn category(&self) -> LayerCategory {
        self.category
    }

    /// Total number of slots when complete.
    pub fn capacity(&self) -> usize {
        self.dims.layer_size()
    }

    /// Number of populated slots (the fill watermark).
    pub fn filled(&self) -> usize {
        self.slots.len()
    }

    /// Whether every slot is populated.
    pub fn is_complete(&self) -> bool {
        self.slots.len() == self.capacity()
    }

    /// Append a slot at `(y, x)` owning `attrs`, returning its index.
    ///
    /// The slot goes at the current watermark. Callers fill in row-major
    /// order; a coordinate that does not match the watermark is stored as
    /// given and logged.
    ///
    /// `attrs` is consumed on every path; on error it is dropped.
    ///
    /// # Errors
    ///
    /// - [`CoreError::LayerFull`] if the layer is complete.
    /// - [`CoreError::CoordOutOfBounds`] if `(y, x)` is outside the grid.
    pub fn slot_set(&mut self, y: i32, x: i32, attrs: AttrTable) -> Result<usize, CoreError> {
        let index = self.slots.len();
        if index >= self.capacity() {
            tracing::warn!(category = %self.category, y, x, "slot rejected: layer full");
            return Err(CoreError::LayerFull {
                capacity: self.capacity(),
            });
        }
        let target = match self.dims.coords_to_index(y, x) {
            Ok(target) => target,
            Err(e) => {
                tracing::warn!(category = %self.category, y, x, "slot rejected: {e}");
                return Err(e);
            }
        };
        if target != index {
            tracing::warn!(
                category = %self.category,
                y,
                x,
                index,
                "out-of-order fill: coordinate belongs at index {target}"
            );
        }
        self.slots.push(Slot { y, x, attrs });
        tracing::trace!(category = %self.category, index, y, x, "slot populated");
        Ok(index)
    }

    /// Append default tables until the layer is complete.
    ///
    /// Returns the number of slots added.
    ///
    /// # Errors
    ///
    /// Propagates [`slot_set`](Self::slot_set) failures.
    pub fn fill_defaults(&mut self) -> Result<usize, CoreError> {
        let start = self.slots.len();
        for index in start..self.capacity() {
            let (y, x) = self.dims.index_to_coords(index)?;
            self.slot_set(y, x, AttrTable::defaults_for(self.category))?;
        }
        Ok(self.slots.len() - start)
    }

    // ── Populated-slot access ───────────────────────────────────

    /// The slot at `index`.
    ///
    /// # Errors
    ///
    /// [`CoreError::IndexOutOfRange`] unless `index < filled()`.
    pub fn slot(&self, index: usize) -> Result<&Slot, CoreError> {
        let len = self.slots.len();
        self.slots
            .get(index)
            .ok_or(CoreError::IndexOutOfRange { index, len })
    }

    /// Mutable access to the slot at `index`.
    ///
    /// # Errors
    ///
    /// [`CoreError::IndexOutOfRange`] unless `index < filled()`.
    pub fn slot_mut(&mut self, index: usize) -> Result<&mut Slot, CoreError> {
        let len = self.slots.len();
        self.slots
            .get_mut(index)
            .ok_or(CoreError::IndexOutOfRange { index, len })
    }

    /// Row of the slot at `index`.
    ///
    /// # Errors
    ///
    /// [`CoreError::IndexOutOfRange`] unless `index < filled()`.
    pub fn slot_y(&self, index: usize) -> Result<i32, CoreError> {
        self.slot(index).map(Slot::y)
    }

    /// Column of the slot at `index`.
    ///
    /// # Errors
    ///
    /// [`CoreError::IndexOutOfRange`] unless `index < filled()`.
    pub fn slot_x(&self, index: usize) -> Result<i32, CoreError> {
        self.slot(index).map(Slot::x)
    }

    /// Attributes of the slot at `index`.
    ///
    /// # Errors
    ///
    /// [`CoreError::IndexOutOfRange`] unless `index < filled()`.
    pub fn slot_attrs(&self, index: usize) -> Result<&AttrTable, CoreError> {
        self.slot(index).map(Slot::attrs)
    }

    /// Mutable attributes of the slot at `index`.
    ///
    /// # Errors
    ///
    /// [`CoreError::IndexOutOfRange`] unless `index < filled()`.
    pub fn slot_attrs_mut(&mut self, index: usize) -> Result<&mut AttrTable, CoreError> {
        self.slot_mut(index).map(Slot::attrs_mut)
    }

    // ── Addressable-slot access ─────────────────────────────────

    /// The slot at `index`, or `None` if it is addressable but not yet
    /// populated.
    ///
    /// # Errors
    ///
    /// [`CoreError::IndexOutOfRange`] if `index >= capacity()`.
    pub fn object_get(&self, index: usize) -> Result<Option<&Slot>, CoreError> {
        let len = self.capacity();
        if index >= len {
            return Err(CoreError::IndexOutOfRange { index, len });
        }
        Ok(self.slots.get(index))
    }

    /// The slot addressed by `(y, x)`, or `None` if not yet populated.
    ///
    /// # Errors
    ///
    /// [`CoreError::CoordOutOfBounds`] outside the grid.
    pub fn object_at(&self, y: i32, x: i32) -> Result<Option<&Slot>, CoreError> {
        let index = self.dims.coords_to_index(y, x)?;
        self.object_get(index)
    }

    /// Populated slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Slot> + '_ {
        self.slots.iter()
    }
}
