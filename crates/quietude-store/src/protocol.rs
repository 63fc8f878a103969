//! The area persistence protocol.
//!
//! ```text
//! area  = layer(earth) layer(floater)
//! layer = table * (size_y * size_x)          slots in index order, no coordinates
//! table = entry_count:u32 entry *
//! entry = key:u8 cell
//! cell  = type_tag:u8 count:u32 payload
//! ```
//!
//! A payload is `count * element_size` raw bytes, except for a nested area
//! cell (count 1), whose payload is a headerless area with the same
//! dimensions as the enclosing one.
//!
//! Writing is best-effort across slots: a failing slot is logged and counted
//! and the rest of the layer is still attempted. Reading is all-or-nothing:
//! the first failure drops everything built so far.

use std::io::{Read, Write};

use quietude_core::{AttrKey, CoreError, GridDims, LayerCategory, TypeTag};
use quietude_grid::{Area, AttrTable, Cell, GridLayer};

use crate::codec::{read_bytes, read_u32_le, read_u8, write_len, write_u8};
use crate::error::StoreError;

/// Maximum depth of areas nested inside cells.
pub const MAX_NESTING: usize = 8;

// ── Cells ───────────────────────────────────────────────────────

/// Write one cell: tag, count, payload.
///
/// # Errors
///
/// A nested area must match `dims` and be complete; it is checked before
/// any byte of the cell is written.
pub fn write_cell(w: &mut dyn Write, cell: &Cell, dims: GridDims) -> Result<(), StoreError> {
    if let Some(area) = cell.as_area() {
        check_nested(area, dims)?;
        write_u8(w, TypeTag::Area.as_u8())?;
        write_len(w, 1, "area cell")?;
        return write_area(w, area);
    }
    let payload = cell.to_raw_bytes().unwrap_or_default();
    write_u8(w, cell.type_tag().as_u8())?;
    write_len(w, cell.count(), "cell")?;
    w.write_all(&payload)?;
    Ok(())
}

/// Read one cell. Nested areas are read with `dims`.
pub fn read_cell(r: &mut dyn Read, dims: GridDims) -> Result<Cell, StoreError> {
    read_cell_nested(r, dims, 0)
}

fn read_cell_nested(r: &mut dyn Read, dims: GridDims, depth: usize) -> Result<Cell, StoreError> {
    let tag = TypeTag::try_from(read_u8(r)?)?;
    let count = read_u32_le(r)? as usize;
    let Some(size) = tag.element_size() else {
        if count != 1 {
            return Err(StoreError::malformed(format!(
                "area cell with count {count}"
            )));
        }
        if depth >= MAX_NESTING {
            return Err(StoreError::malformed(format!(
                "areas nested deeper than {MAX_NESTING}"
            )));
        }
        let area = read_area_nested(r, dims, depth + 1)?;
        return Ok(Cell::area(area));
    };
    let len = count
        .checked_mul(size)
        .ok_or_else(|| StoreError::malformed(format!("{tag} cell count {count} overflows")))?;
    let bytes = read_bytes(r, len)?;
    Ok(Cell::from_raw(tag, count, &bytes)?)
}

fn check_nested(area: &Area, dims: GridDims) -> Result<(), StoreError> {
    if area.dims() != dims {
        return Err(StoreError::DimsMismatch {
            expected: dims,
            found: area.dims(),
        });
    }
    for layer in [area.earth(), area.floater()] {
        if !layer.is_complete() {
            return Err(StoreError::IncompleteLayer {
                filled: layer.filled(),
                capacity: layer.capacity(),
            });
        }
    }
    Ok(())
}

// ── Tables ──────────────────────────────────────────────────────

/// Write an attribute table: entry count, then each entry in order.
///
/// # Errors
///
/// [`CoreError::TypeMismatch`] if a cell's tag differs from its key's
/// declared type; it is checked before any byte is written.
pub fn write_table(w: &mut dyn Write, table: &AttrTable, dims: GridDims) -> Result<(), StoreError> {
    for (key, cell) in table.iter() {
        let expected = key.declared_type();
        if cell.type_tag() != expected {
            return Err(CoreError::TypeMismatch {
                key,
                expected,
                found: cell.type_tag(),
            }
            .into());
        }
    }
    write_len(w, table.len(), "table")?;
    for (key, cell) in table.iter() {
        write_u8(w, key.as_u8())?;
        write_cell(w, cell, dims)?;
    }
    Ok(())
}

/// Read an attribute table with room for every key.
///
/// # Errors
///
/// Unknown keys or tags, duplicate keys, more entries than there are keys,
/// or a cell whose tag differs from its key's declared type.
pub fn read_table(r: &mut dyn Read, dims: GridDims) -> Result<AttrTable, StoreError> {
    read_table_nested(r, dims, 0)
}

fn read_table_nested(
    r: &mut dyn Read,
    dims: GridDims,
    depth: usize,
) -> Result<AttrTable, StoreError> {
    let entries = read_u32_le(r)? as usize;
    if entries > AttrKey::COUNT {
        return Err(StoreError::malformed(format!(
            "table with {entries} entries, only {} keys exist",
            AttrKey::COUNT
        )));
    }
    let mut table = AttrTable::with_capacity(AttrKey::COUNT);
    for _ in 0..entries {
        let key = AttrKey::try_from(read_u8(r)?)?;
        if table.contains(key) {
            return Err(StoreError::malformed(format!("duplicate key {key}")));
        }
        let cell = read_cell_nested(r, dims, depth)?;
        table.set(key, cell)?;
    }
    Ok(table)
}

// ── Layers ──────────────────────────────────────────────────────

/// Write every slot's attribute table in index order.
///
/// # Errors
///
/// - [`StoreError::IncompleteLayer`] if the layer is not complete; nothing
///   is written.
/// - [`StoreError::LayerWriteFailed`] if any slot failed. All other slots
///   were still attempted.
pub fn write_layer(w: &mut dyn Write, layer: &GridLayer) -> Result<(), StoreError> {
    if !layer.is_complete() {
        return Err(StoreError::IncompleteLayer {
            filled: layer.filled(),
            capacity: layer.capacity(),
        });
    }

    let dims = layer.dims();
    let mut failed_slots = 0;
    let mut first = None;
    for (index, slot) in layer.iter().enumerate() {
        if let Err(e) = write_table(w, slot.attrs(), dims) {
            tracing::warn!(category = %layer.category(), index, "slot write failed: {e}");
            failed_slots += 1;
            first.get_or_insert(e);
        }
    }

    match first {
        None => {
            tracing::debug!(category = %layer.category(), slots = layer.filled(), "layer written");
            Ok(())
        }
        Some(first) => Err(StoreError::LayerWriteFailed {
            failed_slots,
            first: Box::new(first),
        }),
    }
}

/// Read a complete layer of `category` with `dims`.
///
/// Any failure drops the partially built layer.
pub fn read_layer(
    r: &mut dyn Read,
    dims: GridDims,
    category: LayerCategory,
) -> Result<GridLayer, StoreError> {
    read_layer_nested(r, dims, category, 0)
}

fn read_layer_nested(
    r: &mut dyn Read,
    dims: GridDims,
    category: LayerCategory,
    depth: usize,
) -> Result<GridLayer, StoreError> {
    let mut layer = GridLayer::new(dims, category);
    for index in 0..dims.layer_size() {
        let table = read_table_nested(r, dims, depth)?;
        let (y, x) = dims.index_to_coords(index)?;
        layer.slot_set(y, x, table)?;
    }
    tracing::debug!(%category, slots = layer.filled(), "layer read");
    Ok(layer)
}

// ── Areas ───────────────────────────────────────────────────────

/// Write the earth layer, then the floater layer.
///
/// Stops at the first layer that fails.
pub fn write_area(w: &mut dyn Write, area: &Area) -> Result<(), StoreError> {
    write_layer(w, area.earth())?;
    write_layer(w, area.floater())?;
    Ok(())
}

/// Read an earth layer and a floater layer of `dims` and combine them.
pub fn read_area(r: &mut dyn Read, dims: GridDims) -> Result<Area, StoreError> {
    read_area_nested(r, dims, 0)
}

fn read_area_nested(r: &mut dyn Read, dims: GridDims, depth: usize) -> Result<Area, StoreError> {
    let earth = read_layer_nested(r, dims, LayerCategory::Earth, depth)?;
    let floater = read_layer_nested(r, dims, LayerCategory::Floater, depth)?;
    Ok(Area::new(earth, floater)?)
}
