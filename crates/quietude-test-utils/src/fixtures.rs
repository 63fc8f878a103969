//! Reusable area and table fixtures.
//!
//! - [`named_table`]: a table holding only a name.
//! - [`two_by_two_area`]: earth slots named "A" to "D", default floater.
//! - [`default_area`]: both layers filled with defaults.

use quietude_core::{AttrKey, GridDims, LayerCategory};
use quietude_grid::{Area, AttrTable, Cell, GridLayer};

/// A full-capacity table holding only `Name = name`.
pub fn named_table(name: &str) -> AttrTable {
    let mut table = AttrTable::with_capacity(AttrKey::COUNT);
    table
        .set(AttrKey::Name, Cell::text(name))
        .expect("name is a text key");
    table
}

/// A 2×2 area whose earth slots are named "A", "B", "C", "D" in index
/// order and whose floater layer holds defaults.
pub fn two_by_two_area() -> Area {
    let dims = GridDims::new(2, 2).expect("2x2 is valid");
    let mut earth = GridLayer::new(dims, LayerCategory::Earth);
    for (index, name) in ["A", "B", "C", "D"].into_iter().enumerate() {
        let (y, x) = dims.index_to_coords(index).expect("index in range");
        earth
            .slot_set(y, x, named_table(name))
            .expect("layer has room");
    }
    let mut floater = GridLayer::new(dims, LayerCategory::Floater);
    floater.fill_defaults().expect("layer has room");
    Area::new(earth, floater).expect("matching layers")
}

/// A `size_y × size_x` area with both layers filled with defaults.
pub fn default_area(size_y: u32, size_x: u32) -> Area {
    let dims = GridDims::new(size_y, size_x).expect("valid test dims");
    Area::with_defaults(dims).expect("defaults fill")
}
