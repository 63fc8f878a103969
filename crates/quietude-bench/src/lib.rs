//! Benchmark profiles for the Quietude walk core.
//!
//! - [`meadow_area`]: a deterministic area of grass, trees, rocks and water
//!   with a player on the floater layer
//! - [`REFERENCE_DIMS`]: the default walk-mode screen size

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use quietude_core::{AttrKey, CoreError, GridDims, LayerCategory, ObjectCategory};
use quietude_grid::{Area, AttrTable, Cell, GridLayer};

/// Rows and columns of the reference profile (the default walk config).
pub const REFERENCE_DIMS: (u32, u32) = (32, 64);

/// Terrain for slot `index`, cycling deterministically through categories.
fn terrain(index: usize) -> (ObjectCategory, &'static str, &'static str) {
    match index % 11 {
        0 => (ObjectCategory::Tree, "tree", "T"),
        3 | 7 => (ObjectCategory::Rock, "rock", "o"),
        5 => (ObjectCategory::Water, "pond", "~"),
        _ => (ObjectCategory::Grass, "grass", "."),
    }
}

fn earth_table(index: usize) -> Result<AttrTable, CoreError> {
    let (category, name, glyph) = terrain(index);
    let mut table = AttrTable::defaults_for(LayerCategory::Earth);
    table.set(AttrKey::Category, Cell::category(category))?;
    table.set(AttrKey::Name, Cell::text(name))?;
    table.set(AttrKey::Glyph, Cell::text(glyph))?;
    table.set(AttrKey::Opacity, Cell::float(if category == ObjectCategory::Tree { 0.6 } else { 0.0 }))?;
    Ok(table)
}

/// Build a complete `size_y × size_x` area with varied terrain and the
/// player at slot 0 of the floater layer.
pub fn meadow_area(size_y: u32, size_x: u32) -> Result<Area, CoreError> {
    let dims = GridDims::new(size_y, size_x)?;
    let mut earth = GridLayer::new(dims, LayerCategory::Earth);
    for index in 0..dims.layer_size() {
        let (y, x) = dims.index_to_coords(index)?;
        earth.slot_set(y, x, earth_table(index)?)?;
    }

    let mut floater = GridLayer::new(dims, LayerCategory::Floater);
    let mut player = AttrTable::defaults_for(LayerCategory::Floater);
    player.set(AttrKey::Category, Cell::category(ObjectCategory::Player))?;
    player.set(AttrKey::Name, Cell::text("you"))?;
    player.set(AttrKey::Glyph, Cell::text("@"))?;
    player.set(AttrKey::HasAgency, Cell::flag(true))?;
    player.set(AttrKey::Health, Cell::int(10))?;
    floater.slot_set(0, 0, player)?;
    floater.fill_defaults()?;

    Area::new(earth, floater)
}
