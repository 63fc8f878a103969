//! Layer fill and area assembly integration tests.

use proptest::prelude::*;
use quietude_core::{AttrKey, CoreError, GridDims, LayerCategory, ObjectCategory};
use quietude_grid::{Area, AttrTable, Cell, GridLayer};

// ── Helpers ─────────────────────────────────────────────────────

fn named(name: &str) -> AttrTable {
    let mut table = AttrTable::with_capacity(AttrKey::COUNT);
    table.set(AttrKey::Name, Cell::text(name)).unwrap();
    table
}

fn fill_named(layer: &mut GridLayer, names: &[&str]) {
    let dims = layer.dims();
    for (index, name) in names.iter().enumerate() {
        let (y, x) = dims.index_to_coords(index).unwrap();
        layer.slot_set(y, x, named(name)).unwrap();
    }
}

// ── Scenario ────────────────────────────────────────────────────

#[test]
fn two_by_two_area_from_named_tables() {
    let dims = GridDims::new(2, 2).unwrap();
    let mut earth = GridLayer::new(dims, LayerCategory::Earth);
    fill_named(&mut earth, &["A", "B", "C", "D"]);
    let mut floater = GridLayer::new(dims, LayerCategory::Floater);
    floater.fill_defaults().unwrap();

    let area = Area::new(earth, floater).unwrap();
    assert!(area.is_complete());

    let coords: Vec<_> = area.earth().iter().map(|s| (s.y(), s.x())).collect();
    assert_eq!(coords, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    let names: Vec<_> = area
        .earth()
        .iter()
        .map(|s| s.attrs().text(AttrKey::Name).unwrap().to_owned())
        .collect();
    assert_eq!(names, ["A", "B", "C", "D"]);
    assert_eq!(
        area.floater().slot_attrs(2).unwrap().category(AttrKey::Category),
        Some(ObjectCategory::Void)
    );
}

#[test]
fn rejected_table_leaves_layer_untouched() {
    let dims = GridDims::new(1, 2).unwrap();
    let mut layer = GridLayer::new(dims, LayerCategory::Earth);
    fill_named(&mut layer, &["left", "right"]);
    let before = layer.iter().count();

    let err = layer.slot_set(0, 0, named("extra")).unwrap_err();
    assert_eq!(err, CoreError::LayerFull { capacity: 2 });
    assert_eq!(layer.iter().count(), before);
    assert_eq!(layer.slot_attrs(0).unwrap().text(AttrKey::Name), Some("left"));
}

#[test]
fn nested_area_cell_is_owned_by_table() {
    let inner = Area::with_defaults(GridDims::new(1, 1).unwrap()).unwrap();
    let mut table = AttrTable::with_capacity(1);
    // No key declares an area, so the table refuses and drops it.
    let err = table.set(AttrKey::Name, Cell::area(inner)).unwrap_err();
    assert!(matches!(err, CoreError::TypeMismatch { .. }));
    assert!(table.is_empty());
}

// ── Properties ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn watermark_only_grows(rows in 1u32..8, cols in 1u32..8, extra in 0usize..4) {
        let dims = GridDims::new(rows, cols).unwrap();
        let mut layer = GridLayer::new(dims, LayerCategory::Floater);
        let mut last = 0;
        for index in 0..dims.layer_size() {
            let (y, x) = dims.index_to_coords(index).unwrap();
            prop_assert_eq!(layer.slot_set(y, x, named("n")).unwrap(), index);
            prop_assert_eq!(layer.filled(), last + 1);
            last = layer.filled();
        }
        for _ in 0..extra {
            prop_assert!(layer.slot_set(0, 0, named("late")).is_err());
            prop_assert_eq!(layer.filled(), dims.layer_size());
        }
        prop_assert!(layer.is_complete());
    }

    #[test]
    fn object_get_none_exactly_above_watermark(rows in 1u32..6, cols in 1u32..6, fill in 0usize..36) {
        let dims = GridDims::new(rows, cols).unwrap();
        let fill = fill % (dims.layer_size() + 1);
        let mut layer = GridLayer::new(dims, LayerCategory::Earth);
        for index in 0..fill {
            let (y, x) = dims.index_to_coords(index).unwrap();
            layer.slot_set(y, x, AttrTable::defaults_for(LayerCategory::Earth)).unwrap();
        }
        for index in 0..dims.layer_size() {
            let populated = layer.object_get(index).unwrap().is_some();
            prop_assert_eq!(populated, index < fill);
        }
        prop_assert!(layer.object_get(dims.layer_size()).is_err());
    }
}
