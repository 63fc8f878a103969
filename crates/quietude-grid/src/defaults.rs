//! Default attribute values per layer category.

use quietude_core::{AttrKey, LayerCategory, ObjectCategory};

use crate::cell::Cell;

/// A fresh cell holding the default value of `key` for `category`.
///
/// Every (key, category) pair has a default, and the returned cell always
/// carries `key.declared_type()`. The caller owns the result.
///
/// | key         | earth                         | floater        |
/// |-------------|-------------------------------|----------------|
/// | name        | `"ground"`                    | `"nothing"`    |
/// | description | `"Solid, unremarkable ground."` | `"Empty air."` |
/// | glyph       | `"."`                         | `" "`          |
/// | can-move    | `false`                       | `true`         |
/// | has-agency  | `false`                       | `false`        |
/// | category    | grass                         | void           |
/// | health      | `0`                           | `1`            |
/// | opacity     | `0.0`                         | `0.0`          |
pub fn default_cell(key: AttrKey, category: LayerCategory) -> Cell {
    use LayerCategory::{Earth, Floater};

    match (key, category) {
        (AttrKey::Name, Earth) => Cell::text("ground"),
        (AttrKey::Name, Floater) => Cell::text("nothing"),
        (AttrKey::Description, Earth) => Cell::text("Solid, unremarkable ground."),
        (AttrKey::Description, Floater) => Cell::text("Empty air."),
        (AttrKey::Glyph, Earth) => Cell::text("."),
        (AttrKey::Glyph, Floater) => Cell::text(" "),
        (AttrKey::CanMove, Earth) => Cell::flag(false),
        (AttrKey::CanMove, Floater) => Cell::flag(true),
        (AttrKey::HasAgency, _) => Cell::flag(false),
        (AttrKey::Category, Earth) => Cell::category(ObjectCategory::Grass),
        (AttrKey::Category, Floater) => Cell::category(ObjectCategory::Void),
        (AttrKey::Health, Earth) => Cell::int(0),
        (AttrKey::Health, Floater) => Cell::int(1),
        (AttrKey::Opacity, _) => Cell::float(0.0),
    }
}
