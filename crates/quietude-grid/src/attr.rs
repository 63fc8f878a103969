//! Attribute tables: bounded, insertion-ordered key → cell maps.

use indexmap::IndexMap;
use quietude_core::{AttrKey, CoreError, LayerCategory, ObjectCategory};

use crate::cell::Cell;
use crate::defaults::default_cell;

/// The attributes of one in-world object.
///
/// Capacity is fixed at creation. Each key appears at most once and its
/// cell always carries the key's declared type: [`set`](Self::set) is the
/// only way a cell gets in. Cells are moved in and dropped on replacement
/// or when the table is dropped.
///
/// Two tables are equal when they hold equal entries in the same order.
/// Capacity is not compared.
///
/// # Examples
///
/// ```
/// use quietude_core::AttrKey;
/// use quietude_grid::{AttrTable, Cell};
///
/// let mut table = AttrTable::with_capacity(4);
/// table.set(AttrKey::Name, Cell::text("old oak")).unwrap();
/// table.set(AttrKey::Health, Cell::int(30)).unwrap();
///
/// assert_eq!(table.text(AttrKey::Name), Some("old oak"));
/// assert_eq!(table.int(AttrKey::Health), Some(30));
/// assert!(table.get(AttrKey::Glyph).is_none());
/// ```
#[derive(Debug)]
pub struct AttrTable {
    capacity: usize,
    entries: IndexMap<AttrKey, Cell>,
}

impl AttrTable {
    /// An empty table holding at most `capacity` distinct keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// A table holding the default of every key for `category`, in key order.
    pub fn defaults_for(category: LayerCategory) -> Self {
        let mut entries = IndexMap::with_capacity(AttrKey::COUNT);
        for key in AttrKey::ALL {
            entries.insert(key, default_cell(key, category));
        }
        Self {
            capacity: AttrKey::COUNT,
            entries,
        }
    }

    /// Store `cell` under `key`, replacing and dropping any previous cell.
    ///
    /// The cell is consumed whether or not the call succeeds.
    ///
    /// # Errors
    ///
    /// - [`CoreError::TypeMismatch`] if the cell's tag is not the key's
    ///   declared type.
    /// - [`CoreError::TableFull`] if `key` is new and the table is full.
    pub fn set(&mut self, key: AttrKey, cell: Cell) -> Result<(), CoreError> {
        let expected = key.declared_type();
        if cell.type_tag() != expected {
            return Err(CoreError::TypeMismatch {
                key,
                expected,
                found: cell.type_tag(),
            });
        }
        if let Some(slot) = self.entries.get_mut(&key) {
            let previous = std::mem::replace(slot, cell);
            tracing::trace!(%key, dropped = ?previous.type_tag(), "replaced attribute");
            return Ok(());
        }
        if self.entries.len() >= self.capacity {
            return Err(CoreError::TableFull {
                capacity: self.capacity,
                key,
            });
        }
        self.entries.insert(key, cell);
        Ok(())
    }

    /// Store the default value of `key` for `category`.
    ///
    /// # Errors
    ///
    /// As [`set`](Self::set); only [`CoreError::TableFull`] can occur.
    pub fn set_default(&mut self, key: AttrKey, category: LayerCategory) -> Result<(), CoreError> {
        self.set(key, default_cell(key, category))
    }

    /// The cell stored under `key`. A missing key is not an error.
    pub fn get(&self, key: AttrKey) -> Option<&Cell> {
        self.entries.get(&key)
    }

    /// Remove and return the cell stored under `key`, keeping the order of
    /// the remaining entries.
    pub fn remove(&mut self, key: AttrKey) -> Option<Cell> {
        self.entries.shift_remove(&key)
    }

    /// Whether `key` is present.
    pub fn contains(&self, key: AttrKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of distinct keys.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (AttrKey, &Cell)> + '_ {
        self.entries.iter().map(|(k, c)| (*k, c))
    }

    // ── Typed getters ───────────────────────────────────────────

    /// Text stored under `key`.
    pub fn text(&self, key: AttrKey) -> Option<&str> {
        self.get(key).and_then(Cell::as_text)
    }

    /// First boolean stored under `key`.
    pub fn flag(&self, key: AttrKey) -> Option<bool> {
        self.get(key).and_then(Cell::first_bool)
    }

    /// First integer stored under `key`.
    pub fn int(&self, key: AttrKey) -> Option<i32> {
        self.get(key).and_then(Cell::first_int)
    }

    /// First float stored under `key`.
    pub fn float(&self, key: AttrKey) -> Option<f64> {
        self.get(key).and_then(Cell::first_float)
    }

    /// First object category stored under `key`.
    pub fn category(&self, key: AttrKey) -> Option<ObjectCategory> {
        self.get(key).and_then(Cell::first_category)
    }
}

impl PartialEq for AttrTable {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quietude_core::TypeTag;

    #[test]
    fn replacing_key_keeps_len() {
        let mut table = AttrTable::with_capacity(2);
        table.set(AttrKey::Name, Cell::text("a")).unwrap();
        table.set(AttrKey::Name, Cell::text("b")).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.text(AttrKey::Name), Some("b"));
    }

    #[test]
    fn full_table_refuses_new_key_but_accepts_replacement() {
        let mut table = AttrTable::with_capacity(1);
        table.set(AttrKey::Health, Cell::int(3)).unwrap();
        let err = table.set(AttrKey::Name, Cell::text("x")).unwrap_err();
        assert_eq!(
            err,
            CoreError::TableFull {
                capacity: 1,
                key: AttrKey::Name
            }
        );
        table.set(AttrKey::Health, Cell::int(4)).unwrap();
        assert_eq!(table.int(AttrKey::Health), Some(4));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn wrong_type_rejected_and_table_unchanged() {
        let mut table = AttrTable::with_capacity(4);
        table.set(AttrKey::Name, Cell::text("kept")).unwrap();
        let err = table.set(AttrKey::Name, Cell::int(1)).unwrap_err();
        assert_eq!(
            err,
            CoreError::TypeMismatch {
                key: AttrKey::Name,
                expected: TypeTag::Text,
                found: TypeTag::Int,
            }
        );
        assert_eq!(table.text(AttrKey::Name), Some("kept"));
    }

    #[test]
    fn zero_capacity_table_refuses_everything() {
        let mut table = AttrTable::with_capacity(0);
        assert!(table.set(AttrKey::Glyph, Cell::text("@")).is_err());
        assert!(table.is_empty());
    }

    #[test]
    fn defaults_cover_every_key_in_order() {
        let table = AttrTable::defaults_for(LayerCategory::Earth);
        let keys: Vec<_> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, AttrKey::ALL.to_vec());
        assert_eq!(table.category(AttrKey::Category), Some(ObjectCategory::Grass));
        assert_eq!(table.flag(AttrKey::CanMove), Some(false));
    }

    #[test]
    fn set_default_overwrites() {
        let mut table = AttrTable::with_capacity(1);
        table.set(AttrKey::Opacity, Cell::float(0.75)).unwrap();
        table
            .set_default(AttrKey::Opacity, LayerCategory::Floater)
            .unwrap();
        assert_eq!(table.float(AttrKey::Opacity), Some(0.0));
    }

    #[test]
    fn remove_preserves_order_of_rest() {
        let mut table = AttrTable::defaults_for(LayerCategory::Floater);
        let removed = table.remove(AttrKey::Glyph).unwrap();
        assert_eq!(removed.as_text(), Some(" "));
        assert!(!table.contains(AttrKey::Glyph));
        let keys: Vec<_> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(keys[..2], [AttrKey::Name, AttrKey::Description]);
        assert_eq!(keys[2], AttrKey::CanMove);
    }

    #[test]
    fn typed_getter_on_wrong_type_is_none() {
        let table = AttrTable::defaults_for(LayerCategory::Earth);
        assert_eq!(table.int(AttrKey::Name), None);
        assert_eq!(table.text(AttrKey::Health), None);
    }

    #[test]
    fn equality_ignores_capacity_but_not_order() {
        let mut small = AttrTable::with_capacity(1);
        small.set(AttrKey::Name, Cell::text("x")).unwrap();
        let mut roomy = AttrTable::with_capacity(AttrKey::COUNT);
        roomy.set(AttrKey::Name, Cell::text("x")).unwrap();
        assert_eq!(small, roomy);

        let mut ab = AttrTable::with_capacity(2);
        ab.set(AttrKey::Glyph, Cell::text("@")).unwrap();
        ab.set(AttrKey::Health, Cell::int(2)).unwrap();
        let mut ba = AttrTable::with_capacity(2);
        ba.set(AttrKey::Health, Cell::int(2)).unwrap();
        ba.set(AttrKey::Glyph, Cell::text("@")).unwrap();
        assert_ne!(ab, ba);
    }

    #[test]
    fn replacement_keeps_declared_type() {
        let mut table = AttrTable::defaults_for(LayerCategory::Earth);
        assert!(table.set(AttrKey::Name, Cell::int(5)).is_err());
        for (key, cell) in table.iter() {
            assert_eq!(cell.type_tag(), key.declared_type());
        }
    }
}
