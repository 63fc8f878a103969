//! Error types for cells, attribute tables and grids.
//!
//! Errors fall into two tiers. Reported errors are malformed requests the
//! caller can recover from (bad index, full layer, wrong value type).
//! Fatal errors mean structural data could not be trusted, typically bytes
//! from storage naming a tag outside the closed enumerations; the value
//! being built is discarded.

use thiserror::Error;

use crate::dims::GridDims;
use crate::key::{AttrKey, LayerCategory};
use crate::tag::TypeTag;

/// Which tier an error belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Malformed argument or refused request; state is unchanged.
    Reported,
    /// Structural invariant broken; the partially built value was dropped.
    Fatal,
}

/// Errors from typed cells, attribute tables, layers and areas.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum CoreError {
    /// A slot or linear index outside `[0, len)`.
    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Exclusive upper bound.
        len: usize,
    },
    /// A coordinate outside the grid.
    #[error("coordinate ({y}, {x}) out of bounds for {size_y}x{size_x} grid")]
    CoordOutOfBounds {
        /// Row.
        y: i32,
        /// Column.
        x: i32,
        /// Grid rows.
        size_y: u32,
        /// Grid columns.
        size_x: u32,
    },
    /// Grid dimensions that cannot describe a layer.
    #[error("invalid grid dimensions {size_y}x{size_x}")]
    InvalidDims {
        /// Requested rows.
        size_y: u32,
        /// Requested columns.
        size_x: u32,
    },
    /// The layer already holds `capacity` slots.
    #[error("layer full: all {capacity} slots populated")]
    LayerFull {
        /// Slot capacity of the layer.
        capacity: usize,
    },
    /// A new key does not fit in the attribute table.
    #[error("attribute table full (capacity {capacity}) while inserting {key}")]
    TableFull {
        /// Capacity declared at table creation.
        capacity: usize,
        /// Key that was refused.
        key: AttrKey,
    },
    /// A cell's tag differs from the key's declared tag.
    #[error("attribute {key} expects {expected}, got {found}")]
    TypeMismatch {
        /// Key being set.
        key: AttrKey,
        /// Declared type of the key.
        expected: TypeTag,
        /// Type carried by the rejected cell.
        found: TypeTag,
    },
    /// Earth and floater layers of an area disagree on dimensions.
    #[error("layer dimensions differ: earth {earth:?}, floater {floater:?}")]
    DimensionMismatch {
        /// Earth layer dims.
        earth: GridDims,
        /// Floater layer dims.
        floater: GridDims,
    },
    /// A layer was supplied in the wrong plane.
    #[error("expected {expected} layer, got {found} layer")]
    CategoryMismatch {
        /// Plane the layer was supplied for.
        expected: LayerCategory,
        /// Plane the layer was created for.
        found: LayerCategory,
    },
    /// A type tag byte outside the closed enumeration.
    #[error("unknown type tag {tag}")]
    UnknownTypeTag {
        /// The unrecognised tag.
        tag: u8,
    },
    /// An attribute key byte outside the closed enumeration.
    #[error("unknown attribute key {tag}")]
    UnknownKey {
        /// The unrecognised key.
        tag: u8,
    },
    /// An object category byte outside the closed enumeration.
    #[error("unknown object category {tag}")]
    UnknownCategory {
        /// The unrecognised category.
        tag: u8,
    },
    /// Raw cell data is not `count * element_size` bytes long.
    #[error("{tag} cell of {count} elements cannot hold {bytes} bytes")]
    CellSizeMismatch {
        /// Tag of the cell.
        tag: TypeTag,
        /// Declared element count.
        count: usize,
        /// Bytes supplied.
        bytes: usize,
    },
    /// Raw cell data violates the element encoding (bad UTF-8, bool not 0/1).
    #[error("malformed {tag} data: {reason}")]
    MalformedData {
        /// Tag of the cell.
        tag: TypeTag,
        /// What went wrong.
        reason: String,
    },
}

impl CoreError {
    /// Tier of this error.
    pub fn severity(&self) -> Severity {
        match self {
            Self::UnknownTypeTag { .. }
            | Self::UnknownKey { .. }
            | Self::UnknownCategory { .. }
            | Self::CellSizeMismatch { .. }
            | Self::MalformedData { .. } => Severity::Fatal,
            _ => Severity::Reported,
        }
    }
}
