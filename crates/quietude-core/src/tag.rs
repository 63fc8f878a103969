//! Value type tags for typed cells.

use std::fmt;

use crate::error::CoreError;

/// Closed set of value kinds a typed cell can hold.
///
/// Discriminants start at 1 and are stable: they are written to disk by the
/// persistence codec, so reordering variants breaks existing saves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TypeTag {
    /// Signed 32-bit integers.
    Int = 1,
    /// 64-bit floating point numbers.
    Float = 2,
    /// Booleans, one byte each on disk.
    Bool = 3,
    /// A UTF-8 character string; the element count is its byte length.
    Text = 4,
    /// Enumerated object categories, one byte each on disk.
    Category = 5,
    /// A nested area (two grid layers). Always a single element.
    Area = 6,
}

impl TypeTag {
    /// Every tag, in discriminant order.
    pub const ALL: [TypeTag; 6] = [
        TypeTag::Int,
        TypeTag::Float,
        TypeTag::Bool,
        TypeTag::Text,
        TypeTag::Category,
        TypeTag::Area,
    ];

    /// Size in bytes of one element in the raw (on-disk) representation.
    ///
    /// Returns `None` for [`TypeTag::Area`], whose body is a nested area
    /// stream rather than fixed-size elements.
    pub const fn element_size(self) -> Option<usize> {
        match self {
            Self::Int => Some(4),
            Self::Float => Some(8),
            Self::Bool | Self::Text | Self::Category => Some(1),
            Self::Area => None,
        }
    }

    /// The stable wire discriminant.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for TypeTag {
    type Error = CoreError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            1 => Ok(Self::Int),
            2 => Ok(Self::Float),
            3 => Ok(Self::Bool),
            4 => Ok(Self::Text),
            5 => Ok(Self::Category),
            6 => Ok(Self::Area),
            tag => Err(CoreError::UnknownTypeTag { tag }),
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Text => "text",
            Self::Category => "category",
            Self::Area => "area",
        };
        f.write_str(name)
    }
}
