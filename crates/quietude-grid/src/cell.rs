//! Typed cells: a closed tag, an element count, and owned data.

use quietude_core::{CoreError, ObjectCategory, TypeTag};
use smallvec::{smallvec, SmallVec};

use crate::area::Area;

/// The owned payload of a [`Cell`], one variant per [`TypeTag`].
///
/// Small homogeneous runs are stored inline; almost every attribute is a
/// single element.
#[derive(Debug, PartialEq)]
pub enum Datum {
    /// Signed integers.
    Int(SmallVec<[i32; 4]>),
    /// Floating point numbers.
    Float(SmallVec<[f64; 4]>),
    /// Booleans.
    Bool(SmallVec<[bool; 4]>),
    /// A UTF-8 string.
    Text(String),
    /// Object categories.
    Category(SmallVec<[ObjectCategory; 4]>),
    /// A nested area.
    Area(Box<Area>),
}

/// A runtime-typed value with exclusive ownership of its data.
///
/// The tag is derived from the payload variant, so the two can never
/// disagree. Cells are move-only: storing one in a table transfers it.
///
/// # Examples
///
/// ```
/// use quietude_core::TypeTag;
/// use quietude_grid::Cell;
///
/// let cell = Cell::text("lantern");
/// assert_eq!(cell.type_tag(), TypeTag::Text);
/// assert_eq!(cell.count(), 7);
/// assert_eq!(cell.as_text(), Some("lantern"));
/// ```
#[derive(Debug, PartialEq)]
pub struct Cell {
    datum: Datum,
}

impl Cell {
    /// Wrap an owned payload.
    pub fn new(datum: Datum) -> Self {
        Self { datum }
    }

    /// A single integer.
    pub fn int(v: i32) -> Self {
        Self::new(Datum::Int(smallvec![v]))
    }

    /// A run of integers.
    pub fn ints(values: impl IntoIterator<Item = i32>) -> Self {
        Self::new(Datum::Int(values.into_iter().collect()))
    }

    /// A single float.
    pub fn float(v: f64) -> Self {
        Self::new(Datum::Float(smallvec![v]))
    }

    /// A single boolean.
    pub fn flag(v: bool) -> Self {
        Self::new(Datum::Bool(smallvec![v]))
    }

    /// A string.
    pub fn text(s: impl Into<String>) -> Self {
        Self::new(Datum::Text(s.into()))
    }

    /// A single object category.
    pub fn category(c: ObjectCategory) -> Self {
        Self::new(Datum::Category(smallvec![c]))
    }

    /// A nested area, taking ownership of it.
    pub fn area(area: Area) -> Self {
        Self::new(Datum::Area(Box::new(area)))
    }

    /// Decode a cell from its raw little-endian element bytes.
    ///
    /// `bytes` must hold exactly `count * tag.element_size()` bytes.
    ///
    /// # Errors
    ///
    /// - [`CoreError::CellSizeMismatch`] if the length is wrong.
    /// - [`CoreError::MalformedData`] for invalid UTF-8, a bool byte other
    ///   than 0 or 1, or an [`TypeTag::Area`] tag (areas have no raw form).
    /// - [`CoreError::UnknownCategory`] for an unknown category byte.
    pub fn from_raw(tag: TypeTag, count: usize, bytes: &[u8]) -> Result<Self, CoreError> {
        let datum = match tag {
            TypeTag::Int => {
                check_len(tag, count, bytes)?;
                Datum::Int(
                    bytes
                        .chunks_exact(4)
                        .map(|c| i32::from_le_bytes([c[0], c[1], c[2], c[3]]))
                        .collect(),
                )
            }
            TypeTag::Float => {
                check_len(tag, count, bytes)?;
                Datum::Float(
                    bytes
                        .chunks_exact(8)
                        .map(|c| {
                            let mut buf = [0u8; 8];
                            buf.copy_from_slice(c);
                            f64::from_le_bytes(buf)
                        })
                        .collect(),
                )
            }
            TypeTag::Bool => {
                check_len(tag, count, bytes)?;
                let flags = bytes
                    .iter()
                    .map(|&b| match b {
                        0 => Ok(false),
                        1 => Ok(true),
                        other => Err(CoreError::MalformedData {
                            tag,
                            reason: format!("bool byte {other}"),
                        }),
                    })
                    .collect::<Result<_, _>>()?;
                Datum::Bool(flags)
            }
            TypeTag::Text => {
                check_len(tag, count, bytes)?;
                let s = String::from_utf8(bytes.to_vec()).map_err(|e| CoreError::MalformedData {
                    tag,
                    reason: format!("invalid UTF-8: {e}"),
                })?;
                Datum::Text(s)
            }
            TypeTag::Category => {
                check_len(tag, count, bytes)?;
                let cats = bytes
                    .iter()
                    .map(|&b| ObjectCategory::try_from(b))
                    .collect::<Result<_, _>>()?;
                Datum::Category(cats)
            }
            TypeTag::Area => {
                return Err(CoreError::MalformedData {
                    tag,
                    reason: "nested areas have no raw element form".into(),
                })
            }
        };
        Ok(Self { datum })
    }

    /// Encode the elements to raw little-endian bytes.
    ///
    /// Returns `None` for nested areas, which are streamed separately.
    pub fn to_raw_bytes(&self) -> Option<Vec<u8>> {
        let bytes = match &self.datum {
            Datum::Int(v) => v.iter().flat_map(|n| n.to_le_bytes()).collect(),
            Datum::Float(v) => v.iter().flat_map(|n| n.to_le_bytes()).collect(),
            Datum::Bool(v) => v.iter().map(|&b| u8::from(b)).collect(),
            Datum::Text(s) => s.as_bytes().to_vec(),
            Datum::Category(v) => v.iter().map(|c| c.as_u8()).collect(),
            Datum::Area(_) => return None,
        };
        Some(bytes)
    }

    /// The tag of the held payload.
    pub fn type_tag(&self) -> TypeTag {
        match &self.datum {
            Datum::Int(_) => TypeTag::Int,
            Datum::Float(_) => TypeTag::Float,
            Datum::Bool(_) => TypeTag::Bool,
            Datum::Text(_) => TypeTag::Text,
            Datum::Category(_) => TypeTag::Category,
            Datum::Area(_) => TypeTag::Area,
        }
    }

    /// Number of elements. Byte length for text, 1 for a nested area.
    pub fn count(&self) -> usize {
        match &self.datum {
            Datum::Int(v) => v.len(),
            Datum::Float(v) => v.len(),
            Datum::Bool(v) => v.len(),
            Datum::Text(s) => s.len(),
            Datum::Category(v) => v.len(),
            Datum::Area(_) => 1,
        }
    }

    /// Borrow the payload.
    pub fn datum(&self) -> &Datum {
        &self.datum
    }

    /// The string, if this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match &self.datum {
            Datum::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The integers, if this is an int cell.
    pub fn as_ints(&self) -> Option<&[i32]> {
        match &self.datum {
            Datum::Int(v) => Some(v),
            _ => None,
        }
    }

    /// The floats, if this is a float cell.
    pub fn as_floats(&self) -> Option<&[f64]> {
        match &self.datum {
            Datum::Float(v) => Some(v),
            _ => None,
        }
    }

    /// The booleans, if this is a bool cell.
    pub fn as_bools(&self) -> Option<&[bool]> {
        match &self.datum {
            Datum::Bool(v) => Some(v),
            _ => None,
        }
    }

    /// The categories, if this is a category cell.
    pub fn as_categories(&self) -> Option<&[ObjectCategory]> {
        match &self.datum {
            Datum::Category(v) => Some(v),
            _ => None,
        }
    }

    /// First integer of an int cell.
    pub fn first_int(&self) -> Option<i32> {
        self.as_ints().and_then(|v| v.first().copied())
    }

    /// First float of a float cell.
    pub fn first_float(&self) -> Option<f64> {
        self.as_floats().and_then(|v| v.first().copied())
    }

    /// First boolean of a bool cell.
    pub fn first_bool(&self) -> Option<bool> {
        self.as_bools().and_then(|v| v.first().copied())
    }

    /// First category of a category cell.
    pub fn first_category(&self) -> Option<ObjectCategory> {
        self.as_categories().and_then(|v| v.first().copied())
    }

    /// The nested area, if this is an area cell.
    pub fn as_area(&self) -> Option<&Area> {
        match &self.datum {
            Datum::Area(a) => Some(a),
            _ => None,
        }
    }

    /// Take the nested area out, consuming the wrapper.
    ///
    /// Returns the cell unchanged if it holds anything else.
    pub fn into_area(self) -> Result<Area, Cell> {
        match self.datum {
            Datum::Area(a) => Ok(*a),
            datum => Err(Self { datum }),
        }
    }
}

fn check_len(tag: TypeTag, count: usize, bytes: &[u8]) -> Result<(), CoreError> {
    let expected = tag
        .element_size()
        .and_then(|size| count.checked_mul(size));
    if expected != Some(bytes.len()) {
        return Err(CoreError::CellSizeMismatch {
            tag,
            count,
            bytes: bytes.len(),
        });
    }
    Ok(())
}
