//! Framed area writer.
//!
//! [`AreaWriter`] streams areas to any `Write` sink after a header naming
//! the grid dimensions. The header is written immediately on construction.

use std::io::Write;

use quietude_core::GridDims;
use quietude_grid::Area;

use crate::codec::encode_header;
use crate::error::StoreError;
use crate::protocol::write_area;

/// Writes areas of one size to a byte stream.
///
/// Generic over `W: Write` so tests can use `Vec<u8>` and production
/// code can use `BufWriter<File>`.
///
/// # Examples
///
/// ```
/// use quietude_core::GridDims;
/// use quietude_grid::Area;
/// use quietude_store::{AreaReader, AreaWriter};
///
/// let dims = GridDims::new(2, 2).unwrap();
/// let area = Area::with_defaults(dims).unwrap();
///
/// let mut buf = Vec::new();
/// let mut writer = AreaWriter::new(&mut buf, dims).unwrap();
/// writer.write_area(&area).unwrap();
/// assert_eq!(writer.areas_written(), 1);
/// drop(writer);
///
/// let mut reader = AreaReader::open(buf.as_slice()).unwrap();
/// assert_eq!(reader.dims(), dims);
/// assert_eq!(reader.next_area().unwrap(), Some(area));
/// assert!(reader.next_area().unwrap().is_none());
/// ```
pub struct AreaWriter<W: Write> {
    writer: W,
    dims: GridDims,
    areas_written: u64,
}

impl<W: Write> AreaWriter<W> {
    /// Create a writer, immediately writing the header.
    pub fn new(mut writer: W, dims: GridDims) -> Result<Self, StoreError> {
        encode_header(&mut writer, dims)?;
        Ok(Self {
            writer,
            dims,
            areas_written: 0,
        })
    }

    /// Append one area.
    ///
    /// # Errors
    ///
    /// [`StoreError::DimsMismatch`] if the area is not the stream's size
    /// (nothing is written), otherwise as [`write_area`].
    pub fn write_area(&mut self, area: &Area) -> Result<(), StoreError> {
        if area.dims() != self.dims {
            return Err(StoreError::DimsMismatch {
                expected: self.dims,
                found: area.dims(),
            });
        }
        write_area(&mut self.writer, area)?;
        self.areas_written += 1;
        Ok(())
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<(), StoreError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Dimensions named in the header.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Number of areas written so far.
    pub fn areas_written(&self) -> u64 {
        self.areas_written
    }

    /// Consume the writer and return the underlying `Write` sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
