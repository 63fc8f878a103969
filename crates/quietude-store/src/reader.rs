//! Framed area reader.
//!
//! [`AreaReader`] reads areas from any `Read` source. The header is
//! validated on construction.

use std::io::Read;

use quietude_core::GridDims;
use quietude_grid::Area;

use crate::codec::{decode_header, read_u32_le_or_eof};
use crate::error::StoreError;
use crate::protocol::read_area;

/// Reads areas of one size from a byte stream.
///
/// Generic over `R: Read` so tests can use `&[u8]` and production
/// code can use `BufReader<File>`.
pub struct AreaReader<R: Read> {
    reader: R,
    dims: GridDims,
    areas_read: u64,
}

impl<R: Read> AreaReader<R> {
    /// Open a stream, reading and validating the header.
    pub fn open(mut reader: R) -> Result<Self, StoreError> {
        let dims = decode_header(&mut reader)?;
        Ok(Self {
            reader,
            dims,
            areas_read: 0,
        })
    }

    /// Dimensions named in the header.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Read the next area, or `None` if the stream is exhausted.
    ///
    /// A stream that ends part-way through an area is an error.
    pub fn next_area(&mut self) -> Result<Option<Area>, StoreError> {
        // The first u32 of an area is the entry count of its first table.
        let Some(first) = read_u32_le_or_eof(&mut self.reader)? else {
            return Ok(None);
        };
        let head = first.to_le_bytes();
        let mut stream = head.as_slice().chain(&mut self.reader);
        let area = read_area(&mut stream, self.dims)?;
        self.areas_read += 1;
        Ok(Some(area))
    }

    /// Number of areas read so far.
    pub fn areas_read(&self) -> u64 {
        self.areas_read
    }

    /// Convert into an area iterator.
    pub fn areas(self) -> AreaIter<R> {
        AreaIter {
            inner: self,
            done: false,
        }
    }
}

/// Iterator adapter over the areas of a stream.
pub struct AreaIter<R: Read> {
    inner: AreaReader<R>,
    done: bool,
}

impl<R: Read> Iterator for AreaIter<R> {
    type Item = Result<Area, StoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.inner.next_area() {
            Ok(Some(area)) => Some(Ok(area)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
