//! Primitive binary encode/decode and the stream header.
//!
//! All integers are little-endian. There is no alignment padding and no
//! self-describing schema.

use std::io::{ErrorKind, Read, Write};

use quietude_core::GridDims;

use crate::error::StoreError;
use crate::{FORMAT_VERSION, MAGIC, MAX_LAYER_SIZE};

// ── Primitive writers ───────────────────────────────────────────

/// Write a single byte.
pub fn write_u8(w: &mut dyn Write, v: u8) -> Result<(), StoreError> {
    w.write_all(&[v])?;
    Ok(())
}

/// Write a little-endian u32.
pub fn write_u32_le(w: &mut dyn Write, v: u32) -> Result<(), StoreError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a length as a little-endian u32.
///
/// # Errors
///
/// [`StoreError::Malformed`] if `len` does not fit in a u32.
pub fn write_len(w: &mut dyn Write, len: usize, what: &str) -> Result<(), StoreError> {
    let len = u32::try_from(len)
        .map_err(|_| StoreError::malformed(format!("{what} length {len} exceeds u32")))?;
    write_u32_le(w, len)
}

// ── Primitive readers ───────────────────────────────────────────

/// Read a single byte.
pub fn read_u8(r: &mut dyn Read) -> Result<u8, StoreError> {
    let mut buf = [0u8; 1];
    r.read_exact(&mut buf)?;
    Ok(buf[0])
}

/// Read a little-endian u32.
pub fn read_u32_le(r: &mut dyn Read) -> Result<u32, StoreError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

/// Read a little-endian u32, or `None` on a clean end of stream.
///
/// Reads byte-by-byte so that zero bytes available (end of stream) can be
/// told apart from a truncated value.
pub fn read_u32_le_or_eof(r: &mut dyn Read) -> Result<Option<u32>, StoreError> {
    let mut buf = [0u8; 4];
    let mut filled = 0;
    while filled < 4 {
        match r.read(&mut buf[filled..]) {
            Ok(0) if filled == 0 => return Ok(None),
            Ok(0) => {
                return Err(StoreError::malformed(format!(
                    "truncated u32: got {filled} of 4 bytes"
                )))
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(StoreError::Io(e)),
        }
    }
    Ok(Some(u32::from_le_bytes(buf)))
}

/// Read exactly `len` bytes.
///
/// The buffer grows with the data actually read, so a corrupt length
/// cannot force a huge allocation up front.
pub fn read_bytes(r: &mut dyn Read, len: usize) -> Result<Vec<u8>, StoreError> {
    let mut buf = Vec::new();
    let got = (&mut *r).take(len as u64).read_to_end(&mut buf)?;
    if got != len {
        return Err(StoreError::malformed(format!(
            "truncated payload: got {got} of {len} bytes"
        )));
    }
    Ok(buf)
}

// ── Header encode/decode ────────────────────────────────────────

/// Encode the stream header: magic, version, then the grid dimensions.
///
/// # Errors
///
/// [`StoreError::Malformed`] if `dims` exceeds [`MAX_LAYER_SIZE`]; nothing
/// is written.
pub fn encode_header(w: &mut dyn Write, dims: GridDims) -> Result<(), StoreError> {
    check_layer_size(dims)?;
    w.write_all(&MAGIC)?;
    write_u8(w, FORMAT_VERSION)?;
    write_u32_le(w, dims.size_y())?;
    write_u32_le(w, dims.size_x())?;
    Ok(())
}

/// Decode and validate the stream header, returning the grid dimensions.
pub fn decode_header(r: &mut dyn Read) -> Result<GridDims, StoreError> {
    let mut magic = [0u8; 4];
    r.read_exact(&mut magic)?;
    if magic != MAGIC {
        return Err(StoreError::InvalidMagic);
    }

    let version = read_u8(r)?;
    if version != FORMAT_VERSION {
        return Err(StoreError::UnsupportedVersion { found: version });
    }

    let size_y = read_u32_le(r)?;
    let size_x = read_u32_le(r)?;
    let dims = GridDims::new(size_y, size_x)?;
    check_layer_size(dims)?;
    Ok(dims)
}

fn check_layer_size(dims: GridDims) -> Result<(), StoreError> {
    if dims.layer_size() > MAX_LAYER_SIZE {
        return Err(StoreError::malformed(format!(
            "{} x {} layer exceeds {MAX_LAYER_SIZE} slots",
            dims.size_y(),
            dims.size_x()
        )));
    }
    Ok(())
}
