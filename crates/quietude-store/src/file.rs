//! Path-based save/load helpers.

use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::Path;

use quietude_grid::Area;
use tempfile::NamedTempFile;

use crate::error::StoreError;
use crate::reader::AreaReader;
use crate::writer::AreaWriter;

/// Write `area` to `path`, replacing any existing file.
///
/// The whole stream is encoded before the filesystem is touched, then
/// written to a temporary file beside `path` and renamed over it. A refused
/// or failed save leaves any previous file intact. Missing parent
/// directories are created.
pub fn save_area(path: impl AsRef<Path>, area: &Area) -> Result<(), StoreError> {
    let path = path.as_ref();
    let mut writer = AreaWriter::new(Vec::new(), area.dims())?;
    writer.write_area(area)?;
    let bytes = writer.into_inner();

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent)?;
            parent
        }
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(&bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    tracing::debug!(path = %path.display(), dims = ?area.dims(), bytes = bytes.len(), "area saved");
    Ok(())
}

/// Read the first area from the file at `path`.
///
/// # Errors
///
/// [`StoreError::Malformed`] if the file holds a header but no area.
pub fn load_area(path: impl AsRef<Path>) -> Result<Area, StoreError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut reader = AreaReader::open(BufReader::new(file))?;
    let area = reader
        .next_area()?
        .ok_or_else(|| StoreError::malformed("file holds no area"))?;
    tracing::debug!(path = %path.display(), dims = ?area.dims(), "area loaded");
    Ok(area)
}
