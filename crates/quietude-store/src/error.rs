//! Error types for area persistence.

use std::io;

use quietude_core::{CoreError, GridDims, Severity};
use thiserror::Error;

/// Errors that can occur while writing or reading areas.
#[derive(Error, Debug)]
pub enum StoreError {
    /// An I/O error occurred during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The stream does not start with the expected `b"QWLK"` magic bytes.
    #[error("invalid magic bytes (expected b\"QWLK\")")]
    InvalidMagic,
    /// The format version is not supported by this build.
    #[error("unsupported format version {found}")]
    UnsupportedVersion {
        /// The version found in the stream.
        found: u8,
    },
    /// Only complete layers can be written. Nothing was written.
    #[error("layer incomplete: {filled} of {capacity} slots populated")]
    IncompleteLayer {
        /// Populated slots.
        filled: usize,
        /// Slots required.
        capacity: usize,
    },
    /// One or more slots of a layer could not be written. The remaining
    /// slots were still attempted.
    #[error("{failed_slots} slot(s) failed to write; first: {first}")]
    LayerWriteFailed {
        /// Number of slots that failed.
        failed_slots: usize,
        /// The first failure.
        first: Box<StoreError>,
    },
    /// An area's dimensions differ from those the stream was opened with.
    #[error("area is {found:?}, stream expects {expected:?}")]
    DimsMismatch {
        /// Dimensions of the stream.
        expected: GridDims,
        /// Dimensions of the area.
        found: GridDims,
    },
    /// Decoded data was rejected by the object model.
    #[error(transparent)]
    Core(#[from] CoreError),
    /// The stream could not be decoded (truncated or corrupt data).
    #[error("malformed data: {detail}")]
    Malformed {
        /// Human-readable description of what went wrong.
        detail: String,
    },
}

impl StoreError {
    /// Tier of this error.
    ///
    /// Write-side refusals are reported; anything that stopped a read is
    /// fatal, because the partially built value has been dropped.
    pub fn severity(&self) -> Severity {
        match self {
            Self::IncompleteLayer { .. }
            | Self::LayerWriteFailed { .. }
            | Self::DimsMismatch { .. } => Severity::Reported,
            _ => Severity::Fatal,
        }
    }

    pub(crate) fn malformed(detail: impl Into<String>) -> Self {
        Self::Malformed {
            detail: detail.into(),
        }
    }
}
