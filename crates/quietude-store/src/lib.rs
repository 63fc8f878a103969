//! Binary persistence for Quietude areas.
//!
//! Layers are serialized slot by slot as attribute tables; coordinates are
//! implied by slot order. Any `Write`/`Read` works as the sink or source.
//!
//! # Architecture
//!
//! - [`protocol`] writes and reads cells, tables, layers and headerless areas
//! - [`AreaWriter`] and [`AreaReader`] frame areas behind a header
//! - [`save_area`] and [`load_area`] wrap the framed format for files
//!
//! # Format
//!
//! ```text
//! [MAGIC "QWLK"] [VERSION u8] [size_y u32] [size_x u32]
//! [Area 1] [Area 2] ... [Area N]
//! ```
//!
//! Each area is its earth layer followed by its floater layer. Headers
//! declaring more than [`MAX_LAYER_SIZE`] slots per layer are refused.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod file;
pub mod protocol;
pub mod reader;
pub mod writer;

pub use error::StoreError;
pub use file::{load_area, save_area};
pub use protocol::{read_area, read_layer, read_table, write_area, write_layer, write_table};
pub use reader::{AreaIter, AreaReader};
pub use writer::AreaWriter;

/// Magic bytes at the start of every framed stream.
pub const MAGIC: [u8; 4] = *b"QWLK";

/// Current binary format version.
pub const FORMAT_VERSION: u8 = 1;

/// Largest layer (`size_y * size_x` slots) a framed stream may declare.
pub const MAX_LAYER_SIZE: usize = 1 << 24;
