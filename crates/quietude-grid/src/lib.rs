//! Object storage for the Quietude walk mode.
//!
//! Everything an area knows about its tiles lives here:
//!
//! ```text
//! Area
//! ├── GridLayer (earth: terrain plane)
//! │   └── Slot[0..index_ok] → (y, x, AttrTable)
//! │                                   └── AttrKey → Cell
//! └── GridLayer (floater: movable entity plane)
//!     └── ...
//! ```
//!
//! # Ownership
//!
//! Every level owns the level below it. Handing a [`Cell`] to
//! [`AttrTable::set`] or an [`AttrTable`] to [`GridLayer::slot_set`] moves
//! it, and a refused argument is dropped rather than handed back, so a value
//! is never owned twice and never leaks. Dropping an [`Area`] tears down the
//! floater layer, then the earth layer.
//!
//! # Fill-then-freeze
//!
//! Layers only grow, one slot at a time, in increasing index order. A layer
//! is complete once every slot is populated; only complete layers can be
//! persisted.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod area;
pub mod attr;
pub mod cell;
pub mod defaults;
pub mod layer;

pub use area::Area;
pub use attr::AttrTable;
pub use cell::{Cell, Datum};
pub use defaults::default_cell;
pub use layer::{GridLayer, Slot, PREALLOC_SLOTS};
