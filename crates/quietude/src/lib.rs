//! Quietude: typed attribute grids and the walk mode of a text-driven
//! exploration game.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Quietude sub-crates. For most users, adding `quietude` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use quietude::prelude::*;
//!
//! // A logic collaborator that leaves on the first Quit.
//! struct QuitOnly;
//! impl Logic for QuitOnly {
//!     fn update(&mut self, _area: &mut Area, command: WalkCommand) -> Result<TickOutcome, PhaseError> {
//!         Ok(if command == WalkCommand::Quit { TickOutcome::Exit } else { TickOutcome::Continue })
//!     }
//! }
//! struct Blind;
//! impl Renderer for Blind {
//!     fn render(&mut self, _area: &Area, _tick: u64) -> Result<(), PhaseError> { Ok(()) }
//! }
//! struct AlwaysQuit;
//! impl InputSource for AlwaysQuit {
//!     fn poll(&mut self) -> Result<i32, PhaseError> { Ok(WalkCommand::Quit.code()) }
//! }
//!
//! // A 4×4 meadow with a named stone in the corner.
//! let dims = GridDims::new(4, 4).unwrap();
//! let mut area = Area::with_defaults(dims).unwrap();
//! area.earth_mut()
//!     .slot_attrs_mut(15)
//!     .unwrap()
//!     .set(AttrKey::Name, Cell::text("standing stone"))
//!     .unwrap();
//!
//! let config = WalkConfig { size_y: 4, size_x: 4, ..WalkConfig::default() };
//! let mut mode = WalkMode::new(config).unwrap();
//! mode.init(Cell::area(area)).unwrap();
//!
//! let (mut r, mut i, mut l) = (Blind, AlwaysQuit, QuitOnly);
//! let mut collab = Collaborators::new(&mut r, &mut i, &mut l);
//! assert_eq!(mode.tick(&mut collab).unwrap(), TickOutcome::Exit);
//!
//! let area = mode.end().unwrap();
//! assert_eq!(area.earth().slot_attrs(15).unwrap().text(AttrKey::Name), Some("standing stone"));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `quietude-core` | Type tags, keys, categories, dims, errors |
//! | [`grid`] | `quietude-grid` | Cells, attribute tables, layers, areas |
//! | [`store`] | `quietude-store` | Binary persistence of areas |
//! | [`walk`] | `quietude-walk` | Walk mode lifecycle, tick protocol, config |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Closed vocabularies and errors (`quietude-core`).
///
/// [`types::TypeTag`], [`types::AttrKey`], [`types::ObjectCategory`],
/// [`types::LayerCategory`] and the coordinate transform on
/// [`types::GridDims`].
pub use quietude_core as types;

/// Object storage (`quietude-grid`).
///
/// [`grid::Cell`] values live in [`grid::AttrTable`]s, which live in the
/// slots of a [`grid::GridLayer`]; two layers make an [`grid::Area`].
pub use quietude_grid as grid;

/// Binary persistence (`quietude-store`).
///
/// Stream functions such as [`store::write_area`], the framed
/// [`store::AreaWriter`] / [`store::AreaReader`], and file helpers.
pub use quietude_store as store;

/// The walk mode (`quietude-walk`).
///
/// [`walk::WalkMode`] owns the handed-over area and runs the tick protocol
/// against user collaborators.
pub use quietude_walk as walk;

/// Common imports for typical Quietude usage.
///
/// ```rust
/// use quietude::prelude::*;
/// ```
pub mod prelude {
    // Core vocabularies
    pub use quietude_core::{
        AttrKey, CoreError, GridDims, LayerCategory, ObjectCategory, Severity, TypeTag,
    };

    // Object storage
    pub use quietude_grid::{Area, AttrTable, Cell, Datum, GridLayer, Slot};

    // Persistence
    pub use quietude_store::{load_area, save_area, AreaReader, AreaWriter, StoreError};

    // Walk mode
    pub use quietude_walk::{
        Collaborators, InputSource, Logic, PhaseError, Renderer, TickOutcome, WalkCommand,
        WalkConfig, WalkError, WalkMode,
    };
}
