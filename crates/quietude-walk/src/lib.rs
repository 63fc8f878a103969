//! The Quietude walk mode.
//!
//! A mode driver hands over one [`Cell`](quietude_grid::Cell) holding an
//! [`Area`](quietude_grid::Area) via [`WalkMode::init`], advances the game
//! with [`WalkMode::tick`], and takes the area back with [`WalkMode::end`].
//!
//! Each tick calls three collaborators in a fixed order:
//!
//! 1. output: [`Renderer::render`] draws the area;
//! 2. input: [`InputSource::poll`] yields a raw code, validated into a
//!    [`WalkCommand`];
//! 3. logic: [`Logic::update`] applies the command.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod collab;
pub mod command;
pub mod config;
pub mod error;
pub mod session;

pub use collab::{Collaborators, InputSource, Logic, Renderer, TickOutcome};
pub use command::WalkCommand;
pub use config::{ConfigError, WalkConfig};
pub use error::{Phase, PhaseError, WalkError};
pub use session::{WalkMode, WalkSession};
