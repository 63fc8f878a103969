//! Core types for the Quietude walk mode.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! closed vocabularies every other crate agrees on: value type tags,
//! attribute keys, object and layer categories, grid dimensions with the
//! coordinate transform, and the error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dims;
pub mod error;
pub mod key;
pub mod tag;

pub use dims::GridDims;
pub use error::{CoreError, Severity};
pub use key::{AttrKey, LayerCategory, ObjectCategory};
pub use tag::TypeTag;
