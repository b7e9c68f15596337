//! # Letter Model
//!
//! The "Content Bible" crate - contains the node and choice types, supported
//! languages, raw-row normalization, and the embedded static fallback dataset
//! for the Interactive Letter. This crate is the single source of truth for
//! content data and does not contain any resolution logic or I/O.

pub mod content;
pub mod fallback;
pub mod language;
pub mod record;

pub use content::*;
pub use fallback::*;
pub use language::*;
pub use record::*;
