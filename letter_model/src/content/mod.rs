//! Content definitions - the addressable units of the branching graph.
//!
//! A node is identified by the pair `(id, language)`: the same id carries
//! one variant per language, and ids are only unique within a language.

mod choice;
mod node;

pub use choice::*;
pub use node::*;

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// The true key of a content node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeKey {
    pub id: String,
    pub language: Language,
}

impl NodeKey {
    /// Create a key for one node variant.
    pub fn new(id: impl Into<String>, language: Language) -> Self {
        Self {
            id: id.into(),
            language,
        }
    }
}

impl std::fmt::Display for NodeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.id, self.language)
    }
}
