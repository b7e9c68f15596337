//! Terminal failures surfaced to callers.
//!
//! Store unavailability is deliberately absent here: the resolver absorbs
//! it into the fallback chain and only reports `NotFound` once every tier
//! is exhausted.

use letter_model::Language;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// No variant of the node exists in the external store or the static
    /// table, in any language.
    #[error("no content for node '{node_id}' (requested language '{language}')")]
    NotFound { node_id: String, language: Language },

    /// The node exists but carries no choice with the selected id.
    #[error("node '{node_id}' has no option '{option_id}'")]
    InvalidSelection { node_id: String, option_id: String },
}

impl EngineError {
    pub fn not_found(node_id: impl Into<String>, language: Language) -> Self {
        EngineError::NotFound {
            node_id: node_id.into(),
            language,
        }
    }

    pub fn invalid_selection(node_id: impl Into<String>, option_id: impl Into<String>) -> Self {
        EngineError::InvalidSelection {
            node_id: node_id.into(),
            option_id: option_id.into(),
        }
    }
}
