//! Content node definitions.

use serde::{Deserialize, Serialize};

use super::{Choice, NodeKey};
use crate::language::Language;

/// A prompt carrying its own option list, shown alongside a node whose
/// main body is prose. The external row format has no column for this,
/// so only static-table nodes carry one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryPrompt {
    /// The prompt text displayed above the option list.
    #[serde(rename = "question")]
    pub prompt: String,

    pub options: Vec<Choice>,
}

impl SecondaryPrompt {
    /// Create a secondary prompt with its option list.
    pub fn new(prompt: impl Into<String>, options: Vec<Choice>) -> Self {
        Self {
            prompt: prompt.into(),
            options,
        }
    }
}

/// One addressable unit of branching content.
///
/// A node is immutable once constructed: resolution selects or produces
/// nodes, it never mutates one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentNode {
    /// Stable identifier, unique within a language. The pair
    /// `(id, language)` is the true key.
    pub id: String,

    pub language: Language,

    pub title: String,

    /// Main display text: the node's question, or prose for nodes that
    /// carry a secondary prompt instead.
    pub body: String,

    /// Whether this node carries supplement ("letter") content.
    pub has_supplement: bool,

    /// Meaningful only when `has_supplement` is true.
    pub supplement_body: String,

    /// Primary outgoing edges (may be empty).
    pub options: Vec<Choice>,

    /// Present only on nodes whose main body is unrelated to any option
    /// list. Retained alongside `options` for data fidelity; at most one
    /// of the two is the active choice set.
    pub secondary: Option<SecondaryPrompt>,
}

impl ContentNode {
    /// Create a new empty node for the given key.
    pub fn new(id: impl Into<String>, language: Language) -> Self {
        Self {
            id: id.into(),
            language,
            title: String::new(),
            body: String::new(),
            has_supplement: false,
            supplement_body: String::new(),
            options: Vec::new(),
            secondary: None,
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the body text.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Attach supplement content.
    pub fn with_supplement(mut self, body: impl Into<String>) -> Self {
        self.has_supplement = true;
        self.supplement_body = body.into();
        self
    }

    /// Add a primary choice.
    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.options.push(choice);
        self
    }

    /// Attach a secondary prompt.
    pub fn with_secondary(mut self, secondary: SecondaryPrompt) -> Self {
        self.secondary = Some(secondary);
        self
    }

    /// The node's key.
    pub fn key(&self) -> NodeKey {
        NodeKey::new(self.id.clone(), self.language)
    }

    /// Find a choice by id: primary options are searched before the
    /// secondary prompt's, and the first id match wins (duplicate ids are
    /// a data-quality fault, resolved deterministically by source order).
    pub fn find_choice(&self, option_id: &str) -> Option<&Choice> {
        self.options
            .iter()
            .find(|choice| choice.id == option_id)
            .or_else(|| {
                self.secondary
                    .as_ref()
                    .and_then(|secondary| secondary.options.iter().find(|choice| choice.id == option_id))
            })
    }

    /// The option list a view should present: the primary list when it is
    /// non-empty, otherwise the secondary prompt's.
    pub fn active_options(&self) -> &[Choice] {
        if !self.options.is_empty() {
            &self.options
        } else if let Some(secondary) = &self.secondary {
            &secondary.options
        } else {
            &[]
        }
    }
}
