//! Navigation - selecting an outgoing edge and locating the next node.

use letter_model::{Choice, ContentNode, Language};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::resolver::GraphResolver;
use crate::source::ContentSource;

/// The result of one navigation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationOutcome {
    /// Node the selection was made on.
    pub from: String,

    /// The matched choice, echoed back for display.
    pub choice: Choice,

    /// Target node id. Always present, even when the target's content
    /// cannot be resolved: a dangling edge is the caller's policy
    /// decision, not a navigation failure.
    pub next_node_id: String,

    /// Resolved target content, when any language variant exists.
    pub next_node: Option<ContentNode>,
}

/// Select an option on an already-resolved node and return the target
/// node id. Primary options are searched before the secondary prompt's;
/// the first id match wins. The id is returned even when the target node
/// does not resolve anywhere.
pub fn select_next(node: &ContentNode, option_id: &str) -> Result<String, EngineError> {
    node.find_choice(option_id)
        .map(|choice| choice.next_node_id.clone())
        .ok_or_else(|| EngineError::invalid_selection(node.id.clone(), option_id))
}

/// Applies selected options to resolved nodes.
pub struct NavigationResolver<'a, S> {
    resolver: &'a GraphResolver<S>,
}

impl<'a, S: ContentSource> NavigationResolver<'a, S> {
    pub fn new(resolver: &'a GraphResolver<S>) -> Self {
        Self { resolver }
    }

    /// Full navigation: resolve the current node, select, and best-effort
    /// resolve the destination in the same language.
    pub fn navigate(
        &self,
        node_id: &str,
        option_id: &str,
        language: Language,
    ) -> Result<NavigationOutcome, EngineError> {
        let node = self.resolver.resolve(node_id, language)?;
        let choice = node
            .find_choice(option_id)
            .cloned()
            .ok_or_else(|| EngineError::invalid_selection(node_id, option_id))?;

        let next_node = self.resolver.resolve(&choice.next_node_id, language).ok();

        Ok(NavigationOutcome {
            from: node.id,
            next_node_id: choice.next_node_id.clone(),
            choice,
            next_node,
        })
    }
}
