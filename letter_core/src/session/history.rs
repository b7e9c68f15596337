//! Traversal history - the backward-navigation stack.

use serde::{Deserialize, Serialize};

/// Ordered stack of previously visited node ids, owned by exactly one
/// session. Grows by one on every forward navigation, shrinks by one on
/// "go back", and empties when the session returns to the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalHistory {
    entries: Vec<String>,
}

impl TraversalHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a node the session is navigating away from.
    pub fn push(&mut self, node_id: impl Into<String>) {
        self.entries.push(node_id.into());
    }

    /// Take back the most recently recorded node.
    pub fn pop(&mut self) -> Option<String> {
        self.entries.pop()
    }

    /// The node "go back" would land on.
    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The recorded ids, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_order() {
        let mut history = TraversalHistory::new();
        history.push("home");
        history.push("services");

        assert_eq!(history.len(), 2);
        assert_eq!(history.last(), Some("services"));
        assert_eq!(history.pop(), Some("services".to_string()));
        assert_eq!(history.pop(), Some("home".to_string()));
        assert_eq!(history.pop(), None);
    }

    #[test]
    fn test_clear() {
        let mut history = TraversalHistory::new();
        history.push("home");
        history.clear();

        assert!(history.is_empty());
        assert_eq!(history.last(), None);
    }

    #[test]
    fn test_entries_oldest_first() {
        let mut history = TraversalHistory::new();
        history.push("home");
        history.push("services");

        assert_eq!(history.entries(), ["home", "services"]);
    }
}
