//! Choice definitions - user-selectable edges between nodes.

use serde::{Deserialize, Serialize};

/// One selectable edge out of a node.
///
/// The serialized field names follow the external store's edge-list format
/// (`id` / `text` / `nextQuestion`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Identifier, unique within the owning node's option list.
    pub id: String,

    /// Display label.
    #[serde(rename = "text")]
    pub label: String,

    /// Target node id. May reference a node absent from the current
    /// language's data; the target is resolved later, never validated at
    /// edge creation.
    #[serde(rename = "nextQuestion")]
    pub next_node_id: String,
}

impl Choice {
    /// Create a new choice.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        next_node_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            next_node_id: next_node_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_creation() {
        let choice = Choice::new("a", "Go somewhere", "services");
        assert_eq!(choice.id, "a");
        assert_eq!(choice.label, "Go somewhere");
        assert_eq!(choice.next_node_id, "services");
    }

    #[test]
    fn test_choice_wire_format() {
        let raw = r#"{"id":"option1","text":"Learn About Our Services","nextQuestion":"services"}"#;
        let choice: Choice = serde_json::from_str(raw).unwrap();

        assert_eq!(choice.id, "option1");
        assert_eq!(choice.label, "Learn About Our Services");
        assert_eq!(choice.next_node_id, "services");
    }

    #[test]
    fn test_choice_serializes_wire_names() {
        let choice = Choice::new("web", "Web Development", "web-details");
        let raw = serde_json::to_string(&choice).unwrap();

        assert!(raw.contains("\"text\""));
        assert!(raw.contains("\"nextQuestion\""));
        assert!(!raw.contains("next_node_id"));
    }
}
