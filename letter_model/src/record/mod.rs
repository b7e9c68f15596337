//! Raw record normalization - turning loose spreadsheet rows into typed
//! content nodes.
//!
//! Rows arrive as untyped column-to-cell maps, one row per
//! `(id, language)`. Every field read is fallible and falls back to a
//! per-field default; a fault in one row never aborts the batch.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::{Choice, ContentNode, NodeKey};
use crate::language::Language;

/// The canonical true token for boolean-like columns. Any other value,
/// including lowercase variants, normalizes to false.
pub const TRUE_TOKEN: &str = "TRUE";

/// A fault in one raw record. Normalization absorbs these (the affected
/// node gets an empty option list); they are exposed so callers parsing a
/// single cell can observe the failure.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("malformed options list: {0}")]
    MalformedOptions(#[from] serde_json::Error),
}

/// One spreadsheet row: a loose mapping from column name to cell text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord {
    fields: BTreeMap<String, String>,
}

impl RawRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Read a field. Absent columns and blank cells both read as `None`.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    /// Read a field with an empty-string default.
    fn text(&self, name: &str) -> String {
        self.field(name).unwrap_or_default().to_string()
    }
}

/// Parse a serialized edge list (the `options` column).
pub fn parse_choices(raw: &str) -> Result<Vec<Choice>, RecordError> {
    Ok(serde_json::from_str(raw)?)
}

/// Normalize a batch of raw records into content nodes keyed by
/// `(id, language)`.
///
/// Fault isolation: rows missing an id or language, or carrying an
/// unknown language code, are skipped; a malformed options cell yields an
/// empty option list for that node only. When the same `(id, language)`
/// appears twice, the later row wins.
pub fn normalize(records: &[RawRecord]) -> HashMap<NodeKey, ContentNode> {
    let mut nodes = HashMap::new();

    for record in records {
        let Some(id) = record.field("id") else {
            continue;
        };
        let Some(language) = record.field("language").and_then(Language::from_code) else {
            continue;
        };

        let options = record
            .field("options")
            .map(|raw| parse_choices(raw).unwrap_or_default())
            .unwrap_or_default();

        // The row format carries two candidate body columns; the question
        // wins when both are present.
        let body = record
            .field("question")
            .or_else(|| record.field("content"))
            .unwrap_or_default()
            .to_string();

        let has_supplement = record.field("hasLetter") == Some(TRUE_TOKEN);

        let node = ContentNode {
            id: id.to_string(),
            language,
            title: record.text("title"),
            body,
            has_supplement,
            supplement_body: record.text("letterContent"),
            options,
            secondary: None,
        };
        nodes.insert(node.key(), node);
    }

    nodes
}
