//! External content source - the collaborator contract for the
//! spreadsheet-backed store.

use std::collections::HashMap;
use std::sync::Arc;

use letter_model::RawRecord;
use thiserror::Error;

/// Failures the external store can produce.
///
/// Both variants map to the resolver's "miss" condition and are never
/// surfaced to service callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("content source unavailable: {0}")]
    Unavailable(String),

    #[error("content source returned a malformed response: {0}")]
    Malformed(String),
}

/// Contract for the spreadsheet-backed store.
///
/// Implementations own their transport and must bound every call with a
/// timeout; a timed-out call surfaces as `Unavailable`.
pub trait ContentSource: Send + Sync {
    /// Fetch every row of the named sheet.
    fn fetch_rows(&self, sheet_name: &str) -> Result<Vec<RawRecord>, SourceError>;
}

impl<S: ContentSource + ?Sized> ContentSource for Arc<S> {
    fn fetch_rows(&self, sheet_name: &str) -> Result<Vec<RawRecord>, SourceError> {
        (**self).fetch_rows(sheet_name)
    }
}

/// In-memory source over a fixed set of sheets.
///
/// Serves as the embedded implementation for tests and demos. An unknown
/// sheet name behaves like a missing sheet on the real store.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    sheets: HashMap<String, Vec<RawRecord>>,
}

impl MemorySource {
    /// Create a source with no sheets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sheet.
    pub fn with_sheet(mut self, name: impl Into<String>, rows: Vec<RawRecord>) -> Self {
        self.sheets.insert(name.into(), rows);
        self
    }
}

impl ContentSource for MemorySource {
    fn fetch_rows(&self, sheet_name: &str) -> Result<Vec<RawRecord>, SourceError> {
        self.sheets
            .get(sheet_name)
            .cloned()
            .ok_or_else(|| SourceError::Unavailable(format!("sheet '{sheet_name}' not found")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_source_returns_rows() {
        let source = MemorySource::new().with_sheet(
            "Questions",
            vec![RawRecord::new().with_field("id", "home")],
        );

        let rows = source.fetch_rows("Questions").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].field("id"), Some("home"));
    }

    #[test]
    fn test_missing_sheet_is_unavailable() {
        let source = MemorySource::new();
        assert!(matches!(
            source.fetch_rows("Questions"),
            Err(SourceError::Unavailable(_))
        ));
    }

    #[test]
    fn test_arc_source_delegates() {
        let source = Arc::new(MemorySource::new().with_sheet("Questions", Vec::new()));
        assert!(source.fetch_rows("Questions").unwrap().is_empty());
    }
}
