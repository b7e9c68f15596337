//! Service facade - the operations the transport layer consumes.
//!
//! The facade wires one store, one cache, and one static table together
//! and exposes the engine's whole surface: content lookups, navigation,
//! the language catalog, cache administration, identification capture,
//! and a health snapshot.

use std::collections::BTreeMap;
use std::sync::Arc;

use letter_model::{ContentNode, Language, LanguageInfo};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::cache::{CacheStats, ContentCache};
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::navigation::{NavigationOutcome, NavigationResolver};
use crate::resolver::GraphResolver;
use crate::source::ContentSource;

/// One identification submission from the entry view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub value: String,

    /// Caller-supplied timestamp, opaque to the engine.
    pub submitted_at: String,
}

/// In-memory store of identification submissions. Not persisted across
/// restarts.
#[derive(Debug, Default)]
pub struct ContactLog {
    entries: Mutex<Vec<ContactSubmission>>,
}

impl ContactLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submission. Blank values are rejected.
    pub fn record(&self, value: &str, submitted_at: &str) -> bool {
        if value.trim().is_empty() {
            return false;
        }
        self.entries.lock().push(ContactSubmission {
            value: value.to_string(),
            submitted_at: submitted_at.to_string(),
        });
        true
    }

    pub fn count(&self) -> usize {
        self.entries.lock().len()
    }

    /// Snapshot of everything recorded so far, oldest first.
    pub fn entries(&self) -> Vec<ContactSubmission> {
        self.entries.lock().clone()
    }
}

/// Engine health snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub cache: CacheStats,
    pub cache_ttl_secs: u64,
    pub contact_count: usize,
}

/// The engine facade.
pub struct LetterService<S> {
    resolver: GraphResolver<S>,
    contacts: ContactLog,
}

impl<S: ContentSource> LetterService<S> {
    /// Create a service over a store, with a fresh cache sized by the
    /// config's time-to-live.
    pub fn new(source: S, config: EngineConfig) -> Self {
        let cache = Arc::new(ContentCache::new(config.cache_ttl()));
        Self {
            resolver: GraphResolver::new(source, cache, config),
            contacts: ContactLog::new(),
        }
    }

    pub fn resolver(&self) -> &GraphResolver<S> {
        &self.resolver
    }

    /// The supported-language catalog.
    pub fn languages(&self) -> Vec<LanguageInfo> {
        Language::catalog()
    }

    /// Resolve the configured root node.
    pub fn root(&self, language: Language) -> Result<ContentNode, EngineError> {
        self.resolver.resolve_root(language)
    }

    /// Resolve one node.
    pub fn node(&self, node_id: &str, language: Language) -> Result<ContentNode, EngineError> {
        self.resolver.resolve(node_id, language)
    }

    /// Every node available for a language, keyed by id.
    pub fn all_nodes(&self, language: Language) -> BTreeMap<String, ContentNode> {
        self.resolver.resolve_all(language)
    }

    /// Supplement ("letter") content for a node.
    pub fn supplement(&self, node_id: &str, language: Language) -> Result<ContentNode, EngineError> {
        self.resolver.resolve_supplement(node_id, language)
    }

    /// Apply a selection on a node and locate the next one.
    pub fn navigate(
        &self,
        node_id: &str,
        option_id: &str,
        language: Language,
    ) -> Result<NavigationOutcome, EngineError> {
        NavigationResolver::new(&self.resolver).navigate(node_id, option_id, language)
    }

    /// Cache administration: remove keys containing `pattern`, or
    /// everything when no pattern is given. Returns the removal count.
    pub fn invalidate_cache(&self, pattern: Option<&str>) -> usize {
        let removed = self.resolver.cache().invalidate(pattern);
        log::info!("cache administration removed {} entries", removed);
        removed
    }

    /// Record an identification submission. Returns false for blank
    /// values.
    pub fn record_contact(&self, value: &str, submitted_at: &str) -> bool {
        self.contacts.record(value, submitted_at)
    }

    pub fn contacts(&self) -> &ContactLog {
        &self.contacts
    }

    /// Health snapshot: cache counters, the configured time-to-live, and
    /// the identification count.
    pub fn health(&self) -> HealthReport {
        HealthReport {
            cache: self.resolver.cache().stats(),
            cache_ttl_secs: self.resolver.config().cache_ttl_secs,
            contact_count: self.contacts.count(),
        }
    }
}
