//! Graph resolution - the ordered fallback chain over cache, external
//! store, and static table.
//!
//! The chain for `resolve(node_id, language)`, first success wins:
//!
//! 1. Cache hit under `node:{id}:{code}`.
//! 2. External store, requested language; cached on success.
//! 3. External store, default language; cached under the requested key as
//!    well, so the next request for the unavailable language never
//!    re-attempts step 2's miss.
//! 4. Static table, requested then default language (not cached, so the
//!    store is re-attempted as soon as it recovers).
//! 5. `NotFound`.
//!
//! Store failures are absorbed as misses while any tier remains; they are
//! never surfaced to callers.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use letter_model::{record, ContentNode, Language, NodeKey, StaticFallbackTable};

use crate::cache::ContentCache;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::source::{ContentSource, SourceError};

/// Resolves `(node_id, language)` pairs to content nodes.
pub struct GraphResolver<S> {
    source: S,
    cache: Arc<ContentCache>,
    fallback: StaticFallbackTable,
    config: EngineConfig,
}

impl<S: ContentSource> GraphResolver<S> {
    /// Create a resolver over a store, a shared cache, and the embedded
    /// static table.
    pub fn new(source: S, cache: Arc<ContentCache>, config: EngineConfig) -> Self {
        Self {
            source,
            cache,
            fallback: StaticFallbackTable::new(),
            config,
        }
    }

    pub fn cache(&self) -> &ContentCache {
        &self.cache
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Resolve one node through the fallback chain.
    pub fn resolve(&self, node_id: &str, language: Language) -> Result<ContentNode, EngineError> {
        let key = ContentCache::node_key(node_id, language);
        if let Some(node) = self.cache.get(&key) {
            return Ok(node);
        }

        if let Ok(nodes) = self.fetch_sheet(&self.config.questions_sheet) {
            if let Some(node) = nodes.get(&NodeKey::new(node_id, language)) {
                self.cache.set(key, node.clone());
                return Ok(node.clone());
            }

            let default = self.config.default_language;
            if language != default {
                if let Some(node) = nodes.get(&NodeKey::new(node_id, default)) {
                    self.cache
                        .set(ContentCache::node_key(node_id, default), node.clone());
                    self.cache.set(key, node.clone());
                    return Ok(node.clone());
                }
            }
        }

        self.static_lookup(node_id, language)
            .ok_or_else(|| EngineError::not_found(node_id, language))
    }

    /// Resolve the configured root node.
    pub fn resolve_root(&self, language: Language) -> Result<ContentNode, EngineError> {
        self.resolve(&self.config.root_node, language)
    }

    /// Every node available for a language, keyed by id, with per-node
    /// fallback to the default language. Degrades to the static table
    /// when the store is down; an empty graph is an empty map, not an
    /// error.
    pub fn resolve_all(&self, language: Language) -> BTreeMap<String, ContentNode> {
        let default = self.config.default_language;
        let mut resolved = BTreeMap::new();

        match self.fetch_sheet(&self.config.questions_sheet) {
            Ok(nodes) => {
                let mut ids: Vec<&str> = nodes.keys().map(|key| key.id.as_str()).collect();
                ids.sort_unstable();
                ids.dedup();

                for id in ids {
                    let node = nodes
                        .get(&NodeKey::new(id, language))
                        .or_else(|| nodes.get(&NodeKey::new(id, default)));
                    if let Some(node) = node {
                        self.cache
                            .set(ContentCache::node_key(id, language), node.clone());
                        resolved.insert(id.to_string(), node.clone());
                    }
                }
            }
            Err(_) => {
                for id in self.fallback.node_ids() {
                    if let Some(node) = self.static_lookup(id, language) {
                        resolved.insert(id.to_string(), node);
                    }
                }
            }
        }

        resolved
    }

    /// Resolve supplement ("letter") content for a node: the supplement
    /// sheet through the same language-fallback chain, cached under
    /// `letter:{id}:{code}`, with the static node's own supplement as the
    /// last tier.
    pub fn resolve_supplement(
        &self,
        node_id: &str,
        language: Language,
    ) -> Result<ContentNode, EngineError> {
        let key = ContentCache::supplement_key(node_id, language);
        if let Some(node) = self.cache.get(&key) {
            return Ok(node);
        }

        if let Ok(nodes) = self.fetch_sheet(&self.config.supplement_sheet) {
            let default = self.config.default_language;
            let found = nodes.get(&NodeKey::new(node_id, language)).or_else(|| {
                if language != default {
                    nodes.get(&NodeKey::new(node_id, default))
                } else {
                    None
                }
            });
            if let Some(node) = found {
                self.cache.set(key, node.clone());
                return Ok(node.clone());
            }
        }

        match self.static_lookup(node_id, language) {
            Some(node) if node.has_supplement => Ok(node),
            _ => Err(EngineError::not_found(node_id, language)),
        }
    }

    fn fetch_sheet(&self, sheet: &str) -> Result<HashMap<NodeKey, ContentNode>, SourceError> {
        match self.source.fetch_rows(sheet) {
            Ok(rows) => Ok(record::normalize(&rows)),
            Err(err) => {
                log::warn!("content source miss for sheet '{}': {}", sheet, err);
                Err(err)
            }
        }
    }

    fn static_lookup(&self, node_id: &str, language: Language) -> Option<ContentNode> {
        self.fallback
            .get(node_id, language)
            .or_else(|| self.fallback.get(node_id, self.config.default_language))
            .cloned()
    }
}
