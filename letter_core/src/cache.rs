//! Resolved-content cache with time-based expiry and targeted
//! invalidation.
//!
//! Reads and writes are independent atomic operations over a lock-guarded
//! map; there are no cross-key transactions. Expired entries read as
//! absent but stay in place until overwritten or invalidated.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use letter_model::{ContentNode, Language};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Default entry time-to-live in seconds.
pub const DEFAULT_TTL_SECS: u64 = 300;

/// One cached resolution. Replaced wholesale on `set`, never patched.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: ContentNode,
    fetched_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() >= ttl
    }
}

/// Cache performance counters, surfaced through the service health
/// report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub invalidations: u64,
    pub current_size: usize,
}

impl CacheStats {
    /// Hit rate over all lookups, 0.0 when none have happened.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Key-value store for resolved nodes with a fixed time-to-live shared by
/// all keys. Safe for concurrent callers; every operation locks the map
/// once.
pub struct ContentCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    stats: Mutex<CacheStats>,
    ttl: Duration,
}

impl ContentCache {
    /// Create a cache with the given time-to-live.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            stats: Mutex::new(CacheStats::default()),
            ttl,
        }
    }

    /// Create a cache with the default 300-second time-to-live.
    pub fn with_default_ttl() -> Self {
        Self::new(Duration::from_secs(DEFAULT_TTL_SECS))
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Cache key for a node resolution.
    pub fn node_key(node_id: &str, language: Language) -> String {
        format!("node:{}:{}", node_id, language.code())
    }

    /// Cache key for a supplement resolution.
    pub fn supplement_key(node_id: &str, language: Language) -> String {
        format!("letter:{}:{}", node_id, language.code())
    }

    /// Look up a key. Entries at or past the time-to-live read as absent;
    /// they are not purged here.
    pub fn get(&self, key: &str) -> Option<ContentNode> {
        let entries = self.entries.lock();
        let found = match entries.get(key) {
            Some(entry) if !entry.is_expired(self.ttl) => Some(entry.value.clone()),
            _ => None,
        };
        drop(entries);

        let mut stats = self.stats.lock();
        match found {
            Some(value) => {
                stats.hits += 1;
                Some(value)
            }
            None => {
                stats.misses += 1;
                None
            }
        }
    }

    /// Store a value, overwriting any previous entry and restarting its
    /// age from now.
    pub fn set(&self, key: impl Into<String>, value: ContentNode) {
        let mut entries = self.entries.lock();
        entries.insert(
            key.into(),
            CacheEntry {
                value,
                fetched_at: Instant::now(),
            },
        );
        let size = entries.len();
        drop(entries);

        self.stats.lock().current_size = size;
    }

    /// Remove every key containing `pattern` as a substring, or all keys
    /// when no pattern is given. Returns the number of keys removed.
    pub fn invalidate(&self, pattern: Option<&str>) -> usize {
        let mut entries = self.entries.lock();
        let before = entries.len();
        match pattern {
            Some(pattern) => entries.retain(|key, _| !key.contains(pattern)),
            None => entries.clear(),
        }
        let removed = before - entries.len();
        let size = entries.len();
        drop(entries);

        let mut stats = self.stats.lock();
        stats.invalidations += removed as u64;
        stats.current_size = size;

        log::debug!(
            "cache invalidation removed {} entries (pattern: {:?})",
            removed,
            pattern
        );
        removed
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Counter snapshot with the live entry count.
    pub fn stats(&self) -> CacheStats {
        let size = self.entries.lock().len();
        let mut stats = self.stats.lock().clone();
        stats.current_size = size;
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str) -> ContentNode {
        ContentNode::new(id, Language::En).with_title(format!("{id} title"))
    }

    #[test]
    fn test_set_then_get() {
        let cache = ContentCache::with_default_ttl();
        cache.set("node:home:en", node("home"));

        let cached = cache.get("node:home:en").unwrap();
        assert_eq!(cached.title, "home title");
    }

    #[test]
    fn test_get_missing_key() {
        let cache = ContentCache::with_default_ttl();
        assert!(cache.get("node:home:en").is_none());
    }

    #[test]
    fn test_expired_entry_reads_as_absent_without_purge() {
        // A zero time-to-live makes every entry already expired.
        let cache = ContentCache::new(Duration::ZERO);
        cache.set("node:home:en", node("home"));

        assert!(cache.get("node:home:en").is_none());
        // Still stored; expiry is lazy.
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_set_overwrites_wholesale() {
        let cache = ContentCache::with_default_ttl();
        cache.set("node:home:en", node("home"));
        cache.set("node:home:en", node("other"));

        assert_eq!(cache.get("node:home:en").unwrap().title, "other title");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_invalidate_by_substring() {
        let cache = ContentCache::with_default_ttl();
        cache.set("letter:services:en", node("services"));
        cache.set("letter:contact:fa", node("contact"));
        cache.set("node:home:en", node("home"));

        let removed = cache.invalidate(Some("letter"));

        assert_eq!(removed, 2);
        assert!(cache.get("node:home:en").is_some());
        assert!(cache.get("letter:services:en").is_none());
    }

    #[test]
    fn test_invalidate_all() {
        let cache = ContentCache::with_default_ttl();
        cache.set("node:home:en", node("home"));
        cache.set("node:services:en", node("services"));

        assert_eq!(cache.invalidate(None), 2);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_invalidate_no_match() {
        let cache = ContentCache::with_default_ttl();
        cache.set("node:home:en", node("home"));

        assert_eq!(cache.invalidate(Some("letter")), 0);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_key_builders() {
        assert_eq!(ContentCache::node_key("home", Language::En), "node:home:en");
        assert_eq!(
            ContentCache::supplement_key("services", Language::Fa),
            "letter:services:fa"
        );
    }

    #[test]
    fn test_stats_track_lookups() {
        let cache = ContentCache::with_default_ttl();
        cache.set("node:home:en", node("home"));

        let _ = cache.get("node:home:en");
        let _ = cache.get("node:home:en");
        let _ = cache.get("node:missing:en");

        let stats = cache.stats();
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.current_size, 1);
        assert!((stats.hit_rate() - 2.0 / 3.0).abs() < 0.001);
    }

    #[test]
    fn test_hit_rate_without_lookups() {
        assert_eq!(CacheStats::default().hit_rate(), 0.0);
    }
}
