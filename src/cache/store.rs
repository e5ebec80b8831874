//! Cache Store Module
//!
//! HashMap storage with lazy TTL expiry, prefix invalidation, and a version
//! counter for reactive consumers.

use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, info};

use crate::cache::{CacheEntry, CacheStats};
use crate::config::CacheConfig;
use crate::key::key_prefix;

// == Cache Store ==
/// In-memory response cache.
///
/// Entries expire lazily: a stale entry stops being served by
/// [`CacheStore::get_fresh`] but stays in the map until it is overwritten or
/// explicitly invalidated. There is no background eviction.
#[derive(Debug)]
pub struct CacheStore {
    /// Composite key -> cached response
    entries: HashMap<String, CacheEntry>,
    /// Freshness window applied on every read
    ttl: Duration,
    /// Performance statistics
    stats: CacheStats,
    /// Bumped by every mutating operation; lets UI layers react to cache
    /// changes without polling the map itself
    version: u64,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore with the given freshness window.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            stats: CacheStats::new(),
            version: 0,
        }
    }

    /// Creates a CacheStore from configuration.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.ttl)
    }

    // == Get Fresh ==
    /// Returns a clone of the cached value iff the entry exists and is fresh.
    ///
    /// A stale entry counts as a miss but is not removed; callers wanting a
    /// last-known-good fallback can still reach it through
    /// [`CacheStore::get_entry`].
    pub fn get_fresh(&mut self, key: &str) -> Option<Value> {
        match self.entries.get(key) {
            Some(entry) if entry.is_fresh(self.ttl) => {
                self.stats.record_hit();
                debug!(key, age_ms = entry.age_ms(), "cache hit");
                Some(entry.value.clone())
            }
            Some(entry) => {
                self.stats.record_miss();
                debug!(key, age_ms = entry.age_ms(), "cache stale");
                None
            }
            None => {
                self.stats.record_miss();
                debug!(key, "cache miss");
                None
            }
        }
    }

    // == Get Entry ==
    /// Returns the entry unconditionally; freshness is the caller's judgment.
    pub fn get_entry(&self, key: &str) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    // == Set ==
    /// Writes a value under the key, unconditionally overwriting any prior
    /// entry and restarting its freshness window.
    pub fn set(&mut self, key: String, value: Value) {
        debug!(key = %key, "cache set");
        self.entries.insert(key, CacheEntry::new(value));
        self.stats.set_total_entries(self.entries.len());
        self.bump_version();
    }

    // == Delete Exact ==
    /// Removes one entry if present; no-op otherwise. Returns whether an
    /// entry was removed.
    pub fn delete_exact(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            debug!(key, "cache entry invalidated");
            self.stats.record_invalidations(1);
            self.stats.set_total_entries(self.entries.len());
        }
        self.bump_version();
        removed
    }

    // == Delete By Prefix ==
    /// Removes every entry belonging to the resource type, regardless of its
    /// parameters. Returns the number of entries removed.
    ///
    /// Keys are matched against `resource + "_"`, so `order` never sweeps up
    /// `orders_*` entries.
    pub fn delete_by_prefix(&mut self, resource: &str) -> usize {
        let prefix = key_prefix(resource);
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.starts_with(&prefix));
        let removed = before - self.entries.len();

        if removed > 0 {
            info!(resource, removed, "cache prefix invalidated");
            self.stats.record_invalidations(removed as u64);
            self.stats.set_total_entries(self.entries.len());
        }
        self.bump_version();
        removed
    }

    // == Clear ==
    /// Removes all entries (logout / full session reset).
    pub fn clear(&mut self) {
        let removed = self.entries.len();
        self.entries.clear();

        if removed > 0 {
            info!(removed, "cache cleared");
            self.stats.record_invalidations(removed as u64);
        }
        self.stats.set_total_entries(0);
        self.bump_version();
    }

    // == Version ==
    /// Monotonically increasing counter, bumped by every mutating operation.
    pub fn version(&self) -> u64 {
        self.version
    }

    fn bump_version(&mut self) {
        self.version += 1;
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries, fresh and stale alike.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
