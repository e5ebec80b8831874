//! Cache Entry Module
//!
//! Defines the structure for individual cache entries and the freshness rule.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde_json::Value;

// == Cache Entry ==
/// A single cached response with its write timestamp.
///
/// The payload is an opaque JSON value: whatever the remote call returned
/// (typically a pagination envelope) is stored and handed back as-is.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached response body
    pub value: Value,
    /// Write timestamp (Unix milliseconds)
    pub stored_at: u64,
}

impl CacheEntry {
    /// Creates an entry stamped with the current time.
    pub fn new(value: Value) -> Self {
        Self {
            value,
            stored_at: current_timestamp_ms(),
        }
    }

    // == Is Fresh ==
    /// Checks whether the entry is still fresh for the given TTL.
    ///
    /// Boundary condition: freshness is `now - stored_at < ttl`, strictly
    /// less-than. At exactly `stored_at + ttl` the entry is stale.
    pub fn is_fresh(&self, ttl: Duration) -> bool {
        self.age_ms() < ttl.as_millis() as u64
    }

    // == Age ==
    /// Milliseconds elapsed since the entry was written.
    ///
    /// Saturates at zero if the clock moved backwards between write and read.
    pub fn age_ms(&self) -> u64 {
        current_timestamp_ms().saturating_sub(self.stored_at)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
