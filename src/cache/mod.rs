//! Cache Module
//!
//! Provides the in-memory response cache with lazy TTL expiry and explicit
//! invalidation.

mod entry;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use stats::{CacheStats, StatsSnapshot};
pub use store::CacheStore;
