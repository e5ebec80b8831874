//! dashcache - a TTL response cache for dashboard REST consumers
//!
//! Provides a cache-first fetch coordinator over an in-memory store with
//! lazy expiry and manual (exact or prefix-wide) invalidation. The network
//! request itself is a caller-supplied async closure; this crate only decides
//! when it runs.

pub mod cache;
pub mod config;
pub mod envelope;
pub mod error;
pub mod fetcher;
pub mod key;
pub mod query;
pub mod resource;

pub use cache::{CacheEntry, CacheStats, CacheStore};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use fetcher::Fetcher;
pub use key::Params;
pub use resource::ResourceRegistry;
