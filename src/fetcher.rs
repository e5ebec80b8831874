//! Fetch Coordinator Module
//!
//! The single entry point UI code uses to obtain resource data, transparently
//! caching. The actual network request is a caller-supplied async closure;
//! this layer decides whether to invoke it at all.

use std::future::Future;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::info;

use crate::cache::{CacheStats, CacheStore};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};
use crate::key::{cache_key, Params};
use crate::resource::ResourceRegistry;

// == Fetcher ==
/// Cache-first fetch coordinator.
///
/// Cloning a `Fetcher` is cheap and every clone shares the same store, so one
/// instance can be handed to every part of the UI that reads or writes
/// dashboard data. The resource registry is fixed at construction.
#[derive(Clone)]
pub struct Fetcher {
    store: Arc<RwLock<CacheStore>>,
    registry: Arc<ResourceRegistry>,
}

impl Fetcher {
    /// Creates a Fetcher with the default resource registry.
    pub fn new(config: &CacheConfig) -> Self {
        Self::with_registry(config, ResourceRegistry::default())
    }

    /// Creates a Fetcher with a caller-built registry (extended resource
    /// types, or a restricted set for tests).
    pub fn with_registry(config: &CacheConfig, registry: ResourceRegistry) -> Self {
        Self {
            store: Arc::new(RwLock::new(CacheStore::from_config(config))),
            registry: Arc::new(registry),
        }
    }

    // == Fetch ==
    /// Returns the cached value for `(resource, params)` if fresh, otherwise
    /// awaits `remote`, stores its result, and returns it.
    ///
    /// A fresh hit performs no remote call: within one TTL window a given
    /// key fetches at most once, concurrency aside. Concurrent misses for the
    /// same key are not coalesced; the lock is released while `remote` is in
    /// flight, so each miss performs its own call and the last writer wins.
    ///
    /// If `remote` fails the cache is left untouched and the error is
    /// propagated unchanged inside [`CacheError::Remote`]. Any stale entry
    /// for the key survives for last-known-good fallbacks.
    pub async fn fetch<F, Fut>(&self, resource: &str, params: &Params, remote: F) -> Result<Value>
    where
        F: FnOnce(Params) -> Fut,
        Fut: Future<Output = anyhow::Result<Value>>,
    {
        self.registry.validate(resource)?;
        let key = cache_key(resource, params)?;

        if let Some(value) = self.store.write().await.get_fresh(&key) {
            return Ok(value);
        }

        // Lock released: the remote call is the only suspension point and
        // must not block other readers.
        let value = remote(params.clone()).await.map_err(CacheError::Remote)?;

        self.store.write().await.set(key, value.clone());
        Ok(value)
    }

    // == Invalidate ==
    /// Forces subsequent reads to refetch.
    ///
    /// With `params` the exact entry is removed; without, every cached page
    /// of the resource is (the parameter sets of future reads are unknown at
    /// invalidation time). Called by write paths after a successful mutation.
    pub async fn invalidate(&self, resource: &str, params: Option<&Params>) -> Result<()> {
        self.registry.validate(resource)?;

        let mut store = self.store.write().await;
        match params {
            Some(params) => {
                let key = cache_key(resource, params)?;
                store.delete_exact(&key);
            }
            None => {
                store.delete_by_prefix(resource);
            }
        }
        Ok(())
    }

    // == Seed ==
    /// Installs a value directly, restarting its freshness window.
    ///
    /// Lets a mutation path store the server's response without forcing the
    /// next read through the network.
    pub async fn seed(&self, resource: &str, params: &Params, value: Value) -> Result<()> {
        self.registry.validate(resource)?;
        let key = cache_key(resource, params)?;
        self.store.write().await.set(key, value);
        Ok(())
    }

    // == Clear All ==
    /// Removes every cached entry (logout / session teardown).
    pub async fn clear_all(&self) {
        info!("clearing entire response cache");
        self.store.write().await.clear();
    }

    // == Version ==
    /// Current store version; changes whenever any mutating operation runs.
    pub async fn version(&self) -> u64 {
        self.store.read().await.version()
    }

    // == Stats ==
    /// Current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    /// Shared handle to the underlying store, for consumers that need the
    /// raw entry view (stale last-known-good reads, diagnostics).
    pub fn store(&self) -> Arc<RwLock<CacheStore>> {
        Arc::clone(&self.store)
    }
}
