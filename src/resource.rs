//! Resource Registry Module
//!
//! Validates resource types before they are used to build cache keys.
//!
//! Every cached response belongs to a named resource type that acts as the
//! key namespace for prefix invalidation. Fetching or invalidating under an
//! unregistered type fails fast rather than silently caching under an
//! unvalidated key.

use std::collections::BTreeSet;

use crate::error::{CacheError, Result};

// == Built-in Resource Types ==
/// Resource types the dashboard fetches out of the box.
pub const BUILTIN_RESOURCES: [&str; 6] = [
    "users",
    "products",
    "categories",
    "orders",
    "activities",
    "stats",
];

// == Resource Registry ==
/// The closed-but-extensible set of resource types allowed in cache keys.
#[derive(Debug, Clone)]
pub struct ResourceRegistry {
    types: BTreeSet<String>,
}

impl ResourceRegistry {
    /// Creates an empty registry. Most callers want [`ResourceRegistry::default`].
    pub fn empty() -> Self {
        Self {
            types: BTreeSet::new(),
        }
    }

    /// Registers an additional resource type.
    ///
    /// Registering an existing type is a no-op.
    pub fn register(&mut self, resource: impl Into<String>) {
        self.types.insert(resource.into());
    }

    /// Returns true if the resource type is registered.
    pub fn contains(&self, resource: &str) -> bool {
        self.types.contains(resource)
    }

    /// Validates a resource type, failing fast on unknown types.
    pub fn validate(&self, resource: &str) -> Result<()> {
        if self.contains(resource) {
            Ok(())
        } else {
            Err(CacheError::UnknownResourceType(resource.to_string()))
        }
    }

    /// Iterates over all registered resource types.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(String::as_str)
    }

    /// Returns the number of registered resource types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if no resource types are registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for ResourceRegistry {
    /// Registry pre-populated with the built-in dashboard resource types.
    fn default() -> Self {
        let mut registry = Self::empty();
        for resource in BUILTIN_RESOURCES {
            registry.register(resource);
        }
        registry
    }
}
