//! Property-Based Tests for the Cache Module
//!
//! Uses proptest to verify key canonicalization and store invariants.

use proptest::prelude::*;
use std::collections::HashSet;
use std::time::Duration;

use serde_json::{json, Value};

use crate::cache::CacheStore;
use crate::key::{cache_key, key_prefix, Params};
use crate::resource::BUILTIN_RESOURCES;

const TEST_TTL: Duration = Duration::from_secs(300);

// == Strategies ==
/// Generates valid parameter names.
fn param_name_strategy() -> impl Strategy<Value = String> {
    "[a-z_]{1,12}"
}

/// Generates primitive parameter values.
fn param_value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        "[a-zA-Z0-9 ]{0,24}".prop_map(Value::from),
        Just(Value::Null),
    ]
}

/// Generates a parameter list with unique names.
fn param_list_strategy() -> impl Strategy<Value = Vec<(String, Value)>> {
    prop::collection::vec((param_name_strategy(), param_value_strategy()), 0..6).prop_map(|pairs| {
        let mut seen = HashSet::new();
        pairs
            .into_iter()
            .filter(|(name, _)| seen.insert(name.clone()))
            .collect()
    })
}

/// Picks one of the built-in resource types.
fn resource_strategy() -> impl Strategy<Value = &'static str> + Clone {
    prop::sample::select(BUILTIN_RESOURCES.to_vec())
}

/// A sequence of store operations for invariant testing.
#[derive(Debug, Clone)]
enum StoreOp {
    Set { key: String, value: i64 },
    GetFresh { key: String },
    DeleteExact { key: String },
    DeletePrefix { resource: &'static str },
    Clear,
}

fn store_op_strategy() -> impl Strategy<Value = StoreOp> {
    let key = (resource_strategy(), 1u64..4).prop_map(|(resource, page)| {
        cache_key(resource, &Params::new().with("page", page)).unwrap()
    });

    prop_oneof![
        (key.clone(), any::<i64>()).prop_map(|(key, value)| StoreOp::Set { key, value }),
        key.clone().prop_map(|key| StoreOp::GetFresh { key }),
        key.prop_map(|key| StoreOp::DeleteExact { key }),
        resource_strategy().prop_map(|resource| StoreOp::DeletePrefix { resource }),
        Just(StoreOp::Clear),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Key determinism: the same parameter set produces the same key no matter
    // in which order the parameters were inserted.
    #[test]
    fn prop_key_insertion_order_independent(
        resource in resource_strategy(),
        pairs in param_list_strategy(),
    ) {
        let forward: Params = pairs.clone().into_iter().collect();
        let reversed: Params = pairs.into_iter().rev().collect();

        prop_assert_eq!(
            cache_key(resource, &forward).unwrap(),
            cache_key(resource, &reversed).unwrap()
        );
    }

    // Keys never collide across resource types, including empty params.
    #[test]
    fn prop_key_namespaced_by_resource(pairs in param_list_strategy()) {
        let params: Params = pairs.into_iter().collect();
        let keys: HashSet<String> = BUILTIN_RESOURCES
            .iter()
            .map(|resource| cache_key(resource, &params).unwrap())
            .collect();

        prop_assert_eq!(keys.len(), BUILTIN_RESOURCES.len());
    }

    // Every key carries its resource's invalidation prefix.
    #[test]
    fn prop_key_carries_prefix(
        resource in resource_strategy(),
        pairs in param_list_strategy(),
    ) {
        let params: Params = pairs.into_iter().collect();
        let key = cache_key(resource, &params).unwrap();
        prop_assert!(key.starts_with(&key_prefix(resource)));
    }

    // Round-trip: a freshly set value reads back unchanged.
    #[test]
    fn prop_roundtrip_storage(
        resource in resource_strategy(),
        pairs in param_list_strategy(),
        payload in any::<i64>(),
    ) {
        let params: Params = pairs.into_iter().collect();
        let key = cache_key(resource, &params).unwrap();
        let mut store = CacheStore::new(TEST_TTL);

        store.set(key.clone(), json!(payload));

        prop_assert_eq!(store.get_fresh(&key), Some(json!(payload)));
    }

    // Prefix invalidation removes exactly the entries of that resource.
    #[test]
    fn prop_prefix_invalidation_is_exact(
        ops in prop::collection::vec(
            (resource_strategy(), 1u64..6, any::<i64>()),
            1..30
        ),
        victim in resource_strategy(),
    ) {
        let mut store = CacheStore::new(TEST_TTL);
        for (resource, page, value) in &ops {
            let key = cache_key(resource, &Params::new().with("page", *page)).unwrap();
            store.set(key, json!(value));
        }

        let prefix = key_prefix(victim);
        let expected_survivors: HashSet<String> = ops
            .iter()
            .map(|(resource, page, _)| {
                cache_key(resource, &Params::new().with("page", *page)).unwrap()
            })
            .filter(|key| !key.starts_with(&prefix))
            .collect();

        store.delete_by_prefix(victim);

        prop_assert_eq!(store.len(), expected_survivors.len());
        for key in &expected_survivors {
            prop_assert!(store.get_entry(key).is_some(), "lost unrelated key {}", key);
        }
    }

    // The version counter strictly increases across mutating operations and
    // stats stay consistent with observed hits and misses.
    #[test]
    fn prop_version_monotonic_and_stats_accurate(
        ops in prop::collection::vec(store_op_strategy(), 1..50)
    ) {
        let mut store = CacheStore::new(TEST_TTL);
        let mut last_version = store.version();
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                StoreOp::Set { key, value } => {
                    store.set(key, json!(value));
                    prop_assert!(store.version() > last_version);
                }
                StoreOp::GetFresh { key } => {
                    // Nothing expires within the test TTL, so freshness
                    // reduces to presence.
                    match store.get_fresh(&key) {
                        Some(_) => expected_hits += 1,
                        None => expected_misses += 1,
                    }
                    prop_assert_eq!(store.version(), last_version);
                }
                StoreOp::DeleteExact { key } => {
                    store.delete_exact(&key);
                    prop_assert!(store.version() > last_version);
                }
                StoreOp::DeletePrefix { resource } => {
                    store.delete_by_prefix(resource);
                    prop_assert!(store.version() > last_version);
                }
                StoreOp::Clear => {
                    store.clear();
                    prop_assert!(store.version() > last_version);
                    prop_assert!(store.is_empty());
                }
            }
            last_version = store.version();
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
        prop_assert_eq!(stats.total_entries, store.len(), "Total entries mismatch");
    }
}
