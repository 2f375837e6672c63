//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the cache store invariants the product service
//! relies on.

use proptest::prelude::*;
use std::collections::HashMap;

use crate::cache::{Cache, CacheStore, MemoryCache};

// == Test Configuration ==
const TEST_MAX_ENTRIES: usize = 100;

// == Strategies ==
fn valid_key_strategy() -> impl Strategy<Value = String> {
    "[a-f0-9]{1,8}"
}

fn valid_value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{3,64}"
}

#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: String, value: String },
    Get { key: String },
    Invalidate { key: String },
    InvalidateAll,
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        4 => (valid_key_strategy(), valid_value_strategy())
            .prop_map(|(key, value)| CacheOp::Put { key, value }),
        4 => valid_key_strategy().prop_map(|key| CacheOp::Get { key }),
        2 => valid_key_strategy().prop_map(|key| CacheOp::Invalidate { key }),
        1 => Just(CacheOp::InvalidateAll),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // A store large enough to never evict behaves exactly like a map:
    // every get returns the last put for that key unless it was invalidated since.
    #[test]
    fn prop_store_matches_model(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut store: CacheStore<String> = CacheStore::new(TEST_MAX_ENTRIES, None);
        let mut model: HashMap<String, String> = HashMap::new();
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Put { key, value } => {
                    store.put(key.clone(), value.clone());
                    model.insert(key, value);
                }
                CacheOp::Get { key } => {
                    let got = store.get(&key);
                    prop_assert_eq!(&got, &model.get(&key).cloned());
                    if got.is_some() { expected_hits += 1 } else { expected_misses += 1 }
                }
                CacheOp::Invalidate { key } => {
                    prop_assert_eq!(store.invalidate(&key), model.remove(&key).is_some());
                }
                CacheOp::InvalidateAll => {
                    prop_assert_eq!(store.invalidate_all(), model.len());
                    model.clear();
                }
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits);
        prop_assert_eq!(stats.misses, expected_misses);
        prop_assert_eq!(stats.total_entries, model.len());
    }

    // The number of entries never exceeds capacity, whatever is put.
    #[test]
    fn prop_capacity_enforcement(
        capacity in 1usize..10,
        entries in prop::collection::vec((valid_key_strategy(), valid_value_strategy()), 1..50)
    ) {
        let mut store: CacheStore<String> = CacheStore::new(capacity, None);

        for (key, value) in entries {
            store.put(key.clone(), value.clone());
            prop_assert!(store.len() <= capacity);
            // the entry just written is always readable
            prop_assert_eq!(store.get(&key), Some(value));
        }
    }

    // After invalidate_all nothing previously cached is returned.
    #[test]
    fn prop_invalidate_all_empties_namespace(
        entries in prop::collection::vec((valid_key_strategy(), valid_value_strategy()), 0..30)
    ) {
        let mut store: CacheStore<String> = CacheStore::new(TEST_MAX_ENTRIES, None);
        for (key, value) in &entries {
            store.put(key.clone(), value.clone());
        }

        store.invalidate_all();

        for (key, _) in &entries {
            prop_assert_eq!(store.get(key), None);
        }
        prop_assert!(store.is_empty());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(30))]

    // Concurrent writers through a shared MemoryCache leave every key holding
    // one of the values written for it, never anything else.
    #[test]
    fn prop_concurrent_puts_keep_whole_values(
        ops in prop::collection::vec((valid_key_strategy(), valid_value_strategy()), 10..50)
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();

        rt.block_on(async {
            let cache: MemoryCache<String> = MemoryCache::new("products", TEST_MAX_ENTRIES, None);
            let mut written: HashMap<String, Vec<String>> = HashMap::new();
            let mut handles = vec![];

            for (key, value) in ops {
                written.entry(key.clone()).or_default().push(value.clone());
                let cache = cache.clone();
                handles.push(tokio::spawn(async move {
                    cache.put(&key, value).await
                }));
            }

            for handle in handles {
                prop_assert!(handle.await.expect("Task should not panic").is_ok());
            }

            for (key, values) in &written {
                let got = cache.get(key).await.unwrap();
                prop_assert!(got.map(|v| values.contains(&v)).unwrap_or(false));
            }

            Ok(())
        })?;
    }
}
