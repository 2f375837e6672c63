//! In-process cache backend
//!
//! `MemoryCache` shares one `CacheStore` between tasks behind a tokio RwLock.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Cache, CacheStats, CacheStore};
use crate::error::CacheError;

/// Thread-safe handle to a named `CacheStore`. Clones share the same store.
#[derive(Debug, Clone)]
pub struct MemoryCache<V> {
    name: String,
    store: Arc<RwLock<CacheStore<V>>>,
}

impl<V: Clone> MemoryCache<V> {
    pub fn new(name: impl Into<String>, max_entries: usize, ttl: Option<u64>) -> Self {
        Self {
            name: name.into(),
            store: Arc::new(RwLock::new(CacheStore::new(max_entries, ttl))),
        }
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

#[async_trait]
impl<V> Cache<V> for MemoryCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn get(&self, key: &str) -> Result<Option<V>, CacheError> {
        // Write lock: a lookup updates LRU order and stats
        let mut store = self.store.write().await;
        Ok(store.get(key))
    }

    async fn put(&self, key: &str, value: V) -> Result<(), CacheError> {
        let mut store = self.store.write().await;
        store.put(key.to_string(), value);
        Ok(())
    }

    async fn invalidate(&self, key: &str) -> Result<bool, CacheError> {
        let mut store = self.store.write().await;
        Ok(store.invalidate(key))
    }

    async fn invalidate_all(&self) -> Result<usize, CacheError> {
        let mut store = self.store.write().await;
        Ok(store.invalidate_all())
    }

    async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    async fn cleanup_expired(&self) -> usize {
        self.store.write().await.cleanup_expired()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clones_share_entries() {
        let cache: MemoryCache<String> = MemoryCache::new("products", 10, None);
        let other = cache.clone();

        cache.put("p1", "phone".to_string()).await.unwrap();

        assert_eq!(other.get("p1").await.unwrap(), Some("phone".to_string()));
        assert_eq!(other.len().await, 1);
    }

    #[tokio::test]
    async fn test_invalidate_and_invalidate_all() {
        let cache: MemoryCache<u32> = MemoryCache::new("numbers", 10, None);
        cache.put("a", 1).await.unwrap();
        cache.put("b", 2).await.unwrap();

        assert!(cache.invalidate("a").await.unwrap());
        assert!(!cache.invalidate("a").await.unwrap());
        assert_eq!(cache.invalidate_all().await.unwrap(), 1);
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_name_and_stats() {
        let cache: MemoryCache<u32> = MemoryCache::new("all-products", 1, None);
        cache.get("all").await.unwrap();
        cache.put("all", 7).await.unwrap();
        cache.get("all").await.unwrap();

        let stats = cache.stats().await;
        assert_eq!(cache.name(), "all-products");
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }

    #[tokio::test]
    async fn test_usable_as_trait_object() {
        let cache: Arc<dyn Cache<String>> = Arc::new(MemoryCache::new("products", 10, None));
        cache.put("k", "v".to_string()).await.unwrap();
        assert_eq!(cache.get("k").await.unwrap(), Some("v".to_string()));
    }
}
