//! Product cache namespaces
//!
//! `products` holds one entry per product id; `all-products` holds at most one
//! snapshot of the full listing, present or absent as a unit.

use std::sync::Arc;

use super::{Cache, CacheStats, MemoryCache};
use crate::models::Product;

/// Name of the by-id namespace
pub const PRODUCTS_CACHE: &str = "products";
/// Name of the listing snapshot namespace
pub const ALL_PRODUCTS_CACHE: &str = "all-products";
/// Only key ever used in the listing snapshot namespace
pub const ALL_PRODUCTS_KEY: &str = "all";

/// The cache namespaces used by the product service.
#[derive(Clone)]
pub struct ProductCaches {
    pub products: Arc<dyn Cache<Product>>,
    pub all_products: Arc<dyn Cache<Vec<Product>>>,
}

impl ProductCaches {
    pub fn new(
        products: Arc<dyn Cache<Product>>,
        all_products: Arc<dyn Cache<Vec<Product>>>,
    ) -> Self {
        Self {
            products,
            all_products,
        }
    }

    /// In-process namespaces. The by-id cache holds up to `max_entries`
    /// products; the snapshot namespace is a single slot.
    pub fn in_memory(max_entries: usize, ttl: Option<u64>) -> Self {
        Self::new(
            Arc::new(MemoryCache::new(PRODUCTS_CACHE, max_entries, ttl)),
            Arc::new(MemoryCache::new(ALL_PRODUCTS_CACHE, 1, ttl)),
        )
    }

    /// Stats per namespace, by-id first.
    pub async fn stats(&self) -> Vec<(String, CacheStats)> {
        vec![
            (self.products.name().to_string(), self.products.stats().await),
            (
                self.all_products.name().to_string(),
                self.all_products.stats().await,
            ),
        ]
    }

    /// Removes expired entries from every namespace.
    pub async fn cleanup_expired(&self) -> usize {
        self.products.cleanup_expired().await + self.all_products.cleanup_expired().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_namespaces() {
        let caches = ProductCaches::in_memory(10, None);
        let stats = caches.stats().await;

        assert_eq!(stats[0].0, PRODUCTS_CACHE);
        assert_eq!(stats[1].0, ALL_PRODUCTS_CACHE);
    }

    #[tokio::test]
    async fn test_snapshot_slot_holds_one_listing() {
        let caches = ProductCaches::in_memory(10, None);
        let first = vec![Product::unsaved("Phone", "Electronics")];
        let second = Vec::new();

        caches.all_products.put(ALL_PRODUCTS_KEY, first).await.unwrap();
        caches.all_products.put(ALL_PRODUCTS_KEY, second).await.unwrap();

        assert_eq!(
            caches.all_products.get(ALL_PRODUCTS_KEY).await.unwrap(),
            Some(Vec::new())
        );
        assert_eq!(caches.all_products.stats().await.total_entries, 1);
    }
}
