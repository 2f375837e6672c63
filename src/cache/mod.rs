//! Cache Module
//!
//! In-memory cache namespaces with TTL expiration and LRU eviction, and the
//! `Cache` abstraction the product service talks to.

mod entry;
mod lru;
mod memory;
mod namespaces;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

use async_trait::async_trait;

use crate::error::CacheError;

// Re-export public types
pub use entry::CacheEntry;
pub use lru::LruTracker;
pub use memory::MemoryCache;
pub use namespaces::{ProductCaches, ALL_PRODUCTS_CACHE, ALL_PRODUCTS_KEY, PRODUCTS_CACHE};
pub use stats::CacheStats;
pub use store::CacheStore;

// == Cache Trait ==
/// A named cache namespace shared by concurrent callers.
///
/// Fallible operations report `CacheError`; callers treat those as
/// best-effort and never let them replace a store result.
#[async_trait]
pub trait Cache<V: Send + 'static>: Send + Sync {
    /// Namespace name used in logs and stats.
    fn name(&self) -> &str;

    /// Returns the cached value for `key`, `None` on a miss.
    async fn get(&self, key: &str) -> Result<Option<V>, CacheError>;

    /// Stores `value` under `key`, overwriting any previous entry.
    async fn put(&self, key: &str, value: V) -> Result<(), CacheError>;

    /// Drops the entry for `key`. Returns true if one was present.
    async fn invalidate(&self, key: &str) -> Result<bool, CacheError>;

    /// Drops every entry in the namespace.
    async fn invalidate_all(&self) -> Result<usize, CacheError>;

    async fn stats(&self) -> CacheStats;

    /// Removes expired entries. Returns the number removed.
    async fn cleanup_expired(&self) -> usize;
}
