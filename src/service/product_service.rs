//! Cached Product Service
//!
//! Every operation goes to the store first; cache slots are only touched after
//! the store call succeeded.
//!
//! - create / update: write-through into `products`, drop the `all-products` snapshot
//! - get_by_id: read-through into `products`
//! - list_all: read-through into `all-products`
//! - delete: evict from `products`, drop the `all-products` snapshot
//!
//! Writers to the same id are serialized by a striped lock so the cache follows
//! store commit order. Readers never lock: each stripe and the snapshot carry a
//! version that writers bump between the store write and the cache update, and
//! a read-through drops what it cached if the version moved under it.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::cache::{CacheStats, ProductCaches, ALL_PRODUCTS_KEY};
use crate::error::{CacheError, ProductError, Result};
use crate::models::{CreateProductRequest, Product, UpdateProductRequest};
use crate::store::ProductStore;

/// Number of write lock stripes ids are hashed onto.
const WRITE_STRIPES: usize = 64;

#[derive(Debug, Default)]
struct WriteStripe {
    /// Held by writers across the store write and the cache update
    lock: Mutex<()>,
    /// Bumped by every committed write to an id on this stripe
    version: AtomicU64,
}

/// Product operations with read-through/write-through caching.
pub struct ProductService {
    store: Arc<dyn ProductStore>,
    caches: ProductCaches,
    stripes: Vec<WriteStripe>,
    /// Bumped by every committed mutation
    snapshot_version: AtomicU64,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>, caches: ProductCaches) -> Self {
        Self {
            store,
            caches,
            stripes: (0..WRITE_STRIPES).map(|_| WriteStripe::default()).collect(),
            snapshot_version: AtomicU64::new(0),
        }
    }

    // == Create ==
    /// Validates and persists a new product, then caches it under its new id.
    pub async fn create(&self, request: CreateProductRequest) -> Result<Product> {
        if let Some(msg) = request.validate() {
            return Err(ProductError::Validation(msg));
        }

        let product = self.store.save(request.into_product()).await?;

        // The id did not exist before the save, so no other writer can hold it.
        self.stripe(&product.id).version.fetch_add(1, Ordering::SeqCst);
        self.snapshot_version.fetch_add(1, Ordering::SeqCst);
        self.cache_product(&product).await;
        self.drop_snapshot().await;

        info!("Created product {}", product.id);
        Ok(product)
    }

    // == Get By Id ==
    pub async fn get_by_id(&self, id: &str) -> Result<Product> {
        if let Some(product) = self.cached(self.caches.products.get(id).await, id) {
            debug!("Cache hit for product {}", id);
            return Ok(product);
        }
        debug!("Cache miss for product {}", id);

        let stripe = self.stripe(id);
        let seen = stripe.version.load(Ordering::SeqCst);
        let product = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;

        if stripe.version.load(Ordering::SeqCst) != seen {
            debug!("Product {} changed during lookup, not caching", id);
            return Ok(product);
        }
        self.cache_product(&product).await;
        if stripe.version.load(Ordering::SeqCst) != seen {
            debug!("Product {} changed while caching, evicting", id);
            self.evict_product(id).await;
        }

        Ok(product)
    }

    // == List All ==
    pub async fn list_all(&self) -> Result<Vec<Product>> {
        let cached = self.caches.all_products.get(ALL_PRODUCTS_KEY).await;
        if let Some(products) = self.cached(cached, ALL_PRODUCTS_KEY) {
            debug!("Cache hit for product listing ({} products)", products.len());
            return Ok(products);
        }
        debug!("Cache miss for product listing");

        let seen = self.snapshot_version.load(Ordering::SeqCst);
        let products = self.store.find_all().await?;

        if self.snapshot_version.load(Ordering::SeqCst) != seen {
            debug!("Products changed during listing, not caching snapshot");
            return Ok(products);
        }
        if let Err(err) = self
            .caches
            .all_products
            .put(ALL_PRODUCTS_KEY, products.clone())
            .await
        {
            self.cache_failed("store snapshot", ALL_PRODUCTS_KEY, err);
        }
        if self.snapshot_version.load(Ordering::SeqCst) != seen {
            debug!("Products changed while caching snapshot, dropping it");
            self.drop_snapshot().await;
        }

        Ok(products)
    }

    // == Update ==
    /// Replaces `name` and `type` of an existing product, keeping its id.
    pub async fn update(&self, request: UpdateProductRequest) -> Result<Product> {
        if let Some(msg) = request.validate() {
            return Err(ProductError::Validation(msg));
        }

        let stripe = self.stripe(&request.id);
        let _writing = stripe.lock.lock().await;
        let existing = self
            .store
            .find_by_id(&request.id)
            .await?
            .ok_or_else(|| ProductError::NotFound(request.id.clone()))?;

        let product = self.store.save(request.apply_to(existing)).await?;

        stripe.version.fetch_add(1, Ordering::SeqCst);
        self.snapshot_version.fetch_add(1, Ordering::SeqCst);
        self.cache_product(&product).await;
        self.drop_snapshot().await;

        info!("Updated product {}", product.id);
        Ok(product)
    }

    // == Delete ==
    pub async fn delete(&self, id: &str) -> Result<()> {
        let stripe = self.stripe(id);
        let _writing = stripe.lock.lock().await;
        if !self.store.exists_by_id(id).await? {
            return Err(ProductError::NotFound(id.to_string()));
        }

        self.store.delete_by_id(id).await?;

        stripe.version.fetch_add(1, Ordering::SeqCst);
        self.snapshot_version.fetch_add(1, Ordering::SeqCst);
        self.evict_product(id).await;
        self.drop_snapshot().await;

        info!("Deleted product {}", id);
        Ok(())
    }

    /// Stats for every cache namespace.
    pub async fn cache_stats(&self) -> Vec<(String, CacheStats)> {
        self.caches.stats().await
    }

    pub fn caches(&self) -> &ProductCaches {
        &self.caches
    }

    fn stripe(&self, id: &str) -> &WriteStripe {
        let mut hasher = DefaultHasher::new();
        id.hash(&mut hasher);
        &self.stripes[(hasher.finish() as usize) % self.stripes.len()]
    }

    // == Cache Helpers ==
    // Cache failures are logged and otherwise ignored.

    fn cached<V>(&self, lookup: std::result::Result<Option<V>, CacheError>, key: &str) -> Option<V> {
        lookup.unwrap_or_else(|err| {
            self.cache_failed("lookup", key, err);
            None
        })
    }

    async fn cache_product(&self, product: &Product) {
        if let Err(err) = self.caches.products.put(&product.id, product.clone()).await {
            self.cache_failed("store", &product.id, err);
        }
    }

    async fn evict_product(&self, id: &str) {
        if let Err(err) = self.caches.products.invalidate(id).await {
            self.cache_failed("evict", id, err);
        }
    }

    async fn drop_snapshot(&self) {
        match self.caches.all_products.invalidate_all().await {
            Ok(dropped) if dropped > 0 => debug!("Invalidated product listing snapshot"),
            Ok(_) => {}
            Err(err) => self.cache_failed("invalidate snapshot", ALL_PRODUCTS_KEY, err),
        }
    }

    fn cache_failed(&self, action: &str, key: &str, err: CacheError) {
        warn!("Cache {} failed for '{}', continuing: {}", action, key, err);
    }
}
