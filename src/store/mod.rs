//! Persistence Store Module
//!
//! The durable home of product records. The service only talks to the
//! `ProductStore` trait, so any document or relational backend can sit behind it.

mod memory;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::Product;

pub use memory::InMemoryProductStore;

/// Product persistence operations.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Inserts `product` with a store-assigned id when its id is empty,
    /// otherwise writes it at its id. Returns the stored record.
    async fn save(&self, product: Product) -> Result<Product, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, StoreError>;

    /// Full listing in store-defined order.
    async fn find_all(&self) -> Result<Vec<Product>, StoreError>;

    async fn exists_by_id(&self, id: &str) -> Result<bool, StoreError>;

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError>;
}
