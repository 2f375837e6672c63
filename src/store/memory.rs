//! In-memory product store
//!
//! Listings come back in insertion order; overwriting a record keeps its slot.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::ProductStore;
use crate::error::StoreError;
use crate::models::Product;

#[derive(Debug, Default)]
struct Records {
    /// Product and its insertion sequence, by id
    by_id: HashMap<String, (u64, Product)>,
    /// Ids by insertion sequence
    order: BTreeMap<u64, String>,
    next_seq: u64,
}

#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    records: RwLock<Records>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.records.read().await.by_id.len()
    }

    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.by_id.is_empty()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn save(&self, mut product: Product) -> Result<Product, StoreError> {
        if product.is_new() {
            product.id = Uuid::now_v7().simple().to_string();
        }

        let mut guard = self.records.write().await;
        let records = &mut *guard;
        match records.by_id.get_mut(&product.id) {
            Some((_, stored)) => *stored = product.clone(),
            None => {
                let seq = records.next_seq;
                records.next_seq += 1;
                records.order.insert(seq, product.id.clone());
                records
                    .by_id
                    .insert(product.id.clone(), (seq, product.clone()));
            }
        }
        debug!("Stored product {}", product.id);
        Ok(product)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, StoreError> {
        let records = self.records.read().await;
        Ok(records.by_id.get(id).map(|(_, product)| product.clone()))
    }

    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        let records = self.records.read().await;
        Ok(records
            .order
            .values()
            .filter_map(|id| records.by_id.get(id))
            .map(|(_, product)| product.clone())
            .collect())
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.records.read().await.by_id.contains_key(id))
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        if let Some((seq, _)) = records.by_id.remove(id) {
            records.order.remove(&seq);
            debug!("Removed product {}", id);
        }
        Ok(())
    }
}
