//! API Handlers
//!
//! HTTP request handlers mapping routes onto the product service.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::extract::ValidJson;
use crate::cache::ProductCaches;
use crate::config::Config;
use crate::error::Result;
use crate::models::{
    CacheStatsResponse, CreateProductRequest, HealthResponse, Product, StatsResponse,
    UpdateProductRequest,
};
use crate::service::ProductService;
use crate::store::{InMemoryProductStore, ProductStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ProductService>,
}

impl AppState {
    pub fn new(service: ProductService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Builds the service over the given store with in-memory caches sized
    /// from the configuration.
    pub fn with_store(store: Arc<dyn ProductStore>, config: &Config) -> Self {
        let caches = ProductCaches::in_memory(config.cache_max_entries, config.ttl());
        Self::new(ProductService::new(store, caches))
    }

    /// Builds the service over an in-memory store.
    pub fn in_memory(config: &Config) -> Self {
        Self::with_store(Arc::new(InMemoryProductStore::new()), config)
    }
}

/// Handler for POST /products
pub async fn create_product_handler(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>)> {
    let product = state.service.create(req).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Handler for GET /products/:id
pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    Ok(Json(state.service.get_by_id(&id).await?))
}

/// Handler for GET /products
pub async fn list_products_handler(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    Ok(Json(state.service.list_all().await?))
}

/// Handler for PUT /products
pub async fn update_product_handler(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<UpdateProductRequest>,
) -> Result<Json<Product>> {
    Ok(Json(state.service.update(req).await?))
}

/// Handler for DELETE /products/:id
pub async fn delete_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let caches = state
        .service
        .cache_stats()
        .await
        .iter()
        .map(|(name, stats)| CacheStatsResponse::new(name.as_str(), stats))
        .collect();

    Json(StatsResponse { caches })
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
