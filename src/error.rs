//! Error types for the product service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Store Error Enum ==
/// Failure reported by the persistence store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Store could not be reached
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Store was reached but the operation failed
    #[error("Store failure: {0}")]
    Backend(String),
}

// == Cache Error Enum ==
/// Failure of a cache backend. Never returned to callers of the service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Cache backend could not serve the operation
    #[error("Cache unavailable: {0}")]
    Unavailable(String),
}

// == Product Error Enum ==
/// Unified error type for product operations.
#[derive(Error, Debug)]
pub enum ProductError {
    /// Input failed field constraints
    #[error("{0}")]
    Validation(String),

    /// Referenced product id is absent from the store
    #[error("Product not found with id: {0}")]
    NotFound(String),

    /// Underlying store failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

// == IntoResponse Implementation ==
impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProductError::Validation(_) => StatusCode::BAD_REQUEST,
            ProductError::NotFound(_) => StatusCode::NOT_FOUND,
            ProductError::Store(StoreError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            ProductError::Store(StoreError::Backend(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for product operations.
pub type Result<T> = std::result::Result<T, ProductError>;
