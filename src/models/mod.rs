//! Domain entity and request/response models for the product API
//!
//! Defines the `Product` entity plus the DTOs used for serializing and
//! deserializing HTTP request and response bodies.

pub mod product;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use product::Product;
pub use requests::{CreateProductRequest, UpdateProductRequest};
pub use responses::{CacheStatsResponse, ErrorResponse, HealthResponse, StatsResponse};
