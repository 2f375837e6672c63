//! API Module
//!
//! HTTP handlers and routing for the product REST API.
//!
//! # Endpoints
//! - `POST /products` - Create a product
//! - `GET /products` - List all products
//! - `PUT /products` - Update a product
//! - `GET /products/:id` - Get a product by id
//! - `DELETE /products/:id` - Delete a product
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod extract;
pub mod handlers;
pub mod routes;

pub use extract::ValidJson;
pub use handlers::*;
pub use routes::create_router;
