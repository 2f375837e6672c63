//! Service Module
//!
//! The cached product service: the consistency protocol between the
//! persistence store and the cache namespaces.

mod product_service;

pub use product_service::ProductService;
