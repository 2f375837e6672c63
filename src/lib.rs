//! Market API - product catalogue service
//!
//! CRUD over product records with a read-through/write-through cache in front
//! of the persistence store.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use service::ProductService;
pub use tasks::spawn_cleanup_task;
