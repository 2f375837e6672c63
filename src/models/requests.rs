//! Request DTOs for the product API
//!
//! Defines the structure of incoming HTTP request bodies and the typed
//! mappings from them onto the `Product` entity.

use serde::Deserialize;

use super::Product;

// == Field Constraints ==
pub const NAME_MIN_CHARS: usize = 3;
pub const NAME_MAX_CHARS: usize = 100;
pub const TYPE_MIN_CHARS: usize = 3;
pub const TYPE_MAX_CHARS: usize = 50;

/// Request body for creating a product (POST /products)
///
/// Missing fields deserialize as empty strings so they are reported by
/// `validate` rather than rejected by the JSON extractor.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductRequest {
    /// Product name
    #[serde(default)]
    pub name: String,
    /// Product type
    #[serde(default, rename = "type")]
    pub kind: String,
}

impl CreateProductRequest {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }

    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_fields(&self.name, &self.kind)
    }

    /// Maps the request onto a product the store has not seen yet.
    pub fn into_product(self) -> Product {
        Product::unsaved(self.name, self.kind)
    }
}

/// Request body for updating a product (PUT /products)
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProductRequest {
    /// Id of the product to replace
    #[serde(default)]
    pub id: String,
    /// New product name
    #[serde(default)]
    pub name: String,
    /// New product type
    #[serde(default, rename = "type")]
    pub kind: String,
}

impl UpdateProductRequest {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: kind.into(),
        }
    }

    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.id.trim().is_empty() {
            return Some("Product id is required".to_string());
        }
        validate_fields(&self.name, &self.kind)
    }

    /// Replaces `name` and `type` on the stored record. The stored id is kept.
    pub fn apply_to(self, existing: Product) -> Product {
        Product {
            id: existing.id,
            name: self.name,
            kind: self.kind,
        }
    }
}

fn validate_fields(name: &str, kind: &str) -> Option<String> {
    check_field("Product name", name, NAME_MIN_CHARS, NAME_MAX_CHARS)
        .or_else(|| check_field("Product type", kind, TYPE_MIN_CHARS, TYPE_MAX_CHARS))
}

fn check_field(label: &str, value: &str, min: usize, max: usize) -> Option<String> {
    if value.trim().is_empty() {
        return Some(format!("{} is required", label));
    }
    let chars = value.chars().count();
    if chars < min || chars > max {
        return Some(format!(
            "{} must be between {} and {} characters",
            label, min, max
        ));
    }
    None
}
