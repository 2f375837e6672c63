//! Product entity
//!
//! The record owned by the persistence store. Caches only ever hold copies.

use serde::{Deserialize, Serialize};

/// A product record.
///
/// `id` is empty until the store assigns one on first save, and never changes
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identifier
    pub id: String,
    /// Product name (3-100 characters)
    pub name: String,
    /// Product type (3-50 characters)
    #[serde(rename = "type")]
    pub kind: String,
}

impl Product {
    /// Creates a product that has not been persisted yet.
    pub fn unsaved(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            kind: kind.into(),
        }
    }

    /// Returns true if the store has not assigned an id yet.
    pub fn is_new(&self) -> bool {
        self.id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_serializes_kind_as_type() {
        let product = Product {
            id: "p1".to_string(),
            name: "Smartphone".to_string(),
            kind: "Electronics".to_string(),
        };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["type"], "Electronics");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_unsaved_product_is_new() {
        let product = Product::unsaved("Smartphone", "Electronics");
        assert!(product.is_new());
        assert_eq!(product.name, "Smartphone");
    }
}
