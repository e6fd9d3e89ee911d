//! # Domain Types
//!
//! Core domain types for the offline catalog.
//!
//! ## The Single Entity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           Product                                       │
//! │                                                                         │
//! │  id          ─ caller-supplied primary key, immutable once created     │
//! │  name        ─ display label shown on the list and details screens     │
//! │  description ─ free text, may be empty                                 │
//! │  image_uri   ─ URI/path to an image resource, may be empty             │
//! │  price       ─ decimal-like TEXT, opaque to the store                  │
//! │                                                                         │
//! │  No foreign keys, no secondary indices, no timestamps.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! The store never generates ids. The Add screen collects one (SKU,
//! barcode, or whatever the user types) and uniqueness is enforced only
//! by the primary-key constraint at insert time.

use serde::{Deserialize, Serialize};

// =============================================================================
// Product
// =============================================================================

/// A catalog product.
///
/// All five fields are text. Serialized field names are camelCase to
/// match what the screens persist (`imageUri`, not `image_uri`), and the
/// database column of the same spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, supplied by the caller. Immutable once created.
    pub id: String,

    /// Display name shown on the list and details screens.
    pub name: String,

    /// Free-text description. May be empty.
    pub description: String,

    /// URI or path to an image resource. May be empty.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "imageUri"))]
    pub image_uri: String,

    /// Price as decimal-like text (e.g. `"1.50"`).
    ///
    /// Kept as an opaque string to avoid precision/formatting surprises;
    /// callers format and validate (see `validation::validate_price_text`).
    pub price: String,
}

impl Product {
    /// Creates a product from its five fields.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        image_uri: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            image_uri: image_uri.into(),
            price: price.into(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let product = Product::new("P1", "Pen", "Blue pen", "file:///pen.png", "1.50");
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["id"], "P1");
        assert_eq!(json["imageUri"], "file:///pen.png");
        assert!(json.get("image_uri").is_none());
        assert_eq!(json["price"], "1.50");
    }

    #[test]
    fn test_round_trips_through_json() {
        let product = Product::new("P2", "Notebook", "", "", "3.25");
        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }
}
