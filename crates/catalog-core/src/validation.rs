//! # Validation Module
//!
//! Input validation utilities for the catalog's Add/Edit forms.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Screen (form widgets)                                        │
//! │  ├── THIS MODULE: field rules before save                              │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Database (SQLite)                                            │
//! │  ├── NOT NULL on id                                                    │
//! │  └── PRIMARY KEY uniqueness                                            │
//! │                                                                         │
//! │  The store itself enforces only the primary-key constraint; these      │
//! │  rules belong to the callers.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use catalog_core::validation::{validate_product_id, validate_price_text};
//!
//! validate_product_id("P1").unwrap();
//! validate_price_text("1.50").unwrap();
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::{MAX_ID_LEN, MAX_NAME_LEN};

// =============================================================================
// String Validators
// =============================================================================

/// Validates a caller-supplied product id.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 64 characters
///
/// The store never generates ids, so this is the only gate between the
/// Add screen's text field and the primary key column.
///
/// ## Example
/// ```rust
/// use catalog_core::validation::validate_product_id;
///
/// assert!(validate_product_id("P1").is_ok());
/// assert!(validate_product_id("").is_err());
/// ```
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > MAX_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: MAX_ID_LEN,
        });
    }

    Ok(())
}

/// Validates a product display name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Price Text Validator
// =============================================================================

/// Validates price text.
///
/// ## Rules
/// - Empty is allowed (the Add screen defaults it)
/// - Otherwise: optional digits, optional `.` with at most two fraction
///   digits; at least one digit overall (`"1"`, `"1.5"`, `".50"` are all
///   accepted, `"1.2.3"` and `"-1"` are not)
///
/// The stored value is whatever the caller passed; this only guards
/// against text that could never render as a price.
pub fn validate_price_text(price: &str) -> ValidationResult<()> {
    let price = price.trim();

    if price.is_empty() {
        return Ok(());
    }

    let (whole, fraction) = match price.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (price, None),
    };

    let whole_ok = whole.chars().all(|c| c.is_ascii_digit());
    let fraction_ok = match fraction {
        Some(f) => f.len() <= 2 && !f.is_empty() && f.chars().all(|c| c.is_ascii_digit()),
        None => true,
    };
    let has_digit = price.chars().any(|c| c.is_ascii_digit());

    if !whole_ok || !fraction_ok || !has_digit {
        return Err(ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "must be non-negative decimal text with at most two fraction digits"
                .to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_id() {
        // Valid ids
        assert!(validate_product_id("P1").is_ok());
        assert!(validate_product_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_product_id("  padded  ").is_ok());

        // Invalid ids
        assert!(validate_product_id("").is_err());
        assert!(validate_product_id("   ").is_err());
        assert!(validate_product_id(&"A".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Blue Pen").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_price_text() {
        assert!(validate_price_text("").is_ok());
        assert!(validate_price_text("0").is_ok());
        assert!(validate_price_text("1.50").is_ok());
        assert!(validate_price_text("1.5").is_ok());
        assert!(validate_price_text(".50").is_ok());
        assert!(validate_price_text("199").is_ok());

        assert!(validate_price_text("-1").is_err());
        assert!(validate_price_text("1.2.3").is_err());
        assert!(validate_price_text("1.").is_err());
        assert!(validate_price_text("1.505").is_err());
        assert!(validate_price_text("abc").is_err());
        assert!(validate_price_text(".").is_err());
    }
}
