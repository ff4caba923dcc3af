//! # Validation Module
//!
//! Input checks the product service runs before touching the DAO.
//!
//! ## What Is (and Isn't) Checked Here
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add_product                                                            │
//! │  ├── id, name, cost present?        ← validate_new_product             │
//! │  ├── description present?           ✗ not checked                      │
//! │  └── cost sign / id uniqueness?     ✗ not checked (storage decides)    │
//! │                                                                         │
//! │  update_qty                                                             │
//! │  └── qty >= 0?                      ← validate_quantity                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::record::Record;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Keys a record must carry before it may be inserted.
pub const INSERT_REQUIRED_FIELDS: [&str; 3] = ["id", "name", "cost"];

/// Checks that a new product record has `id`, `name` and `cost` keys.
///
/// Only presence is checked; values are not inspected.
///
/// ## Example
/// ```rust
/// use stockroom_core::Record;
/// use stockroom_core::validation::validate_new_product;
///
/// let record = Record::new().with("name", "Widget").with("cost", 9.99);
/// assert!(validate_new_product(&record).is_err());
/// ```
pub fn validate_new_product(record: &Record) -> ValidationResult<()> {
    let missing: Vec<&'static str> = INSERT_REQUIRED_FIELDS
        .into_iter()
        .filter(|field| !record.contains(field))
        .collect();

    if !missing.is_empty() {
        return Err(ValidationError::Incomplete { missing });
    }

    Ok(())
}

/// Validates a requested quantity.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (sold out)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::NegativeQuantity { requested: qty });
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
    fn test_validate_new_product() {
        let complete = Record::new()
            .with("id", 1)
            .with("name", "Widget")
            .with("cost", 9.99);
        assert!(validate_new_product(&complete).is_ok());

        let no_id = Record::new().with("name", "Widget").with("cost", 9.99);
        assert_eq!(
            validate_new_product(&no_id),
            Err(ValidationError::Incomplete { missing: vec!["id"] })
        );

        assert_eq!(
            validate_new_product(&Record::new()),
            Err(ValidationError::Incomplete {
                missing: vec!["id", "name", "cost"]
            })
        );
    }

    #[test]
    fn test_description_not_required_for_insert() {
        let record = Record::new().with("id", 1).with("name", "").with("cost", -3);
        assert!(validate_new_product(&record).is_ok());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(7).is_ok());
        assert_eq!(
            validate_quantity(-1),
            Err(ValidationError::NegativeQuantity { requested: -1 })
        );
    }
}
