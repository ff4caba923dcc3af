//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  ├── RecordError      - A raw record cannot become a Product           │
//! │  ├── ValidationError  - Service input rejected before/after a fetch    │
//! │  └── ServiceError<E>  - Everything a service call can return           │
//! │                                                                         │
//! │  stockroom-db errors (separate crate)                                  │
//! │  └── DbError          - Carried inside ServiceError::Dao unchanged     │
//! │                                                                         │
//! │  Flow: RecordError / ValidationError / E  →  ServiceError<E>  → caller │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Messages for validation failures are fixed strings callers can match on
//! 3. The DAO's error type is never wrapped or translated

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Record Error
// =============================================================================

/// Failures turning a raw record into a [`Product`](crate::Product).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// A required key is absent from the record.
    #[error("record is missing required field '{field}'")]
    MissingField { field: &'static str },

    /// The key is present but holds the wrong kind of value.
    ///
    /// ## When This Occurs
    /// - `"id": "abc"` instead of an integer
    /// - `"cost": null`
    #[error("record field '{field}' must be {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },

    /// The value handed over as a record is not a JSON object.
    #[error("record must be a JSON object")]
    NotAnObject,
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors raised by the product service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `add_product` was given a record without `id`, `name` or `cost`.
    #[error("Product data is incomplete")]
    Incomplete { missing: Vec<&'static str> },

    /// `update_qty` was asked to store a quantity below zero.
    #[error("Quantity cannot be negative")]
    NegativeQuantity { requested: i64 },

    /// `update_qty` targeted a product the DAO does not know.
    #[error("Product not found")]
    NotFound { id: ProductId },
}

// =============================================================================
// Service Error
// =============================================================================

/// Everything a [`ProductService`](crate::ProductService) call can fail with.
///
/// `E` is the DAO's own error type. It is carried as-is in [`ServiceError::Dao`]
/// so callers can match on storage failures exactly as the DAO reported them.
#[derive(Debug, Error)]
pub enum ServiceError<E>
where
    E: std::error::Error + 'static,
{
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Dao(E),
}

impl<E> ServiceError<E>
where
    E: std::error::Error + 'static,
{
    /// Returns the validation failure, if that is what this is.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            ServiceError::Validation(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the DAO failure, if that is what this is.
    pub fn as_dao(&self) -> Option<&E> {
        match self {
            ServiceError::Dao(err) => Some(err),
            _ => None,
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience alias for service results parameterised by the DAO error.
pub type ServiceResult<T, E> = Result<T, ServiceError<E>>;

// =============================================================================
// Unit Tests
// =============================================================================
