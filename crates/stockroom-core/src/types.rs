//! # Domain Types
//!
//! The [`Product`] entity and its identifier.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   DAO ──► Record ──► Product::load ──► Product ──► caller ──► dropped   │
//! │                                                                         │
//! │   Products are projections rebuilt on every read. They are never       │
//! │   cached and never written back in place: a quantity change goes       │
//! │   through the service, and the caller re-fetches to observe it.        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::RecordError;
use crate::record::Record;

/// Externally assigned product identifier.
pub type ProductId = i64;

/// Quantity used when a record carries no `qty`.
pub const DEFAULT_QTY: i64 = 0;

/// Keys [`Product::load`] cannot do without, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 4] = ["id", "name", "description", "cost"];

// =============================================================================
// Product
// =============================================================================

/// A product and its quantity on hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, assigned by whoever created the product.
    pub id: ProductId,

    /// Display label.
    pub name: String,

    /// Free text, may be empty.
    pub description: String,

    /// Unit cost.
    pub cost: f64,

    /// Quantity on hand.
    #[serde(default)]
    pub qty: i64,
}

impl Product {
    /// Creates a product with no stock.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        cost: f64,
    ) -> Self {
        Product {
            id,
            name: name.into(),
            description: description.into(),
            cost,
            qty: DEFAULT_QTY,
        }
    }

    /// Sets the quantity on hand.
    pub fn with_qty(mut self, qty: i64) -> Self {
        self.qty = qty;
        self
    }

    /// Builds a product from a raw record.
    ///
    /// ## Rules
    /// - `id`, `name`, `description`, `cost` must be present
    /// - `qty` falls back to [`DEFAULT_QTY`] when absent
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::{Product, Record};
    ///
    /// let record = Record::new()
    ///     .with("id", 1)
    ///     .with("name", "Widget")
    ///     .with("description", "")
    ///     .with("cost", 9.99);
    ///
    /// let product = Product::load(&record).unwrap();
    /// assert_eq!(product.qty, 0);
    /// ```
    pub fn load(record: &Record) -> Result<Self, RecordError> {
        Ok(Product {
            id: record.require_i64("id")?,
            name: record.require_str("name")?.to_string(),
            description: record.require_str("description")?.to_string(),
            cost: record.require_f64("cost")?,
            qty: record.optional_i64("qty", DEFAULT_QTY)?,
        })
    }

    /// Projects the product back into a record (all five keys present).
    pub fn to_record(&self) -> Record {
        Record::new()
            .with("id", self.id)
            .with("name", self.name.as_str())
            .with("description", self.description.as_str())
            .with("cost", self.cost)
            .with("qty", self.qty)
    }

    /// Checks if any stock is on hand.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.qty > 0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
