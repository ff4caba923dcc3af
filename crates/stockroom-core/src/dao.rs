//! # DAO Contract
//!
//! The persistence collaborator the product service talks to.
//!
//! ```text
//! ProductService ──► ProductDao
//!                    ├── list_products()         → Vec<Record>
//!                    ├── get_product(id)         → Option<Record>
//!                    ├── add_product(&record)    → ()
//!                    └── update_qty(id, qty)     → ()
//! ```
//!
//! Implementations own storage, consistency and their own error type. The
//! service adds no locking or transactions on top.

use async_trait::async_trait;

use crate::record::Record;
use crate::types::ProductId;

/// Data-access object for product records.
#[async_trait]
pub trait ProductDao: Send + Sync {
    /// Error reported by the storage. Passed through the service untouched.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns every stored record, in whatever order the storage yields.
    async fn list_products(&self) -> Result<Vec<Record>, Self::Error>;

    /// Returns the record for `id`, or `None` when there is none.
    async fn get_product(&self, id: ProductId) -> Result<Option<Record>, Self::Error>;

    /// Persists a new record.
    async fn add_product(&self, record: &Record) -> Result<(), Self::Error>;

    /// Persists a new quantity for an existing record.
    async fn update_qty(&self, id: ProductId, qty: i64) -> Result<(), Self::Error>;
}
