//! # stockroom-core: Product Domain for Stockroom
//!
//! This crate holds the product entity, the raw record format it is loaded
//! from, and the product service that validates input before handing it to
//! a persistence collaborator.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                         Caller                                  │   │
//! │  │      list_products / get_product / add_product / update_qty     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockroom-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  service  │  │   types   │  │  record   │  │ validation│  │   │
//! │  │   │ Product-  │  │  Product  │  │  Record   │  │  presence │  │   │
//! │  │   │ Service   │  │  ::load   │  │  (JSON)   │  │  qty >= 0 │  │   │
//! │  │   └─────┬─────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │         │ ProductDao (trait, injected)                          │   │
//! │  └─────────┼───────────────────────────────────────────────────────┘   │
//! │            │                                                            │
//! │  ┌─────────▼───────────────────────────────────────────────────────┐   │
//! │  │                stockroom-db (SqliteProductDao)                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The `Product` entity
//! - [`record`] - Raw records exchanged with the DAO
//! - [`dao`] - The `ProductDao` contract
//! - [`service`] - `ProductService`
//! - [`validation`] - Input checks
//! - [`error`] - Error types
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::{Product, Record};
//!
//! let record = Record::new()
//!     .with("id", 42)
//!     .with("name", "Widget")
//!     .with("description", "A small widget")
//!     .with("cost", 9.99)
//!     .with("qty", 5);
//!
//! let product = Product::load(&record).unwrap();
//! assert_eq!(product.qty, 5);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod dao;
pub mod error;
pub mod record;
pub mod service;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use dao::ProductDao;
pub use error::{RecordError, ServiceError, ServiceResult, ValidationError};
pub use record::Record;
pub use service::ProductService;
pub use types::*;
