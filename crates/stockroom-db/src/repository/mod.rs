//! # Repository Module
//!
//! SQLite implementations of the core DAO contracts.
//!
//! ```text
//! ProductService
//!      │  dao.get_product(42)
//!      ▼
//! SqliteProductDao
//! ├── list_products()
//! ├── get_product(id)
//! ├── add_product(&record)
//! └── update_qty(id, qty)
//!      │  SQL
//!      ▼
//! SQLite `products` table
//! ```
//!
//! ## Available Repositories
//!
//! - [`SqliteProductDao`](product::SqliteProductDao) - Product records

pub mod product;
