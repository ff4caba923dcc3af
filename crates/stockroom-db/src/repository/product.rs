//! # Product Repository
//!
//! SQLite-backed [`ProductDao`].
//!
//! ## Record ↔ Row Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add_product(record)                                                    │
//! │    id           ← required integer                                      │
//! │    name         ← required string                                       │
//! │    cost         ← required number                                       │
//! │    description  ← optional string, stored as '' when absent             │
//! │    qty          ← optional integer, stored as 0 when absent             │
//! │                                                                         │
//! │  list_products / get_product                                            │
//! │    every row comes back as a record carrying all five keys              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Duplicate ids and negative quantities are rejected by table constraints
//! and surface as [`DbError::UniqueViolation`] / [`DbError::CheckViolation`].

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{FromRow, SqlitePool};
use tracing::debug;

use stockroom_core::{ProductDao, ProductId, Record, DEFAULT_QTY};

use crate::error::{DbError, DbResult};

/// One row of the `products` table.
#[derive(Debug, Clone, FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: String,
    cost: f64,
    qty: i64,
}

impl From<ProductRow> for Record {
    fn from(row: ProductRow) -> Self {
        Record::new()
            .with("id", row.id)
            .with("name", row.name)
            .with("description", row.description)
            .with("cost", row.cost)
            .with("qty", row.qty)
    }
}

/// Product DAO over a SQLite pool.
///
/// ## Usage
/// ```rust,ignore
/// let dao = SqliteProductDao::new(pool);
/// let service = ProductService::new(dao);
/// ```
#[derive(Debug, Clone)]
pub struct SqliteProductDao {
    pool: SqlitePool,
}

impl SqliteProductDao {
    /// Creates a new SqliteProductDao.
    pub fn new(pool: SqlitePool) -> Self {
        SqliteProductDao { pool }
    }

    /// Counts stored products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl ProductDao for SqliteProductDao {
    type Error = DbError;

    /// Returns all products ordered by id.
    async fn list_products(&self) -> DbResult<Vec<Record>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, cost, qty
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Fetched product rows");
        Ok(rows.into_iter().map(Record::from).collect())
    }

    async fn get_product(&self, id: ProductId) -> DbResult<Option<Record>> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, cost, qty
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Record::from))
    }

    /// Inserts a new product row.
    ///
    /// ## Returns
    /// * `Err(DbError::InvalidRecord)` - A key holds the wrong kind of value
    /// * `Err(DbError::UniqueViolation)` - The id already exists
    /// * `Err(DbError::CheckViolation)` - `qty` is negative
    async fn add_product(&self, record: &Record) -> DbResult<()> {
        let id = record.require_i64("id")?;
        let name = record.require_str("name")?;
        let cost = record.require_f64("cost")?;
        let description = record.optional_str("description", "")?;
        let qty = record.optional_i64("qty", DEFAULT_QTY)?;

        debug!(id, product_name = name, "Inserting product");

        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO products (
                id, name, description, cost, qty, created_at, updated_at
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5, ?6, ?6
            )
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(cost)
        .bind(qty)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|err| match DbError::from(err) {
            DbError::UniqueViolation { field, .. } => DbError::duplicate(field, id),
            other => other,
        })?;

        Ok(())
    }

    /// Overwrites the stored quantity.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - No row with this id
    async fn update_qty(&self, id: ProductId, qty: i64) -> DbResult<()> {
        debug!(id, qty, "Updating quantity");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE products
            SET
                qty = ?2,
                updated_at = ?3
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(qty)
        .bind(now)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
