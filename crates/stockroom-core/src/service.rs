//! # Product Service
//!
//! Validates input, turns raw records into [`Product`]s and forwards calls
//! to the injected [`ProductDao`].
//!
//! ## update_qty Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  update_qty(id, qty)                                                    │
//! │       │                                                                 │
//! │       ├── qty < 0?            → NegativeQuantity   (no DAO call)       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  get_product(id)                                                        │
//! │       │                                                                 │
//! │       ├── None?               → NotFound                               │
//! │       │                                                                 │
//! │       ├── qty unchanged?      → Ok(())             (no DAO write)      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  dao.update_qty(id, qty)                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The fetch and the write are two separate DAO calls. Two callers updating
//! the same product can interleave between them; whatever isolation exists
//! comes from the DAO.

use tracing::debug;

use crate::dao::ProductDao;
use crate::error::{ServiceError, ServiceResult, ValidationError};
use crate::record::Record;
use crate::types::{Product, ProductId};
use crate::validation::{validate_new_product, validate_quantity};

/// Product operations over an injected DAO.
///
/// ## Usage
/// ```rust,ignore
/// let service = ProductService::new(db.products());
///
/// let products = service.list_products().await?;
/// service.update_qty(42, 7).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductService<D> {
    dao: D,
}

impl<D: ProductDao> ProductService<D> {
    /// Creates a service over the given DAO.
    pub fn new(dao: D) -> Self {
        ProductService { dao }
    }

    /// Borrows the DAO.
    pub fn dao(&self) -> &D {
        &self.dao
    }

    /// Lists every product, in DAO order.
    ///
    /// A record that cannot be loaded fails the whole listing.
    pub async fn list_products(&self) -> ServiceResult<Vec<Product>, D::Error> {
        let records = self.dao.list_products().await.map_err(ServiceError::Dao)?;

        debug!(count = records.len(), "Listing products");

        let products = records
            .iter()
            .map(Product::load)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(products)
    }

    /// Fetches a single product.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - DAO has no record, or handed back an empty one
    pub async fn get_product(&self, id: ProductId) -> ServiceResult<Option<Product>, D::Error> {
        let record = self.dao.get_product(id).await.map_err(ServiceError::Dao)?;

        match record {
            Some(record) if !record.is_empty() => Ok(Some(Product::load(&record)?)),
            _ => {
                debug!(id, "Product not found");
                Ok(None)
            }
        }
    }

    /// Inserts a new product record.
    ///
    /// Requires `id`, `name` and `cost` keys. The record is forwarded to the
    /// DAO exactly as given.
    pub async fn add_product(&self, record: &Record) -> ServiceResult<(), D::Error> {
        validate_new_product(record)?;

        debug!(id = ?record.get("id"), "Adding product");

        self.dao.add_product(record).await.map_err(ServiceError::Dao)
    }

    /// Sets the quantity on hand for an existing product.
    ///
    /// Skips the DAO write when the stored quantity already matches.
    pub async fn update_qty(&self, id: ProductId, qty: i64) -> ServiceResult<(), D::Error> {
        validate_quantity(qty)?;

        let existing = self
            .get_product(id)
            .await?
            .ok_or(ValidationError::NotFound { id })?;

        if existing.qty == qty {
            debug!(id, qty, "Quantity unchanged, skipping write");
            return Ok(());
        }

        debug!(id, from = existing.qty, to = qty, "Updating quantity");

        self.dao.update_qty(id, qty).await.map_err(ServiceError::Dao)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecordError;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use thiserror::Error;

    #[derive(Debug, Error, PartialEq)]
    #[error("storage unavailable")]
    struct Unavailable;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        List,
        Get(ProductId),
        Add(Record),
        UpdateQty(ProductId, i64),
    }

    /// In-memory DAO that remembers every call made into it.
    #[derive(Default)]
    struct RecordingDao {
        records: Vec<Record>,
        calls: Mutex<Vec<Call>>,
        failing: bool,
        empty_hits: bool,
    }

    impl RecordingDao {
        fn with_records(records: Vec<Record>) -> Self {
            RecordingDao {
                records,
                ..Default::default()
            }
        }

        fn failing() -> Self {
            RecordingDao {
                failing: true,
                ..Default::default()
            }
        }

        fn log(&self, call: Call) -> Result<(), Unavailable> {
            self.calls.lock().unwrap().push(call);
            if self.failing {
                return Err(Unavailable);
            }
            Ok(())
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn writes(&self) -> Vec<Call> {
            self.calls()
                .into_iter()
                .filter(|c| matches!(c, Call::Add(_) | Call::UpdateQty(..)))
                .collect()
        }
    }

    #[async_trait]
    impl ProductDao for RecordingDao {
        type Error = Unavailable;

        async fn list_products(&self) -> Result<Vec<Record>, Unavailable> {
            self.log(Call::List)?;
            Ok(self.records.clone())
        }

        async fn get_product(&self, id: ProductId) -> Result<Option<Record>, Unavailable> {
            self.log(Call::Get(id))?;
            if self.empty_hits {
                return Ok(Some(Record::new()));
            }
            Ok(self
                .records
                .iter()
                .find(|r| r.require_i64("id").ok() == Some(id))
                .cloned())
        }

        async fn add_product(&self, record: &Record) -> Result<(), Unavailable> {
            self.log(Call::Add(record.clone()))
        }

        async fn update_qty(&self, id: ProductId, qty: i64) -> Result<(), Unavailable> {
            self.log(Call::UpdateQty(id, qty))
        }
    }

    fn widget(id: ProductId, qty: Option<i64>) -> Record {
        let record = Record::new()
            .with("id", id)
            .with("name", format!("Widget {id}"))
            .with("description", "")
            .with("cost", 9.99);
        match qty {
            Some(qty) => record.with("qty", qty),
            None => record,
        }
    }

    // -------------------------------------------------------------------------
    // list_products
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_list_products_preserves_order() {
        let records = vec![widget(3, Some(1)), widget(1, None), widget(2, Some(9))];
        let service = ProductService::new(RecordingDao::with_records(records.clone()));

        let products = service.list_products().await.unwrap();

        assert_eq!(products.len(), records.len());
        for (product, record) in products.iter().zip(&records) {
            assert_eq!(product, &Product::load(record).unwrap());
        }
        assert_eq!(products[1].qty, 0);
    }

    #[tokio::test]
    async fn test_list_products_empty() {
        let service = ProductService::new(RecordingDao::default());
        assert!(service.list_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_products_bad_record_fails() {
        let mut broken = widget(2, None);
        broken.remove("description");
        let service = ProductService::new(RecordingDao::with_records(vec![widget(1, None), broken]));

        let err = service.list_products().await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Record(RecordError::MissingField {
                field: "description"
            })
        ));
    }

    #[tokio::test]
    async fn test_dao_failure_propagates_unchanged() {
        let service = ProductService::new(RecordingDao::failing());

        let err = service.list_products().await.unwrap_err();
        assert_eq!(err.as_dao(), Some(&Unavailable));
        assert_eq!(err.to_string(), "storage unavailable");

        let err = service.get_product(1).await.unwrap_err();
        assert_eq!(err.as_dao(), Some(&Unavailable));
    }

    // -------------------------------------------------------------------------
    // get_product
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_get_product_found() {
        let service = ProductService::new(RecordingDao::with_records(vec![widget(42, Some(5))]));

        let product = service.get_product(42).await.unwrap().unwrap();
        assert_eq!(product, Product::new(42, "Widget 42", "", 9.99).with_qty(5));
        assert_eq!(service.dao().calls(), vec![Call::Get(42)]);
    }

    #[tokio::test]
    async fn test_get_product_absent() {
        let service = ProductService::new(RecordingDao::default());
        assert_eq!(service.get_product(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_get_product_empty_record_is_absent() {
        let dao = RecordingDao {
            empty_hits: true,
            ..Default::default()
        };
        let service = ProductService::new(dao);
        assert_eq!(service.get_product(42).await.unwrap(), None);
    }

    // -------------------------------------------------------------------------
    // add_product
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_add_product_forwards_record_unchanged() {
        let service = ProductService::new(RecordingDao::default());
        let record = Record::new()
            .with("id", 7)
            .with("name", "Widget")
            .with("cost", 9.99)
            .with("colour", "blue");

        service.add_product(&record).await.unwrap();

        assert_eq!(service.dao().calls(), vec![Call::Add(record)]);
    }

    #[tokio::test]
    async fn test_add_product_without_id_never_reaches_dao() {
        let service = ProductService::new(RecordingDao::default());
        let record = Record::new().with("name", "Widget").with("cost", 9.99);

        let err = service.add_product(&record).await.unwrap_err();

        assert_eq!(err.to_string(), "Product data is incomplete");
        assert_eq!(
            err.as_validation(),
            Some(&ValidationError::Incomplete { missing: vec!["id"] })
        );
        assert!(service.dao().calls().is_empty());
    }

    #[tokio::test]
    async fn test_add_product_missing_name_or_cost() {
        let service = ProductService::new(RecordingDao::default());

        let no_name = Record::new().with("id", 1).with("cost", 1.0);
        let no_cost = Record::new().with("id", 1).with("name", "A");

        assert!(service.add_product(&no_name).await.is_err());
        assert!(service.add_product(&no_cost).await.is_err());
        assert!(service.dao().calls().is_empty());
    }

    // -------------------------------------------------------------------------
    // update_qty
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_update_qty_negative_never_reaches_dao() {
        let service = ProductService::new(RecordingDao::with_records(vec![widget(42, Some(5))]));

        let err = service.update_qty(42, -1).await.unwrap_err();

        assert_eq!(err.to_string(), "Quantity cannot be negative");
        assert!(service.dao().calls().is_empty());
    }

    #[tokio::test]
    async fn test_update_qty_unchanged_skips_write() {
        let service = ProductService::new(RecordingDao::with_records(vec![widget(42, Some(5))]));

        service.update_qty(42, 5).await.unwrap();

        assert_eq!(service.dao().calls(), vec![Call::Get(42)]);
        assert!(service.dao().writes().is_empty());
    }

    #[tokio::test]
    async fn test_update_qty_zero_against_missing_qty_skips_write() {
        let service = ProductService::new(RecordingDao::with_records(vec![widget(42, None)]));

        service.update_qty(42, 0).await.unwrap();

        assert!(service.dao().writes().is_empty());
    }

    #[tokio::test]
    async fn test_update_qty_writes_once() {
        let service = ProductService::new(RecordingDao::with_records(vec![widget(42, Some(5))]));

        service.update_qty(42, 7).await.unwrap();

        assert_eq!(service.dao().writes(), vec![Call::UpdateQty(42, 7)]);
    }

    #[tokio::test]
    async fn test_update_qty_not_found() {
        let service = ProductService::new(RecordingDao::default());

        let err = service.update_qty(999, 3).await.unwrap_err();

        assert_eq!(err.to_string(), "Product not found");
        assert_eq!(
            err.as_validation(),
            Some(&ValidationError::NotFound { id: 999 })
        );
        assert!(service.dao().writes().is_empty());
    }
}
