//! # Raw Records
//!
//! A [`Record`] is the untyped shape products travel in between the service
//! and the DAO: a JSON object mapping field names to values.
//!
//! ## Schema
//! ```text
//! ┌──────────────┬───────────┬──────────┬──────────────────────┐
//! │ key          │ JSON type │ required │ default              │
//! ├──────────────┼───────────┼──────────┼──────────────────────┤
//! │ id           │ integer   │ yes      │ -                    │
//! │ name         │ string    │ yes      │ -                    │
//! │ description  │ string    │ yes      │ -                    │
//! │ cost         │ number    │ yes      │ -                    │
//! │ qty          │ integer   │ no       │ 0                    │
//! └──────────────┴───────────┴──────────┴──────────────────────┘
//! ```
//!
//! Unknown keys are kept and ignored.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::RecordError;

/// A raw product record as exchanged with the DAO.
///
/// ## Example
/// ```rust
/// use stockroom_core::Record;
///
/// let record = Record::new()
///     .with("id", 42)
///     .with("name", "Widget")
///     .with("cost", 9.99);
///
/// assert!(record.contains("name"));
/// assert!(!record.contains("description"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Record(Map::new())
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Removes a key.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether the key is present. A `null` value still counts as present.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    // =========================================================================
    // Typed Extraction
    // =========================================================================

    fn require(&self, field: &'static str) -> Result<&Value, RecordError> {
        self.0.get(field).ok_or(RecordError::MissingField { field })
    }

    /// Reads a required integer field.
    pub fn require_i64(&self, field: &'static str) -> Result<i64, RecordError> {
        self.require(field)?
            .as_i64()
            .ok_or(RecordError::InvalidField {
                field,
                expected: "an integer",
            })
    }

    /// Reads a required numeric field. Integers are accepted.
    pub fn require_f64(&self, field: &'static str) -> Result<f64, RecordError> {
        self.require(field)?
            .as_f64()
            .ok_or(RecordError::InvalidField {
                field,
                expected: "a number",
            })
    }

    /// Reads a required string field.
    pub fn require_str(&self, field: &'static str) -> Result<&str, RecordError> {
        self.require(field)?
            .as_str()
            .ok_or(RecordError::InvalidField {
                field,
                expected: "a string",
            })
    }

    /// Reads an optional string field, falling back to `default` when the
    /// key is absent or `null`.
    pub fn optional_str<'a>(
        &'a self,
        field: &'static str,
        default: &'a str,
    ) -> Result<&'a str, RecordError> {
        match self.0.get(field) {
            None | Some(Value::Null) => Ok(default),
            Some(value) => value.as_str().ok_or(RecordError::InvalidField {
                field,
                expected: "a string",
            }),
        }
    }

    /// Reads an optional integer field, falling back to `default` when the
    /// key is absent or `null`.
    pub fn optional_i64(&self, field: &'static str, default: i64) -> Result<i64, RecordError> {
        match self.0.get(field) {
            None | Some(Value::Null) => Ok(default),
            Some(value) => value.as_i64().ok_or(RecordError::InvalidField {
                field,
                expected: "an integer",
            }),
        }
    }
}

impl TryFrom<Value> for Record {
    type Error = RecordError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Record(map)),
            _ => Err(RecordError::NotAnObject),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_typed_extraction() {
        let record = Record::new()
            .with("id", 7)
            .with("name", "Bolt")
            .with("cost", 3);

        assert_eq!(record.require_i64("id"), Ok(7));
        assert_eq!(record.require_str("name"), Ok("Bolt"));
        // integers are valid numbers
        assert_eq!(record.require_f64("cost"), Ok(3.0));
    }

    #[test]
    fn test_missing_and_invalid() {
        let record = Record::new().with("id", "seven");

        assert_eq!(
            record.require_str("name"),
            Err(RecordError::MissingField { field: "name" })
        );
        assert_eq!(
            record.require_i64("id"),
            Err(RecordError::InvalidField {
                field: "id",
                expected: "an integer"
            })
        );
    }

    #[test]
    fn test_optional_default() {
        let record = Record::new().with("qty", Value::Null);
        assert_eq!(record.optional_i64("qty", 0), Ok(0));
        assert_eq!(Record::new().optional_i64("qty", 0), Ok(0));
        assert_eq!(Record::new().with("qty", 12).optional_i64("qty", 0), Ok(12));
        assert!(Record::new().with("qty", "lots").optional_i64("qty", 0).is_err());

        assert_eq!(Record::new().optional_str("description", ""), Ok(""));
        assert_eq!(
            Record::new().with("description", "blue").optional_str("description", ""),
            Ok("blue")
        );
    }

    #[test]
    fn test_null_counts_as_present() {
        let record = Record::new().with("description", Value::Null);
        assert!(record.contains("description"));
    }

    #[test]
    fn test_try_from_value() {
        let record = Record::try_from(json!({"id": 1, "name": "A"})).unwrap();
        assert_eq!(record.len(), 2);

        assert_eq!(Record::try_from(json!([1, 2])), Err(RecordError::NotAnObject));
    }

    #[test]
    fn test_serde_is_transparent() {
        let record: Record = serde_json::from_str(r#"{"id": 1, "cost": 2.5}"#).unwrap();
        assert_eq!(record.require_f64("cost"), Ok(2.5));
        assert_eq!(serde_json::to_value(&record).unwrap(), json!({"id": 1, "cost": 2.5}));
    }
}
