//! Validated resource record type.
//!
//! This module provides [`ResourceRecord`], a type that guarantees the
//! value is a usable record payload (a JSON object with an `id` field).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{Error, InvalidInputError};
use crate::types::RecordId;

/// A validated resource record.
///
/// This type guarantees that:
/// - The value is a JSON object
/// - The object contains an `id` field
/// - The `id` field is a string or an integer
///
/// These invariants are enforced at construction and deserialization
/// time, making it impossible to hold a record without an identity.
///
/// # Example
///
/// ```
/// use gantry_core::{RecordId, ResourceRecord};
/// use serde_json::json;
///
/// let record = ResourceRecord::new(json!({
///     "id": 7,
///     "title": "Employee handbook"
/// })).unwrap();
///
/// assert_eq!(record.id(), RecordId::Int(7));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceRecord(Value);

impl ResourceRecord {
    /// Create a new `ResourceRecord` from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The value is not a JSON object
    /// - The object does not contain an `id` field
    /// - The `id` field is not a string or an integer
    pub fn new(value: Value) -> Result<Self, Error> {
        Self::validate(&value)?;
        Ok(Self(value))
    }

    /// The record identity.
    pub fn id(&self) -> RecordId {
        // Safe: validated at construction
        match &self.0["id"] {
            Value::String(s) => RecordId::Str(s.clone()),
            other => RecordId::Int(other.as_i64().unwrap()),
        }
    }

    /// Get a field from the record.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Get a reference to the inner JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume and return the inner JSON value.
    pub fn into_value(self) -> Value {
        self.0
    }

    fn validate(value: &Value) -> Result<(), Error> {
        let obj = value.as_object().ok_or_else(|| {
            Error::InvalidInput(InvalidInputError::Record {
                reason: "record must be a JSON object".to_string(),
            })
        })?;

        let id = obj.get("id").ok_or_else(|| {
            Error::InvalidInput(InvalidInputError::Record {
                reason: "record must contain an id field".to_string(),
            })
        })?;

        match id {
            Value::String(_) => Ok(()),
            Value::Number(n) if n.is_i64() => Ok(()),
            _ => Err(Error::InvalidInput(InvalidInputError::Record {
                reason: "record id must be a string or integer".to_string(),
            })),
        }
    }
}

impl Serialize for ResourceRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ResourceRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        ResourceRecord::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integer_id_accepted() {
        let record = ResourceRecord::new(json!({"id": 3, "user": "jane"})).unwrap();
        assert_eq!(record.id(), RecordId::Int(3));
    }

    #[test]
    fn string_id_accepted() {
        let record = ResourceRecord::new(json!({"id": "doc-3"})).unwrap();
        assert_eq!(record.id(), RecordId::Str("doc-3".to_string()));
    }

    #[test]
    fn missing_id_rejected() {
        assert!(ResourceRecord::new(json!({"title": "orphan"})).is_err());
    }

    #[test]
    fn non_object_rejected() {
        assert!(ResourceRecord::new(json!(["id", 1])).is_err());
        assert!(ResourceRecord::new(json!("id")).is_err());
    }

    #[test]
    fn float_id_rejected() {
        assert!(ResourceRecord::new(json!({"id": 1.5})).is_err());
    }

    #[test]
    fn serde_round_trip_preserves_fields() {
        let record: ResourceRecord =
            serde_json::from_str(r#"{"id": 1, "department": "IT"}"#).unwrap();
        assert_eq!(record.get("department").unwrap(), "IT");

        let encoded = serde_json::to_value(&record).unwrap();
        assert_eq!(encoded, json!({"id": 1, "department": "IT"}));
    }

    #[test]
    fn deserialize_rejects_invalid_record() {
        let result: Result<ResourceRecord, _> = serde_json::from_str(r#"{"title": "no id"}"#);
        assert!(result.is_err());
    }
}
