//! Field value types for documents.
//!
//! [`FieldValue`] covers every value a stored document can hold, including
//! nested arrays and objects as they come out of JSON-shaped stores.
//!
//! # Text coercion
//!
//! Scoring only sees text. Every value can be flattened with
//! [`FieldValue::to_text`]: leaves are rendered and joined with single
//! spaces, `Null` contributes nothing.
//!
//! ```
//! use morelike::document::field_value::FieldValue;
//!
//! let text_value = FieldValue::Text("hello".to_string());
//! assert_eq!(text_value.as_text(), Some("hello"));
//!
//! let nested = FieldValue::Array(vec![
//!     FieldValue::Text("College of Engineering".to_string()),
//!     FieldValue::Integer(2005),
//!     FieldValue::Null,
//! ]);
//! assert_eq!(nested.to_text(), "College of Engineering 2005");
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::document::id::DocumentId;

/// Represents a value for a field in a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Text value
    Text(String),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Boolean(bool),
    /// DateTime value
    DateTime(DateTime<Utc>),
    /// Document identifier
    Id(DocumentId),
    /// Ordered list of values
    Array(Vec<FieldValue>),
    /// Nested sub-document
    Object(IndexMap<String, FieldValue>),
    /// Null value
    Null,
}

impl FieldValue {
    /// Get the text value if this is a text field.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the numeric value as a decimal string.
    pub fn as_numeric(&self) -> Option<String> {
        match self {
            FieldValue::Integer(i) => Some(i.to_string()),
            FieldValue::Float(f) => Some(f.to_string()),
            _ => None,
        }
    }

    /// Get the boolean value.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the id if this is an id field.
    pub fn as_id(&self) -> Option<&DocumentId> {
        match self {
            FieldValue::Id(id) => Some(id),
            _ => None,
        }
    }

    /// Get the datetime value.
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Flatten the value to text.
    pub fn to_text(&self) -> String {
        let mut parts = Vec::new();
        self.collect_text(&mut parts);
        parts.join(" ")
    }

    fn collect_text(&self, parts: &mut Vec<String>) {
        match self {
            FieldValue::Text(s) => parts.push(s.clone()),
            FieldValue::Integer(i) => parts.push(i.to_string()),
            FieldValue::Float(f) => parts.push(f.to_string()),
            FieldValue::Boolean(b) => parts.push(b.to_string()),
            FieldValue::DateTime(dt) => {
                parts.push(dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            FieldValue::Id(id) => parts.push(id.to_hex()),
            FieldValue::Array(values) => {
                for value in values {
                    value.collect_text(parts);
                }
            }
            FieldValue::Object(map) => {
                for value in map.values() {
                    value.collect_text(parts);
                }
            }
            FieldValue::Null => {}
        }
    }

    /// Convert a JSON value.
    ///
    /// Strings stay text even when they look like ids; only the top-level
    /// `_id` of a document is promoted (see [`Document::from_json`](crate::document::Document::from_json)).
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Boolean(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => FieldValue::Integer(i),
                None => n.as_f64().map_or(FieldValue::Null, FieldValue::Float),
            },
            Value::String(s) => FieldValue::Text(s.clone()),
            Value::Array(values) => {
                FieldValue::Array(values.iter().map(FieldValue::from_json).collect())
            }
            Value::Object(map) => FieldValue::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), FieldValue::from_json(v)))
                    .collect(),
            ),
        }
    }

    /// Convert to a JSON value. Ids and datetimes become strings; non-finite
    /// floats become `null`.
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Text(s) => Value::String(s.clone()),
            FieldValue::Integer(i) => Value::Number((*i).into()),
            FieldValue::Float(f) => Number::from_f64(*f).map_or(Value::Null, Value::Number),
            FieldValue::Boolean(b) => Value::Bool(*b),
            FieldValue::DateTime(dt) => {
                Value::String(dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            FieldValue::Id(id) => Value::String(id.to_hex()),
            FieldValue::Array(values) => {
                Value::Array(values.iter().map(FieldValue::to_json).collect())
            }
            FieldValue::Object(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect::<Map<String, Value>>(),
            ),
            FieldValue::Null => Value::Null,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<DocumentId> for FieldValue {
    fn from(value: DocumentId) -> Self {
        FieldValue::Id(value)
    }
}
