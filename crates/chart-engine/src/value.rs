//! Record and scalar value types.
//!
//! Incoming data arrives as loosely typed JSON. Each field value is narrowed
//! to a [`Scalar`] so the classifier can match on it exhaustively.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A single field value inside a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Missing or explicit `null`.
    Null,
    /// `true` / `false`.
    Boolean(bool),
    /// Any JSON number. Kept as [`Number`] so integers echo back unchanged.
    Number(Number),
    /// Any string.
    Text(String),
}

impl Scalar {
    /// Whether this value is `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// The string payload, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The numeric payload as `f64`, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => n.as_f64(),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    /// String form used for uniqueness counting.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => f.write_str("null"),
            Scalar::Boolean(b) => write!(f, "{}", b),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<&Value> for Scalar {
    /// Nested arrays and objects are flattened to their compact JSON text.
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Scalar::Null,
            Value::Bool(b) => Scalar::Boolean(*b),
            Value::Number(n) => Scalar::Number(n.clone()),
            Value::String(s) => Scalar::Text(s.clone()),
            nested => Scalar::Text(nested.to_string()),
        }
    }
}

impl From<Value> for Scalar {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Scalar::Text(s),
            other => Scalar::from(&other),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<f64> for Scalar {
    /// Non-finite floats have no JSON form and become `Null`.
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(Scalar::Null, Scalar::Number)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Number(Number::from(value))
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Boolean(value)
    }
}

/// One flat record. Field order is the order the fields were declared in.
pub type Record = IndexMap<String, Scalar>;

/// An ordered sequence of records.
pub type Dataset = Vec<Record>;

/// A record exactly as the caller sent it. Echoed back in results.
pub type RawRecord = serde_json::Map<String, Value>;

/// Convert a JSON object into a [`Record`], preserving key order.
///
/// Only the classification path works on [`Record`]s.
pub fn record_from_object(object: &serde_json::Map<String, Value>) -> Record {
    object
        .iter()
        .map(|(key, value)| (key.clone(), Scalar::from(value)))
        .collect()
}

/// Collect the non-null values of `field` across `dataset`, in dataset order.
pub fn field_values(dataset: &[Record], field: &str) -> Vec<Scalar> {
    dataset
        .iter()
        .filter_map(|record| record.get(field))
        .filter(|value| !value.is_null())
        .cloned()
        .collect()
}
