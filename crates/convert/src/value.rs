//! Driver value types
//!
//! [`DriverValue`] is the closed set of shapes a database driver may hand to
//! a scanner. Drivers with richer type systems map onto it before scanning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A value as supplied by a database driver
///
/// Float equality follows IEEE-754 semantics (`NaN != NaN`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DriverValue {
    /// SQL NULL
    Null,
    /// Boolean column
    Bool(bool),
    /// 64-bit signed integer column
    Int(i64),
    /// 64-bit floating point column
    Float(f64),
    /// Text column
    Text(String),
    /// Binary column
    Bytes(Vec<u8>),
    /// Date/time column, normalized to UTC
    Timestamp(DateTime<Utc>),
    /// Array column (e.g. Postgres arrays)
    Array(Vec<DriverValue>),
    /// Structured document column (e.g. JSON objects)
    Object(HashMap<String, DriverValue>),
}

impl DriverValue {
    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            DriverValue::Null => "Null",
            DriverValue::Bool(_) => "Bool",
            DriverValue::Int(_) => "Int",
            DriverValue::Float(_) => "Float",
            DriverValue::Text(_) => "Text",
            DriverValue::Bytes(_) => "Bytes",
            DriverValue::Timestamp(_) => "Timestamp",
            DriverValue::Array(_) => "Array",
            DriverValue::Object(_) => "Object",
        }
    }

    /// Check if this is SQL NULL
    pub fn is_null(&self) -> bool {
        matches!(self, DriverValue::Null)
    }

    /// Get as a byte slice if this is a Bytes value
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            DriverValue::Bytes(b) => Some(b),
            _ => None,
        }
    }
}

impl From<Vec<u8>> for DriverValue {
    fn from(b: Vec<u8>) -> Self {
        DriverValue::Bytes(b)
    }
}

impl From<&[u8]> for DriverValue {
    fn from(b: &[u8]) -> Self {
        DriverValue::Bytes(b.to_vec())
    }
}

impl From<String> for DriverValue {
    fn from(s: String) -> Self {
        DriverValue::Text(s)
    }
}

impl From<&str> for DriverValue {
    fn from(s: &str) -> Self {
        DriverValue::Text(s.to_string())
    }
}

impl From<i64> for DriverValue {
    fn from(i: i64) -> Self {
        DriverValue::Int(i)
    }
}

impl From<i32> for DriverValue {
    fn from(i: i32) -> Self {
        DriverValue::Int(i64::from(i))
    }
}

impl From<f64> for DriverValue {
    fn from(f: f64) -> Self {
        DriverValue::Float(f)
    }
}

impl From<bool> for DriverValue {
    fn from(b: bool) -> Self {
        DriverValue::Bool(b)
    }
}

impl From<DateTime<Utc>> for DriverValue {
    fn from(ts: DateTime<Utc>) -> Self {
        DriverValue::Timestamp(ts)
    }
}

impl<T: Into<DriverValue>> From<Option<T>> for DriverValue {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(DriverValue::Null)
    }
}

impl From<serde_json::Value> for DriverValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => DriverValue::Null,
            serde_json::Value::Bool(b) => DriverValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    DriverValue::Int(i)
                } else {
                    DriverValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => DriverValue::Text(s),
            serde_json::Value::Array(arr) => {
                DriverValue::Array(arr.into_iter().map(DriverValue::from).collect())
            }
            serde_json::Value::Object(obj) => DriverValue::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, DriverValue::from(v)))
                    .collect(),
            ),
        }
    }
}
