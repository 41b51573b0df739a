use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;

/// Possible values of a single field in a production record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    /// Missing cell
    Null,
    /// Boolean value
    Boolean(bool),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// Free text
    String(String),
}

// -------------------------------------------------------------------------------------------------
// Conversions between `FieldValue` and `serde_json::Value`. Sheets arrive as JSON objects, so the
// mapping lives next to the type. Nested arrays and objects have no meaning as a cell value.
// -------------------------------------------------------------------------------------------------

impl From<FieldValue> for serde_json::Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::String(s) => Self::String(s),
            FieldValue::Integer(i) => Self::Number(serde_json::Number::from(i)),
            FieldValue::Float(f) => serde_json::Number::from_f64(f).map_or(Self::Null, Self::Number),
            FieldValue::Boolean(b) => Self::Bool(b),
            FieldValue::Null => Self::Null,
        }
    }
}

impl TryFrom<&serde_json::Value> for FieldValue {
    type Error = anyhow::Error;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        Ok(match value {
            serde_json::Value::String(s) => Self::String(s.clone()),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Integer(i)
                } else if let Some(f) = n.as_f64() {
                    Self::Float(f)
                } else {
                    return Err(anyhow!("Unsupported number value: {}", n));
                }
            }
            serde_json::Value::Bool(b) => Self::Boolean(*b),
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                return Err(anyhow!("Nested values are not valid record fields: {}", value));
            }
        })
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(fl) => write!(f, "{fl}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => Ok(()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl FieldValue {
    /// Check if this value is "truthy": null, zero, `false` and the empty string are not
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Boolean(b) => *b,
            Self::Integer(i) => *i != 0,
            Self::Float(f) => *f != 0.0,
            Self::String(s) => !s.is_empty(),
            Self::Null => false,
        }
    }

    /// Text form of the value. `Null` renders as the empty string.
    #[must_use]
    pub fn as_text(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// Numeric view of the value. Numeric strings are parsed after trimming.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Integer(i) => Some(*i as f64),
            Self::Boolean(b) => Some(if *b { 1.0 } else { 0.0 }),
            Self::String(s) => s.trim().parse::<f64>().ok(),
            Self::Null => None,
        }
    }
}
