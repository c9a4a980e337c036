//! JSON value model shared by attribute and meta descriptors.
//!
//! # Invariants
//! - `ValueType` covers every non-null JSON shape.
//! - JSON null has no `ValueType`.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Attribute and meta item value. Descriptors store values in JSON form.
pub type Value = serde_json::Value;

/// Shape of a non-null JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    String,
    Number,
    Boolean,
    Object,
    Array,
}

impl ValueType {
    /// Returns the shape of `value`, or `None` for JSON null.
    pub fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(_) => Some(Self::Boolean),
            Value::Number(_) => Some(Self::Number),
            Value::String(_) => Some(Self::String),
            Value::Array(_) => Some(Self::Array),
            Value::Object(_) => Some(Self::Object),
        }
    }

    /// Stable lowercase id.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
        }
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
