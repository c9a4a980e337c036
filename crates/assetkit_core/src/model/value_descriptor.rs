//! Attribute value type catalog.
//!
//! # Responsibility
//! - Name the value types an attribute can carry.
//! - Validate candidate values against a value type.
//!
//! # Invariants
//! - Every value type maps to exactly one JSON `ValueType`.
//! - JSON null is never a valid attribute value.

use crate::model::value::{Value, ValueType};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

// Domain labels are non-empty; at least one dot before the TLD.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)*\.[^@\s.]+$").expect("valid email regex")
});

/// Closed set of attribute value descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeValueType {
    #[serde(rename = "String")]
    String,
    #[serde(rename = "Number")]
    Number,
    #[serde(rename = "Boolean")]
    Boolean,
    #[serde(rename = "Object")]
    Object,
    #[serde(rename = "Array")]
    Array,
    #[serde(rename = "Email")]
    Email,
    #[serde(rename = "GEO_JSONPoint")]
    GeoJsonPoint,
}

impl AttributeValueType {
    const ALL: [AttributeValueType; 7] = [
        Self::String,
        Self::Number,
        Self::Boolean,
        Self::Object,
        Self::Array,
        Self::Email,
        Self::GeoJsonPoint,
    ];

    /// Every value type in declaration order.
    pub fn values() -> &'static [AttributeValueType] {
        &Self::ALL
    }

    /// External descriptor name.
    pub fn name(self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Number => "Number",
            Self::Boolean => "Boolean",
            Self::Object => "Object",
            Self::Array => "Array",
            Self::Email => "Email",
            Self::GeoJsonPoint => "GEO_JSONPoint",
        }
    }

    /// Icon id used by input widgets.
    pub fn icon(self) -> &'static str {
        match self {
            Self::String => "file-document",
            Self::Number => "numeric",
            Self::Boolean => "toggle-switch",
            Self::Object => "code-braces",
            Self::Array => "code-brackets",
            Self::Email => "email",
            Self::GeoJsonPoint => "map-marker",
        }
    }

    pub fn value_type(self) -> ValueType {
        match self {
            Self::String | Self::Email => ValueType::String,
            Self::Number => ValueType::Number,
            Self::Boolean => ValueType::Boolean,
            Self::Object | Self::GeoJsonPoint => ValueType::Object,
            Self::Array => ValueType::Array,
        }
    }

    /// Looks up a value type by its external descriptor name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// Checks `value` against this value type.
    ///
    /// # Errors
    /// - `Null` for JSON null.
    /// - `TypeMismatch` when the JSON shape differs from `value_type()`.
    /// - `InvalidEmail` / `InvalidGeoJsonPoint` when the shape matches but the
    ///   content does not.
    pub fn validate(self, value: &Value) -> Result<(), ValueValidationError> {
        let actual = ValueType::of(value).ok_or(ValueValidationError::Null)?;
        let expected = self.value_type();
        if actual != expected {
            return Err(ValueValidationError::TypeMismatch { expected, actual });
        }

        match self {
            Self::Email => validate_email(value),
            Self::GeoJsonPoint => validate_geo_json_point(value),
            _ => Ok(()),
        }
    }
}

impl Display for AttributeValueType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn validate_email(value: &Value) -> Result<(), ValueValidationError> {
    let raw = value.as_str().unwrap_or_default();
    if EMAIL_RE.is_match(raw) {
        Ok(())
    } else {
        Err(ValueValidationError::InvalidEmail(raw.to_string()))
    }
}

fn validate_geo_json_point(value: &Value) -> Result<(), ValueValidationError> {
    let invalid = |reason: &str| ValueValidationError::InvalidGeoJsonPoint(reason.to_string());

    if value.get("type").and_then(Value::as_str) != Some("Point") {
        return Err(invalid("type must be `Point`"));
    }
    let coordinates = value
        .get("coordinates")
        .and_then(Value::as_array)
        .ok_or_else(|| invalid("coordinates must be an array"))?;
    if coordinates.len() != 2 {
        return Err(invalid("coordinates must be [lng, lat]"));
    }

    let lng = coordinates[0]
        .as_f64()
        .ok_or_else(|| invalid("longitude must be a number"))?;
    let lat = coordinates[1]
        .as_f64()
        .ok_or_else(|| invalid("latitude must be a number"))?;
    if !(-180.0..=180.0).contains(&lng) {
        return Err(invalid("longitude out of range"));
    }
    if !(-90.0..=90.0).contains(&lat) {
        return Err(invalid("latitude out of range"));
    }
    Ok(())
}

/// Value validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueValidationError {
    Null,
    TypeMismatch {
        expected: ValueType,
        actual: ValueType,
    },
    InvalidEmail(String),
    InvalidGeoJsonPoint(String),
}

impl Display for ValueValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "value must not be null"),
            Self::TypeMismatch { expected, actual } => {
                write!(f, "value type mismatch: expected {expected}, got {actual}")
            }
            Self::InvalidEmail(value) => write!(f, "value is not a valid email: {value}"),
            Self::InvalidGeoJsonPoint(reason) => {
                write!(f, "value is not a valid GeoJSON point: {reason}")
            }
        }
    }
}

impl Error for ValueValidationError {}
