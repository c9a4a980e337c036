//! Attribute descriptor capability and owned descriptor values.
//!
//! # Responsibility
//! - Define the read surface shared by catalog entries and derived
//!   descriptors.
//! - Provide an owned, serializable descriptor for call-site customizations.
//!
//! # Invariants
//! - `attribute_name` is the external lookup key and is never rewritten by
//!   derivation.
//! - An initial value, when present, should be accepted by the value
//!   descriptor. `DerivedAttributeDescriptor::validate` checks this.

use crate::model::meta::{MetaItemDescriptor, MetaItemType};
use crate::model::value::Value;
use crate::model::value_descriptor::{AttributeValueType, ValueValidationError};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Static definition of a named device/asset attribute.
pub trait AttributeDescriptor {
    /// Logical identifier, e.g. `EMAIL` for catalog entries.
    fn name(&self) -> &str;
    /// External/serialized key, e.g. `email`.
    fn attribute_name(&self) -> &str;
    fn value_descriptor(&self) -> AttributeValueType;
    fn meta_item_descriptors(&self) -> &[MetaItemDescriptor];
    fn initial_value(&self) -> Option<&Value>;

    /// Initial value of the first meta descriptor of type `kind`.
    fn meta_value(&self, kind: MetaItemType) -> Option<&Value> {
        self.meta_item_descriptors()
            .iter()
            .find(|meta| meta.urn == kind.urn())
            .and_then(|meta| meta.initial_value.as_ref())
    }

    /// Display label from LABEL meta, when present.
    fn label(&self) -> Option<&str> {
        self.meta_value(MetaItemType::Label).and_then(Value::as_str)
    }
}

/// Owned attribute descriptor.
///
/// Produced by `AttributeType::with_name*` or decoded from JSON. Never part
/// of the fixed catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedAttributeDescriptor {
    pub name: String,
    pub attribute_name: String,
    pub value_descriptor: AttributeValueType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<Value>,
    #[serde(default)]
    pub meta_item_descriptors: Vec<MetaItemDescriptor>,
}

impl DerivedAttributeDescriptor {
    /// Checks that the initial value, if any, fits the value descriptor.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        match &self.initial_value {
            Some(value) => self.value_descriptor.validate(value).map_err(|source| {
                DescriptorError::InvalidInitialValue {
                    attribute: self.name.clone(),
                    source,
                }
            }),
            None => Ok(()),
        }
    }
}

impl AttributeDescriptor for DerivedAttributeDescriptor {
    fn name(&self) -> &str {
        &self.name
    }

    fn attribute_name(&self) -> &str {
        &self.attribute_name
    }

    fn value_descriptor(&self) -> AttributeValueType {
        self.value_descriptor
    }

    fn meta_item_descriptors(&self) -> &[MetaItemDescriptor] {
        &self.meta_item_descriptors
    }

    fn initial_value(&self) -> Option<&Value> {
        self.initial_value.as_ref()
    }
}

/// Attribute descriptor errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    /// No catalog entry has this enum-style name.
    UnknownAttributeType(String),
    /// Initial value does not fit the descriptor's value type.
    InvalidInitialValue {
        attribute: String,
        source: ValueValidationError,
    },
}

impl Display for DescriptorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownAttributeType(name) => write!(f, "unknown attribute type: {name}"),
            Self::InvalidInitialValue { attribute, source } => {
                write!(f, "invalid initial value for attribute `{attribute}`: {source}")
            }
        }
    }
}

impl Error for DescriptorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnknownAttributeType(_) => None,
            Self::InvalidInitialValue { source, .. } => Some(source),
        }
    }
}
