//! Meta item descriptors attachable to attribute descriptors.

use crate::model::value::{Value, ValueType};
use serde::{Deserialize, Serialize};

/// One piece of attribute metadata: label text, description, taxonomy link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaItemDescriptor {
    /// Stable meta item id, e.g. `urn:assetkit:meta:label`.
    pub urn: String,
    pub value_type: ValueType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<Value>,
}

impl MetaItemDescriptor {
    /// Returns the matching well-known meta type, if any.
    pub fn meta_type(&self) -> Option<MetaItemType> {
        MetaItemType::from_urn(&self.urn)
    }
}

/// Well-known meta item types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaItemType {
    Label,
    Description,
    About,
    ReadOnly,
    UnitType,
    RangeMin,
    RangeMax,
    Step,
    AllowedValues,
    Multiline,
}

const META_LABEL: &str = "urn:assetkit:meta:label";
const META_DESCRIPTION: &str = "urn:assetkit:meta:description";
const META_ABOUT: &str = "urn:assetkit:meta:about";
const META_READ_ONLY: &str = "urn:assetkit:meta:readOnly";
const META_UNIT_TYPE: &str = "urn:assetkit:meta:unitType";
const META_RANGE_MIN: &str = "urn:assetkit:meta:rangeMin";
const META_RANGE_MAX: &str = "urn:assetkit:meta:rangeMax";
const META_STEP: &str = "urn:assetkit:meta:step";
const META_ALLOWED_VALUES: &str = "urn:assetkit:meta:allowedValues";
const META_MULTILINE: &str = "urn:assetkit:meta:multiline";

impl MetaItemType {
    const ALL: [MetaItemType; 10] = [
        Self::Label,
        Self::Description,
        Self::About,
        Self::ReadOnly,
        Self::UnitType,
        Self::RangeMin,
        Self::RangeMax,
        Self::Step,
        Self::AllowedValues,
        Self::Multiline,
    ];

    pub fn values() -> &'static [MetaItemType] {
        &Self::ALL
    }

    pub fn urn(self) -> &'static str {
        match self {
            Self::Label => META_LABEL,
            Self::Description => META_DESCRIPTION,
            Self::About => META_ABOUT,
            Self::ReadOnly => META_READ_ONLY,
            Self::UnitType => META_UNIT_TYPE,
            Self::RangeMin => META_RANGE_MIN,
            Self::RangeMax => META_RANGE_MAX,
            Self::Step => META_STEP,
            Self::AllowedValues => META_ALLOWED_VALUES,
            Self::Multiline => META_MULTILINE,
        }
    }

    pub fn value_type(self) -> ValueType {
        match self {
            Self::ReadOnly | Self::Multiline => ValueType::Boolean,
            Self::RangeMin | Self::RangeMax | Self::Step => ValueType::Number,
            Self::AllowedValues => ValueType::Array,
            Self::Label | Self::Description | Self::About | Self::UnitType => ValueType::String,
        }
    }

    pub fn from_urn(urn: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.urn() == urn)
    }

    /// Bare descriptor without an initial value.
    pub fn descriptor(self) -> MetaItemDescriptor {
        MetaItemDescriptor {
            urn: self.urn().to_string(),
            value_type: self.value_type(),
            initial_value: None,
        }
    }

    /// Descriptor carrying `value` as its initial value.
    ///
    /// The value is not checked against `value_type()`.
    pub fn with_initial_value(self, value: impl Into<Value>) -> MetaItemDescriptor {
        MetaItemDescriptor {
            initial_value: Some(value.into()),
            ..self.descriptor()
        }
    }
}
