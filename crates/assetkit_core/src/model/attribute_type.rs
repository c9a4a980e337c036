//! Fixed catalog of well-known attribute descriptors.
//!
//! # Responsibility
//! - Provide a closed, ordered set of standard attribute definitions.
//! - Resolve entries by external key and derive renamed copies.
//!
//! # Invariants
//! - Catalog order and contents never change during process lifetime.
//! - `attribute_name` is unique across entries; lookup returns the first
//!   match in declaration order.
//! - Derived descriptors are never visible through `get_by_value`.

use crate::model::attribute::{AttributeDescriptor, DerivedAttributeDescriptor, DescriptorError};
use crate::model::meta::{MetaItemDescriptor, MetaItemType};
use crate::model::value::Value;
use crate::model::value_descriptor::AttributeValueType;
use log::{debug, trace};
use once_cell::sync::Lazy;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const HAYSTACK_TAG_BASE: &str = "http://project-haystack.org/tag/";

/// Well-known attribute types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AttributeType {
    String,
    Number,
    ConsoleName,
    ConsoleVersion,
    ConsolePlatform,
    ConsoleProviders,
    Email,
    GeoCity,
    GeoCountry,
    GeoPostalCode,
    GeoStreet,
    Location,
    SurfaceArea,
}

struct CatalogEntry {
    initial_value: Option<Value>,
    meta_item_descriptors: Vec<MetaItemDescriptor>,
}

// Indexed by discriminant; built in `ALL` order.
static CATALOG: Lazy<Vec<CatalogEntry>> = Lazy::new(|| {
    AttributeType::ALL
        .iter()
        .map(|kind| CatalogEntry {
            initial_value: None,
            meta_item_descriptors: kind.build_meta(),
        })
        .collect()
});

impl AttributeType {
    const ALL: [AttributeType; 13] = [
        Self::String,
        Self::Number,
        Self::ConsoleName,
        Self::ConsoleVersion,
        Self::ConsolePlatform,
        Self::ConsoleProviders,
        Self::Email,
        Self::GeoCity,
        Self::GeoCountry,
        Self::GeoPostalCode,
        Self::GeoStreet,
        Self::Location,
        Self::SurfaceArea,
    ];

    /// Every catalog entry in declaration order.
    pub fn values() -> &'static [AttributeType] {
        &Self::ALL
    }

    /// Enum-style identifier, e.g. `GEO_CITY`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "STRING",
            Self::Number => "NUMBER",
            Self::ConsoleName => "CONSOLE_NAME",
            Self::ConsoleVersion => "CONSOLE_VERSION",
            Self::ConsolePlatform => "CONSOLE_PLATFORM",
            Self::ConsoleProviders => "CONSOLE_PROVIDERS",
            Self::Email => "EMAIL",
            Self::GeoCity => "GEO_CITY",
            Self::GeoCountry => "GEO_COUNTRY",
            Self::GeoPostalCode => "GEO_POSTAL_CODE",
            Self::GeoStreet => "GEO_STREET",
            Self::Location => "LOCATION",
            Self::SurfaceArea => "SURFACE_AREA",
        }
    }

    /// External/serialized key.
    pub fn key(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::ConsoleName => "consoleName",
            Self::ConsoleVersion => "consoleVersion",
            Self::ConsolePlatform => "consolePlatform",
            Self::ConsoleProviders => "consoleProviders",
            Self::Email => "email",
            Self::GeoCity => "city",
            Self::GeoCountry => "country",
            Self::GeoPostalCode => "postalCode",
            Self::GeoStreet => "street",
            Self::Location => "location",
            Self::SurfaceArea => "surfaceArea",
        }
    }

    fn value_type(self) -> AttributeValueType {
        match self {
            Self::String
            | Self::ConsoleName
            | Self::ConsoleVersion
            | Self::ConsolePlatform
            | Self::GeoCity
            | Self::GeoCountry
            | Self::GeoStreet => AttributeValueType::String,
            Self::Number | Self::GeoPostalCode | Self::SurfaceArea => AttributeValueType::Number,
            Self::ConsoleProviders => AttributeValueType::Object,
            Self::Email => AttributeValueType::Email,
            Self::Location => AttributeValueType::GeoJsonPoint,
        }
    }

    fn build_meta(self) -> Vec<MetaItemDescriptor> {
        let label = |text: &str| MetaItemType::Label.with_initial_value(text);
        let about =
            |tag: &str| MetaItemType::About.with_initial_value(format!("{HAYSTACK_TAG_BASE}{tag}"));

        match self {
            Self::String
            | Self::Number
            | Self::ConsoleName
            | Self::ConsoleVersion
            | Self::ConsolePlatform
            | Self::ConsoleProviders => Vec::new(),
            Self::Email => vec![label("Email")],
            Self::GeoCity => vec![label("City"), about("geoCity")],
            Self::GeoCountry => vec![label("Country"), about("geoCountry")],
            Self::GeoPostalCode => vec![label("Postal Code"), about("geoPostalCode")],
            Self::GeoStreet => vec![label("Street"), about("geoStreet")],
            Self::Location => vec![label("Location")],
            Self::SurfaceArea => vec![
                label("Surface Area"),
                MetaItemType::Description
                    .with_initial_value("Floor area of building measured in m²"),
                about("area"),
            ],
        }
    }

    fn entry(self) -> &'static CatalogEntry {
        &CATALOG[self as usize]
    }

    /// Resolves a catalog entry by external key.
    ///
    /// Returns `None` for a `None` key and for an unknown key alike.
    /// Matching is exact and case-sensitive.
    pub fn get_by_value<'a>(name: impl Into<Option<&'a str>>) -> Option<AttributeType> {
        let name = name.into()?;
        let found = Self::ALL.iter().copied().find(|kind| kind.key() == name);
        if found.is_none() {
            trace!("event=attribute_lookup module=catalog status=miss key={name}");
        }
        found
    }

    /// Derives a renamed descriptor that keeps this entry's initial value.
    ///
    /// `meta_item_descriptors` replaces this entry's meta list.
    pub fn with_name(
        self,
        name: impl Into<String>,
        meta_item_descriptors: impl IntoIterator<Item = MetaItemDescriptor>,
    ) -> DerivedAttributeDescriptor {
        let derived = DerivedAttributeDescriptor {
            name: name.into(),
            attribute_name: self.key().to_string(),
            value_descriptor: self.value_type(),
            initial_value: self.entry().initial_value.clone(),
            meta_item_descriptors: meta_item_descriptors.into_iter().collect(),
        };
        debug!(
            "event=attribute_derive module=catalog status=ok base={} name={}",
            self.as_str(),
            derived.name
        );
        derived
    }

    /// Derives a renamed descriptor with an explicit initial value.
    ///
    /// # Errors
    /// - `InvalidInitialValue` when `initial_value` does not fit this entry's
    ///   value descriptor.
    pub fn with_name_and_value(
        self,
        name: impl Into<String>,
        initial_value: Option<Value>,
        meta_item_descriptors: impl IntoIterator<Item = MetaItemDescriptor>,
    ) -> Result<DerivedAttributeDescriptor, DescriptorError> {
        let mut derived = self.with_name(name, meta_item_descriptors);
        derived.initial_value = initial_value;
        if let Err(err) = derived.validate() {
            debug!(
                "event=attribute_derive module=catalog status=rejected base={} error={}",
                self.as_str(),
                err
            );
            return Err(err);
        }
        Ok(derived)
    }
}

impl AttributeDescriptor for AttributeType {
    fn name(&self) -> &str {
        self.as_str()
    }

    fn attribute_name(&self) -> &str {
        self.key()
    }

    fn value_descriptor(&self) -> AttributeValueType {
        self.value_type()
    }

    fn meta_item_descriptors(&self) -> &[MetaItemDescriptor] {
        &self.entry().meta_item_descriptors
    }

    fn initial_value(&self) -> Option<&Value> {
        self.entry().initial_value.as_ref()
    }
}

impl Display for AttributeType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttributeType {
    type Err = DescriptorError;

    /// Parses the enum-style identifier (`EMAIL`), not the external key.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| DescriptorError::UnknownAttributeType(value.to_string()))
    }
}

impl From<AttributeType> for DerivedAttributeDescriptor {
    fn from(value: AttributeType) -> Self {
        Self {
            name: value.as_str().to_string(),
            attribute_name: value.key().to_string(),
            value_descriptor: value.value_type(),
            initial_value: value.entry().initial_value.clone(),
            meta_item_descriptors: value.entry().meta_item_descriptors.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AttributeType, CATALOG};
    use crate::model::attribute::{AttributeDescriptor, DerivedAttributeDescriptor};
    use std::collections::HashSet;

    #[test]
    fn catalog_is_indexed_by_discriminant() {
        assert_eq!(CATALOG.len(), AttributeType::values().len());
        for (index, kind) in AttributeType::values().iter().enumerate() {
            assert_eq!(*kind as usize, index);
        }
    }

    #[test]
    fn attribute_names_are_unique_and_non_empty() {
        let mut seen = HashSet::new();
        for kind in AttributeType::values() {
            assert!(!kind.attribute_name().is_empty());
            assert!(seen.insert(kind.attribute_name()), "duplicate key {kind}");
        }
    }

    #[test]
    fn catalog_initial_values_fit_value_descriptor() {
        for kind in AttributeType::values() {
            if let Some(value) = kind.initial_value() {
                assert!(kind.value_descriptor().validate(value).is_ok(), "{kind}");
            }
        }
    }

    #[test]
    fn snapshot_copies_catalog_entry() {
        let snapshot = DerivedAttributeDescriptor::from(AttributeType::SurfaceArea);
        assert_eq!(snapshot.name, "SURFACE_AREA");
        assert_eq!(snapshot.attribute_name, "surfaceArea");
        assert_eq!(
            snapshot.meta_item_descriptors,
            AttributeType::SurfaceArea.meta_item_descriptors()
        );
    }
}
