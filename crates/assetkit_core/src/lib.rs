//! Core domain model for assetkit.
//! This crate is the single source of truth for attribute catalog and asset
//! tree invariants.

pub mod logging;
pub mod model;
pub mod tree;

pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig};
pub use model::attribute::{AttributeDescriptor, DerivedAttributeDescriptor, DescriptorError};
pub use model::attribute_type::AttributeType;
pub use model::input::{resolve_input, HelperState, InputSpec, InputType};
pub use model::meta::{MetaItemDescriptor, MetaItemType};
pub use model::value::{Value, ValueType};
pub use model::value_descriptor::{AttributeValueType, ValueValidationError};
pub use tree::browser::{BrowserTree, TreeError};
pub use tree::node::{
    AssetTreeNode, BrowserTreeNode, LabelTreeNode, RealmTreeNode, TreeNode, LOADING_LABEL,
};

/// Minimal health-check API for linkage checks.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
