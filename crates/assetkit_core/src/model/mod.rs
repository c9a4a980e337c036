//! Attribute domain model.
//!
//! # Responsibility
//! - Define value, value-type and meta item descriptors.
//! - Provide the fixed catalog of well-known attribute types.
//! - Resolve the input widget an attribute editor renders.
//!
//! # Invariants
//! - Catalog data is immutable after first use and safe to share across
//!   threads.
//! - Derived descriptors are owned values, independent of the catalog.

pub mod attribute;
pub mod attribute_type;
pub mod input;
pub mod meta;
pub mod value;
pub mod value_descriptor;
