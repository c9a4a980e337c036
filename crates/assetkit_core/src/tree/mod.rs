//! Asset browser tree model.
//!
//! # Responsibility
//! - Define the node kinds a tree widget renders.
//! - Keep per-parent child lists, with placeholder rows while data is pending.
//!
//! # Invariants
//! - Placeholder rows are transient UI chrome; they are never addressable.

pub mod browser;
pub mod node;
