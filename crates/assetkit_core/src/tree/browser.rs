//! Per-parent child lists for the asset browser tree.
//!
//! # Responsibility
//! - Track which parents are loading, loaded, or failed.
//! - Hand the widget a renderable child list for every state, using label
//!   placeholders while real data is pending or unavailable.
//!
//! # Invariants
//! - Loaded child lists only contain addressable nodes (no placeholders).
//! - Loaded children keep insertion order.
//! - A node id appears at most once across all loaded lists.
//! - `None` parent means the root level.

use crate::tree::node::{BrowserTreeNode, LabelTreeNode, TreeNode};
use log::debug;
use std::collections::{BTreeMap, HashSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from browser tree updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Label placeholders cannot be stored as loaded children.
    PlaceholderNotAllowed,
    /// Node has no id and cannot be addressed. Carries its label.
    MissingNodeId(String),
    /// Id is repeated in the batch or already loaded under another parent.
    DuplicateNodeId(String),
}

impl Display for TreeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PlaceholderNotAllowed => {
                write!(f, "placeholder nodes cannot be stored as loaded children")
            }
            Self::MissingNodeId(label) => write!(f, "tree node has no id: {label}"),
            Self::DuplicateNodeId(id) => write!(f, "tree node id is already loaded: {id}"),
        }
    }
}

impl Error for TreeError {}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ChildState {
    Loading,
    Loaded(Vec<BrowserTreeNode>),
    Failed(String),
}

/// Child list model backing a tree widget.
#[derive(Debug, Default)]
pub struct BrowserTree {
    children: BTreeMap<Option<String>, ChildState>,
}

impl BrowserTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the rows to render under `parent`.
    ///
    /// - loading: one `Loading...` placeholder
    /// - failed: one placeholder carrying the failure message
    /// - loaded: the stored children
    /// - never requested: empty
    pub fn children(&self, parent: Option<&str>) -> Vec<BrowserTreeNode> {
        match self.children.get(&key(parent)) {
            Some(ChildState::Loading) => vec![LabelTreeNode::loading().into()],
            Some(ChildState::Failed(message)) => vec![LabelTreeNode::new(message.clone()).into()],
            Some(ChildState::Loaded(nodes)) => nodes.clone(),
            None => Vec::new(),
        }
    }

    /// Whether `parent` is waiting for children.
    pub fn is_loading(&self, parent: Option<&str>) -> bool {
        matches!(self.children.get(&key(parent)), Some(ChildState::Loading))
    }

    /// Marks `parent` as pending, replacing any previous list.
    pub fn mark_loading(&mut self, parent: Option<&str>) {
        debug!(
            "event=tree_children module=tree status=loading parent={}",
            parent.unwrap_or("<root>")
        );
        self.children.insert(key(parent), ChildState::Loading);
    }

    /// Stores the loaded children of `parent`.
    ///
    /// # Errors
    /// - `PlaceholderNotAllowed` when any node is a label placeholder.
    /// - `MissingNodeId` when any node has no id.
    /// - `DuplicateNodeId` when an id repeats within `nodes` or is already
    ///   loaded under a different parent. Reloading the same parent is fine.
    pub fn set_children(
        &mut self,
        parent: Option<&str>,
        nodes: Vec<BrowserTreeNode>,
    ) -> Result<(), TreeError> {
        let parent_key = key(parent);
        let mut seen = HashSet::new();
        for node in &nodes {
            if node.is_placeholder() {
                return Err(TreeError::PlaceholderNotAllowed);
            }
            let id = node
                .id()
                .ok_or_else(|| TreeError::MissingNodeId(node.label().to_string()))?;
            if !seen.insert(id) || self.is_loaded_elsewhere(&parent_key, id) {
                return Err(TreeError::DuplicateNodeId(id.to_string()));
            }
        }

        debug!(
            "event=tree_children module=tree status=loaded parent={} count={}",
            parent.unwrap_or("<root>"),
            nodes.len()
        );
        self.children.insert(parent_key, ChildState::Loaded(nodes));
        Ok(())
    }

    fn is_loaded_elsewhere(&self, parent_key: &Option<String>, id: &str) -> bool {
        self.children
            .iter()
            .filter(|(other, _)| *other != parent_key)
            .any(|(_, state)| match state {
                ChildState::Loaded(nodes) => nodes.iter().any(|node| node.id() == Some(id)),
                _ => false,
            })
    }

    /// Records a load failure for `parent`; the message is shown as a label row.
    pub fn mark_failed(&mut self, parent: Option<&str>, message: impl Into<String>) {
        let message = message.into();
        debug!(
            "event=tree_children module=tree status=failed parent={}",
            parent.unwrap_or("<root>")
        );
        self.children.insert(key(parent), ChildState::Failed(message));
    }

    /// Forgets `parent`'s children, e.g. when a view is torn down.
    pub fn clear(&mut self, parent: Option<&str>) {
        self.children.remove(&key(parent));
    }

    /// Finds a loaded node by id across all parents.
    ///
    /// Ids are unique across loaded lists, so at most one node matches.
    pub fn find(&self, id: &str) -> Option<&BrowserTreeNode> {
        self.children.values().find_map(|state| match state {
            ChildState::Loaded(nodes) => nodes.iter().find(|node| node.id() == Some(id)),
            _ => None,
        })
    }
}

fn key(parent: Option<&str>) -> Option<String> {
    parent.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::{BrowserTree, TreeError};
    use crate::tree::node::{BrowserTreeNode, LabelTreeNode, RealmTreeNode, TreeNode};

    #[test]
    fn unknown_parent_has_no_children() {
        let tree = BrowserTree::new();
        assert!(tree.children(None).is_empty());
        assert!(!tree.is_loading(Some("missing")));
    }

    #[test]
    fn failed_parent_shows_message_row() {
        let mut tree = BrowserTree::new();
        tree.mark_failed(Some("master"), "Failed to load assets");

        let rows = tree.children(Some("master"));
        assert_eq!(rows.len(), 1);
        assert!(rows[0].is_placeholder());
        assert_eq!(rows[0].label(), "Failed to load assets");
    }

    #[test]
    fn rejects_placeholders_as_loaded_children() {
        let mut tree = BrowserTree::new();
        let err = tree
            .set_children(None, vec![LabelTreeNode::loading().into()])
            .unwrap_err();
        assert_eq!(err, TreeError::PlaceholderNotAllowed);
    }

    #[test]
    fn rejects_nodes_without_id() {
        let mut tree = BrowserTree::new();
        let nameless: BrowserTreeNode = RealmTreeNode::new("", "Nameless").into();
        let err = tree.set_children(None, vec![nameless]).unwrap_err();
        assert_eq!(err, TreeError::MissingNodeId("Nameless".to_string()));
    }

    #[test]
    fn rejects_duplicate_ids_in_one_batch() {
        let mut tree = BrowserTree::new();
        let realm: BrowserTreeNode = RealmTreeNode::new("master", "Master").into();
        let err = tree
            .set_children(None, vec![realm.clone(), realm])
            .unwrap_err();
        assert_eq!(err, TreeError::DuplicateNodeId("master".to_string()));
        assert!(tree.children(None).is_empty());
    }

    #[test]
    fn rejects_id_loaded_under_another_parent() {
        let mut tree = BrowserTree::new();
        let realm: BrowserTreeNode = RealmTreeNode::new("master", "Master").into();
        tree.set_children(None, vec![realm.clone()]).unwrap();

        let err = tree
            .set_children(Some("other"), vec![realm.clone()])
            .unwrap_err();
        assert_eq!(err, TreeError::DuplicateNodeId("master".to_string()));

        // Reloading the same parent with the same node is allowed.
        tree.set_children(None, vec![realm.clone()]).unwrap();
        assert_eq!(tree.find("master"), Some(&realm));
    }

    #[test]
    fn clear_forgets_parent() {
        let mut tree = BrowserTree::new();
        tree.mark_loading(None);
        assert!(tree.is_loading(None));
        tree.clear(None);
        assert!(!tree.is_loading(None));
        assert!(tree.children(None).is_empty());
    }
}
