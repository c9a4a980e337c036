//! Asset browser tree node kinds.
//!
//! # Invariants
//! - Placeholder (`Label`) nodes are always leaves and never carry an id.
//! - Addressable nodes always carry a non-empty id.

use uuid::Uuid;

/// Read surface a tree widget needs to render one row.
pub trait TreeNode {
    fn label(&self) -> &str;
    fn is_leaf(&self) -> bool;
    /// Stable id; `None` means the node cannot be selected by id or
    /// round-tripped to a backend record.
    fn id(&self) -> Option<&str>;
}

/// Default label for the loading row.
pub const LOADING_LABEL: &str = "Loading...";

/// Temporary row stuck into the tree for a loading message or other UI
/// signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelTreeNode {
    label: String,
}

impl LabelTreeNode {
    /// Accepts any label, including an empty one.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn loading() -> Self {
        Self::new(LOADING_LABEL)
    }
}

impl TreeNode for LabelTreeNode {
    fn label(&self) -> &str {
        &self.label
    }

    fn is_leaf(&self) -> bool {
        true
    }

    fn id(&self) -> Option<&str> {
        None
    }
}

/// Asset row. `id` is the hyphenated asset uuid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetTreeNode {
    id: String,
    label: String,
    has_children: bool,
}

impl AssetTreeNode {
    pub fn new(id: Uuid, label: impl Into<String>, has_children: bool) -> Self {
        Self {
            id: id.hyphenated().to_string(),
            label: label.into(),
            has_children,
        }
    }

    pub fn asset_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.id).ok()
    }
}

impl TreeNode for AssetTreeNode {
    fn label(&self) -> &str {
        &self.label
    }

    fn is_leaf(&self) -> bool {
        !self.has_children
    }

    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }
}

/// Realm (tenant) grouping row. Identified by realm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RealmTreeNode {
    realm: String,
    label: String,
}

impl RealmTreeNode {
    pub fn new(realm: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            realm: realm.into(),
            label: label.into(),
        }
    }
}

impl TreeNode for RealmTreeNode {
    fn label(&self) -> &str {
        &self.label
    }

    fn is_leaf(&self) -> bool {
        false
    }

    fn id(&self) -> Option<&str> {
        if self.realm.is_empty() {
            None
        } else {
            Some(&self.realm)
        }
    }
}

/// Any row the asset browser can render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserTreeNode {
    Label(LabelTreeNode),
    Asset(AssetTreeNode),
    Realm(RealmTreeNode),
}

impl BrowserTreeNode {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Label(_))
    }

    fn as_node(&self) -> &dyn TreeNode {
        match self {
            Self::Label(node) => node,
            Self::Asset(node) => node,
            Self::Realm(node) => node,
        }
    }
}

impl TreeNode for BrowserTreeNode {
    fn label(&self) -> &str {
        self.as_node().label()
    }

    fn is_leaf(&self) -> bool {
        self.as_node().is_leaf()
    }

    fn id(&self) -> Option<&str> {
        self.as_node().id()
    }
}

impl From<LabelTreeNode> for BrowserTreeNode {
    fn from(value: LabelTreeNode) -> Self {
        Self::Label(value)
    }
}

impl From<AssetTreeNode> for BrowserTreeNode {
    fn from(value: AssetTreeNode) -> Self {
        Self::Asset(value)
    }
}

impl From<RealmTreeNode> for BrowserTreeNode {
    fn from(value: RealmTreeNode) -> Self {
        Self::Realm(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{AssetTreeNode, BrowserTreeNode, LabelTreeNode, RealmTreeNode, TreeNode};
    use uuid::Uuid;

    #[test]
    fn label_node_is_leaf_without_id() {
        for label in ["", "Loading...", "No assets"] {
            let node = LabelTreeNode::new(label);
            assert!(node.is_leaf());
            assert_eq!(node.id(), None);
            assert_eq!(node.label(), label);
        }
    }

    #[test]
    fn asset_node_leaf_follows_children_flag() {
        let id = Uuid::new_v4();
        let parent = AssetTreeNode::new(id, "Building", true);
        let leaf = AssetTreeNode::new(Uuid::new_v4(), "Sensor", false);

        assert!(!parent.is_leaf());
        assert!(leaf.is_leaf());
        assert_eq!(parent.id(), Some(id.to_string().as_str()));
        assert_eq!(parent.asset_id(), Some(id));
    }

    #[test]
    fn realm_node_is_never_leaf() {
        let node = RealmTreeNode::new("master", "Master");
        assert!(!node.is_leaf());
        assert_eq!(node.id(), Some("master"));
        assert_eq!(node.label(), "Master");
    }

    #[test]
    fn browser_node_dispatches_to_variant() {
        let placeholder: BrowserTreeNode = LabelTreeNode::loading().into();
        assert!(placeholder.is_placeholder());
        assert!(placeholder.is_leaf());
        assert_eq!(placeholder.id(), None);
        assert_eq!(placeholder.label(), "Loading...");

        let realm: BrowserTreeNode = RealmTreeNode::new("smartcity", "Smart City").into();
        assert!(!realm.is_placeholder());
        assert_eq!(realm.id(), Some("smartcity"));
    }
}
