use slotmap::new_key_type;
use std::fmt;

new_key_type! {
    /// Handle to a node stored in an [`AvlTree`](crate::AvlTree).
    ///
    /// Handles are only meaningful for the tree that produced them.
    pub struct NodeKey;
}

/// Height reported for an absent subtree.
pub(crate) const EMPTY_HEIGHT: i32 = -1;

/// A node in the tree arena.
///
/// Children are owned structurally by their parent; `parent` is a plain
/// back-reference kept in sync by insertion and rotation.
#[derive(Debug, Clone)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) height: i32,
    pub(crate) parent: Option<NodeKey>,
    pub(crate) left: Option<NodeKey>,
    pub(crate) right: Option<NodeKey>,
}

impl<K> Node<K> {
    /// Creates a detached leaf.
    pub(crate) fn leaf(key: K, parent: Option<NodeKey>) -> Self {
        Self {
            key,
            height: 0,
            parent,
            left: None,
            right: None,
        }
    }

    /// The stored key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Cached height of the subtree rooted here. A leaf has height 0.
    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    pub fn left(&self) -> Option<NodeKey> {
        self.left
    }

    pub fn right(&self) -> Option<NodeKey> {
        self.right
    }

    /// Returns true if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl<K: fmt::Display> fmt::Display for Node<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.key, self.height)
    }
}
