use crate::error::TreeError;
use crate::iter::AvlIter;
use crate::node::{Node, NodeKey, EMPTY_HEIGHT};
use slotmap::SlotMap;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

/// Indentation emitted per depth level by the tree dump.
const DUMP_INDENT: &str = "        ";

/// Height-balanced binary search tree of unique keys.
///
/// Nodes live in a `SlotMap` arena. Each node owns its children through
/// `left`/`right` handles and points back at its parent, which lets
/// insertion walk upward and rotations re-root a subtree in place.
///
/// Invariants after every insertion:
/// 1. BST order: left subtree < key < right subtree
/// 2. AVL balance: child heights differ by at most one (absent = -1)
/// 3. Cached heights equal `1 + max(child heights)`
/// 4. Parent handles match the structural parent, the root has none
#[derive(Debug, Clone)]
pub struct AvlTree<K> {
    pub(crate) nodes: SlotMap<NodeKey, Node<K>>,
    pub(crate) root: Option<NodeKey>,
    size: usize,
}

impl<K> AvlTree<K> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root: None,
            size: 0,
        }
    }

    /// Returns the number of distinct keys stored.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Handle of the root node.
    pub fn root(&self) -> Option<NodeKey> {
        self.root
    }

    /// Looks up a node by handle.
    pub fn node(&self, id: NodeKey) -> Option<&Node<K>> {
        self.nodes.get(id)
    }

    /// Height of the whole tree, `-1` when empty.
    pub fn height(&self) -> i32 {
        self.height_of(self.root)
    }

    /// Balance factor of a node: right height minus left height.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    pub fn balance_factor(&self, id: NodeKey) -> i32 {
        let node = &self.nodes[id];
        self.height_of(node.right) - self.height_of(node.left)
    }

    /// Iterates over the keys in ascending order.
    pub fn iter(&self) -> AvlIter<'_, K> {
        AvlIter::new(self)
    }

    /// Rotates on the edge from `x` to its right child.
    ///
    /// The right child takes `x`'s place (under `x`'s parent, or as root),
    /// its former left subtree becomes `x`'s right subtree, and `x` becomes
    /// its left child. Heights of both nodes are recomputed, `x` first.
    ///
    /// # Panics
    ///
    /// Panics if `x` has no right child or does not belong to this tree.
    pub fn rotate_left(&mut self, x: NodeKey) {
        let Some(y) = self.nodes[x].right else {
            panic!("rotate_left requires a right child");
        };
        log::trace!("rotate left at {:?}", x);

        let inner = self.nodes[y].left;
        self.nodes[x].right = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(x);
        }

        let parent = self.nodes[x].parent;
        self.nodes[y].parent = parent;
        self.replace_child(parent, x, y);

        self.nodes[y].left = Some(x);
        self.nodes[x].parent = Some(y);

        self.update_height(x);
        self.update_height(y);
    }

    /// Rotates on the edge from `y` to its left child. Mirror of
    /// [`rotate_left`](Self::rotate_left); heights are recomputed `y` first.
    ///
    /// # Panics
    ///
    /// Panics if `y` has no left child or does not belong to this tree.
    pub fn rotate_right(&mut self, y: NodeKey) {
        let Some(x) = self.nodes[y].left else {
            panic!("rotate_right requires a left child");
        };
        log::trace!("rotate right at {:?}", y);

        let inner = self.nodes[x].right;
        self.nodes[y].left = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(y);
        }

        let parent = self.nodes[y].parent;
        self.nodes[x].parent = parent;
        self.replace_child(parent, y, x);

        self.nodes[x].right = Some(y);
        self.nodes[y].parent = Some(x);

        self.update_height(y);
        self.update_height(x);
    }

    /// Points `parent`'s link to `old` at `new` instead, or re-roots the
    /// tree when `old` was the root.
    fn replace_child(&mut self, parent: Option<NodeKey>, old: NodeKey, new: NodeKey) {
        match parent {
            None => self.root = Some(new),
            Some(p) => {
                let node = &mut self.nodes[p];
                if node.left == Some(old) {
                    node.left = Some(new);
                } else {
                    debug_assert_eq!(node.right, Some(old), "parent link out of sync");
                    node.right = Some(new);
                }
            }
        }
    }

    #[inline]
    fn height_of(&self, id: Option<NodeKey>) -> i32 {
        id.map_or(EMPTY_HEIGHT, |id| self.nodes[id].height)
    }

    fn update_height(&mut self, id: NodeKey) {
        let node = &self.nodes[id];
        let height = 1 + self.height_of(node.left).max(self.height_of(node.right));
        self.nodes[id].height = height;
    }

    /// Restores AVL balance at `id`, assuming both of its subtrees are
    /// already balanced.
    fn rebalance(&mut self, id: NodeKey) {
        let balance = self.balance_factor(id);
        if balance < -1 {
            if let Some(left) = self.nodes[id].left {
                if self.balance_factor(left) >= 0 {
                    self.rotate_left(left);
                }
            }
            self.rotate_right(id);
        } else if balance > 1 {
            if let Some(right) = self.nodes[id].right {
                if self.balance_factor(right) < 0 {
                    self.rotate_right(right);
                }
            }
            self.rotate_left(id);
        }
    }
}

impl<K: Ord> AvlTree<K> {
    /// Finds the node holding `key`.
    ///
    /// Any borrowed form of the key type may be used, so an
    /// `AvlTree<String>` is searched with `&str`.
    pub fn search<Q>(&self, key: &Q) -> Option<NodeKey>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.nodes[id];
            current = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    /// Returns the stored key equal to `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).map(|id| &self.nodes[id].key)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).is_some()
    }

    /// Inserts `key` as a plain binary search tree would.
    ///
    /// Ancestor heights are left untouched and no rotation happens, so the
    /// tree may degrade into a list on sorted input. Returns false if the
    /// key was already present.
    pub fn unbalanced_insert(&mut self, key: K) -> bool {
        self.attach(key).is_some()
    }

    /// Inserts `key` and restores AVL balance.
    ///
    /// After linking the new leaf, walks back up to the root refreshing each
    /// ancestor's height and rebalancing it. Returns false if the key was
    /// already present, in which case the tree is unchanged.
    pub fn insert(&mut self, key: K) -> bool {
        let Some(leaf) = self.attach(key) else {
            return false;
        };

        let mut current = self.nodes[leaf].parent;
        while let Some(id) = current {
            // Read before rebalancing: a rotation moves `id` under its replacement.
            current = self.nodes[id].parent;
            self.update_height(id);
            self.rebalance(id);
        }
        true
    }

    /// Deletion is not supported. Always returns
    /// [`TreeError::Unsupported`] and leaves the tree untouched.
    pub fn remove<Q>(&mut self, _key: &Q) -> Result<(), TreeError>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        log::warn!("remove called on AvlTree, deletion is not supported");
        Err(TreeError::Unsupported {
            operation: "remove",
        })
    }

    /// Descends to the insertion point and links a new leaf there.
    ///
    /// Returns the new node, or `None` if `key` is already stored.
    fn attach(&mut self, key: K) -> Option<NodeKey> {
        let Some(mut current) = self.root else {
            let id = self.nodes.insert(Node::leaf(key, None));
            self.root = Some(id);
            self.size = 1;
            return Some(id);
        };

        loop {
            let node = &self.nodes[current];
            let (next, go_left) = match key.cmp(&node.key) {
                Ordering::Equal => return None,
                Ordering::Less => (node.left, true),
                Ordering::Greater => (node.right, false),
            };

            match next {
                Some(child) => current = child,
                None => {
                    let id = self.nodes.insert(Node::leaf(key, Some(current)));
                    if go_left {
                        self.nodes[current].left = Some(id);
                    } else {
                        self.nodes[current].right = Some(id);
                    }
                    self.size += 1;
                    return Some(id);
                }
            }
        }
    }
}

impl<K: fmt::Display> AvlTree<K> {
    /// Renders the tree sideways: right subtree above, left below, one
    /// `key(height)` per line indented by depth.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn fmt_subtree(
        &self,
        f: &mut fmt::Formatter<'_>,
        id: Option<NodeKey>,
        level: usize,
    ) -> fmt::Result {
        let Some(id) = id else {
            return Ok(());
        };
        let node = &self.nodes[id];
        self.fmt_subtree(f, node.right, level + 1)?;
        for _ in 0..level {
            f.write_str(DUMP_INDENT)?;
        }
        writeln!(f, "{}", node)?;
        self.fmt_subtree(f, node.left, level + 1)
    }
}

impl<K: fmt::Display> fmt::Display for AvlTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_subtree(f, self.root, 0)
    }
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> Extend<K> for AvlTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for AvlTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, K> IntoIterator for &'a AvlTree<K> {
    type Item = &'a K;
    type IntoIter = AvlIter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
