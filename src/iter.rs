use crate::node::NodeKey;
use crate::tree::AvlTree;
use std::iter::FusedIterator;

/// In-order iterator over the keys of an [`AvlTree`].
///
/// Keeps the pending left spine on an explicit stack, so memory use is
/// bounded by the tree height.
pub struct AvlIter<'a, K> {
    tree: &'a AvlTree<K>,
    stack: Vec<NodeKey>,
    remaining: usize,
}

impl<'a, K> AvlIter<'a, K> {
    pub(crate) fn new(tree: &'a AvlTree<K>) -> Self {
        let mut iter = Self {
            tree,
            stack: Vec::new(),
            remaining: tree.len(),
        };
        iter.push_left_spine(tree.root);
        iter
    }

    /// Pushes `start` and every left descendant below it.
    fn push_left_spine(&mut self, start: Option<NodeKey>) {
        let mut current = start;
        while let Some(id) = current {
            self.stack.push(id);
            current = self.tree.nodes[id].left;
        }
    }
}

impl<'a, K> Iterator for AvlIter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let tree = self.tree;
        let node = &tree.nodes[id];
        self.push_left_spine(node.right);
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for AvlIter<'_, K> {}

impl<K> FusedIterator for AvlIter<'_, K> {}
