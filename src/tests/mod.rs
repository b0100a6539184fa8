mod vocab_properties;

use crate::node::NodeKey;
use crate::tree::AvlTree;

/// One row per node in pre-order: key, height, and the keys of the parent
/// and both children.
pub(crate) type Shape<K> = Vec<(K, i32, Option<K>, Option<K>, Option<K>)>;

/// Captures the structure of the tree independently of arena handles.
pub(crate) fn shape<K: Clone>(tree: &AvlTree<K>) -> Shape<K> {
    let key_of = |id: Option<NodeKey>| id.map(|id| tree.nodes[id].key.clone());

    let mut rows = Vec::new();
    let mut stack: Vec<NodeKey> = tree.root.into_iter().collect();
    while let Some(id) = stack.pop() {
        let node = &tree.nodes[id];
        rows.push((
            node.key.clone(),
            node.height,
            key_of(node.parent),
            key_of(node.left),
            key_of(node.right),
        ));
        stack.extend(node.right);
        stack.extend(node.left);
    }
    rows
}

/// Checks BST order, parent links, reachability, and size. With
/// `balanced` set, also checks cached heights and the AVL balance bound.
///
/// Returns the first violation found.
pub(crate) fn check_invariants<K: Ord + std::fmt::Debug>(
    tree: &AvlTree<K>,
    balanced: bool,
) -> Result<(), String> {
    let Some(root) = tree.root else {
        return if tree.is_empty() && tree.nodes.is_empty() {
            Ok(())
        } else {
            Err("no root but tree is not empty".to_string())
        };
    };
    if tree.nodes[root].parent.is_some() {
        return Err("root has a parent".to_string());
    }

    let mut visited = 0;
    check_subtree(tree, root, None, None, balanced, &mut visited)?;

    if visited != tree.len() {
        return Err(format!("reached {} nodes, size is {}", visited, tree.len()));
    }
    if visited != tree.nodes.len() {
        return Err(format!(
            "reached {} nodes, arena holds {}",
            visited,
            tree.nodes.len()
        ));
    }
    Ok(())
}

/// Returns the recomputed height of the subtree at `id`.
fn check_subtree<K: Ord + std::fmt::Debug>(
    tree: &AvlTree<K>,
    id: NodeKey,
    lower: Option<&K>,
    upper: Option<&K>,
    balanced: bool,
    visited: &mut usize,
) -> Result<i32, String> {
    let node = &tree.nodes[id];
    *visited += 1;

    if lower.is_some_and(|lower| node.key <= *lower) || upper.is_some_and(|upper| node.key >= *upper) {
        return Err(format!("{:?} is out of order", node.key));
    }

    let mut child_heights = [-1, -1];
    for (slot, child, lower, upper) in [
        (0, node.left, lower, Some(&node.key)),
        (1, node.right, Some(&node.key), upper),
    ] {
        if let Some(child) = child {
            if tree.nodes[child].parent != Some(id) {
                return Err(format!(
                    "child {:?} does not point back at {:?}",
                    tree.nodes[child].key, node.key
                ));
            }
            child_heights[slot] = check_subtree(tree, child, lower, upper, balanced, visited)?;
        }
    }

    let height = 1 + child_heights[0].max(child_heights[1]);
    if balanced {
        if node.height != height {
            return Err(format!(
                "{:?} caches height {}, actual {}",
                node.key, node.height, height
            ));
        }
        let balance = child_heights[1] - child_heights[0];
        if balance.abs() > 1 {
            return Err(format!("{:?} has balance factor {}", node.key, balance));
        }
    }
    Ok(height)
}
