//! # avl-vocab - AVL tree and unique word counting
//!
//! An arena-backed AVL tree that stores unique keys and keeps itself height
//! balanced on insertion through single and double rotations, plus a small
//! word counter built on it.
//!
//! The tree maintains these invariants after every insertion:
//! 1. **BST order**: every key in a left subtree is smaller than its parent,
//!    every key in a right subtree is larger
//! 2. **AVL balance**: the heights of a node's two children differ by at most one
//!
//! ## Example
//!
//! ```
//! use avl_vocab::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! for word in ["a", "b", "c"] {
//!     tree.insert(word.to_string());
//! }
//!
//! // Ascending input forces a rotation, "b" ends up at the root.
//! let root = tree.root().unwrap();
//! assert_eq!(tree.node(root).unwrap().key(), "b");
//! assert_eq!(tree.len(), 3);
//! assert!(tree.contains("c"));
//! ```
//!
//! Counting words:
//!
//! ```
//! use avl_vocab::{count_reader, VocabConfig};
//!
//! let vocab = count_reader("The cat sat. The CAT sat!".as_bytes(), VocabConfig::default()).unwrap();
//! assert_eq!(vocab.count().total, 6);
//! assert_eq!(vocab.count().unique, 3);
//! ```
//!
//! ## Performance
//!
//! - O(log n) search and balanced insertion
//! - Nodes are addressed by generational indices (SlotMap), parent links are
//!   plain handles

mod config;
mod error;
mod iter;
mod node;
mod tree;
mod vocab;

#[cfg(test)]
mod tests;

pub use config::{InsertMode, VocabConfig};
pub use error::{TreeError, VocabError};
pub use iter::AvlIter;
pub use node::{Node, NodeKey};
pub use tree::AvlTree;
pub use vocab::{
    count_path, count_reader, is_token_separator, normalize, tokens, Vocabulary, WordCount,
    STDIN_NAME,
};
