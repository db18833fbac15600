//! This crate exposes a link-based, unbalanced Binary Search Tree that can be
//! rebalanced on demand, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one item and
//! may have a left and a right child `Node`. The most important invariants
//! of this BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree hold an
//!    item less than its own item.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree hold an
//!    item greater than or equal to its own item. Duplicates therefore pile
//!    up to the right of the first equal item.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for items in the tree takes `O(height)` (where `height` is the
//! longest path from the root `Node` to a leaf `Node`). The [`Tree`] here does
//! nothing to keep its height down while items are added, so adding sorted
//! input produces a chain. [`Tree::rebalance`] rebuilds the tree with the
//! smallest possible height, after which lookups take `O(lg N)` again. BSTs
//! also naturally support sorted iteration by visiting the left subtree, then
//! the subtree root, then the right subtree (see [`Tree::inorder`]).
//!
//! # Examples
//!
//! ```
//! use linkedbst::Tree;
//!
//! // Adding sorted input builds a chain.
//! let mut tree: Tree<_> = (1..=7).collect();
//! assert_eq!(tree.height(), 6);
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert_eq!(tree.height(), 2);
//! assert!(tree.is_balanced());
//! assert!(tree.inorder().copied().eq(1..=7));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod iter;
pub mod linked;

pub use error::{Error, Result};
pub use linked::Tree;

#[cfg(test)]
mod test {
    pub(crate) mod quick;
}
