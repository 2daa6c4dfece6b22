//! A Binary Search Tree (BST) over a set of unique keys that can be built
//! balanced from an unsorted collection and rebuilt balanced on demand.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! may have up to two child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)`. Building from a sorted
//! sequence by always picking the middle key as the subtree root limits the
//! height to `O(lg N)`. Inserts and removals don't rotate anything, so the
//! height can drift; [`Tree::is_balanced`] tells you when it has and
//! [`Tree::rebalance`] rebuilds the tree from its sorted keys.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let mut tree: Tree<i32> = [7, 3, 9, 1, 3].into_iter().collect();
//! assert_eq!(tree.in_order(), vec![1, 3, 7, 9]);
//!
//! tree.insert(100);
//! tree.insert(200);
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.in_order(), vec![1, 3, 7, 9, 100, 200]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod balance;
pub mod pretty;
pub mod traverse;
pub mod tree;

pub use balance::Balance;
pub use tree::{Node, Tree};

#[cfg(test)]
mod test;
