//! A sideways drawing of a [`Tree`] for eyeballing its shape. The right subtree is drawn above
//! its parent and the left subtree below, so reading from top to bottom gives keys in
//! descending order.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let tree = Tree::build(vec![7, 3, 9, 1]);
//! let expected = "\
//! │   ┌── 9
//! └── 7
//!     └── 3
//!         └── 1
//! ";
//!
//! assert_eq!(tree.to_string(), expected);
//! ```

use std::fmt;

use crate::tree::{Node, Tree};

const LEFT: &str = "└── ";
const RIGHT: &str = "┌── ";
const BRANCH: &str = "│   ";
const SPACE: &str = "    ";

enum Step<'a, K> {
    /// Draw a whole subtree. `is_left` is true for left children and for the root.
    Subtree(&'a Node<K>, String, bool),
    /// Write the line for a single node.
    Line(&'a Node<K>, String, bool),
}

impl<K: fmt::Display> fmt::Display for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut steps: Vec<Step<'_, K>> = self
            .root()
            .map(|root| Step::Subtree(root, String::new(), true))
            .into_iter()
            .collect();

        // Pushed in reverse so the right subtree comes out first and the left subtree last.
        while let Some(step) = steps.pop() {
            match step {
                Step::Line(node, prefix, is_left) => {
                    writeln!(f, "{}{}{}", prefix, if is_left { LEFT } else { RIGHT }, node.key())?;
                }
                Step::Subtree(node, prefix, is_left) => {
                    let (left_pad, right_pad) = if is_left { (SPACE, BRANCH) } else { (BRANCH, SPACE) };
                    if let Some(left) = node.left() {
                        steps.push(Step::Subtree(left, format!("{}{}", prefix, left_pad), true));
                    }
                    let right_prefix = format!("{}{}", prefix, right_pad);
                    steps.push(Step::Line(node, prefix, is_left));
                    if let Some(right) = node.right() {
                        steps.push(Step::Subtree(right, right_prefix, false));
                    }
                }
            }
        }

        Ok(())
    }
}
