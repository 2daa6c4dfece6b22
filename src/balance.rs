//! Height and balance diagnostics, plus rebuilding a drifted tree.
//!
//! Heights count levels: an empty subtree has height 0 and a lone node has height 1. A tree is
//! balanced when, at every node, the heights of the two subtrees differ by at most one.

use tracing::debug;

use crate::traverse::{fold_post_order, try_fold_post_order};
use crate::tree::{Node, Tree};

/// The outcome of checking a subtree for balance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Balance {
    /// Every node in the subtree is balanced. Carries the subtree's height.
    Balanced(usize),
    /// Some node in the subtree has children whose heights differ by more than one.
    Unbalanced,
}

impl Balance {
    /// Whether this is [`Balance::Balanced`].
    pub fn is_balanced(self) -> bool {
        matches!(self, Self::Balanced(_))
    }
}

impl<K> Tree<K> {
    /// The height of the tree in levels: empty trees have height 0 and a lone leaf has height 1.
    /// That is one more than the number of edges on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// Checks the whole tree for balance in a single post-order pass. The pass stops at the first
    /// unbalanced node; nothing after it in post-order is visited.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{Balance, Tree};
    ///
    /// let mut tree = Tree::build(vec![1, 2, 3]);
    /// assert_eq!(tree.balance(), Balance::Balanced(2));
    ///
    /// tree.insert(4);
    /// tree.insert(5);
    /// assert_eq!(tree.balance(), Balance::Unbalanced);
    /// ```
    pub fn balance(&self) -> Balance {
        balance_of(self.root())
    }

    /// Whether every node's subtrees differ in height by at most one. Empty trees are balanced.
    pub fn is_balanced(&self) -> bool {
        self.balance().is_balanced()
    }

    /// Rebuilds the tree from its sorted keys so it has the same shape [`Tree::build`] would
    /// give. The old nodes are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::build(vec![1, 2, 3, 4, 5]);
    /// tree.insert(100);
    /// tree.insert(200);
    /// tree.insert(300);
    /// assert!(!tree.is_balanced());
    ///
    /// tree.rebalance();
    /// assert!(tree.is_balanced());
    /// assert_eq!(tree.in_order(), vec![1, 2, 3, 4, 5, 100, 200, 300]);
    /// ```
    pub fn rebalance(&mut self) {
        let before = self.height();
        let keys = std::mem::take(self).into_sorted_vec();
        *self = Self::from_sorted(keys);
        debug!(before, after = self.height(), "rebalanced tree");
    }
}

impl<K> Node<K> {
    /// The number of levels in the subtree rooted at this node. A leaf has height 1.
    pub fn height(&self) -> usize {
        fold_post_order(Some(self), || 0, |_, left, right| left.max(right) + 1)
    }
}

fn balance_of<K>(node: Option<&Node<K>>) -> Balance {
    match try_fold_post_order(node, || 0, check_heights) {
        Ok(height) => Balance::Balanced(height),
        Err(()) => Balance::Unbalanced,
    }
}

/// The height of a node whose subtrees are balanced and `left` and `right` tall, or `Err` when
/// those heights differ by more than one.
fn check_heights<K>(_: &Node<K>, left: usize, right: usize) -> Result<usize, ()> {
    if left.abs_diff(right) <= 1 {
        Ok(left.max(right) + 1)
    } else {
        Err(())
    }
}
