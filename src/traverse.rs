//! Traversals over a [`Tree`]. Every order comes in two forms: a `*_with` method that hands each
//! visited [`Node`] to a closure, and a method that collects the visited keys into a `Vec`.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let tree = Tree::build(vec![7, 3, 9, 1]);
//!
//! assert_eq!(tree.level_order(), vec![7, 3, 9, 1]);
//! assert_eq!(tree.pre_order(), vec![7, 3, 1, 9]);
//! assert_eq!(tree.in_order(), vec![1, 3, 7, 9]);
//! assert_eq!(tree.post_order(), vec![1, 3, 9, 7]);
//!
//! let mut leaves = Vec::new();
//! tree.in_order_with(|n| {
//!     if n.is_leaf() {
//!         leaves.push(*n.key());
//!     }
//! });
//! assert_eq!(leaves, vec![1, 9]);
//! ```

use std::collections::VecDeque;
use std::convert::Infallible;

use crate::tree::{Node, Tree};

// Every walk here keeps its own stack or queue so a tree that has drifted into a long chain
// doesn't run out of call stack.

impl<K> Tree<K> {
    /// Visits nodes breadth first: the root, then every node at depth 1, then depth 2, and so
    /// on. Within a level, left children come before right children.
    pub fn level_order_with<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a Node<K>),
    {
        let mut queue: VecDeque<&Node<K>> = self.root().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            visit(node);
            queue.extend(node.left());
            queue.extend(node.right());
        }
    }

    /// Visits each node before its left subtree and then its right subtree.
    pub fn pre_order_with<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a Node<K>),
    {
        let mut stack: Vec<&Node<K>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            visit(node);
            stack.extend(node.right());
            stack.extend(node.left());
        }
    }

    /// Visits the left subtree, then the node, then the right subtree. Keys come out ascending.
    pub fn in_order_with<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a Node<K>),
    {
        let mut stack = Vec::new();
        let mut next = self.root();
        loop {
            while let Some(node) = next {
                stack.push(node);
                next = node.left();
            }
            let Some(node) = stack.pop() else {
                break;
            };
            visit(node);
            next = node.right();
        }
    }

    /// Visits the left subtree, then the right subtree, then the node.
    pub fn post_order_with<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a Node<K>),
    {
        fold_post_order(self.root(), || (), |node, (), ()| visit(node));
    }

    /// Keys in level order. See [`Tree::level_order_with`].
    pub fn level_order(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut keys = Vec::new();
        self.level_order_with(|n| keys.push(n.key().clone()));
        keys
    }

    /// Keys in pre-order. See [`Tree::pre_order_with`].
    pub fn pre_order(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut keys = Vec::new();
        self.pre_order_with(|n| keys.push(n.key().clone()));
        keys
    }

    /// Keys in ascending order.
    pub fn in_order(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut keys = Vec::new();
        self.in_order_with(|n| keys.push(n.key().clone()));
        keys
    }

    /// Keys in post-order. See [`Tree::post_order_with`].
    pub fn post_order(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut keys = Vec::new();
        self.post_order_with(|n| keys.push(n.key().clone()));
        keys
    }

    /// Consumes the tree and returns its keys in ascending order. Nodes are dropped one at a
    /// time as their keys are moved out.
    pub fn into_sorted_vec(mut self) -> Vec<K> {
        let mut keys = Vec::new();
        let mut stack: Vec<Box<Node<K>>> = Vec::new();
        let mut next = self.root.take();
        loop {
            while let Some(mut node) = next {
                next = node.left.take();
                stack.push(node);
            }
            let Some(node) = stack.pop() else {
                break;
            };
            let Node { key, right, .. } = *node;
            keys.push(key);
            next = right;
        }
        keys
    }
}

enum Step<'a, K> {
    Enter(Option<&'a Node<K>>),
    Exit(&'a Node<K>),
}

/// Walks the subtree under `root` in post-order, combining each node with the results of its
/// left and right subtrees. `empty` stands in for a missing child. The walk stops at the first
/// `Err` from `combine`, so anything after that node is never visited.
pub(crate) fn try_fold_post_order<'a, K, T, E>(
    root: Option<&'a Node<K>>,
    empty: impl Fn() -> T,
    mut combine: impl FnMut(&'a Node<K>, T, T) -> Result<T, E>,
) -> Result<T, E> {
    let mut steps = vec![Step::Enter(root)];
    let mut results = Vec::new();
    while let Some(step) = steps.pop() {
        match step {
            Step::Enter(None) => results.push(empty()),
            Step::Enter(Some(node)) => {
                // Popped in reverse: left subtree, right subtree, then the node.
                steps.push(Step::Exit(node));
                steps.push(Step::Enter(node.right()));
                steps.push(Step::Enter(node.left()));
            }
            Step::Exit(node) => {
                let right = results.pop().expect("right subtree finishes before its parent");
                let left = results.pop().expect("left subtree finishes before its parent");
                results.push(combine(node, left, right)?);
            }
        }
    }
    Ok(results.pop().expect("the root always leaves one result"))
}

/// [`try_fold_post_order`] for folds that can't stop early.
pub(crate) fn fold_post_order<'a, K, T>(
    root: Option<&'a Node<K>>,
    empty: impl Fn() -> T,
    mut combine: impl FnMut(&'a Node<K>, T, T) -> T,
) -> T {
    let folded = try_fold_post_order(root, empty, |node, left, right| {
        Ok::<_, Infallible>(combine(node, left, right))
    });
    match folded {
        Ok(result) => result,
        Err(never) => match never {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn empty_tree_yields_nothing() {
        let tree: Tree<i32> = Tree::new();
        let mut calls = 0;
        tree.level_order_with(|_| calls += 1);
        tree.pre_order_with(|_| calls += 1);
        tree.in_order_with(|_| calls += 1);
        tree.post_order_with(|_| calls += 1);

        assert_eq!(calls, 0);
        assert!(tree.level_order().is_empty());
        assert!(tree.pre_order().is_empty());
        assert!(tree.in_order().is_empty());
        assert!(tree.post_order().is_empty());
        assert!(tree.into_sorted_vec().is_empty());
    }

    #[rstest]
    #[case(vec![7, 3, 9, 1], vec![7, 3, 9, 1], vec![7, 3, 1, 9], vec![1, 3, 9, 7])]
    #[case(
        vec![1, 2, 3, 4, 5, 6, 7],
        vec![4, 2, 6, 1, 3, 5, 7],
        vec![4, 2, 1, 3, 6, 5, 7],
        vec![1, 3, 2, 5, 7, 6, 4]
    )]
    #[case(vec![1], vec![1], vec![1], vec![1])]
    fn orders(
        #[case] keys: Vec<i32>,
        #[case] level: Vec<i32>,
        #[case] pre: Vec<i32>,
        #[case] post: Vec<i32>,
    ) {
        let tree = Tree::build(keys.clone());
        let mut sorted = keys;
        sorted.sort_unstable();

        assert_eq!(tree.level_order(), level);
        assert_eq!(tree.pre_order(), pre);
        assert_eq!(tree.in_order(), sorted);
        assert_eq!(tree.post_order(), post);
    }

    #[test]
    fn level_order_goes_left_before_right() {
        // A lopsided tree: 5 with 3 and 8, then 1 under 3 and 9, 10 down the right.
        let mut tree = Tree::build(vec![3, 5, 8]);
        tree.insert(9);
        tree.insert(1);
        tree.insert(10);

        assert_eq!(tree.level_order(), vec![5, 3, 8, 1, 9, 10]);
    }

    #[test]
    fn visitor_sees_nodes() {
        let tree = Tree::build(vec![1, 2, 3]);
        let mut leaves = 0;
        tree.post_order_with(|n| {
            if n.is_leaf() {
                leaves += 1;
            }
        });
        assert_eq!(leaves, 2);
    }

    #[test]
    fn into_sorted_vec_matches_in_order() {
        let mut tree = Tree::build(vec![8, 2, 6, 4]);
        tree.insert(5);
        tree.insert(1);
        let in_order = tree.in_order();

        assert_eq!(tree.into_sorted_vec(), in_order);
    }
}
