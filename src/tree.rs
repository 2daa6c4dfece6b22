//! The tree itself: a set of unique keys stored in owned, boxed nodes.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let mut tree = Tree::build(vec![7, 3, 9, 1]);
//!
//! // Keys already in the tree are left alone.
//! assert!(!tree.insert(3));
//! assert!(tree.insert(4));
//!
//! assert_eq!(tree.depth(&7), Some(0));
//! assert_eq!(tree.find(&4).map(|n| *n.key()), Some(4));
//!
//! // Removing a key that isn't there is a no-op.
//! assert!(tree.remove(&3));
//! assert!(!tree.remove(&3));
//! assert!(tree.find(&3).is_none());
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

use crate::traverse::fold_post_order;

/// An optional, owned child. `None` marks the empty slot below a leaf.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A Binary Search Tree holding a set of unique keys.
///
/// The tree is balanced when it is built but `insert` and `remove` never restructure it beyond
/// splicing, so it may drift. See [`Tree::rebalance`].
pub struct Tree<K> {
    pub(crate) root: Link<K>,
}

/// A `Node` has a key and up to two children. Every key in the left subtree is smaller than
/// `key` and every key in the right subtree is larger.
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    // The default drop recurses once per level, which a long chain of right children overflows.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K: Clone> Clone for Tree<K> {
    fn clone(&self) -> Self {
        let root = fold_post_order(self.root(), || None, |node, left, right| {
            Some(Box::new(Node {
                key: node.key.clone(),
                left,
                right,
            }))
        });
        Self { root }
    }
}

impl<K: fmt::Debug> fmt::Debug for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys = Vec::new();
        self.in_order_with(|n| keys.push(n.key()));
        f.debug_set().entries(keys).finish()
    }
}

/// Only shows the keys of the immediate children.
impl<K: fmt::Debug> fmt::Debug for Node<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("left", &self.left().map(Node::key))
            .field("right", &self.right().map(Node::key))
            .finish()
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::build(iter.into_iter().collect())
    }
}

impl<K: Ord> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a height-balanced tree from `keys`. The keys may be unsorted and may contain
    /// duplicates; duplicates are dropped.
    ///
    /// The middle key of each sorted range becomes the root of that subtree. For even-length
    /// ranges that is the key at index `len / 2`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build(vec![5, 1, 4, 1, 2, 3]);
    ///
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(3));
    /// assert_eq!(tree.len(), 5);
    /// assert!(tree.is_balanced());
    /// ```
    pub fn build(mut keys: Vec<K>) -> Self
    where
        K: Ord,
    {
        keys.sort_unstable();
        keys.dedup();
        Self::from_sorted(keys)
    }

    /// Builds a tree from keys that are already sorted and unique.
    pub(crate) fn from_sorted(keys: Vec<K>) -> Self {
        let len = keys.len();
        let mut keys = keys.into_iter();
        Self {
            root: build_link(&mut keys, len),
        }
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        let mut count = 0;
        self.pre_order_with(|_| count += 1);
        count
    }

    /// Inserts `key` as a new leaf. Returns `false`, leaving the tree untouched, when the key is
    /// already present.
    ///
    /// No rebalancing happens here.
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let inserted = insert_into(&mut self.root, key);
        if !inserted {
            trace!("insert: key already present");
        }
        inserted
    }

    /// Removes `key` from the tree. Returns `false` when the key wasn't present.
    ///
    /// A node with two children takes the key of its in-order successor, which is then
    /// spliced out of the right subtree.
    pub fn remove(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        let removed = remove_from(&mut self.root, key);
        if !removed {
            trace!("remove: key not found");
        }
        removed
    }

    /// Finds the node holding `key`. The returned reference lives until the next mutation.
    pub fn find(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        let mut node = self.root()?;
        loop {
            node = match key.cmp(&node.key) {
                Ordering::Less => node.left()?,
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right()?,
            };
        }
    }

    /// Whether `key` is in the tree.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.find(key).is_some()
    }

    /// The number of edges from the root to the node holding `key`, or `None` when the key isn't
    /// in the tree.
    pub fn depth(&self, key: &K) -> Option<usize>
    where
        K: Ord,
    {
        let mut edges = 0;
        let mut node = self.root()?;
        loop {
            node = match key.cmp(&node.key) {
                Ordering::Less => node.left()?,
                Ordering::Equal => return Some(edges),
                Ordering::Greater => node.right()?,
            };
            edges += 1;
        }
    }
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }

    /// The key stored at this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the left subtree.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Builds a balanced subtree out of the next `len` keys of an ascending iterator. The left
/// subtree takes `len / 2` keys, so the root is the key at index `len / 2`.
fn build_link<K>(keys: &mut impl Iterator<Item = K>, len: usize) -> Link<K> {
    if len == 0 {
        return None;
    }

    let left_len = len / 2;
    let left = build_link(keys, left_len);
    let key = keys
        .next()
        .expect("`len` never exceeds the number of remaining keys");
    let right = build_link(keys, len - left_len - 1);

    Some(Box::new(Node { key, left, right }))
}

fn insert_into<K: Ord>(mut link: &mut Link<K>, key: K) -> bool {
    while let Some(node) = link {
        link = match key.cmp(&node.key) {
            Ordering::Less => &mut node.left,
            Ordering::Equal => return false,
            Ordering::Greater => &mut node.right,
        };
    }

    *link = Some(Node::new_boxed(key));
    true
}

fn remove_from<K: Ord>(mut link: &mut Link<K>, key: &K) -> bool {
    loop {
        match link.as_deref().map(|node| key.cmp(&node.key)) {
            None => return false,
            Some(Ordering::Equal) => break,
            Some(Ordering::Less) => link = &mut link.as_mut().expect("checked above").left,
            Some(Ordering::Greater) => link = &mut link.as_mut().expect("checked above").right,
        }
    }

    let node = link.as_mut().expect("the search stops on the matching node");
    if node.left.is_some() && node.right.is_some() {
        node.key = take_smallest(&mut node.right);
    } else {
        // Zero or one child: splice the child (or nothing) into our slot.
        *link = node.left.take().or_else(|| node.right.take());
    }
    true
}

/// Splices the leftmost node out of a non-empty subtree and returns its key. The leftmost node
/// has no left child so its right child (if any) takes its place.
fn take_smallest<K>(mut link: &mut Link<K>) -> K {
    while link.as_ref().is_some_and(|node| node.left.is_some()) {
        link = &mut link.as_mut().expect("checked by the loop condition").left;
    }

    let mut smallest = link
        .take()
        .expect("successor search starts at a present right child");
    *link = smallest.right.take();
    smallest.key
}
