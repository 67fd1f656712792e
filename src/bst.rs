//! An unbalanced Binary Search Tree. Values are placed exactly where the ordering sends them so the
//! shape of the tree depends entirely on insertion order. Inserting already sorted values builds a
//! tree that is really a linked list.
//!
//! # Examples
//!
//! ```
//! use search_trees::bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Duplicates are refused.
//! assert!(!tree.insert(1));
//!
//! assert!(tree.remove(&1));
//! assert!(!tree.contains(&1));
//! ```

use std::cmp::Ordering;
use std::fmt;

use log::trace;

use crate::util::{self, Branch, Insertion, Removal};

/// An unbalanced Binary Search Tree storing distinct values of `T`.
#[derive(Clone)]
pub struct Tree<T> {
    root: Link<T>,
}

type Link<T> = Option<Box<Node<T>>>;

#[derive(Clone)]
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }
}

impl<T> Branch for Node<T> {
    type Value = T;

    fn value(&self) -> &T {
        &self.value
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn detach(&mut self) -> [Option<Box<Self>>; 2] {
        [self.left.take(), self.right.take()]
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        util::teardown(self.root.take());
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = Vec::new();
        util::in_order(self.root.as_deref(), &mut values);
        f.debug_set().entries(values).finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `value` unless an equal value is already stored. Returns whether the tree changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.in_order(), vec![1]);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        insert(&mut self.root, value).into()
    }

    /// Removes `value` from the tree. Returns `false` if it wasn't there.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.remove(&1));
    /// assert!(!tree.remove(&1));
    /// ```
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        remove(&mut self.root, value).into()
    }

    /// Returns whether a value equal to `value` is stored in the tree.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        util::contains(self.root.as_deref(), value)
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        self.root.as_deref().map(util::min)
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        self.root.as_deref().map(util::max)
    }

    /// Number of edges on the longest path from the root down to a leaf, or `-1` for an empty
    /// tree. This walks the whole tree since nodes don't track their height.
    pub fn height(&self) -> i32 {
        util::balanced_height(self.root.as_deref()).1
    }

    /// The values in ascending order.
    pub fn in_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        util::snapshot(self.root.as_deref(), util::in_order)
    }

    /// The values with every node ahead of its subtrees.
    pub fn pre_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        util::snapshot(self.root.as_deref(), util::pre_order)
    }

    /// The values with every node after its subtrees.
    pub fn post_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        util::snapshot(self.root.as_deref(), util::post_order)
    }
}

fn insert<T: Ord>(link: &mut Link<T>, value: T) -> Insertion {
    let Some(node) = link.as_deref_mut() else {
        *link = Some(Node::new_boxed(value));
        return Insertion::Inserted;
    };

    match value.cmp(&node.value) {
        Ordering::Less => insert(&mut node.left, value),
        Ordering::Equal => Insertion::Duplicate,
        Ordering::Greater => insert(&mut node.right, value),
    }
}

fn remove<T: Ord>(link: &mut Link<T>, value: &T) -> Removal {
    let Some(node) = link.as_deref_mut() else {
        return Removal::NotFound;
    };

    match value.cmp(&node.value) {
        Ordering::Less => remove(&mut node.left, value),
        Ordering::Greater => remove(&mut node.right, value),
        Ordering::Equal => {
            if node.left.is_some() && node.right.is_some() {
                // Two children: the predecessor (largest value on the left) takes this node's
                // place and its own node, which has no right child, is the one unlinked.
                trace!("replacing a node with two children by its predecessor");
                if let Some(predecessor) = take_max(&mut node.left) {
                    node.value = predecessor;
                }
            } else {
                unlink(link);
            }
            Removal::Removed
        }
    }
}

/// Removes the largest node under `link` and returns its value.
fn take_max<T>(link: &mut Link<T>) -> Option<T> {
    let node = link.as_deref_mut()?;
    if node.right.is_some() {
        return take_max(&mut node.right);
    }

    let Node { value, left, .. } = *link.take()?;
    *link = left;
    Some(value)
}

/// Replaces the node at `link` with its only child (or nothing if it is a leaf).
fn unlink<T>(link: &mut Link<T>) {
    if let Some(node) = link.take() {
        let Node { left, right, .. } = *node;
        debug_assert!(left.is_none() || right.is_none());
        trace!("unlinking a node with at most one child");
        *link = left.or(right);
    }
}
