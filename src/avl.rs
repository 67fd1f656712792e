//! A self-balancing Binary Search Tree (an AVL tree). Every node stores its height and after each
//! insert or remove the nodes on the path back up to the root are rotated as needed so that no
//! node's subtrees differ in height by more than one.
//!
//! # Examples
//!
//! ```
//! use search_trees::avl::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Sorted input would make a plain BST into a list.
//! for x in 1..=7 {
//!     tree.insert(x);
//! }
//!
//! assert!(tree.is_balanced());
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.pre_order(), vec![4, 2, 1, 3, 6, 5, 7]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use log::trace;

use crate::util::{self, Branch, Insertion, Removal};

/// An AVL tree storing distinct values of `T`.
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

    /// Edges on the longest path down to a leaf. A node with no children has a height of 0.
    height: i32,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
            height: 0,
        })
    }

    fn fix_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// Positive when the left subtree is taller.
    fn balance_factor(&self) -> i32 {
        height(&self.left) - height(&self.right)
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

    /// Inserts `value` unless an equal value is already stored, rebalancing on the way back up.
    /// Returns whether the tree changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::avl::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(tree.insert(2));
    /// assert!(tree.insert(3));
    /// assert!(!tree.insert(3));
    ///
    /// // 1 -> 2 -> 3 got rotated so 2 is the root.
    /// assert_eq!(tree.pre_order(), vec![2, 1, 3]);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        insert(&mut self.root, value).into()
    }

    /// Removes `value` from the tree, rebalancing on the way back up. Returns `false` if it
    /// wasn't there.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in [5, 3, 8, 2, 4, 7, 9] {
    ///     tree.insert(x);
    /// }
    ///
    /// // 5 has two children so its predecessor 4 moves up.
    /// assert!(tree.remove(&5));
    /// assert_eq!(tree.pre_order()[0], 4);
    /// assert_eq!(tree.in_order(), vec![2, 3, 4, 7, 8, 9]);
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
    /// tree.
    pub fn height(&self) -> i32 {
        height(&self.root)
    }

    /// Recomputes every subtree's height from scratch and checks that no node's children differ
    /// in height by more than one. Meant for verifying the tree, not for normal use.
    pub fn is_balanced(&self) -> bool {
        util::balanced_height(self.root.as_deref()).0
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

/// Stored height of the subtree at `link`; `-1` when it is empty.
fn height<T>(link: &Link<T>) -> i32 {
    link.as_ref().map_or(-1, |node| node.height)
}

/// How to fix a node whose child on one side is too tall.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Rotation {
    /// The heavy child leans the same way as the imbalance. One rotation at the node suffices.
    Single,
    /// The heavy child leans the other way. It has to be rotated first to straighten the path.
    Double,
}

/// Picks the rotation for an imbalance given the heights of the heavy child's two subtrees:
/// `outer` on the same side as the imbalance and `inner` on the opposite side. Ties rotate once.
fn rotation(outer: i32, inner: i32) -> Rotation {
    if outer >= inner {
        Rotation::Single
    } else {
        Rotation::Double
    }
}

/// Rotate the subtree at `link` to the left. This moves the right child up and the old root down
/// to become its left child. Used when the right child is too tall so there must be one.
///
/// # Diagram
///
/// ```text
///   old_root                   new_root
///    /    \                     /    \
///   x   new_root   rotate ->  old_root  z
///         /  \                 /  \
///        y    z               x    y
/// ```
fn rotate_left<T>(link: &mut Link<T>) {
    let mut old_root = link.take().expect("Rotating a tree requires a root");
    let mut new_root = old_root.right.take().expect("Rotate left => right child");
    trace!("rotating left");

    old_root.right = new_root.left.take();
    old_root.fix_height();

    new_root.left = Some(old_root);
    new_root.fix_height();
    *link = Some(new_root);
}

/// Mirror image of [`rotate_left`]: the left child moves up and the old root becomes its right
/// child.
///
/// # Diagram
///
/// ```text
///       old_root            new_root
///        /    \              /    \
///   new_root   z  rotate -> x   old_root
///     /  \                        /  \
///    x    y                      y    z
/// ```
fn rotate_right<T>(link: &mut Link<T>) {
    let mut old_root = link.take().expect("Rotating a tree requires a root");
    let mut new_root = old_root.left.take().expect("Rotate right => left child");
    trace!("rotating right");

    old_root.left = new_root.right.take();
    old_root.fix_height();

    new_root.right = Some(old_root);
    new_root.fix_height();
    *link = Some(new_root);
}

/// Refreshes the height of the node at `link` and rotates it if its subtrees differ in height by
/// more than one. Both subtrees must already be balanced.
///
/// See https://en.wikipedia.org/wiki/AVL_tree#Rebalancing for terminology.
fn balance<T>(link: &mut Link<T>) {
    let Some(node) = link.as_deref_mut() else {
        return;
    };
    node.fix_height();

    let balance_factor = node.balance_factor();
    if balance_factor > 1 {
        let left = node.left.as_deref().expect("Left heavy => left child");
        if rotation(height(&left.left), height(&left.right)) == Rotation::Double {
            rotate_left(&mut node.left);
        }
        rotate_right(link);
    } else if balance_factor < -1 {
        let right = node.right.as_deref().expect("Right heavy => right child");
        if rotation(height(&right.right), height(&right.left)) == Rotation::Double {
            rotate_right(&mut node.right);
        }
        rotate_left(link);
    }

    if cfg!(debug_assertions) {
        let Some(root) = link.as_deref() else {
            return;
        };
        assert_eq!(
            root.height,
            1 + height(&root.left).max(height(&root.right))
        );
        assert!(root.balance_factor().abs() <= 1);
    }
}

fn insert<T: Ord>(link: &mut Link<T>, value: T) -> Insertion {
    let Some(node) = link.as_deref_mut() else {
        *link = Some(Node::new_boxed(value));
        return Insertion::Inserted;
    };

    let outcome = match value.cmp(&node.value) {
        Ordering::Less => insert(&mut node.left, value),
        Ordering::Equal => return Insertion::Duplicate,
        Ordering::Greater => insert(&mut node.right, value),
    };

    if outcome == Insertion::Inserted {
        balance(link);
    }
    outcome
}

fn remove<T: Ord>(link: &mut Link<T>, value: &T) -> Removal {
    let Some(node) = link.as_deref_mut() else {
        return Removal::NotFound;
    };

    let outcome = match value.cmp(&node.value) {
        Ordering::Less => remove(&mut node.left, value),
        Ordering::Greater => remove(&mut node.right, value),
        Ordering::Equal => {
            if node.left.is_some() && node.right.is_some() {
                trace!("replacing a node with two children by its predecessor");
                if let Some(predecessor) = take_max(&mut node.left) {
                    node.value = predecessor;
                }
            } else {
                unlink(link);
            }
            Removal::Removed
        }
    };

    // `balance` skips the link if the removed node was a leaf that left it empty.
    if outcome == Removal::Removed {
        balance(link);
    }
    outcome
}

/// Removes the largest node under `link` and returns its value, rebalancing every node passed on
/// the way down.
fn take_max<T>(link: &mut Link<T>) -> Option<T> {
    let node = link.as_deref_mut()?;
    if node.right.is_some() {
        let max = take_max(&mut node.right);
        balance(link);
        return max;
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

/// Checks every node's stored height against a recount of its children's.
#[cfg(test)]
fn heights_are_consistent<T>(link: &Link<T>) -> bool {
    match link {
        None => true,
        Some(node) => {
            heights_are_consistent(&node.left)
                && heights_are_consistent(&node.right)
                && node.height == 1 + height(&node.left).max(height(&node.right))
        }
    }
}
