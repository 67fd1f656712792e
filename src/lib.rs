//! This crate exposes two ordered containers: a plain Binary Search Tree and its self-balancing
//! sibling, the AVL tree.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Neither tree stores duplicates: inserting a value that is already present
//! returns `false` and leaves the tree alone.
//!
//! Searching for values in the tree takes `O(height)` (where `height` is the number
//! of edges on the longest path from the root `Node` to a leaf `Node`). The [`bst`]
//! tree makes no effort to keep that small so sorted input gives it a height of
//! `N - 1`. The [`avl`] tree rotates nodes after every insert and remove to keep
//! the heights of every `Node`'s two subtrees within one of each other, which
//! limits the height to `O(lg N)`.
//!
//! Both trees support sorted iteration by visiting the left subtree, then the
//! subtree root, then the right subtree ([`avl::Tree::in_order`]) as well as the
//! pre-order and post-order visits.
//!
//! Rotations and structural removals are reported through the [`log`] facade at
//! the `trace` level.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
pub mod bst;
mod util;
