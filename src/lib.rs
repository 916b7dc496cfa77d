//! An AVL tree that doubles as an order-statistic set.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are defined recursively
//! using the notion of a `Node`. A `Node` stores a value and may have
//! child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! Searching for a value takes `O(height)` where `height` is the longest
//! path from the root `Node` to a leaf `Node`.
//!
//! ## AVL
//!
//! An AVL tree additionally keeps, for every `Node`, the heights of its two
//! subtrees within one of each other. Any insert or delete that breaks this
//! is repaired on the way back up with at most two rotations per `Node`,
//! which limits the height to `O(lg N)`.
//!
//! ## Order statistics
//!
//! Each `Node` also caches how many `Node`s are in its subtree. With that,
//! the `i`th smallest value ([`Tree::select`]) and the number of values
//! below a given one ([`Tree::rank`]) are found in `O(lg N)` without
//! comparing any values.
//!
//! ## Features
//!
//! - `full_validation`: exposes [`Tree::fully_validate`] which checks every
//!   invariant at every `Node`. Meant for tests.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod node;
pub mod tree;

pub use tree::Tree;
