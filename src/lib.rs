//! This crate exposes a persistent (immutable, structurally shared) Binary
//! Search Tree (BST) mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored keys. BSTs are typically defined recursively using
//! the notion of a `Node`. A `Node` stores the key that was inserted and has
//! two child trees, either of which may be empty. The most important
//! invariants of this BST are:
//!
//! 1. For every `Node` in the tree, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in the tree, all the `Node`s in its right subtree have a
//!    key greater than or equal to its own key. Inserting a key that is
//!    already present adds another copy of it to the right.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is defined
//! as the longest path from the root `Node` to a leaf `Node`). This tree does
//! no balancing, so inserting keys in sorted order gives a height equal to the
//! number of keys. None of the operations recurse on the call stack so that
//! case is slow but safe.
//!
//! ## Persistence
//!
//! Nothing in a [`Tree`] is ever mutated after it is built. [`Tree::insert`]
//! returns a new tree that shares every subtree off the insertion path with
//! the tree it was called on, so old versions stay valid and cost nothing to
//! keep around.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod functional;


pub use functional::Tree;
