//! This crate exposes an unbalanced Binary Search Tree (BST) whose ordering is chosen at
//! runtime, and a word frequency index built out of three of them.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Here "less" and "greater" are decided by a [`Comparator`] handed to the [`Tree`] when it is
//! built, so the same key type can be indexed several ways at once. Nothing rebalances the tree:
//! searching takes `O(height)`, and the height is `O(lg N)` for keys inserted in random order but
//! `O(N)` for sorted input.
//!
//! ## Word frequencies
//!
//! The [`words`] module counts the words of a text in an alphabetical tree, drops stop words, and
//! re-indexes what is left by descending frequency and by descending length.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod iter;
pub mod ordering;
mod path;
pub mod tree;
mod util;
pub mod words;

pub use error::Error;
pub use ordering::Comparator;
pub use tree::Tree;
pub use util::ideal_height;
