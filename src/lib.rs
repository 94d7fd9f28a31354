//! This crate exposes a pair of small in-memory ordered containers:
//! a generic Binary Search Tree (BST) and a sentinel-headed singly
//! linked list.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! The tree in this crate additionally holds no duplicate keys at all:
//! inserting a key that compares equal to a stored one is an error.
//!
//! The benefits of these invariants are many. Searching for keys in the
//! tree takes `O(height)` (where `height` is defined as the longest path
//! from the root `Node` to a leaf `Node`). BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root,
//! then the right subtree. Beyond that they support *range extraction*:
//! collecting every key inside an inclusive interval in ascending order
//! while skipping whole subtrees that provably lie outside it. See
//! [`tree::Tree::range`].
//!
//! Note that [`tree::Tree`] performs no rebalancing, so its height carries
//! no guarantee: a monotonic insertion order degrades it to a chain.
//!
//! ## Singly linked list
//!
//! [`list::List`] is a singly linked sequence headed by a permanent
//! sentinel cell, which removes the empty/non-empty special cases from
//! insertion. It tracks its tail for O(1) back-insertion and supports
//! linear search, deduplication, and reversal.

#![deny(missing_docs)]

pub mod list;
pub mod tree;

#[cfg(test)]
pub(crate) mod test;
