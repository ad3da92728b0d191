//! This crate exposes a purely functional Binary Search Tree (BST)
//! built to back a tree visualizer.
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
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! keys in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). With clever construction the
//! height of a BST can be limited to `O(lg N)` where `N` is the number of nodes
//! in the tree. BSTs also naturally support sorted iteration by visiting the
//! left subtree, then the subtree root, then the right subtree.
//!
//! The tree here is persistent: inserting or deleting returns a new tree
//! that shares untouched subtrees with the old one, so earlier snapshots
//! stay valid. That is what lets a visualizer keep drawing a previous
//! state while stepping through the operation that replaced it. Nothing
//! rebalances behind the caller's back; [`functional::Tree::balance`]
//! rebuilds a height-balanced tree when asked.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod functional;
