//! This crate exposes [`OrderedMap`], an ordered map ("treemap") backed by a
//! plain Binary Search Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key, the
//! value associated with it, and sometimes child `Node`s. The most
//! important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` (where `height` is defined as the
//! longest path from the root `Node` to a leaf `Node`). The same invariants
//! make the smallest key, the largest key, and the floor or ceiling of any
//! query key reachable by a single walk down the tree. In-order traversal
//! (left subtree, subtree root, right subtree) visits keys in sorted order.
//!
//! ## No rebalancing
//!
//! [`OrderedMap`] never rotates or otherwise rebalances. Inserting keys in a
//! random order gives an expected height of `O(lg N)`, but inserting them in
//! sorted order builds a chain of height `N` and every operation becomes
//! linear.
//!
//! # Examples
//!
//! ```
//! use treemap::{OrderedMap, TreemapError};
//!
//! let mut map = OrderedMap::new();
//! map.insert(4, "four")?;
//! map.insert(1, "one")?;
//! map.insert(7, "seven")?;
//!
//! assert_eq!(map.get(&4), Ok(&"four"));
//! assert_eq!(map.floor_key(&6), Ok(&4));
//! assert_eq!(map.ceil_key(&6), Ok(&7));
//!
//! // Keys are unique. Inserting an existing key is rejected.
//! assert_eq!(map.insert(4, "cuatro"), Err(TreemapError::DuplicateKey));
//! # Ok::<(), TreemapError>(())
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod iter;
pub mod ordered_map;


pub use error::{Result, TreemapError};
pub use ordered_map::OrderedMap;
