#![deny(missing_docs)]

//! An in-memory, height-balanced ordered map.
//!
//! This crate provides [`Tree`], an ordered key-value map backed by an AVL
//! tree: a binary search tree that rebalances itself through rotations after
//! every insertion and removal, so that the heights of the two subtrees of
//! any node never differ by more than one. Lookups, insertions and removals
//! therefore run in logarithmic time regardless of insertion order.
//!
//! Beyond the usual map operations, a [`Tree`] can be:
//!
//! - **Walked in any order**: [`Traversal`] selects one of the six
//!   depth-first visiting orders, from ascending and descending key order to
//!   pre-order and post-order shapes
//! - **Transformed**: [`map`], [`filter`] and [`reduce`] build new trees or
//!   folded results from existing ones without touching their nodes
//! - **Sliced**: [`Tree::subtree`] deep-copies the part of the tree rooted at
//!   a given key into a new, independent tree
//!
//! A [`PriorityQueue`] built on top of [`Tree`] keeps one payload per
//! priority and always yields the payload with the highest priority first.
//!
//! Basic usage:
//!
//! ```
//! use dialog_avl_tree::{DialogAvlTreeError, Traversal, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Insert entries
//! tree.insert(3, "three").unwrap();
//! tree.insert(1, "one").unwrap();
//! tree.insert(2, "two").unwrap();
//!
//! // Keys are unique
//! assert_eq!(tree.insert(2, "deux"), Err(DialogAvlTreeError::DuplicateKey));
//!
//! // Retrieve entries
//! assert_eq!(tree.get(&2), Ok(&"two"));
//! assert_eq!(tree.find_min(), Ok((&1, &"one")));
//!
//! // Walk entries in descending key order
//! let mut values = Vec::new();
//! tree.traverse(Traversal::DESCENDING, |_, value| values.push(*value));
//! assert_eq!(values, ["three", "two", "one"]);
//!
//! // Erase entries
//! assert_eq!(tree.erase(&3), Ok("three"));
//! assert_eq!(tree.len(), 2);
//! ```
//!
//! Scheduling work with a priority queue:
//!
//! ```
//! use dialog_avl_tree::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! queue.push(1, "write docs");
//! queue.push(10, "fix bug");
//! queue.push(5, "review");
//!
//! assert_eq!(queue.pop(), Ok("fix bug"));
//! assert_eq!(queue.pop(), Ok("review"));
//! assert_eq!(queue.top(), Ok(&"write docs"));
//! ```

mod error;
pub use error::*;

mod node;
pub use node::*;

mod algorithms;

mod traversal;
pub use traversal::*;

mod tree;
pub use tree::*;

mod functional;
pub use functional::*;

mod priority_queue;
pub use priority_queue::*;

#[cfg(any(test, feature = "helpers"))]
mod helpers;
#[cfg(any(test, feature = "helpers"))]
pub use helpers::*;
