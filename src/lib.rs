//! This crate exposes an unbalanced, comparator driven Binary Search Tree that
//! counts duplicate insertions and walks itself without recursion.
//!
//! ## Binary Search Tree
//!
//! The tree keeps one node per distinct payload. Every node may have a left and
//! a right child, and the placement rule is the only thing that makes lookups
//! fast. Take any node `n`:
//!
//! 1. The comparator ranks every payload in `n`'s left subtree as less than
//!    `n`'s payload.
//! 2. The comparator ranks every payload in `n`'s right subtree as greater than
//!    `n`'s payload.
//!
//! Nothing is ever equal to `n` below `n`: an equal payload is folded into `n`
//! itself. A node with no children is a leaf.
//!
//! Searching for values in the tree takes `O(depth)`. This tree never
//! rebalances, so inserting sorted input gives a tree whose depth is its length.
//! Every operation here is iterative for that reason: a deep tree costs time,
//! never call stack.
//!
//! ## This tree
//!
//! - "Less" and "greater" come from a three-way comparator passed to each call,
//!   so one tree can be searched by a key that isn't the stored type.
//! - Inserting a payload equal to one already present doesn't add a node. It
//!   bumps that node's [repeat count](NodeRef::repeat) instead.
//! - Each node knows its [level](NodeRef::level) and the tree tracks its
//!   [depth](Tree::depth), through removals too.
//! - Six walks are available: preorder, inorder and postorder, each left-first
//!   or right-first. See [`Order`].
//!
//! # Examples
//!
//! ```
//! use counting_bst::{Order, Tree};
//!
//! let mut tree = Tree::new();
//! tree.insert_all([10, 5, 15, 9, 13, 2, 6, 12, 14], i32::cmp).unwrap();
//! assert_eq!(tree.len(), 9);
//! assert_eq!(tree.depth(), 3);
//!
//! for x in [14, 13, 5, 10] {
//!     assert!(tree.remove(&x, i32::cmp));
//! }
//!
//! assert_eq!(tree.collect(Order::InorderAscending), vec![&2, &6, &9, &12, &15]);
//! assert_eq!(tree.len(), 5);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod find;
mod node;
pub mod stack;
mod traversal;
mod tree;

#[cfg(test)]
mod test;

pub use error::Error;
pub use find::Find;
pub use node::{NodeId, NodeRef};
pub use traversal::{Order, Walk};
pub use tree::{Inserted, Tree};
