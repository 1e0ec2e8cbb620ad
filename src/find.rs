//! Finding and removing payloads.
//!
//! Lookups descend from the root with a comparator exactly like insertion does,
//! so any `Q` the comparator can order against `T` works as a search target.
//!
//! # Examples
//!
//! ```
//! use counting_bst::Tree;
//!
//! let mut tree = Tree::new();
//! tree.insert_all([(3, "c"), (1, "a"), (2, "b")], |x: &(i32, &str), y: &(i32, &str)| x.0.cmp(&y.0))
//!     .unwrap();
//!
//! // Search by key alone.
//! let by_key = |key: &i32, entry: &(i32, &str)| key.cmp(&entry.0);
//! assert_eq!(tree.locate(&2, by_key).map(|n| n.payload().1), Some("b"));
//!
//! // Or find first and decide what to do with the match afterwards.
//! assert_eq!(tree.find(&3, by_key).take(), Some((3, "c")));
//! assert!(!tree.find(&3, by_key).remove());
//! assert_eq!(tree.len(), 2);
//! ```

use std::cmp::Ordering;
use std::mem;

use log::trace;

use crate::node::{NodeId, NodeRef};
use crate::Tree;

impl<T> Tree<T> {
    /// Finds the node whose payload `cmp(target, payload)` calls equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use counting_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert_all([2, 1, 3], i32::cmp).unwrap();
    ///
    /// let node = tree.locate(&3, i32::cmp).unwrap();
    /// assert_eq!(node.payload(), &3);
    /// assert_eq!(node.level(), 1);
    /// assert!(tree.locate(&42, i32::cmp).is_none());
    /// ```
    pub fn locate<Q, F>(&self, target: &Q, mut cmp: F) -> Option<NodeRef<'_, T>>
    where
        Q: ?Sized,
        F: FnMut(&Q, &T) -> Ordering,
    {
        self.search(target, &mut cmp)
            .map(|id| NodeRef::new(self, id))
    }

    /// Removes the node matching `target`. Returns whether anything was removed.
    ///
    /// A node merged into by repeated inserts is removed outright, whatever its
    /// repeat count.
    pub fn remove<Q, F>(&mut self, target: &Q, cmp: F) -> bool
    where
        Q: ?Sized,
        F: FnMut(&Q, &T) -> Ordering,
    {
        self.take(target, cmp).is_some()
    }

    /// Removes the node matching `target` and returns its payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use counting_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert_all([String::from("b"), String::from("a")], String::cmp)
    ///     .unwrap();
    ///
    /// assert_eq!(tree.take("b", |k: &str, s: &String| k.cmp(s.as_str())), Some(String::from("b")));
    /// assert_eq!(tree.take("b", |k: &str, s: &String| k.cmp(s.as_str())), None);
    /// ```
    pub fn take<Q, F>(&mut self, target: &Q, mut cmp: F) -> Option<T>
    where
        Q: ?Sized,
        F: FnMut(&Q, &T) -> Ordering,
    {
        let id = self.search(target, &mut cmp)?;
        Some(self.unlink(id))
    }

    /// Starts a lookup whose result can either be read with [`Find::get`] or
    /// removed with [`Find::remove`].
    pub fn find<'a, Q, F>(&'a mut self, target: &'a Q, cmp: F) -> Find<'a, T, Q, F>
    where
        Q: ?Sized,
        F: FnMut(&Q, &T) -> Ordering,
    {
        Find {
            tree: self,
            target,
            cmp,
        }
    }

    pub(crate) fn search<Q, F>(&self, target: &Q, cmp: &mut F) -> Option<NodeId>
    where
        Q: ?Sized,
        F: FnMut(&Q, &T) -> Ordering,
    {
        let mut current = self.root_id();
        while let Some(id) = current {
            let node = self.node(id);
            current = match cmp(target, &node.payload) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    /// Removes the node `id` from the tree and returns its payload.
    ///
    /// A node with two children keeps its place: it takes over the payload (and
    /// repeat count) of its in-order successor, and the successor, which has no
    /// left child, is spliced out instead.
    fn unlink(&mut self, id: NodeId) -> T {
        let node = self.node(id);
        match (node.left, node.right) {
            (Some(_), Some(right)) => {
                let successor = self.leftmost(right);
                let successor_right = self.node(successor).right;
                self.splice(successor, successor_right);
                let successor = self.free_node(successor);

                let node = self.node_mut(id);
                node.repeat = successor.repeat;
                trace!("removed node {id:?} by moving its successor's payload up");
                mem::replace(&mut node.payload, successor.payload)
            }
            (child, None) | (None, child) => {
                self.splice(id, child);
                trace!("removed node {id:?}");
                self.free_node(id).payload
            }
        }
    }

    /// Puts `child` (and everything below it) where `id` was.
    fn splice(&mut self, id: NodeId, child: Option<NodeId>) {
        let parent = self.node(id).parent;
        if let Some(child) = child {
            self.node_mut(child).parent = parent;
            self.shift_up(child);
        }
        self.replace_child(parent, id, child);
    }

    fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.node(id).left {
            id = left;
        }
        id
    }
}

/// A pending lookup created by [`Tree::find`].
///
/// Nothing is searched until one of its methods is called.
pub struct Find<'a, T, Q: ?Sized, F> {
    tree: &'a mut Tree<T>,
    target: &'a Q,
    cmp: F,
}

impl<'a, T, Q, F> Find<'a, T, Q, F>
where
    Q: ?Sized,
    F: FnMut(&Q, &T) -> Ordering,
{
    /// The matching node, if there is one.
    pub fn get(mut self) -> Option<NodeRef<'a, T>> {
        let id = self.tree.search(self.target, &mut self.cmp)?;
        let tree: &'a Tree<T> = self.tree;
        Some(NodeRef::new(tree, id))
    }

    /// Removes the matching node. Returns whether there was one.
    pub fn remove(self) -> bool {
        self.take().is_some()
    }

    /// Removes the matching node and returns its payload.
    pub fn take(self) -> Option<T> {
        self.tree.take(self.target, self.cmp)
    }
}
