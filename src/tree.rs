//! The node store and the insertion engine.
//!
//! Nodes live in an arena owned by the [`Tree`]. Children are linked by
//! [`NodeId`] and every node keeps the id of its parent, so removal can relink
//! without searching and teardown never has to recurse.
//!
//! # Examples
//!
//! ```
//! use counting_bst::{Inserted, Order, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.locate(&1, i32::cmp).is_none());
//!
//! tree.insert(1, i32::cmp).unwrap();
//! assert_eq!(tree.locate(&1, i32::cmp).map(|n| *n.payload()), Some(1));
//!
//! // Inserting an equal payload bumps the node's repeat count instead.
//! assert!(matches!(tree.insert(1, i32::cmp), Ok(Inserted::Repeated { repeat: 1, .. })));
//! assert_eq!(tree.len(), 1);
//!
//! tree.insert_all([3, 2], i32::cmp).unwrap();
//! assert_eq!(tree.collect(Order::InorderAscending), vec![&1, &2, &3]);
//!
//! // Removing reports whether a matching node was there.
//! assert!(tree.remove(&1, i32::cmp));
//! assert!(tree.locate(&1, i32::cmp).is_none());
//! ```

use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use crate::node::{Node, NodeId, NodeRef};
use crate::stack::Stack;
use crate::traversal::Order;
use crate::Error;

/// An unbalanced Binary Search Tree ordered by a caller supplied comparator.
///
/// The tree never compares payloads on its own: every structural operation
/// takes a three-way comparator. Using comparators that disagree with each
/// other on the same tree (or one that is not a strict total order) leaves the
/// tree in an unspecified, though memory safe, shape.
///
/// The tree owns whatever `T` is. To keep payloads owned elsewhere, store
/// references (`Tree<&P>`): removing or clearing then only drops the reference.
#[derive(Clone)]
pub struct Tree<T> {
    nodes: Vec<Option<Node<T>>>,
    /// Slots vacated by removal, reused before the arena grows.
    free: Vec<NodeId>,
    root: Option<NodeId>,
    count: usize,
    /// `levels[l]` is how many live nodes sit at level `l`. Never ends in a zero.
    levels: Vec<usize>,
}

/// What [`Tree::insert`] did with a payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Inserted {
    /// A new node was linked into the tree.
    New(NodeId),
    /// An equal payload was already present. Its node's repeat count is now `repeat`
    /// and the new payload was dropped.
    Repeated {
        /// The node the payload was merged into.
        id: NodeId,
        /// The node's repeat count after the merge.
        repeat: u64,
    },
}

impl Inserted {
    /// Whether a new node was created.
    pub fn is_new(&self) -> bool {
        matches!(self, Self::New(_))
    }

    /// The node holding the payload, new or not.
    pub fn id(&self) -> NodeId {
        match *self {
            Self::New(id) | Self::Repeated { id, .. } => id,
        }
    }
}

enum Side {
    Left,
    Right,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.count)
            .field("depth", &self.depth())
            .field("payloads", &self.collect(Order::InorderAscending))
            .finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            root: None,
            count: 0,
            levels: Vec::new(),
        }
    }

    /// Generates an empty `Tree` with room for `capacity` nodes before the node
    /// store has to grow.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            free: Vec::new(),
            root: None,
            count: 0,
            levels: Vec::new(),
        }
    }

    /// The number of nodes in the tree. Payloads merged into an existing node are
    /// not counted.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The largest level of any node. Both an empty tree and a lone root have a
    /// depth of 0.
    pub fn depth(&self) -> usize {
        self.levels.len().saturating_sub(1)
    }

    /// The root node, if the tree has any nodes.
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.root.map(|id| NodeRef::new(self, id))
    }

    /// The node with the given id. Returns `None` if that node has been removed.
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_, T>> {
        match self.nodes.get(id.index()) {
            Some(Some(_)) => Some(NodeRef::new(self, id)),
            _ => None,
        }
    }

    /// Inserts `payload`, placing it with `cmp(new, existing)`.
    ///
    /// If a node already holds a payload `cmp` calls equal, that node's repeat
    /// count goes up by one, the tree keeps its old payload and `payload` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use counting_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.insert(2, i32::cmp).unwrap().is_new());
    /// assert!(tree.insert(1, i32::cmp).unwrap().is_new());
    /// assert!(!tree.insert(2, i32::cmp).unwrap().is_new());
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.depth(), 1);
    /// assert_eq!(tree.locate(&2, i32::cmp).unwrap().repeat(), 1);
    /// ```
    pub fn insert<F>(&mut self, payload: T, cmp: F) -> Result<Inserted, Error>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.insert_with(payload, cmp, |_| {})
    }

    /// Like [`Tree::insert`] but calls `on_insert` with the payload right before a
    /// new node is linked in. `on_insert` is not called when the payload is merged
    /// into an existing node or when the node can't be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use counting_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// let mut registered = Vec::new();
    ///
    /// for name in ["m", "c", "x", "c"] {
    ///     tree.insert_with(name, |a: &&str, b: &&str| a.cmp(b), |n| registered.push(*n))
    ///         .unwrap();
    /// }
    ///
    /// assert_eq!(registered, ["m", "c", "x"]);
    /// ```
    pub fn insert_with<F, H>(&mut self, payload: T, mut cmp: F, on_insert: H) -> Result<Inserted, Error>
    where
        F: FnMut(&T, &T) -> Ordering,
        H: FnOnce(&T),
    {
        let Some(mut current) = self.root else {
            self.reserve_node()?;
            on_insert(&payload);
            let id = self.alloc(Node::new(payload, None, 0));
            self.root = Some(id);
            trace!("inserted root node {id:?}");
            return Ok(Inserted::New(id));
        };

        loop {
            let node = self.node(current);
            let (child, side) = match cmp(&payload, &node.payload) {
                Ordering::Less => (node.left, Side::Left),
                Ordering::Greater => (node.right, Side::Right),
                Ordering::Equal => {
                    let node = self.node_mut(current);
                    node.repeat += 1;
                    trace!("merged payload into node {current:?} (repeat: {})", node.repeat);
                    return Ok(Inserted::Repeated {
                        id: current,
                        repeat: node.repeat,
                    });
                }
            };

            match child {
                Some(child) => current = child,
                None => {
                    let id = self.attach(current, side, payload, on_insert)?;

                    if cfg!(debug_assertions) {
                        let parent = self.node(current);
                        let child = self.node(id);
                        assert_eq!(child.parent, Some(current));
                        assert_eq!(child.level, parent.level + 1);
                        assert!(parent.left == Some(id) || parent.right == Some(id));
                    }

                    return Ok(Inserted::New(id));
                }
            }
        }
    }

    /// Inserts every payload in order, stopping at the first failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use counting_bst::{Order, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert_all([10, 5, 15, 5], i32::cmp).unwrap();
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.collect(Order::InorderDescending), vec![&15, &10, &5]);
    /// ```
    pub fn insert_all<I, F>(&mut self, payloads: I, mut cmp: F) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T, &T) -> Ordering,
    {
        for payload in payloads {
            self.insert(payload, &mut cmp)?;
        }
        Ok(())
    }

    /// Frees every node, children before their parents, and returns how many
    /// nodes were freed. Afterwards the tree is empty with a depth of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use counting_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert_all(1..=4, i32::cmp).unwrap();
    ///
    /// assert_eq!(tree.clear(), 4);
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.clear(), 0);
    /// ```
    pub fn clear(&mut self) -> usize {
        let Some(root) = self.root.take() else {
            return 0;
        };

        // The stack only ever holds the path from the root to the node being
        // looked at. Links are cut on the way down so a parent is a leaf by the
        // time it is back on top.
        let mut stack = Stack::with_capacity(self.depth() + 1);
        stack.push(root);
        let mut freed = 0;
        while let Some(&id) = stack.peek() {
            let node = self.node_mut(id);
            if let Some(left) = node.left.take() {
                stack.push(left);
                continue;
            }
            if let Some(right) = node.right.take() {
                stack.push(right);
                continue;
            }

            stack.pop();
            self.nodes[id.index()] = None;
            self.count -= 1;
            freed += 1;
        }

        debug_assert_eq!(self.count, 0);
        self.nodes.clear();
        self.free.clear();
        self.levels.clear();
        debug!("tore down tree, freed {freed} nodes");
        freed
    }

    pub(crate) fn root_id(&self) -> Option<NodeId> {
        self.root
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        self.nodes[id.index()]
            .as_ref()
            .expect("NodeId refers to a live node")
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.nodes[id.index()]
            .as_mut()
            .expect("NodeId refers to a live node")
    }

    /// Makes sure the next [`Tree::alloc`] can't fail.
    fn reserve_node(&mut self) -> Result<(), Error> {
        if self.free.is_empty() {
            self.nodes.try_reserve(1)?;
        }
        self.levels.try_reserve(1)?;
        Ok(())
    }

    /// Links a new leaf below `parent`. The caller has checked that `side` is empty.
    fn attach<H>(&mut self, parent: NodeId, side: Side, payload: T, on_insert: H) -> Result<NodeId, Error>
    where
        H: FnOnce(&T),
    {
        self.reserve_node()?;
        on_insert(&payload);

        let level = self.node(parent).level + 1;
        let id = self.alloc(Node::new(payload, Some(parent), level));
        let parent_node = self.node_mut(parent);
        match side {
            Side::Left => parent_node.left = Some(id),
            Side::Right => parent_node.right = Some(id),
        }
        trace!("inserted node {id:?} at level {level} below {parent:?}");
        Ok(id)
    }

    /// Stores `node`, counting it and its level. Call [`Tree::reserve_node`] first.
    fn alloc(&mut self, node: Node<T>) -> NodeId {
        let level = node.level;
        let id = match self.free.pop() {
            Some(id) => {
                self.nodes[id.index()] = Some(node);
                id
            }
            None => {
                self.nodes.push(Some(node));
                NodeId(self.nodes.len() - 1)
            }
        };

        // A new node is at most one level below the deepest one.
        if self.levels.len() == level {
            self.levels.push(0);
        }
        self.levels[level] += 1;
        self.count += 1;
        id
    }

    /// Takes a node out of the arena. The caller must already have unlinked it.
    pub(crate) fn free_node(&mut self, id: NodeId) -> Node<T> {
        let node = self.nodes[id.index()]
            .take()
            .expect("Freeing a node implies it is live");

        self.levels[node.level] -= 1;
        while self.levels.last() == Some(&0) {
            self.levels.pop();
        }
        self.count -= 1;

        if self.count == 0 {
            self.nodes.clear();
            self.free.clear();
        } else {
            self.free.push(id);
        }
        node
    }

    /// Moves every node of the subtree rooted at `subtree` up one level.
    pub(crate) fn shift_up(&mut self, subtree: NodeId) {
        let mut stack = Stack::new();
        stack.push(subtree);
        while let Some(id) = stack.pop() {
            let node = self.node_mut(id);
            let old_level = node.level;
            node.level -= 1;
            let (left, right) = (node.left, node.right);

            self.levels[old_level] -= 1;
            self.levels[old_level - 1] += 1;

            if let Some(right) = right {
                stack.push(right);
            }
            if let Some(left) = left {
                stack.push(left);
            }
        }
    }

    /// Points whatever referenced `old` (its parent or the root) at `new` instead.
    pub(crate) fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let parent = self.node_mut(parent);
                if parent.left == Some(old) {
                    parent.left = new;
                } else {
                    debug_assert_eq!(parent.right, Some(old));
                    parent.right = new;
                }
            }
        }
    }
}
