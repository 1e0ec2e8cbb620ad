use std::fmt;

use crate::Tree;

/// Identifies a node inside the [`Tree`] that created it.
///
/// A `NodeId` is only meaningful for the tree it came from and only while that
/// node is alive. Once the node is removed its slot may be handed to a new node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// A single record in the tree's node arena.
///
/// `left` and `right` are the owning links. `parent` points back up the tree and
/// is never followed when freeing nodes.
#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) payload: T,
    /// How many extra times an equal payload was inserted.
    pub(crate) repeat: u64,
    /// Distance from the root. The root is at level 0.
    pub(crate) level: usize,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<T> Node<T> {
    pub(crate) fn new(payload: T, parent: Option<NodeId>, level: usize) -> Self {
        Self {
            payload,
            repeat: 0,
            level,
            parent,
            left: None,
            right: None,
        }
    }
}

/// A read-only view of one node of a [`Tree`].
///
/// # Examples
///
/// ```
/// use counting_bst::Tree;
///
/// let mut tree = Tree::new();
/// tree.insert_all([10, 5, 15], i32::cmp).unwrap();
///
/// let root = tree.root().unwrap();
/// assert_eq!(root.payload(), &10);
/// assert_eq!(root.level(), 0);
///
/// let left = root.left().unwrap();
/// assert_eq!(left.payload(), &5);
/// assert_eq!(left.level(), 1);
/// assert_eq!(left.parent().map(|n| n.id()), Some(root.id()));
/// ```
pub struct NodeRef<'a, T> {
    tree: &'a Tree<T>,
    id: NodeId,
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for NodeRef<'_, T> {}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, id: NodeId) -> Self {
        Self { tree, id }
    }

    fn node(&self) -> &'a Node<T> {
        self.tree.node(self.id)
    }

    /// The identity of this node within its tree.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The payload stored in this node.
    pub fn payload(&self) -> &'a T {
        &self.node().payload
    }

    /// How many additional equal payloads were merged into this node.
    pub fn repeat(&self) -> u64 {
        self.node().repeat
    }

    /// Distance from the root, which is at level 0.
    pub fn level(&self) -> usize {
        self.node().level
    }

    /// The node above this one, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        self.node().parent.map(|id| Self::new(self.tree, id))
    }

    /// The root of the subtree holding smaller payloads.
    pub fn left(&self) -> Option<Self> {
        self.node().left.map(|id| Self::new(self.tree, id))
    }

    /// The root of the subtree holding larger payloads.
    pub fn right(&self) -> Option<Self> {
        self.node().right.map(|id| Self::new(self.tree, id))
    }
}

impl<T> fmt::Debug for NodeRef<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.node();
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("payload", &node.payload)
            .field("repeat", &node.repeat)
            .field("level", &node.level)
            .finish()
    }
}
