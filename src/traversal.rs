//! The six depth-first walks over a [`Tree`].
//!
//! Every walk is driven by an explicit [`Stack`] instead of recursion, so a
//! degenerate tree (say, one built from sorted input) can be walked no matter
//! how deep it gets. The stack never holds more than `depth + 1` entries.
//!
//! Which walk to run is a plain [`Order`] value:
//!
//! | `Order`             | Visits                |
//! |---------------------|-----------------------|
//! | `PreorderLeft`      | node, left, right     |
//! | `PreorderRight`     | node, right, left     |
//! | `InorderAscending`  | left, node, right     |
//! | `InorderDescending` | right, node, left     |
//! | `PostorderLeft`     | left, right, node     |
//! | `PostorderRight`    | right, left, node     |
//!
//! # Examples
//!
//! ```
//! use counting_bst::{Order, Tree};
//!
//! //     2
//! //    / \
//! //   1   3
//! let mut tree = Tree::new();
//! tree.insert_all([2, 1, 3], i32::cmp).unwrap();
//!
//! assert_eq!(tree.collect(Order::PreorderLeft), vec![&2, &1, &3]);
//! assert_eq!(tree.collect(Order::PostorderRight), vec![&3, &1, &2]);
//!
//! let mut seen = String::new();
//! tree.visit(Order::InorderDescending, |x| seen.push_str(&x.to_string()));
//! assert_eq!(seen, "321");
//! ```

use std::iter::FusedIterator;

use crate::node::NodeId;
use crate::stack::Stack;
use crate::Tree;

/// Selects one of the six walks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Node, then its left subtree, then its right subtree.
    PreorderLeft,
    /// Node, then its right subtree, then its left subtree.
    PreorderRight,
    /// Left subtree, node, right subtree: smallest payload first.
    InorderAscending,
    /// Right subtree, node, left subtree: largest payload first.
    InorderDescending,
    /// Left subtree, right subtree, then the node.
    PostorderLeft,
    /// Right subtree, left subtree, then the node.
    PostorderRight,
}

impl Order {
    /// Every walk, mirrored pairs next to each other.
    pub const ALL: [Order; 6] = [
        Order::PreorderLeft,
        Order::PreorderRight,
        Order::InorderAscending,
        Order::InorderDescending,
        Order::PostorderLeft,
        Order::PostorderRight,
    ];

    /// The same walk with left and right swapped.
    pub fn mirror(self) -> Self {
        match self {
            Self::PreorderLeft => Self::PreorderRight,
            Self::PreorderRight => Self::PreorderLeft,
            Self::InorderAscending => Self::InorderDescending,
            Self::InorderDescending => Self::InorderAscending,
            Self::PostorderLeft => Self::PostorderRight,
            Self::PostorderRight => Self::PostorderLeft,
        }
    }

    fn left_first(self) -> bool {
        matches!(
            self,
            Self::PreorderLeft | Self::InorderAscending | Self::PostorderLeft
        )
    }
}

/// A lazy walk over a tree's payloads in a chosen [`Order`].
///
/// Created by [`Tree::walk`].
pub struct Walk<'a, T> {
    tree: &'a Tree<T>,
    order: Order,
    stack: Stack<NodeId>,
    /// Inorder only: the subtree whose leftmost (or rightmost) path is still to be pushed.
    pending: Option<NodeId>,
    /// Postorder only: the node looked at on the previous step.
    prev: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Walk<'a, T> {
    fn new(tree: &'a Tree<T>, order: Order) -> Self {
        let mut stack = Stack::with_capacity(tree.depth() + 1);
        let mut pending = None;
        match order {
            Order::InorderAscending | Order::InorderDescending => pending = tree.root_id(),
            _ => {
                if let Some(root) = tree.root_id() {
                    stack.push(root);
                }
            }
        }

        Self {
            tree,
            order,
            stack,
            pending,
            prev: None,
            remaining: tree.len(),
        }
    }

    /// The children of `id`, in the order this walk visits them.
    fn children(&self, id: NodeId) -> (Option<NodeId>, Option<NodeId>) {
        let node = self.tree.node(id);
        if self.order.left_first() {
            (node.left, node.right)
        } else {
            (node.right, node.left)
        }
    }

    fn next_preorder(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        let (first, second) = self.children(id);
        // Push the second child underneath so the first one pops next.
        if let Some(second) = second {
            self.stack.push(second);
        }
        if let Some(first) = first {
            self.stack.push(first);
        }
        Some(id)
    }

    fn next_inorder(&mut self) -> Option<NodeId> {
        while let Some(id) = self.pending {
            self.stack.push(id);
            self.pending = self.children(id).0;
        }
        let id = self.stack.pop()?;
        self.pending = self.children(id).1;
        Some(id)
    }

    fn next_postorder(&mut self) -> Option<NodeId> {
        loop {
            let id = *self.stack.peek()?;
            let (first, second) = self.children(id);

            // `prev` is either the parent of `id` (moving down) or one of its
            // children (moving back up).
            let next_child = match self.prev.replace(id) {
                Some(prev) if first == Some(prev) => second,
                Some(prev) if second == Some(prev) => None,
                _ => first.or(second),
            };

            match next_child {
                Some(child) => self.stack.push(child),
                None => {
                    self.stack.pop();
                    return Some(id);
                }
            }
        }
    }
}

impl<'a, T> Iterator for Walk<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = match self.order {
            Order::PreorderLeft | Order::PreorderRight => self.next_preorder(),
            Order::InorderAscending | Order::InorderDescending => self.next_inorder(),
            Order::PostorderLeft | Order::PostorderRight => self.next_postorder(),
        }?;
        self.remaining -= 1;
        Some(&self.tree.node(id).payload)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Walk<'_, T> {}
impl<T> FusedIterator for Walk<'_, T> {}

impl<T> Tree<T> {
    /// Walks the tree's payloads lazily in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use counting_bst::{Order, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert_all([5, 3, 8, 1], i32::cmp).unwrap();
    ///
    /// let mut walk = tree.walk(Order::InorderAscending);
    /// assert_eq!(walk.len(), 4);
    /// assert_eq!(walk.next(), Some(&1));
    /// assert_eq!(walk.next(), Some(&3));
    /// ```
    pub fn walk(&self, order: Order) -> Walk<'_, T> {
        Walk::new(self, order)
    }

    /// Collects references to every payload in the given order. An empty tree
    /// gives an empty `Vec`.
    pub fn collect(&self, order: Order) -> Vec<&T> {
        self.walk(order).collect()
    }

    /// Calls `visitor` with every payload in the given order without collecting them.
    pub fn visit<V>(&self, order: Order, visitor: V)
    where
        V: FnMut(&T),
    {
        self.walk(order).for_each(visitor);
    }

    /// Iterates over the payloads from smallest to largest.
    pub fn iter(&self) -> Walk<'_, T> {
        self.walk(Order::InorderAscending)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Walk<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
