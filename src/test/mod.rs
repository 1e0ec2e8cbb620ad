use std::fmt;

use crate::stack::Stack;
use crate::{Order, Tree};


/// Checks ordering, parent links, levels, `len` and `depth` against a full walk
/// of the tree.
pub(crate) fn assert_invariants<T: Ord + fmt::Debug>(tree: &Tree<T>) {
    let mut seen = 0;
    let mut max_level = 0;
    let mut stack = Stack::new();
    if let Some(root) = tree.root() {
        assert!(root.parent().is_none());
        assert_eq!(root.level(), 0);
        stack.push(root);
    }
    while let Some(node) = stack.pop() {
        seen += 1;
        max_level = max_level.max(node.level());
        for child in [node.left(), node.right()].into_iter().flatten() {
            assert_eq!(child.parent().map(|p| p.id()), Some(node.id()));
            assert_eq!(child.level(), node.level() + 1);
            stack.push(child);
        }
        if let Some(left) = node.left() {
            assert!(left.payload() < node.payload());
        }
        if let Some(right) = node.right() {
            assert!(right.payload() > node.payload());
        }
    }
    assert_eq!(seen, tree.len());
    assert_eq!(max_level, tree.depth());

    let inorder = tree.collect(Order::InorderAscending);
    assert!(inorder.windows(2).all(|w| w[0] < w[1]), "{inorder:?}");
}
