//! The scratch LIFO used by the traversals and by teardown.
//!
//! A walk only ever needs as many entries as the tree is deep, so each call
//! creates its own `Stack` and drops it when it returns.

/// A last-in, first-out stack.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Generates a new, empty `Stack`.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Generates an empty `Stack` that can hold `capacity` items before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Puts `item` on top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top of the stack, or `None` if it is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the top of the stack without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// How many items are on the stack.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Whether the stack holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_reverse_push_order() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);

        assert_eq!(stack.size(), 3);
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn peek_does_not_remove() {
        let mut stack = Stack::with_capacity(2);
        assert_eq!(stack.peek(), None);

        stack.push('a');
        assert_eq!(stack.peek(), Some(&'a'));
        assert_eq!(stack.peek(), Some(&'a'));
        assert_eq!(stack.size(), 1);
        assert!(!stack.is_empty());
    }
}
