//! Vec-backed LIFO stack
//!
//! Positions counted "from the top" start at 0 for the most recently pushed
//! element. Operations that take a count or a depth are no-ops or return
//! `None` when it is out of range; nothing here panics.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Stack<T> {
    /// Bottom first, top last
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes an element on top
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Removes and returns the top element
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the top element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns the element `depth` positions below the top
    pub fn peek_at_depth(&self, depth: usize) -> Option<&T> {
        let index = self.items.len().checked_sub(depth)?.checked_sub(1)?;
        self.items.get(index)
    }

    /// Removes the top `n` elements and returns them bottom-to-top.
    ///
    /// Returns `None`, leaving the stack untouched, when `n` is zero or
    /// larger than the stack.
    pub fn pop_top_n(&mut self, n: usize) -> Option<Vec<T>> {
        if n == 0 || n > self.items.len() {
            return None;
        }
        Some(self.items.split_off(self.items.len() - n))
    }

    /// Drops the top `n` elements; no-op when `n` is zero or too large
    pub fn trim_top_n(&mut self, n: usize) {
        if n == 0 || n > self.items.len() {
            return;
        }
        self.items.truncate(self.items.len() - n);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Visits every element bottom-to-top
    pub fn for_each(&self, f: impl FnMut(&T)) {
        self.items.iter().for_each(f);
    }

    /// Iterates bottom-to-top
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// The last element yielded ends up on top
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
