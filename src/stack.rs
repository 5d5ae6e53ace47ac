//! Last-in first-out stack.

use log::debug;

use crate::error::{Error, Result};

/// LIFO stack over a growable array.
///
/// The top of the stack is the end of the array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    data: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

impl<T> Stack<T> {
    /// Creates a new, empty stack.
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates a new, empty stack with room for at least `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Pushes a value on top of the stack.
    pub fn push(&mut self, t: T) {
        self.data.push(t);
    }

    /// Removes the top element from the stack and returns it.
    ///
    /// Returns `Err(Error::EmptyStack)` if the stack is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_collections::{Error, Stack};
    ///
    /// let mut s = Stack::new();
    /// s.push(1);
    /// s.push(2);
    /// assert_eq!(s.pop(), Ok(2));
    /// assert_eq!(s.top(), Ok(&1));
    /// assert_eq!(s.pop(), Ok(1));
    /// assert_eq!(s.pop(), Err(Error::EmptyStack));
    /// ```
    pub fn pop(&mut self) -> Result<T> {
        self.data.pop().ok_or_else(|| {
            debug!("pop: stack is empty");
            Error::EmptyStack
        })
    }

    /// Returns the top element without removing it.
    ///
    /// Returns `Err(Error::EmptyStack)` if the stack is empty.
    pub fn top(&self) -> Result<&T> {
        self.data.last().ok_or_else(|| {
            debug!("top: stack is empty");
            Error::EmptyStack
        })
    }

    /// Returns `true` if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements on the stack.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.data = Vec::new();
    }

    /// Returns `true` if the stack holds an element equal to `t`.
    pub fn contains(&self, t: &T) -> bool
    where
        T: PartialEq,
    {
        self.data.iter().any(|e| e == t)
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes the items of `iter` in order; the last item ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}
