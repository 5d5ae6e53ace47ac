//! First-in first-out queue.

use std::collections::LinkedList;

use log::debug;

use crate::error::{Error, Result};

/// FIFO queue over a doubly-linked backing sequence.
///
/// The backing sequence is only allocated by the first [`enqueue`](Queue::enqueue); until then the
/// queue is empty without owning anything.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    list: Option<LinkedList<T>>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self { list: None }
    }
}

impl<T> Queue<T> {
    /// Creates a new, empty queue.
    pub const fn new() -> Self {
        Self { list: None }
    }

    /// Adds `t` to the back of the queue.
    pub fn enqueue(&mut self, t: T) {
        self.list.get_or_insert_with(LinkedList::new).push_back(t);
    }

    /// Removes the element at the front of the queue and returns it.
    ///
    /// Returns `Err(Error::EmptyQueue)` if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_collections::{Error, Queue};
    ///
    /// let mut q = Queue::new();
    /// assert_eq!(q.dequeue(), Err(Error::EmptyQueue));
    ///
    /// q.enqueue(1);
    /// q.enqueue(2);
    /// assert_eq!(q.dequeue(), Ok(1));
    /// assert_eq!(q.front(), Ok(&2));
    /// ```
    pub fn dequeue(&mut self) -> Result<T> {
        self.list
            .as_mut()
            .and_then(LinkedList::pop_front)
            .ok_or_else(|| {
                debug!("dequeue: queue is empty");
                Error::EmptyQueue
            })
    }

    /// Returns the element at the front of the queue without removing it.
    ///
    /// Returns `Err(Error::EmptyQueue)` if the queue is empty.
    pub fn front(&self) -> Result<&T> {
        self.list.as_ref().and_then(LinkedList::front).ok_or_else(|| {
            debug!("front: queue is empty");
            Error::EmptyQueue
        })
    }

    /// Returns `true` if the queue holds no element.
    pub fn is_empty(&self) -> bool {
        self.list.as_ref().map_or(true, LinkedList::is_empty)
    }

    /// Returns the number of elements in the queue.
    pub fn len(&self) -> usize {
        self.list.as_ref().map_or(0, LinkedList::len)
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        // An absent backing sequence equals an empty one.
        self.len() == other.len() && self.list.iter().flatten().eq(other.list.iter().flatten())
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T> FromIterator<T> for Queue<T> {
    /// Enqueues the items of `iter` in order; the first item ends up at the front.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        iter.into_iter().for_each(|t| queue.enqueue(t));
        queue
    }
}
