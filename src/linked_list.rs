//! Singly-linked list.

use std::fmt;

use itertools::Itertools;
use log::{debug, trace};

use crate::error::{Error, Result};

/// A singly-linked list with owned nodes.
///
/// The list is nothing but its head link: an absent head is the empty list, and every node
/// exclusively owns its successor. Insertion can happen at either end or next to the first node
/// holding a given value.
///
/// `append` and `append_after` mutate the list in place. `append_before`, `prepend` and `reverse`
/// consume the list and hand back the (possibly new) head, so the returned list is the one to keep
/// using.
pub struct List<T> {
    head: Link<T>,
}

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    element: T,
    next: Link<T>,
}

impl<T> Node<T> {
    fn new(element: T, next: Link<T>) -> Box<Self> {
        Box::new(Node { element, next })
    }
}

/// An iterator over the elements of a `List`, from head to tail.
///
/// This `struct` is created by the [`iter`] method on [`List`].
///
/// [`iter`]: List::iter
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter")
            .field(&self.next.map(|node| &node.element))
            .finish()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { next: self.next }
    }
}

impl<T> Default for List<T> {
    /// Creates an empty `List<T>`.
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> List<T> {
    /// Creates an empty `List`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_collections::List;
    ///
    /// let list: List<u32> = List::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        List { head: None }
    }

    /// Returns `true` if the list has no head.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Provides a reference to the head element, or `None` if the list is empty.
    #[inline]
    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.element)
    }

    /// Provides a forward iterator from head to tail.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_collections::List;
    ///
    /// let list: List<u32> = (0..3).collect();
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Returns the number of nodes in the list.
    ///
    /// This operation walks the whole chain, so it computes in `O(n)` time.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Attaches a new node holding `element` after the last node.
    ///
    /// Returns `Err(Error::EmptyList)` if the list has no head; there is no node to attach to.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_collections::{Error, List};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.append(1), Err(Error::EmptyList));
    ///
    /// let mut list = List::new().prepend(1);
    /// list.append(2).unwrap();
    /// assert_eq!(list.render(" "), "1 2\n");
    /// ```
    pub fn append(&mut self, element: T) -> Result<()> {
        if self.head.is_none() {
            debug!("append: list is empty");
            return Err(Error::EmptyList);
        }

        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Node::new(element, None));
        Ok(())
    }

    /// Splices a new node holding `element` right after the first node equal to `after`.
    ///
    /// Returns `Err(Error::EmptyList)` if the list has no head, and `Err(Error::NotInList)` if no
    /// node matches. The list is left untouched in both cases.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_collections::{Error, List};
    ///
    /// let mut list: List<_> = vec![1, 2, 3].into_iter().collect();
    /// list.append_after(4, &2).unwrap();
    /// assert_eq!(list.render(","), "1,2,4,3\n");
    ///
    /// assert_eq!(list.append_after(5, &9), Err(Error::NotInList));
    /// assert_eq!(list.len(), 4);
    /// ```
    pub fn append_after(&mut self, element: T, after: &T) -> Result<()>
    where
        T: PartialEq,
    {
        if self.head.is_none() {
            debug!("append_after: list is empty");
            return Err(Error::EmptyList);
        }

        let mut curr = self.head.as_deref_mut();
        let mut position = 0;
        while let Some(node) = curr {
            if node.element == *after {
                let next = node.next.take();
                node.next = Some(Node::new(element, next));
                trace!("append_after: spliced after position {}", position);
                return Ok(());
            }
            curr = node.next.as_deref_mut();
            position += 1;
        }

        debug!("append_after: value is not in the list");
        Err(Error::NotInList)
    }

    /// Splices a new node holding `element` right before the first node equal to `before`, and
    /// returns the list with its (possibly new) head.
    ///
    /// On failure the error comes back together with the original, unmodified list:
    /// `Error::EmptyList` if the list has no head, `Error::NotInList` if no node matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_collections::{Error, List};
    ///
    /// let list: List<_> = vec![0, 2].into_iter().collect();
    /// let list = list.append_before(1, &2).unwrap();
    /// let list = list.append_before(-1, &0).unwrap();
    /// assert_eq!(list.render(" "), "-1 0 1 2\n");
    ///
    /// let (err, list) = list.append_before(7, &9).unwrap_err();
    /// assert_eq!(err, Error::NotInList);
    /// assert_eq!(list.len(), 4);
    /// ```
    pub fn append_before(mut self, element: T, before: &T) -> Result<Self, (Error, Self)>
    where
        T: PartialEq,
    {
        if self.head.is_none() {
            debug!("append_before: list is empty");
            return Err((Error::EmptyList, self));
        }

        if self.head() == Some(before) {
            trace!("append_before: new head");
            return Ok(self.prepend(element));
        }

        let mut prev = self.head.as_deref_mut();
        while let Some(node) = prev {
            if node.next.as_ref().is_some_and(|next| next.element == *before) {
                let next = node.next.take();
                node.next = Some(Node::new(element, next));
                trace!("append_before: spliced into the tail");
                return Ok(self);
            }
            prev = node.next.as_deref_mut();
        }

        debug!("append_before: value is not in the list");
        Err((Error::NotInList, self))
    }

    /// Returns the list headed by a new node holding `element`, followed by the previous head.
    ///
    /// Works on an empty list too, producing a single-node list.
    pub fn prepend(mut self, element: T) -> Self {
        let next = self.head.take();
        self.head = Some(Node::new(element, next));
        self
    }

    /// Finds the zero-based position of the first node equal to `element`.
    ///
    /// Returns `Err(Error::EmptyList)` if the list has no head, and `Err(Error::NotInList)` if no
    /// node matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_collections::{Error, List};
    ///
    /// let list: List<_> = vec![1, 2, 3].into_iter().collect();
    /// assert_eq!(list.index_of(&1), Ok(0));
    /// assert_eq!(list.index_of(&3), Ok(2));
    /// assert_eq!(list.index_of(&0), Err(Error::NotInList));
    /// assert_eq!(List::new().index_of(&0), Err(Error::EmptyList));
    /// ```
    pub fn index_of(&self, element: &T) -> Result<usize>
    where
        T: PartialEq,
    {
        if self.head.is_none() {
            debug!("index_of: list is empty");
            return Err(Error::EmptyList);
        }

        self.iter().position(|e| e == element).ok_or_else(|| {
            debug!("index_of: value is not in the list");
            Error::NotInList
        })
    }

    /// Reverses the order of the nodes and returns the list with its new head.
    ///
    /// Every node is visited once and its forward link is flipped to point at its predecessor, so
    /// this operation computes in `O(n)` time and `O(1)` extra memory. No element is moved or
    /// reallocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_collections::List;
    ///
    /// let list: List<_> = (0..5).collect();
    /// assert_eq!(list.reverse().render(" "), "4 3 2 1 0\n");
    /// ```
    pub fn reverse(mut self) -> Self {
        let mut prev: Link<T> = None;
        let mut curr = self.head.take();
        let mut count = 0_usize;

        while let Some(mut node) = curr {
            curr = node.next.take();
            node.next = prev;
            prev = Some(node);
            count += 1;
        }

        self.head = prev;
        trace!("reverse: flipped {} links", count);
        self
    }

    /// Renders every element from head to tail joined by `separator`, followed by a newline.
    ///
    /// An empty list renders as the empty string, without the newline.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_collections::List;
    ///
    /// let list: List<_> = vec![1, 2, 3].into_iter().collect();
    /// assert_eq!(list.render(" "), "1 2 3\n");
    /// assert_eq!(list.render(""), "123\n");
    /// assert_eq!(List::<u32>::new().render(" "), "");
    /// ```
    pub fn render(&self, separator: &str) -> String
    where
        T: fmt::Display,
    {
        if self.head.is_none() {
            return String::new();
        }

        let mut out = self.iter().join(separator);
        out.push('\n');
        out
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        // Unlink one node at a time so that a long chain does not recurse through `Box::drop`.
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.element
        })
    }
}

impl<T> FromIterator<T> for List<T> {
    /// Builds a list whose head is the first item of `iter`.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        let mut tail = &mut list.head;
        for element in iter {
            let node = tail.insert(Node::new(element, None));
            tail = &mut node.next;
        }
        list
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}
