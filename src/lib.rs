//! Sequential linear collections: a FIFO queue, a singly-linked list and a LIFO stack.
//!
//! None of the collections is synchronized. Wrap an instance in a lock to share it between threads.

#![warn(missing_docs, missing_debug_implementations)]
#![forbid(unsafe_code)]

pub mod error;
pub mod linked_list;
pub mod queue;
pub mod stack;
pub mod test;

pub use error::{Error, Result};
pub use linked_list::List;
pub use queue::Queue;
pub use stack::Stack;
