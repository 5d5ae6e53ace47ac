//! Errors shared by every collection in the crate.

use thiserror::Error;

/// Failure kinds reported by the queue, the stack and the linked list.
///
/// Every kind is recoverable: the collection is left exactly as it was before the failing call.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// `dequeue` or `front` on a queue with no elements.
    #[error("queue is empty")]
    EmptyQueue,
    /// `pop` or `top` on a stack with no elements.
    #[error("stack is empty")]
    EmptyStack,
    /// A positional operation on a list without a head.
    #[error("list is empty")]
    EmptyList,
    /// The requested value does not occur in the list.
    #[error("value is not in the list")]
    NotInList,
}

impl Error {
    /// Returns `true` for the "no elements" kinds, whichever collection raised them.
    pub fn is_empty_structure(&self) -> bool {
        matches!(self, Self::EmptyQueue | Self::EmptyStack | Self::EmptyList)
    }

    /// Returns `true` if a searched-for value was missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotInList)
    }
}

/// Result type with [`Error`] as the default error.
pub type Result<T, E = Error> = core::result::Result<T, E>;
