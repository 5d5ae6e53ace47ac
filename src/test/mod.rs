//! Utilities for testing
#![doc(hidden)]


pub use self::rand::RandGen;
