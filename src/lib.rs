//! A generic last-in-first-out stack backed by a doubly-linked list.

#[cfg(test)]
#[macro_use]
extern crate quickcheck;

#[cfg(test)]
#[macro_use]
extern crate matches;

mod error;
mod stack;

pub use crate::error::StackError;
pub use crate::stack::{Cursor, IntoIter, Iter, LifoStack};
