use std::iter::FusedIterator;

use log::trace;
use slotmap::SlotMap;

use super::{LifoStack, Node, NodeKey};
use crate::error::StackError;

pub struct Iter<'a, T> {
    nodes: &'a SlotMap<NodeKey, Node<T>>,
    front: Option<NodeKey>,
    back: Option<NodeKey>,
    // front and back meet in the middle, this keeps them from crossing
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(stack: &'a LifoStack<T>) -> Self {
        Iter {
            nodes: &stack.nodes,
            front: stack.head,
            back: stack.tail,
            remaining: stack.len(),
        }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            nodes: self.nodes,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }

        let nodes = self.nodes;
        let node = self.front.and_then(|key| nodes.get(key))?;
        self.front = node.next;
        self.remaining -= 1;

        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }

        let nodes = self.nodes;
        let node = self.back.and_then(|key| nodes.get(key))?;
        self.back = node.prev;
        self.remaining -= 1;

        Some(&node.value)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// Consumes the stack, yielding items in the order `pop` would.
pub struct IntoIter<T> {
    stack: LifoStack<T>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(stack: LifoStack<T>) -> Self {
        IntoIter { stack }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.stack.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.stack.len();
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

/// Top-to-bottom traversal that re-borrows the stack on every step.
///
/// A cursor belongs to the stack that created it. Passing it another stack
/// is not detected.
#[derive(Debug, Clone)]
pub struct Cursor {
    next: Option<NodeKey>,
    stamp: u64,
}

impl Cursor {
    pub(super) fn new<T>(stack: &LifoStack<T>) -> Self {
        Cursor {
            next: stack.head,
            stamp: stack.stamp,
        }
    }

    pub fn next<'a, T>(
        &mut self,
        stack: &'a LifoStack<T>,
    ) -> Result<Option<&'a T>, StackError> {
        if self.stamp != stack.stamp {
            trace!("cursor used after the stack was modified");
            return Err(StackError::Modified);
        }

        let key = match self.next {
            Some(key) => key,
            None => return Ok(None),
        };
        let node = stack.nodes.get(key).ok_or(StackError::Modified)?;
        self.next = node.next;

        Ok(Some(&node.value))
    }
}
