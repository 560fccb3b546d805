use std::fmt;
use std::iter::FromIterator;

use log::trace;
use slotmap::{new_key_type, SlotMap};

use crate::error::StackError;

mod iter;


pub use self::iter::{Cursor, IntoIter, Iter};

new_key_type! { struct NodeKey; }

#[derive(Clone)]
struct Node<T> {
    value: T,
    prev: Option<NodeKey>,
    next: Option<NodeKey>,
}

/// A last-in-first-out container backed by a doubly-linked list.
///
/// Nodes live in an arena and link to each other through keys, `head` being
/// the top of the stack (most recently pushed) and `tail` the bottom. The
/// arena owns every node, so `len` is always the number of linked nodes.
#[derive(Clone)]
pub struct LifoStack<T> {
    nodes: SlotMap<NodeKey, Node<T>>,
    head: Option<NodeKey>,
    tail: Option<NodeKey>,
    // bumped by every structural mutation, checked by `Cursor`
    stamp: u64,
}

impl<T> LifoStack<T> {
    pub fn new() -> Self {
        LifoStack {
            nodes: SlotMap::with_key(),
            head: None,
            tail: None,
            stamp: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        LifoStack {
            nodes: SlotMap::with_capacity_and_key(capacity),
            head: None,
            tail: None,
            stamp: 0,
        }
    }

    /// Places `item` on top of the stack.
    pub fn push(&mut self, item: T) {
        let next = self.head;
        let key = self.nodes.insert(Node {
            value: item,
            prev: None,
            next,
        });

        match next.and_then(|old| self.nodes.get_mut(old)) {
            Some(old_head) => old_head.prev = Some(key),
            None => self.tail = Some(key),
        }

        self.head = Some(key);
        self.touch();
    }

    /// Removes the top item and hands it back to the caller.
    ///
    /// Fails with `StackError::Empty` when there is nothing to pop, in which
    /// case the stack is left untouched.
    pub fn pop(&mut self) -> Result<T, StackError> {
        let node = match self.head.and_then(|key| self.nodes.remove(key)) {
            Some(node) => node,
            None => return Err(empty("pop")),
        };

        self.head = node.next;
        match node.next.and_then(|key| self.nodes.get_mut(key)) {
            Some(new_head) => new_head.prev = None,
            None => self.tail = None,
        }

        self.touch();
        Ok(node.value)
    }

    /// Returns the top item without removing it.
    pub fn peek(&self) -> Result<&T, StackError> {
        self.head
            .and_then(|key| self.nodes.get(key))
            .map(|node| &node.value)
            .ok_or_else(|| empty("peek"))
    }

    pub fn peek_mut(&mut self) -> Result<&mut T, StackError> {
        let head = self.head;
        head.and_then(move |key| self.nodes.get_mut(key))
            .map(|node| &mut node.value)
            .ok_or_else(|| empty("peek_mut"))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drops every item. Clearing an empty stack does nothing.
    pub fn clear(&mut self) {
        if self.is_empty() {
            return;
        }

        trace!("clearing {} items", self.len());
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.touch();
    }

    /// Linear scan from top to bottom, stopping at the first equal item.
    ///
    /// Equality is `T`'s `PartialEq`: `None == None` holds for optional
    /// items, while values that are not equal to themselves (`f64::NAN`)
    /// are never found.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|x| x == item)
    }

    /// Walks the stack from top to bottom. Reversing the iterator walks
    /// bottom to top along the back links.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// A traversal that does not hold a borrow between steps. Any push, pop
    /// or clear made after the cursor was created makes it fail with
    /// `StackError::Modified`.
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self)
    }

    fn touch(&mut self) {
        self.stamp = self.stamp.wrapping_add(1);
    }
}

fn empty(op: &str) -> StackError {
    trace!("{} on an empty stack", op);
    StackError::Empty
}

impl<T> Default for LifoStack<T> {
    fn default() -> Self {
        LifoStack::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LifoStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LifoStack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LifoStack<T> {}

impl<T> Extend<T> for LifoStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for LifoStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = LifoStack::new();
        stack.extend(iter);
        stack
    }
}

impl<'a, T> IntoIterator for &'a LifoStack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> IntoIterator for LifoStack<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}
