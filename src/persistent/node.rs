//! Arena slots and the borrowed node handle.

use std::fmt;

use super::linkage::{Doubly, Linkage};
use super::list::LinkedList;

/// One arena entry: a value and the indices of its neighbours.
#[derive(Clone)]
pub(crate) struct Slot<T> {
    pub(crate) value: T,
    pub(crate) next: Option<usize>,
    pub(crate) prev: Option<usize>,
}

impl<T> Slot<T> {
    /// Allocates a slot with no links yet.
    pub(crate) const fn unlinked(value: T) -> Self {
        Self {
            value,
            next: None,
            prev: None,
        }
    }
}

/// A borrowed view of one node of a [`LinkedList`].
///
/// A `Node` is a cheap copyable handle: it refers to the list that owns the
/// node and to the node's position in that list's arena. Following
/// [`next`](Node::next) and [`prev`](Node::prev) walks the links recorded
/// when the list was constructed.
///
/// Two handles are equal when they point at the same node of the same list
/// instance; nodes of distinct lists are never equal, even if their values are.
///
/// # Examples
///
/// ```rust
/// use relink::persistent::DoublyLinkedList;
///
/// let list: DoublyLinkedList<i32> = [1, 2, 3].into_iter().collect();
/// let head = list.head().unwrap();
/// assert_eq!(head.value(), &1);
/// assert_eq!(head.next().map(|node| *node.value()), Some(2));
/// assert!(head.prev().is_none());
/// ```
pub struct Node<'a, T, L: Linkage = Doubly> {
    list: &'a LinkedList<T, L>,
    index: usize,
}

impl<'a, T, L: Linkage> Node<'a, T, L> {
    pub(crate) const fn new(list: &'a LinkedList<T, L>, index: usize) -> Self {
        Self { list, index }
    }

    fn slot(&self) -> &'a Slot<T> {
        &self.list.slots()[self.index]
    }

    /// Returns the value stored in this node.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &'a T {
        &self.slot().value
    }

    /// Returns the position of this node in its list.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the successor, or `None` at the tail.
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        self.slot().next.map(|index| Self::new(self.list, index))
    }

    /// Returns the predecessor, or `None` at the head.
    ///
    /// Singly-linked lists record no backward links, so this is always
    /// `None` for them.
    #[must_use]
    pub fn prev(&self) -> Option<Self> {
        self.slot().prev.map(|index| Self::new(self.list, index))
    }

    /// Returns `true` if this is the first node of its list.
    #[inline]
    #[must_use]
    pub const fn is_head(&self) -> bool {
        self.index == 0
    }

    /// Returns `true` if this is the last node of its list.
    #[inline]
    #[must_use]
    pub fn is_tail(&self) -> bool {
        self.slot().next.is_none()
    }

    /// Splits the handle into the value and its index.
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (&'a T, usize) {
        (self.value(), self.index)
    }
}

impl<T, L: Linkage> Clone for Node<'_, T, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, L: Linkage> Copy for Node<'_, T, L> {}

impl<T, L: Linkage> PartialEq for Node<'_, T, L> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.list, other.list) && self.index == other.index
    }
}

impl<T, L: Linkage> Eq for Node<'_, T, L> {}

impl<T: fmt::Debug, L: Linkage> fmt::Debug for Node<'_, T, L> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = self.slot();
        formatter
            .debug_struct("Node")
            .field("index", &self.index)
            .field("value", &slot.value)
            .field("next", &slot.next)
            .field("prev", &slot.prev)
            .finish()
    }
}
