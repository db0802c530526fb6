//! Persistent LIFO stack built on [`DoublyLinkedList`].

use std::iter::FromIterator;

use tracing::debug;

use super::error::{CollectionError, to_capacity};
use crate::persistent::{DoublyLinkedList, Iter};

/// An immutable last-in, first-out stack with an optional capacity.
///
/// Values are stored from top (position 0) to bottom. [`push`](Self::push)
/// and [`pop`](Self::pop) return new stacks and leave `self` intact.
///
/// # Examples
///
/// ```rust
/// use relink::adapters::{CollectionError, Stack};
///
/// let stack = Stack::bounded(2, [1]).unwrap();
/// let stack = stack.push(2).unwrap();
/// assert_eq!(stack.peek(), Some(&2));
/// assert_eq!(stack.push(3).unwrap_err(), CollectionError::StackOverflow);
///
/// let (top, rest) = stack.pop().unwrap();
/// assert_eq!(top, 2);
/// assert_eq!(rest.values(), vec![1]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Stack<T> {
    items: DoublyLinkedList<T>,
    capacity: Option<usize>,
}

impl<T> Stack<T> {
    /// Creates an empty, unbounded stack.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: DoublyLinkedList::new(),
            capacity: None,
        }
    }

    /// Creates an unbounded stack holding `values` in top-to-bottom order.
    #[must_use]
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self {
            items: values.into_iter().collect(),
            capacity: None,
        }
    }

    /// Creates a stack that can hold at most `capacity` values.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::InvalidSize`] if `capacity` is negative.
    /// - [`CollectionError::StackOverflow`] if `values` holds more than
    ///   `capacity` values.
    pub fn bounded<C, I>(capacity: C, values: I) -> Result<Self, CollectionError>
    where
        C: TryInto<usize>,
        I: IntoIterator<Item = T>,
    {
        let capacity = to_capacity(capacity).inspect_err(|_| {
            debug!("stack rejected: capacity must not be negative");
        })?;
        let items: DoublyLinkedList<T> = values.into_iter().collect();
        if items.size() > capacity {
            debug!(
                capacity,
                size = items.size(),
                "stack rejected: initial values exceed capacity"
            );
            return Err(CollectionError::StackOverflow);
        }
        Ok(Self {
            items,
            capacity: Some(capacity),
        })
    }

    /// Returns the top value, or `None` for an empty stack.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.head().map(|node| node.value())
    }

    /// Returns the number of stacked values.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.items.size()
    }

    /// Returns `true` if the stack holds nothing.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the capacity, or `None` for an unbounded stack.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Returns `true` if the stack is bounded and holds `capacity` values.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.capacity
            .is_some_and(|capacity| self.size() >= capacity)
    }

    /// Returns an iterator over the values from top to bottom.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Clone> Stack<T> {
    /// Returns a snapshot of the values from top to bottom.
    #[must_use]
    pub fn values(&self) -> Vec<T> {
        self.items.values()
    }

    /// Returns a new stack with `value` on top.
    ///
    /// # Errors
    ///
    /// [`CollectionError::StackOverflow`] if the stack is bounded and full.
    pub fn push(&self, value: T) -> Result<Self, CollectionError> {
        if self.is_full() {
            debug!(capacity = self.capacity, "push rejected: stack is full");
            return Err(CollectionError::StackOverflow);
        }
        let items = self
            .items
            .add_head([value])
            .applied()
            .ok_or(CollectionError::StackOverflow)?;
        Ok(Self {
            items,
            capacity: self.capacity,
        })
    }

    /// Removes the top value, returning it with the remaining stack.
    ///
    /// # Errors
    ///
    /// [`CollectionError::StackUnderflow`] if the stack is empty.
    pub fn pop(&self) -> Result<(T, Self), CollectionError> {
        let Some(top) = self.items.head() else {
            debug!("pop rejected: stack is empty");
            return Err(CollectionError::StackUnderflow);
        };
        let value = top.value().clone();
        let items = self
            .items
            .delete([top.index()])
            .applied()
            .ok_or(CollectionError::StackUnderflow)?;
        Ok((
            value,
            Self {
                items,
                capacity: self.capacity,
            },
        ))
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Stack")
            .field("items", &self.items)
            .field("capacity", &self.capacity)
            .finish()
    }
}
