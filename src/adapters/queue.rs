//! Persistent FIFO queue built on [`DoublyLinkedList`].

use std::iter::FromIterator;

use tracing::debug;

use super::error::{CollectionError, to_capacity};
use crate::persistent::{DoublyLinkedList, Iter};

/// An immutable first-in, first-out queue with an optional capacity.
///
/// Values are stored from rear (position 0, most recently enqueued) to
/// front (last position, next to be dequeued). [`enqueue`](Self::enqueue)
/// and [`dequeue`](Self::dequeue) return new queues and leave `self` intact.
///
/// An unbounded queue comes from [`Queue::new`] or [`Queue::from_values`];
/// [`Queue::bounded`] adds a capacity that `enqueue` enforces.
///
/// # Examples
///
/// ```rust
/// use relink::adapters::Queue;
///
/// let queue = Queue::from_values([10, 20, 30]);
/// assert_eq!(queue.front(), Ok(&30));
/// assert_eq!(queue.rear(), Ok(&10));
///
/// let queue = queue.enqueue(999).unwrap();
/// let (front, rest) = queue.dequeue().unwrap();
/// assert_eq!(front, 30);
/// assert_eq!(rest.values(), vec![999, 10, 20]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Queue<T> {
    items: DoublyLinkedList<T>,
    capacity: Option<usize>,
}

impl<T> Queue<T> {
    /// Creates an empty, unbounded queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: DoublyLinkedList::new(),
            capacity: None,
        }
    }

    /// Creates an unbounded queue holding `values` in rear-to-front order.
    #[must_use]
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self {
            items: values.into_iter().collect(),
            capacity: None,
        }
    }

    /// Creates a queue that can hold at most `capacity` values.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::InvalidSize`] if `capacity` is negative.
    /// - [`CollectionError::QueueCapacityReached`] if `values` holds more
    ///   than `capacity` values.
    ///
    /// ```rust
    /// use relink::adapters::{CollectionError, Queue};
    ///
    /// assert!(Queue::bounded(3, [1, 2, 3]).is_ok());
    /// assert_eq!(
    ///     Queue::bounded(2, [1, 2, 3]).unwrap_err(),
    ///     CollectionError::QueueCapacityReached
    /// );
    /// assert_eq!(Queue::<i32>::bounded(-1, []).unwrap_err(), CollectionError::InvalidSize);
    /// ```
    pub fn bounded<C, I>(capacity: C, values: I) -> Result<Self, CollectionError>
    where
        C: TryInto<usize>,
        I: IntoIterator<Item = T>,
    {
        let capacity = to_capacity(capacity).inspect_err(|_| {
            debug!("queue rejected: capacity must not be negative");
        })?;
        let items: DoublyLinkedList<T> = values.into_iter().collect();
        if items.size() > capacity {
            debug!(
                capacity,
                size = items.size(),
                "queue rejected: initial values exceed capacity"
            );
            return Err(CollectionError::QueueCapacityReached);
        }
        Ok(Self {
            items,
            capacity: Some(capacity),
        })
    }

    /// Returns the next value to be dequeued.
    ///
    /// # Errors
    ///
    /// [`CollectionError::QueueEmpty`] if the queue is empty.
    pub fn front(&self) -> Result<&T, CollectionError> {
        self.items
            .tail()
            .map(|node| node.value())
            .ok_or(CollectionError::QueueEmpty)
    }

    /// Returns the most recently enqueued value.
    ///
    /// # Errors
    ///
    /// [`CollectionError::QueueEmpty`] if the queue is empty.
    pub fn rear(&self) -> Result<&T, CollectionError> {
        self.items
            .head()
            .map(|node| node.value())
            .ok_or(CollectionError::QueueEmpty)
    }

    /// Returns the number of queued values.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.items.size()
    }

    /// Returns `true` if nothing is queued.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the capacity, or `None` for an unbounded queue.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Returns `true` if the queue is bounded and holds `capacity` values.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.capacity
            .is_some_and(|capacity| self.size() >= capacity)
    }

    /// Returns an iterator over the values from rear to front.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Clone> Queue<T> {
    /// Returns a snapshot of the values from rear to front.
    #[must_use]
    pub fn values(&self) -> Vec<T> {
        self.items.values()
    }

    /// Returns a new queue with `value` at the rear.
    ///
    /// # Errors
    ///
    /// [`CollectionError::QueueCapacityReached`] if the queue is bounded and full.
    pub fn enqueue(&self, value: T) -> Result<Self, CollectionError> {
        if self.is_full() {
            debug!(capacity = self.capacity, "enqueue rejected: queue is full");
            return Err(CollectionError::QueueCapacityReached);
        }
        let items = self
            .items
            .add_head([value])
            .applied()
            .ok_or(CollectionError::QueueCapacityReached)?;
        Ok(Self {
            items,
            capacity: self.capacity,
        })
    }

    /// Removes the front value, returning it with the remaining queue.
    ///
    /// # Errors
    ///
    /// [`CollectionError::QueueEmpty`] if the queue is empty.
    pub fn dequeue(&self) -> Result<(T, Self), CollectionError> {
        let Some(front) = self.items.tail() else {
            debug!("dequeue rejected: queue is empty");
            return Err(CollectionError::QueueEmpty);
        };
        let value = front.value().clone();
        let items = self
            .items
            .delete([front.index()])
            .applied()
            .ok_or(CollectionError::QueueEmpty)?;
        Ok((
            value,
            Self {
                items,
                capacity: self.capacity,
            },
        ))
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Queue<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Queue")
            .field("items", &self.items)
            .field("capacity", &self.capacity)
            .finish()
    }
}
