//! Error types for the queue and stack adapters.
//!
//! The core list never fails loudly; the adapters built on it do. Each
//! variant corresponds to one misuse of a queue or a stack.

/// Represents errors raised by [`Queue`](super::Queue) and [`Stack`](super::Stack).
///
/// # Examples
///
/// ```rust
/// use relink::adapters::{CollectionError, Queue};
///
/// let queue: Queue<i32> = Queue::new();
/// assert_eq!(queue.front(), Err(CollectionError::QueueEmpty));
/// assert_eq!(
///     CollectionError::QueueEmpty.to_string(),
///     "QueueEmptyError: Failed to dequeue element from empty queue."
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionError {
    /// A value was requested from an empty queue.
    QueueEmpty,
    /// A bounded queue is already holding as many values as its capacity.
    QueueCapacityReached,
    /// A value was popped from an empty stack.
    StackUnderflow,
    /// A bounded stack is already holding as many values as its capacity.
    StackOverflow,
    /// A capacity was negative or otherwise not representable.
    InvalidSize,
}

impl std::fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::QueueEmpty => "QueueEmptyError: Failed to dequeue element from empty queue.",
            Self::QueueCapacityReached => {
                "QueueCapacityReachedError: Unable to add new items to a queue when it has reached the defined capacity."
            }
            Self::StackUnderflow => "StackUnderflowError: Stack has no remaining items to pop.",
            Self::StackOverflow => "StackOverflowError: Stack has reached maximum capacity.",
            Self::InvalidSize => "RangeError: max size must be a positive integer.",
        };
        formatter.write_str(message)
    }
}

impl std::error::Error for CollectionError {}

/// Converts a caller-supplied capacity, rejecting negative values.
pub(super) fn to_capacity<I: TryInto<usize>>(capacity: I) -> Result<usize, CollectionError> {
    capacity
        .try_into()
        .map_err(|_| CollectionError::InvalidSize)
}
