//! Queue and stack adapters over the persistent linked list.
//!
//! - [`Queue`]: first-in, first-out
//! - [`Stack`]: last-in, first-out
//!
//! Both are immutable values with an optional capacity. Unlike the core
//! [`LinkedList`](crate::persistent::LinkedList), which reports every failure
//! as a [`Mutation::Rejected`](crate::persistent::Mutation::Rejected) or
//! `None`, the adapters treat misuse as an error and return
//! `Err(`[`CollectionError`]`)`.
//!
//! # Examples
//!
//! ```rust
//! use relink::adapters::{CollectionError, Queue, Stack};
//!
//! let queue = Queue::bounded(1, [7]).unwrap();
//! assert_eq!(queue.enqueue(8).unwrap_err(), CollectionError::QueueCapacityReached);
//!
//! let stack: Stack<i32> = Stack::new();
//! assert_eq!(stack.pop().unwrap_err(), CollectionError::StackUnderflow);
//! ```

mod error;
mod queue;
mod stack;

pub use error::CollectionError;
pub use queue::Queue;
pub use stack::Stack;

static_assertions::assert_impl_all!(Queue<i32>: Send, Sync);
static_assertions::assert_impl_all!(Stack<String>: Send, Sync);
static_assertions::assert_impl_all!(CollectionError: std::error::Error, Send, Sync);
