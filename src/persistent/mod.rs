//! Persistent (immutable) linked lists.
//!
//! This module provides an immutable linked list in two flavours:
//!
//! - [`DoublyLinkedList`]: nodes link to their successor and predecessor
//! - [`SinglyLinkedList`]: nodes link to their successor only
//!
//! Both are aliases of [`LinkedList`], parameterised by a [`Linkage`] marker.
//!
//! # Full Rebuild
//!
//! Unlike structures that share nodes between versions, every mutation
//! here builds a fresh arena and relinks every node. A list never shares a
//! node with any other list.
//!
//! # Examples
//!
//! ```rust
//! use relink::persistent::{DoublyLinkedList, Mutation};
//!
//! let list: DoublyLinkedList<i32> = DoublyLinkedList::new();
//! let Mutation::Applied(single) = list.add_head([500]) else {
//!     unreachable!();
//! };
//! assert_eq!(single.values(), vec![500]);
//!
//! let emptied = single.delete([0]).applied().unwrap();
//! assert!(emptied.is_empty());
//!
//! // Neither step touched the lists it started from
//! assert!(list.is_empty());
//! assert_eq!(single.size(), 1);
//! ```
//!
//! ## Walking links
//!
//! ```rust
//! use relink::persistent::DoublyLinkedList;
//!
//! let list: DoublyLinkedList<char> = "abc".chars().collect();
//! let middle = list.at(1).unwrap();
//! assert_eq!(middle.prev().map(|node| *node.value()), Some('a'));
//! assert_eq!(middle.next().map(|node| *node.value()), Some('c'));
//! ```

mod linkage;
mod list;
mod mutation;
mod node;

pub use linkage::{Doubly, Linkage, Singly};
pub use list::{DoublyLinkedList, IntoIter, Iter, LinkedList, Nodes, NodesRev, SinglyLinkedList};
pub use mutation::Mutation;
pub use node::Node;
