//! # relink
//!
//! Immutable linked lists whose every change produces a fully relinked copy.
//!
//! ## Overview
//!
//! - **Persistent Lists**: [`DoublyLinkedList`](persistent::DoublyLinkedList)
//!   and [`SinglyLinkedList`](persistent::SinglyLinkedList), arena-backed and
//!   never sharing nodes between versions
//! - **Equality**: the [`Equivalent`](equality::Equivalent) relation used for
//!   search, with shallow comparison for primitives and structural deep
//!   comparison for records
//! - **Adapters**: persistent [`Queue`](adapters::Queue) and
//!   [`Stack`](adapters::Stack) with optional capacities
//!
//! ## Feature Flags
//!
//! - `adapters`: Queue and stack adapters (default)
//! - `deep`: Structural deep equality through `serde_json` (default)
//! - `serde`: `Serialize`/`Deserialize` for lists
//!
//! ## Example
//!
//! ```rust
//! use relink::prelude::*;
//!
//! let list: DoublyLinkedList<i32> = [1, 2, 3].into_iter().collect();
//! let updated = list.insert(1, [5]).applied().unwrap();
//!
//! assert_eq!(updated.values(), vec![1, 5, 2, 3]);
//! assert_eq!(list.values(), vec![1, 2, 3]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use relink::prelude::*;
/// ```
pub mod prelude {
    pub use crate::equality::*;

    pub use crate::persistent::*;

    #[cfg(feature = "adapters")]
    pub use crate::adapters::*;
}

pub mod equality;

pub mod persistent;

#[cfg(feature = "adapters")]
pub mod adapters;
