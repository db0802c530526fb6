//! Persistent (immutable) linked list with full relinking on every change.
//!
//! This module provides [`LinkedList`], an immutable linked list whose nodes
//! live in an arena owned by the list. Links between nodes are indices into
//! that arena, so a list never aliases another list's nodes and never forms
//! reference cycles.
//!
//! # Overview
//!
//! - [`DoublyLinkedList`] records forward and backward links.
//! - [`SinglyLinkedList`] records forward links only.
//!
//! Every mutator (`insert`, `add_head`, `add_tail`, `delete`, `remove`)
//! returns a [`Mutation`] carrying a brand-new list built from scratch. The
//! original list and its nodes are left untouched. Nothing is shared between
//! the two.
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `size`     | O(1)       |
//! | `head`     | O(1)       |
//! | `tail`     | O(n)       |
//! | `at`       | O(n)       |
//! | `find`     | O(n)       |
//! | mutators   | O(n + m)   |
//!
//! # Examples
//!
//! ```rust
//! use relink::persistent::DoublyLinkedList;
//!
//! let list: DoublyLinkedList<i32> = [14, 67, 10, 99, 45].into_iter().collect();
//! let trimmed = list.delete([0, 2]).applied().unwrap();
//!
//! assert_eq!(trimmed.values(), vec![67, 99, 45]);
//! assert_eq!(list.size(), 5); // Original unchanged
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{FromIterator, FusedIterator};
use std::marker::PhantomData;

use tracing::{debug, trace};

use super::linkage::{Doubly, Linkage, Singly};
use super::mutation::Mutation;
use super::node::{Node, Slot};
use crate::equality::Equivalent;

/// A persistent linked list whose nodes are linked forward and backward.
pub type DoublyLinkedList<T> = LinkedList<T, Doubly>;

/// A persistent linked list whose nodes are linked forward only.
pub type SinglyLinkedList<T> = LinkedList<T, Singly>;

/// An immutable, arena-backed linked list.
///
/// The arena is a boxed slice that is never handed out mutably, so once a
/// list is constructed its nodes, their order and their links are fixed.
/// Cloning a list copies its arena; two lists never share nodes.
///
/// Indices accepted by [`at`](Self::at), [`insert`](Self::insert) and
/// [`delete`](Self::delete) may be of any integer type. Negative indices are
/// representable and simply never valid.
///
/// # Examples
///
/// ```rust
/// use relink::persistent::DoublyLinkedList;
///
/// let list: DoublyLinkedList<i32> = [1, 2, 3].into_iter().collect();
/// assert_eq!(list.at(1).map(|node| *node.value()), Some(2));
/// assert!(list.at(-1).is_none());
/// assert!(list.at(3).is_none());
/// ```
pub struct LinkedList<T, L: Linkage = Doubly> {
    slots: Box<[Slot<T>]>,
    linkage: PhantomData<L>,
}

/// Converts a caller-supplied index, discarding negative or oversized ones.
fn to_index<I: TryInto<usize>>(index: I) -> Option<usize> {
    index.try_into().ok()
}

impl<T, L: Linkage> LinkedList<T, L> {
    /// Creates an empty list.
    ///
    /// ```rust
    /// use relink::persistent::SinglyLinkedList;
    ///
    /// let list: SinglyLinkedList<i32> = SinglyLinkedList::new();
    /// assert!(list.is_empty());
    /// assert!(list.head().is_none());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::build(Vec::new())
    }

    /// Builds a list whose node order matches `values`.
    ///
    /// ```rust
    /// use relink::persistent::DoublyLinkedList;
    ///
    /// let list = DoublyLinkedList::from_values(["a", "b"]);
    /// assert_eq!(list.values(), vec!["a", "b"]);
    /// ```
    #[must_use]
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self::build(values.into_iter().collect())
    }

    /// The Constructor: the only place nodes are created.
    ///
    /// One unlinked slot is allocated per value, then a single backward pass
    /// records each slot's successor and (for doubly-linked lists) its
    /// predecessor.
    fn build(values: Vec<T>) -> Self {
        let mut slots: Vec<Slot<T>> = values.into_iter().map(Slot::unlinked).collect();
        let last = slots.len().checked_sub(1);

        for (index, slot) in slots.iter_mut().enumerate().rev() {
            slot.next = (Some(index) != last).then_some(index + 1);
            slot.prev = if L::BACKWARD {
                index.checked_sub(1)
            } else {
                None
            };
        }

        trace!(linkage = L::NAME, size = slots.len(), "linked list constructed");
        Self {
            slots: slots.into_boxed_slice(),
            linkage: PhantomData,
        }
    }

    pub(crate) fn slots(&self) -> &[Slot<T>] {
        &self.slots
    }

    /// Returns the number of nodes.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the list has no nodes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the first node, or `None` for an empty list.
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<Node<'_, T, L>> {
        self.at(0_usize)
    }

    /// Returns the last node, or `None` for an empty list.
    #[must_use]
    pub fn tail(&self) -> Option<Node<'_, T, L>> {
        let last = self.size().checked_sub(1)?;
        self.at(last)
    }

    /// Returns the node at `index`.
    ///
    /// The chain is walked from the head by following forward links; there
    /// is no random-access shortcut. Returns `None` for a negative index, an
    /// index at or past the end, or an empty list.
    ///
    /// # Complexity
    ///
    /// O(index)
    #[must_use]
    pub fn at<I: TryInto<usize>>(&self, index: I) -> Option<Node<'_, T, L>> {
        let target = to_index(index)?;
        self.nodes().find(|node| node.index() == target)
    }

    /// Returns the first node whose value is equivalent to `value`.
    ///
    /// Duplicates always resolve to the lowest index.
    ///
    /// ```rust
    /// use relink::persistent::DoublyLinkedList;
    ///
    /// let list: DoublyLinkedList<i32> = [5, 25, 19, 6, 25].into_iter().collect();
    /// assert_eq!(list.find(&25).map(|node| node.index()), Some(1));
    /// assert!(list.find(&7).is_none());
    /// ```
    #[must_use]
    pub fn find(&self, value: &T) -> Option<Node<'_, T, L>>
    where
        T: Equivalent,
    {
        self.nodes().find(|node| value.equivalent(node.value()))
    }

    /// Returns `true` if some node holds a value equivalent to `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool
    where
        T: Equivalent,
    {
        self.find(value).is_some()
    }

    /// Returns an iterator over the nodes, following forward links.
    #[inline]
    #[must_use]
    pub fn nodes(&self) -> Nodes<'_, T, L> {
        Nodes {
            current: self.slots.first().map(|_| Node::new(self, 0)),
            remaining: self.size(),
        }
    }

    /// Returns an iterator over the values, following forward links.
    ///
    /// ```rust
    /// use relink::persistent::SinglyLinkedList;
    ///
    /// let list: SinglyLinkedList<i32> = (1..=4).collect();
    /// assert_eq!(list.iter().sum::<i32>(), 10);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T, L> {
        Iter {
            nodes: self.nodes(),
        }
    }
}

impl<T: Clone, L: Linkage> LinkedList<T, L> {
    /// Builds a list by cloning every element of `slice`.
    #[must_use]
    pub fn from_slice(slice: &[T]) -> Self {
        Self::build(slice.to_vec())
    }

    /// Returns a snapshot of the values in list order.
    ///
    /// The returned vector is independent of the list's nodes.
    #[must_use]
    pub fn values(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Inserts `values` so that the first of them lands at `start_index`.
    ///
    /// Nodes previously at `start_index..` move up by the number of inserted
    /// values. Rejected if `start_index` is negative or greater than
    /// [`size`](Self::size). Inserting nothing yields an equal copy.
    ///
    /// ```rust
    /// use relink::persistent::DoublyLinkedList;
    ///
    /// let list: DoublyLinkedList<i32> = [1, 2, 3].into_iter().collect();
    /// let updated = list.insert(1, [5]).applied().unwrap();
    /// assert_eq!(updated.values(), vec![1, 5, 2, 3]);
    ///
    /// assert!(list.insert(4, [5]).is_rejected());
    /// ```
    pub fn insert<I, V>(&self, start_index: I, values: V) -> Mutation<Self>
    where
        I: TryInto<usize>,
        V: IntoIterator<Item = T>,
    {
        let Some(start) = to_index(start_index).filter(|start| *start <= self.size()) else {
            debug!(
                linkage = L::NAME,
                size = self.size(),
                "insert rejected: start index out of range"
            );
            return Mutation::Rejected;
        };

        let before = self.iter().take(start).cloned();
        let after = self.iter().skip(start).cloned();
        Mutation::Applied(before.chain(values).chain(after).collect())
    }

    /// Inserts `values` in front of the current head.
    ///
    /// Equivalent to `insert(0, values)`; never rejected.
    pub fn add_head<V>(&self, values: V) -> Mutation<Self>
    where
        V: IntoIterator<Item = T>,
    {
        self.insert(0_usize, values)
    }

    /// Inserts `values` after the current tail.
    ///
    /// Equivalent to `insert(size, values)`; never rejected.
    ///
    /// ```rust
    /// use relink::persistent::DoublyLinkedList;
    ///
    /// let list: DoublyLinkedList<i32> = [1, 2].into_iter().collect();
    /// let updated = list.add_tail([3, 4]).applied().unwrap();
    /// assert_eq!(updated.values(), vec![1, 2, 3, 4]);
    /// ```
    pub fn add_tail<V>(&self, values: V) -> Mutation<Self>
    where
        V: IntoIterator<Item = T>,
    {
        self.insert(self.size(), values)
    }

    /// Deletes the nodes at every valid index in `indices`.
    ///
    /// Negative indices and indices at or past the end are ignored, and a
    /// repeated index deletes its node once. The call is rejected only when
    /// no index was valid. Surviving values keep their relative order.
    ///
    /// ```rust
    /// use relink::persistent::DoublyLinkedList;
    ///
    /// let list: DoublyLinkedList<i32> = [14, 67, 10, 99, 45].into_iter().collect();
    /// let updated = list.delete([0, 2, 40]).applied().unwrap();
    /// assert_eq!(updated.values(), vec![67, 99, 45]);
    ///
    /// assert!(list.delete([-1, 5]).is_rejected());
    /// ```
    pub fn delete<I, It>(&self, indices: It) -> Mutation<Self>
    where
        It: IntoIterator<Item = I>,
        I: TryInto<usize>,
    {
        let mut marked = vec![false; self.size()];
        let mut valid = 0_usize;
        for index in indices.into_iter().filter_map(to_index) {
            if let Some(mark) = marked.get_mut(index) {
                *mark = true;
                valid += 1;
            }
        }

        if valid == 0 {
            debug!(
                linkage = L::NAME,
                size = self.size(),
                "delete rejected: no valid index"
            );
            return Mutation::Rejected;
        }

        let survivors = self
            .iter()
            .zip(marked)
            .filter_map(|(value, deleted)| (!deleted).then(|| value.clone()));
        Mutation::Applied(survivors.collect())
    }

    /// Removes the first occurrence of each requested value.
    ///
    /// Every requested value is looked up with [`find`](Self::find) against
    /// this list, independently of the other requested values, and the
    /// resulting indices are passed to [`delete`](Self::delete). Requesting
    /// the same value twice therefore removes only its first occurrence.
    /// Rejected when none of the requested values is present.
    ///
    /// ```rust
    /// use relink::persistent::DoublyLinkedList;
    ///
    /// let list: DoublyLinkedList<i32> = [11, 55, 55, 62].into_iter().collect();
    /// let updated = list.remove([55]).applied().unwrap();
    /// assert_eq!(updated.values(), vec![11, 55, 62]);
    ///
    /// assert!(list.remove([42]).is_rejected());
    /// ```
    pub fn remove<V>(&self, values: V) -> Mutation<Self>
    where
        V: IntoIterator,
        V::Item: Borrow<T>,
        T: Equivalent,
    {
        let indices: Vec<usize> = values
            .into_iter()
            .filter_map(|value| self.find(Borrow::<T>::borrow(&value)).map(|node| node.index()))
            .collect();

        if indices.is_empty() {
            debug!(
                linkage = L::NAME,
                size = self.size(),
                "remove rejected: no requested value found"
            );
            return Mutation::Rejected;
        }

        self.delete(indices)
    }
}

// =============================================================================
// Backward Traversal
// =============================================================================

impl<T> LinkedList<T, Doubly> {
    /// Returns an iterator over the nodes from tail to head, following
    /// backward links.
    #[must_use]
    pub fn nodes_rev(&self) -> NodesRev<'_, T> {
        NodesRev {
            current: self.tail(),
            remaining: self.size(),
        }
    }

    /// Returns an iterator over the values from tail to head.
    ///
    /// ```rust
    /// use relink::persistent::DoublyLinkedList;
    ///
    /// let list: DoublyLinkedList<i32> = (1..=3).collect();
    /// let reversed: Vec<&i32> = list.iter_rev().collect();
    /// assert_eq!(reversed, vec![&3, &2, &1]);
    /// ```
    pub fn iter_rev(&self) -> impl ExactSizeIterator<Item = &T> + FusedIterator + '_ {
        self.nodes_rev().map(|node| node.value())
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the nodes of a [`LinkedList`], head to tail.
pub struct Nodes<'a, T, L: Linkage = Doubly> {
    current: Option<Node<'a, T, L>>,
    remaining: usize,
}

impl<'a, T, L: Linkage> Iterator for Nodes<'a, T, L> {
    type Item = Node<'a, T, L>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current.take()?;
        self.current = node.next();
        self.remaining -= 1;
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, L: Linkage> ExactSizeIterator for Nodes<'_, T, L> {}

impl<T, L: Linkage> FusedIterator for Nodes<'_, T, L> {}

/// An iterator over the nodes of a [`DoublyLinkedList`], tail to head.
pub struct NodesRev<'a, T> {
    current: Option<Node<'a, T, Doubly>>,
    remaining: usize,
}

impl<'a, T> Iterator for NodesRev<'a, T> {
    type Item = Node<'a, T, Doubly>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current.take()?;
        self.current = node.prev();
        self.remaining -= 1;
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for NodesRev<'_, T> {}

impl<T> FusedIterator for NodesRev<'_, T> {}

/// An iterator over references to the values of a [`LinkedList`].
pub struct Iter<'a, T, L: Linkage = Doubly> {
    nodes: Nodes<'a, T, L>,
}

impl<'a, T, L: Linkage> Iterator for Iter<'a, T, L> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|node| node.value())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl<T, L: Linkage> ExactSizeIterator for Iter<'_, T, L> {}

impl<T, L: Linkage> FusedIterator for Iter<'_, T, L> {}

/// An owning iterator over the values of a [`LinkedList`].
pub struct IntoIter<T> {
    slots: std::vec::IntoIter<Slot<T>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().map(|slot| slot.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, L: Linkage> Default for LinkedList<T, L> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, L: Linkage> Clone for LinkedList<T, L> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            linkage: PhantomData,
        }
    }
}

impl<T, L: Linkage> FromIterator<T> for LinkedList<T, L> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build(iter.into_iter().collect())
    }
}

impl<T, L: Linkage> From<Vec<T>> for LinkedList<T, L> {
    #[inline]
    fn from(values: Vec<T>) -> Self {
        Self::build(values)
    }
}

impl<T, L: Linkage> IntoIterator for LinkedList<T, L> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Slots are stored in list order, so consuming the arena front to back
    /// yields the values in the same order as following the links.
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            slots: self.slots.into_vec().into_iter(),
        }
    }
}

impl<'a, T, L: Linkage> IntoIterator for &'a LinkedList<T, L> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, L>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq, L: Linkage> PartialEq for LinkedList<T, L> {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, L: Linkage> Eq for LinkedList<T, L> {}

impl<T: Hash, L: Linkage> Hash for LinkedList<T, L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size().hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: fmt::Debug, L: Linkage> fmt::Debug for LinkedList<T, L> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, L: Linkage> fmt::Display for LinkedList<T, L> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (position, value) in self.iter().enumerate() {
            if position > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{value}")?;
        }
        write!(formatter, "]")
    }
}

static_assertions::assert_impl_all!(DoublyLinkedList<i32>: Send, Sync);
static_assertions::assert_impl_all!(SinglyLinkedList<String>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, L: Linkage> serde::Serialize for LinkedList<T, L> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.size()))?;
        for value in self {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct LinkedListVisitor<T, L> {
    marker: PhantomData<(T, L)>,
}

#[cfg(feature = "serde")]
impl<'de, T, L> serde::de::Visitor<'de> for LinkedListVisitor<T, L>
where
    T: serde::Deserialize<'de>,
    L: Linkage,
{
    type Value = LinkedList<T, L>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut values = Vec::with_capacity(capacity);
        while let Some(value) = seq.next_element()? {
            values.push(value);
        }
        Ok(LinkedList::build(values))
    }
}

#[cfg(feature = "serde")]
impl<'de, T, L> serde::Deserialize<'de> for LinkedList<T, L>
where
    T: serde::Deserialize<'de>,
    L: Linkage,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(LinkedListVisitor {
            marker: PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
