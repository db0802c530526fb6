//! The outcome of a structural mutation.

/// The result of a mutating operation on an immutable collection.
///
/// Mutators never modify the collection they are called on and never panic.
/// They either produce a brand-new collection ([`Mutation::Applied`]) or
/// report that the request could not be honoured ([`Mutation::Rejected`]),
/// for example because an index was out of range or no value matched.
/// Whether a rejection is fatal is left to the caller.
///
/// # Examples
///
/// ```rust
/// use relink::persistent::{DoublyLinkedList, Mutation};
///
/// let list: DoublyLinkedList<i32> = [1, 2, 3].into_iter().collect();
///
/// match list.insert(1, [5]) {
///     Mutation::Applied(updated) => assert_eq!(updated.values(), vec![1, 5, 2, 3]),
///     Mutation::Rejected => unreachable!(),
/// }
///
/// assert!(list.insert(-1, [5]).is_rejected());
/// assert_eq!(list.insert(9, [5]).into_parts(), (false, None));
/// ```
#[must_use = "a mutation returns a new collection and leaves the original untouched"]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Mutation<C> {
    /// The operation succeeded and produced this new collection.
    Applied(C),
    /// The operation could not proceed; no collection was produced.
    Rejected,
}

impl<C> Mutation<C> {
    /// Returns `true` for [`Mutation::Applied`].
    #[inline]
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    /// Returns `true` for [`Mutation::Rejected`].
    #[inline]
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }

    /// Converts into `Some(collection)` when applied.
    #[inline]
    #[must_use]
    pub fn applied(self) -> Option<C> {
        match self {
            Self::Applied(collection) => Some(collection),
            Self::Rejected => None,
        }
    }

    /// Borrows the produced collection.
    #[inline]
    pub const fn as_ref(&self) -> Mutation<&C> {
        match self {
            Self::Applied(collection) => Mutation::Applied(collection),
            Self::Rejected => Mutation::Rejected,
        }
    }

    /// Transforms the produced collection, keeping a rejection as is.
    #[inline]
    pub fn map<D, F>(self, function: F) -> Mutation<D>
    where
        F: FnOnce(C) -> D,
    {
        match self {
            Self::Applied(collection) => Mutation::Applied(function(collection)),
            Self::Rejected => Mutation::Rejected,
        }
    }

    /// Chains another mutation onto an applied one.
    ///
    /// ```rust
    /// use relink::persistent::DoublyLinkedList;
    ///
    /// let list: DoublyLinkedList<i32> = DoublyLinkedList::new();
    /// let emptied = list
    ///     .add_head([500])
    ///     .and_then(|list| list.delete([0]))
    ///     .applied()
    ///     .unwrap();
    /// assert!(emptied.is_empty());
    /// ```
    #[inline]
    pub fn and_then<D, F>(self, function: F) -> Mutation<D>
    where
        F: FnOnce(C) -> Mutation<D>,
    {
        match self {
            Self::Applied(collection) => function(collection),
            Self::Rejected => Mutation::Rejected,
        }
    }

    /// Returns the produced collection or `default` when rejected.
    #[inline]
    #[must_use]
    pub fn unwrap_or(self, default: C) -> C {
        self.applied().unwrap_or(default)
    }

    /// Returns the produced collection or computes one when rejected.
    #[inline]
    #[must_use]
    pub fn unwrap_or_else<F>(self, function: F) -> C
    where
        F: FnOnce() -> C,
    {
        self.applied().unwrap_or_else(function)
    }

    /// Splits into a `(success, collection)` pair.
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (bool, Option<C>) {
        match self {
            Self::Applied(collection) => (true, Some(collection)),
            Self::Rejected => (false, None),
        }
    }
}

impl<C> From<Mutation<C>> for Option<C> {
    #[inline]
    fn from(mutation: Mutation<C>) -> Self {
        mutation.applied()
    }
}
