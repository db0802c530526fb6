//! Link direction markers for [`LinkedList`](super::LinkedList).

mod sealed {
    pub trait Sealed {}
}

/// Selects which links the Constructor records for each node.
///
/// This trait is sealed; [`Doubly`] and [`Singly`] are its only implementors.
pub trait Linkage: sealed::Sealed + 'static {
    /// Whether nodes carry a backward link to their predecessor.
    const BACKWARD: bool;

    /// Human-readable name used in diagnostics.
    const NAME: &'static str;
}

/// Nodes link forward to their successor and backward to their predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Doubly;

/// Nodes link forward only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Singly;

impl sealed::Sealed for Doubly {}
impl sealed::Sealed for Singly {}

impl Linkage for Doubly {
    const BACKWARD: bool = true;
    const NAME: &'static str = "doubly";
}

impl Linkage for Singly {
    const BACKWARD: bool = false;
    const NAME: &'static str = "singly";
}
