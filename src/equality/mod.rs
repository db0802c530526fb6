//! Value comparison used by list search.
//!
//! Search and removal in [`LinkedList`](crate::persistent::LinkedList) compare
//! values through the [`Equivalent`] trait rather than [`PartialEq`], so that
//! the comparison policy is an explicit, per-type decision:
//!
//! - **Primitive values** (integers, floats, `bool`, `char`, strings, `()`)
//!   use [`shallow_equals`], plain equality with no coercion.
//! - **Sequences** (`Vec<T>`, `[T]`, `[T; N]`), tuples up to six fields and
//!   `Option<T>` compare element-wise through `Equivalent`.
//! - **Record values** use deep equality. With the `deep` feature, any
//!   `Serialize` type can opt in through [`deep_equivalent!`](crate::deep_equivalent),
//!   which compares field by field regardless of field order.
//!
//! # Examples
//!
//! ```rust
//! use relink::equality::{shallow_equals, Equivalent};
//!
//! assert!(shallow_equals(&42, &42));
//! assert!(!1.5_f64.equivalent(&2.5));
//! assert!(vec!["a", "b"].equivalent(&vec!["a", "b"]));
//! ```

#[cfg(feature = "deep")]
mod deep;

#[cfg(feature = "deep")]
pub use deep::{deep_equals, structurally_equal};

/// The equality relation used by `find`, `contains` and `remove`.
///
/// Implementations must be reflexive and symmetric for the search
/// tie-break rules to hold: the first node `n` for which
/// `target.equivalent(n.value())` is `true` is the one reported.
/// Primitive floats follow IEEE equality, so a bare `NaN` is the one value
/// not equivalent to itself.
pub trait Equivalent {
    /// Returns `true` if `self` and `other` should be treated as the same value.
    fn equivalent(&self, other: &Self) -> bool;
}

/// Identity/primitive equality.
///
/// Both operands have the same static type, so the "same type" and
/// "same array-ness" checks of a dynamically typed comparison are settled
/// at compile time; what remains is strict equality without coercion.
///
/// # Examples
///
/// ```rust
/// use relink::equality::shallow_equals;
///
/// assert!(shallow_equals("john", "john"));
/// assert!(!shallow_equals(&0.1_f64, &0.2_f64));
/// ```
#[inline]
#[must_use]
pub fn shallow_equals<T: PartialEq + ?Sized>(left: &T, right: &T) -> bool {
    left == right
}

macro_rules! impl_shallow_equivalent {
    ($($type:ty),* $(,)?) => {
        $(
            impl Equivalent for $type {
                #[inline]
                fn equivalent(&self, other: &Self) -> bool {
                    shallow_equals(self, other)
                }
            }
        )*
    };
}

impl_shallow_equivalent!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
    String, str, (),
);

impl<T: Equivalent + ?Sized> Equivalent for &T {
    #[inline]
    fn equivalent(&self, other: &Self) -> bool {
        (**self).equivalent(*other)
    }
}

impl<T: Equivalent + ?Sized> Equivalent for Box<T> {
    #[inline]
    fn equivalent(&self, other: &Self) -> bool {
        (**self).equivalent(&**other)
    }
}

impl<T: Equivalent> Equivalent for Option<T> {
    fn equivalent(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(left), Some(right)) => left.equivalent(right),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Equivalent> Equivalent for [T] {
    fn equivalent(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(left, right)| left.equivalent(right))
    }
}

impl<T: Equivalent, const N: usize> Equivalent for [T; N] {
    #[inline]
    fn equivalent(&self, other: &Self) -> bool {
        self.as_slice().equivalent(other.as_slice())
    }
}

impl<T: Equivalent> Equivalent for Vec<T> {
    #[inline]
    fn equivalent(&self, other: &Self) -> bool {
        self.as_slice().equivalent(other.as_slice())
    }
}

macro_rules! impl_tuple_equivalent {
    ($(($($name:ident : $index:tt),+)),* $(,)?) => {
        $(
            impl<$($name: Equivalent),+> Equivalent for ($($name,)+) {
                #[inline]
                fn equivalent(&self, other: &Self) -> bool {
                    $(self.$index.equivalent(&other.$index))&&+
                }
            }
        )*
    };
}

impl_tuple_equivalent!(
    (A: 0),
    (A: 0, B: 1),
    (A: 0, B: 1, C: 2),
    (A: 0, B: 1, C: 2, D: 3),
    (A: 0, B: 1, C: 2, D: 3, E: 4),
    (A: 0, B: 1, C: 2, D: 3, E: 4, F: 5),
);

/// Implements [`Equivalent`] for record types through structural deep equality.
///
/// Each listed type must implement `serde::Serialize`. Two values are
/// equivalent when every field present on either side is present on both
/// and compares equal, recursing into nested records.
///
/// # Examples
///
/// ```rust
/// use relink::deep_equivalent;
/// use relink::equality::Equivalent;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Preferences {
///     theme: String,
///     mfa: bool,
/// }
///
/// deep_equivalent!(Preferences);
///
/// let light = Preferences { theme: "light".into(), mfa: false };
/// let also_light = Preferences { theme: "light".into(), mfa: false };
/// let secured = Preferences { theme: "light".into(), mfa: true };
/// assert!(light.equivalent(&also_light));
/// assert!(!light.equivalent(&secured));
/// ```
#[cfg(feature = "deep")]
#[macro_export]
macro_rules! deep_equivalent {
    ($($type:ty),+ $(,)?) => {
        $(
            impl $crate::equality::Equivalent for $type {
                fn equivalent(&self, other: &Self) -> bool {
                    $crate::equality::structurally_equal(self, other)
                }
            }
        )+
    };
}
