//! Structural deep equality.
//!
//! [`deep_equals`] walks `serde_json::Value` trees. [`structurally_equal`]
//! walks a lossless capture of the serde data model instead, so float
//! values, `Option` nesting and non-string map keys survive the comparison.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use serde_json::{Map, Value};
use serde_value::Value as Captured;
use tracing::debug;

use super::{Equivalent, shallow_equals};

/// Compares two values field by field.
///
/// For objects, the union of field names on both sides is visited; a field
/// missing on either side is a mismatch. Nested objects recurse, arrays
/// compare element-wise with the same rule, and scalars must be of the same
/// kind and strictly equal. Field order never matters.
///
/// # Examples
///
/// ```rust
/// use relink::equality::deep_equals;
/// use serde_json::json;
///
/// let left = json!({ "name": "John", "preferences": { "theme": "light", "mfa": false } });
/// let reordered = json!({ "preferences": { "mfa": false, "theme": "light" }, "name": "John" });
/// let secured = json!({ "name": "John", "preferences": { "theme": "light", "mfa": true } });
///
/// assert!(deep_equals(&left, &reordered));
/// assert!(!deep_equals(&left, &secured));
/// ```
#[must_use]
pub fn deep_equals(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Object(left), Value::Object(right)) => objects_equal(left, right),
        (Value::Array(left), Value::Array(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .zip(right)
                    .all(|(left, right)| deep_equals(left, right))
        }
        (Value::Null, Value::Null) => true,
        (Value::Bool(left), Value::Bool(right)) => shallow_equals(left, right),
        (Value::Number(left), Value::Number(right)) => shallow_equals(left, right),
        (Value::String(left), Value::String(right)) => shallow_equals(left, right),
        _ => false,
    }
}

fn objects_equal(left: &Map<String, Value>, right: &Map<String, Value>) -> bool {
    let keys: BTreeSet<&String> = left.keys().chain(right.keys()).collect();
    keys.into_iter()
        .all(|key| match (left.get(key), right.get(key)) {
            (Some(left), Some(right)) => deep_equals(left, right),
            _ => false,
        })
}

/// Deep equality for any serializable value.
///
/// Both operands are captured with `serde_value` and compared with the
/// same rule as [`deep_equals`]: the union of map keys is visited and a key
/// missing on either side is a mismatch, sequences compare element-wise,
/// and scalars must be of the same kind and equal. Floats compare by total
/// order, so `NaN` equals `NaN` but differs from every other float.
/// `None` and `Some(None)` are distinct.
///
/// A value that fails to serialize is equivalent only to itself.
///
/// ```rust
/// use relink::equality::structurally_equal;
/// use std::collections::BTreeMap;
///
/// let grid = BTreeMap::from([((1, 2), 3.5_f64)]);
/// assert!(structurally_equal(&grid, &grid.clone()));
/// assert!(!structurally_equal(&Some(f64::NAN), &Some(f64::INFINITY)));
/// ```
#[must_use]
pub fn structurally_equal<T: Serialize + ?Sized>(left: &T, right: &T) -> bool {
    match (serde_value::to_value(left), serde_value::to_value(right)) {
        (Ok(captured_left), Ok(captured_right)) => {
            captured_equal(&captured_left, &captured_right)
        }
        (captured_left, captured_right) => {
            debug!(
                left_failed = captured_left.is_err(),
                right_failed = captured_right.is_err(),
                "structural comparison fell back to identity: value failed to serialize"
            );
            std::ptr::eq(left, right)
        }
    }
}

fn captured_equal(left: &Captured, right: &Captured) -> bool {
    match (left, right) {
        (Captured::Map(left), Captured::Map(right)) => captured_maps_equal(left, right),
        (Captured::Seq(left), Captured::Seq(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .zip(right)
                    .all(|(left, right)| captured_equal(left, right))
        }
        (Captured::Option(left), Captured::Option(right)) => match (left, right) {
            (Some(left), Some(right)) => captured_equal(left, right),
            (None, None) => true,
            _ => false,
        },
        (Captured::Newtype(left), Captured::Newtype(right)) => captured_equal(left, right),
        // Scalars: the captured equality is variant-strict and orders floats totally.
        _ => shallow_equals(left, right),
    }
}

fn captured_maps_equal(
    left: &BTreeMap<Captured, Captured>,
    right: &BTreeMap<Captured, Captured>,
) -> bool {
    let keys: BTreeSet<&Captured> = left.keys().chain(right.keys()).collect();
    keys.into_iter()
        .all(|key| match (left.get(key), right.get(key)) {
            (Some(left), Some(right)) => captured_equal(left, right),
            _ => false,
        })
}

impl Equivalent for Value {
    #[inline]
    fn equivalent(&self, other: &Self) -> bool {
        deep_equals(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[derive(Serialize)]
    struct Preferences {
        theme: &'static str,
        mfa: bool,
    }

    #[derive(Serialize)]
    struct Account {
        name: &'static str,
        age: u32,
        preferences: Preferences,
    }

    fn account(name: &'static str, mfa: bool) -> Account {
        Account {
            name,
            age: 45,
            preferences: Preferences {
                theme: "light",
                mfa,
            },
        }
    }

    #[rstest]
    fn test_identical_records_are_equal() {
        assert!(structurally_equal(&account("John", false), &account("John", false)));
    }

    #[rstest]
    fn test_nested_difference_is_detected() {
        assert!(!structurally_equal(&account("John", false), &account("John", true)));
    }

    #[rstest]
    fn test_missing_field_is_a_mismatch() {
        let left = json!({ "name": "John", "age": 45 });
        let right = json!({ "name": "John" });
        assert!(!deep_equals(&left, &right));
        assert!(!deep_equals(&right, &left));
    }

    #[rstest]
    fn test_kind_mismatch_is_a_mismatch() {
        assert!(!deep_equals(&json!({ "age": 45 }), &json!({ "age": "45" })));
        assert!(!deep_equals(&json!({ "tags": [] }), &json!({ "tags": {} })));
        assert!(!deep_equals(&json!(null), &json!(false)));
    }

    #[rstest]
    fn test_arrays_of_records_compare_element_wise() {
        let left = json!({ "items": [{ "id": 1 }, { "id": 2 }] });
        let same = json!({ "items": [{ "id": 1 }, { "id": 2 }] });
        let swapped = json!({ "items": [{ "id": 2 }, { "id": 1 }] });
        assert!(deep_equals(&left, &same));
        assert!(!deep_equals(&left, &swapped));
    }

    #[rstest]
    fn test_empty_objects_are_equal() {
        assert!(deep_equals(&json!({}), &json!({})));
    }

    #[rstest]
    fn test_value_equivalent_uses_deep_equality() {
        let left = json!({ "a": 1, "b": { "c": true } });
        let right = json!({ "b": { "c": true }, "a": 1 });
        assert!(left.equivalent(&right));
    }

    #[rstest]
    #[case(f64::NAN, f64::INFINITY, false)]
    #[case(f64::INFINITY, f64::NEG_INFINITY, false)]
    #[case(f64::NAN, f64::NAN, true)]
    #[case(1.5, 1.5, true)]
    fn test_floats_are_kept_exactly(
        #[case] left: f64,
        #[case] right: f64,
        #[case] expected: bool,
    ) {
        assert_eq!(structurally_equal(&[left], &[right]), expected);
    }

    #[rstest]
    fn test_option_nesting_is_kept() {
        let none: Option<Option<u8>> = None;
        let some_none: Option<Option<u8>> = Some(None);
        assert!(!structurally_equal(&none, &some_none));
        assert!(structurally_equal(&some_none, &Some(None)));
    }

    #[rstest]
    fn test_numeric_kinds_must_match() {
        #[derive(Serialize)]
        struct Narrow {
            count: u8,
        }
        #[derive(Serialize)]
        struct Wide {
            count: u64,
        }
        let narrow = serde_value::to_value(Narrow { count: 1 }).unwrap();
        let wide = serde_value::to_value(Wide { count: 1 }).unwrap();
        assert!(!captured_equal(&narrow, &wide));
    }

    #[rstest]
    fn test_non_string_map_keys_compare_structurally() {
        let left = BTreeMap::from([((1, 2), 3), ((4, 5), 6)]);
        let right = BTreeMap::from([((4, 5), 6), ((1, 2), 3)]);
        let other = BTreeMap::from([((1, 2), 3)]);
        assert!(structurally_equal(&left, &right));
        assert!(!structurally_equal(&left, &other));
    }

    struct Unserializable(u8);

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom(format!("unsupported tag {}", self.0)))
        }
    }

    #[rstest]
    fn test_serialization_failure_falls_back_to_identity() {
        let value = Unserializable(1);
        let other = Unserializable(1);
        assert!(structurally_equal(&value, &value));
        assert!(!structurally_equal(&value, &other));
    }
}
