//! Property-based tests for deep cloning

use castor_value::{Array, Date, Object, Value, deep_clone};
use proptest::prelude::*;

// Strategy for generating scalar values (no NaN, so equality is total)
fn any_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(Value::Undefined),
        any::<bool>().prop_map(Value::boolean),
        any::<i64>().prop_map(Value::integer),
        prop::num::f64::NORMAL.prop_map(Value::float),
        ".*".prop_map(|s: String| Value::text(s)),
    ]
}

// Strategy for generating whole value trees
fn any_tree() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        any_scalar(),
        any::<i64>().prop_map(|ms| Value::date(Date::from_timestamp_millis(ms))),
    ];
    leaf.prop_recursive(4, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4)
                .prop_map(|items| Value::array(Array::from_vec(items))),
            prop::collection::vec(("[a-z]{1,8}", inner), 0..4).prop_map(|entries| {
                Value::object(Object::from_entries(
                    entries.into_iter().map(|(k, v)| (k, v)),
                ))
            }),
        ]
    })
}

// True if the two values reach any common mutable storage
fn shares_mutable_storage(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Date(x), Value::Date(y)) => x.ptr_eq(y),
        (Value::Array(x), Value::Array(y)) => {
            if x.ptr_eq(y) {
                return true;
            }
            let xs = x.to_vec();
            let ys = y.to_vec();
            xs.iter()
                .zip(ys.iter())
                .any(|(va, vb)| shares_mutable_storage(va, vb))
        }
        (Value::Object(x), Value::Object(y)) => {
            if x.ptr_eq(y) {
                return true;
            }
            x.entries()
                .iter()
                .any(|(k, va)| y.get(k).is_some_and(|vb| shares_mutable_storage(va, &vb)))
        }
        _ => false,
    }
}

// ===== EQUALITY =====

proptest! {
    #[test]
    fn clone_equals_original(value in any_tree()) {
        let copy = deep_clone(&value);
        prop_assert_eq!(&copy, &value);
        prop_assert_eq!(copy.kind(), value.kind());
    }

    #[test]
    fn clone_of_clone_equals_original(value in any_tree()) {
        let twice = deep_clone(&deep_clone(&value));
        prop_assert_eq!(twice, value);
    }
}

// ===== STORAGE INDEPENDENCE =====

proptest! {
    #[test]
    fn clone_shares_no_mutable_storage(value in any_tree()) {
        let copy = deep_clone(&value);
        prop_assert!(!shares_mutable_storage(&value, &copy));
    }

    #[test]
    fn handle_clone_shares_storage_for_containers(items in prop::collection::vec(any_scalar(), 0..8)) {
        let value = Value::array(Array::from_vec(items));
        let alias = value.clone();
        // The trivial clone is the sharing one
        if let (Value::Array(a), Value::Array(b)) = (&value, &alias) {
            prop_assert!(a.ptr_eq(b));
        }
    }
}

// ===== MUTATION INDEPENDENCE =====

proptest! {
    #[test]
    fn original_edits_invisible_in_copy(
        items in prop::collection::vec(any_scalar(), 1..8),
        replacement in any_scalar(),
    ) {
        let original = Array::from_vec(items.clone());
        let copy = deep_clone(&Value::array(original.clone())).try_array().unwrap();

        original.set(0, replacement).unwrap();
        original.push(Value::integer(0));

        prop_assert_eq!(copy.to_vec(), items);
    }

    #[test]
    fn copy_edits_invisible_in_original(
        items in prop::collection::vec(any_scalar(), 1..8),
        replacement in any_scalar(),
    ) {
        let original = Array::from_vec(items.clone());
        let copy = deep_clone(&Value::array(original.clone())).try_array().unwrap();

        copy.set(0, replacement).unwrap();
        copy.clear();

        prop_assert_eq!(original.to_vec(), items);
    }

    #[test]
    fn object_edits_stay_on_their_side(
        entries in prop::collection::vec(("[a-z]{1,8}", any_scalar()), 0..8),
        extra in any_scalar(),
    ) {
        let original = Object::from_entries(entries);
        let before = original.entries();

        let copy = deep_clone(&Value::object(original.clone())).try_object().unwrap();
        copy.insert("added", extra);
        copy.remove(before.first().map(|(k, _)| k.as_str()).unwrap_or(""));

        prop_assert_eq!(original.entries(), before);
    }

    #[test]
    fn date_edits_stay_on_their_side(millis in any::<i64>(), bump in any::<i64>()) {
        let original = Date::from_timestamp_millis(millis);
        let copy = deep_clone(&Value::date(original.clone())).try_date().unwrap();

        original.set_timestamp_millis(bump);

        prop_assert_eq!(copy.timestamp_millis(), millis);
    }
}
