//! Integration tests for deep cloning
//!
//! End-to-end scenarios verifying that a deep clone is equal to the original
//! at the moment of copying and fully disconnected from it afterwards, for
//! every kind and nesting shape.

use castor_value::{Array, Class, ClassRegistry, Date, Function, Object, Value, ValueResult};
use pretty_assertions::{assert_eq, assert_ne};
use rstest::rstest;

fn greeting(_args: &[Value]) -> ValueResult<Value> {
    Ok(Value::text("hello"))
}

fn rect_area(receiver: &Object, _args: &[Value]) -> ValueResult<Value> {
    let width = receiver.try_get("width")?.try_integer()?;
    let height = receiver.try_get("height")?.try_integer()?;
    Ok(Value::integer(width * height))
}

#[rstest]
#[case::null(Value::Null)]
#[case::undefined(Value::Undefined)]
#[case::boolean_true(Value::boolean(true))]
#[case::boolean_false(Value::boolean(false))]
#[case::integer(Value::integer(-42))]
#[case::integer_extremes(Value::integer(i64::MIN))]
#[case::float(Value::float(2.5))]
#[case::float_zero(Value::float(0.0))]
#[case::text(Value::text("hello"))]
#[case::text_empty(Value::text(""))]
fn scalar_round_trips_unchanged(#[case] value: Value) {
    let copy = value.deep_clone();
    assert_eq!(copy, value);
    assert_eq!(copy.kind(), value.kind());
}

#[test]
fn test_nan_round_trips_as_nan() {
    let copy = Value::float(f64::NAN).deep_clone();
    assert!(copy.as_float().is_some_and(f64::is_nan));
}

#[test]
fn test_flat_list_edits_do_not_propagate() {
    // Scenario: copy a list, then edit both sides
    let original = Array::from_vec(vec![
        Value::integer(1),
        Value::integer(2),
        Value::integer(3),
        Value::integer(4),
    ]);

    let copy = Value::array(original.clone()).deep_clone().try_array().unwrap();
    assert_eq!(copy.to_vec(), original.to_vec());
    assert!(!copy.ptr_eq(&original));

    original.set(0, Value::Null).unwrap();
    copy.set(1, Value::integer(9)).unwrap();

    assert_eq!(
        original.to_vec(),
        vec![
            Value::Null,
            Value::integer(2),
            Value::integer(3),
            Value::integer(4),
        ]
    );
    assert_eq!(
        copy.to_vec(),
        vec![
            Value::integer(1),
            Value::integer(9),
            Value::integer(3),
            Value::integer(4),
        ]
    );
}

#[test]
fn test_nested_lists_are_fully_detached() {
    // Scenario: a matrix, edited in place on both sides after copying
    let row0 = Array::from_vec(vec![
        Value::integer(0),
        Value::integer(1),
        Value::integer(2),
    ]);
    let row1 = Array::from_vec(vec![
        Value::integer(3),
        Value::integer(4),
        Value::integer(5),
    ]);
    let matrix = Array::from_vec(vec![
        Value::array(row0.clone()),
        Value::array(row1.clone()),
    ]);

    let copy = Value::array(matrix.clone()).deep_clone().try_array().unwrap();

    // Inner rows are new stores, not shared handles
    let copied_row0 = copy.get(0).unwrap().try_array().unwrap();
    let copied_row1 = copy.get(1).unwrap().try_array().unwrap();
    assert!(!copied_row0.ptr_eq(&row0));
    assert!(!copied_row1.ptr_eq(&row1));

    row0.set(0, Value::integer(100)).unwrap();
    copied_row1.set(2, Value::integer(-5)).unwrap();

    assert_eq!(copied_row0.get(0), Some(Value::integer(0)));
    assert_eq!(row1.get(2), Some(Value::integer(5)));
}

#[test]
fn test_absent_marker_and_callable_survive() {
    // Scenario: an object holding "nothing" and a callable
    let original = Object::new();
    original.insert("nothing", Value::Undefined);
    original.insert("greet", Value::function(Function::new("greeting", greeting)));

    let copy = Value::object(original.clone()).deep_clone().try_object().unwrap();

    assert_eq!(copy.get("nothing"), Some(Value::Undefined));

    let callable = copy.get("greet").unwrap().try_function().unwrap();
    assert_eq!(callable.call(&[]).unwrap(), Value::text("hello"));

    // The function handle itself is shared; it has no mutable state
    let original_fn = original.get("greet").unwrap().try_function().unwrap();
    assert!(callable.ptr_eq(&original_fn));
}

#[test]
fn test_date_copy_same_instant_new_container() {
    let date = Date::from_timestamp_millis(1_700_000_000_000);
    let original = Value::date(date.clone());

    let copy = original.deep_clone();
    assert_eq!(copy, original);

    let copied_date = copy.try_date().unwrap();
    assert!(!copied_date.ptr_eq(&date));
    assert_eq!(copied_date.timestamp_millis(), 1_700_000_000_000);

    // Rewinding the original leaves the copy on its instant
    date.set_timestamp_millis(0);
    assert_eq!(copied_date.timestamp_millis(), 1_700_000_000_000);
    assert_ne!(copy, original);
}

#[test]
fn test_instance_keeps_kind_and_methods() {
    let rect_class = Class::builder("Rect").method("area", rect_area).build();
    let original = rect_class.instantiate();
    original.insert("width", Value::integer(4));
    original.insert("height", Value::integer(5));

    let copy = Value::object(original.clone()).deep_clone().try_object().unwrap();

    // Same kind: the very same class handle, answering the same methods
    assert!(copy.is_instance_of(&rect_class));
    assert!(copy.class().unwrap().ptr_eq(&original.class().unwrap()));
    assert_eq!(copy.call_method("area", &[]).unwrap(), Value::integer(20));
    assert_eq!(
        copy.call_method("area", &[]).unwrap(),
        original.call_method("area", &[]).unwrap()
    );

    // Methods read the copy's own fields
    copy.insert("width", Value::integer(10));
    assert_eq!(copy.call_method("area", &[]).unwrap(), Value::integer(50));
    assert_eq!(original.call_method("area", &[]).unwrap(), Value::integer(20));
}

#[test]
fn test_instances_inside_collections() {
    let rect_class = Class::builder("Rect").method("area", rect_area).build();

    let first = rect_class.instantiate();
    first.insert("width", Value::integer(2));
    first.insert("height", Value::integer(3));

    let second = rect_class.instantiate();
    second.insert("width", Value::integer(7));
    second.insert("height", Value::integer(1));

    let holder = Object::new();
    holder.insert(
        "shapes",
        Value::array(Array::from_vec(vec![
            Value::object(first.clone()),
            Value::object(second),
        ])),
    );

    let copy = Value::object(holder.clone()).deep_clone().try_object().unwrap();
    assert_eq!(Value::object(copy.clone()), Value::object(holder));

    let shapes = copy.get("shapes").unwrap().try_array().unwrap();
    let copied_first = shapes.get(0).unwrap().try_object().unwrap();

    assert!(!copied_first.ptr_eq(&first));
    assert!(copied_first.is_instance_of(&rect_class));
    assert_eq!(
        copied_first.call_method("area", &[]).unwrap(),
        Value::integer(6)
    );

    first.insert("width", Value::integer(100));
    assert_eq!(copied_first.get("width"), Some(Value::integer(2)));
}

#[test]
fn test_registry_instances_survive_copying() {
    // Scenario: kinds defined centrally, instances copied later
    let mut registry = ClassRegistry::new();
    registry
        .define(Class::builder("Rect").method("area", rect_area).build())
        .unwrap();

    let original = registry.instantiate("Rect").unwrap();
    original.insert("width", Value::integer(3));
    original.insert("height", Value::integer(3));

    let copy = Value::object(original).deep_clone().try_object().unwrap();

    assert_eq!(copy.class_name(), Some("Rect"));
    assert!(copy.class().unwrap().ptr_eq(&registry.get("Rect").unwrap()));
    assert_eq!(copy.call_method("area", &[]).unwrap(), Value::integer(9));
}

#[test]
fn test_handle_clone_aliases_deep_clone_detaches() {
    let original = Object::new();
    original.insert("n", Value::integer(1));
    let value = Value::object(original.clone());

    let alias = value.clone();
    let detached = value.deep_clone();

    original.insert("n", Value::integer(2));

    assert_eq!(
        alias.try_object().unwrap().get("n"),
        Some(Value::integer(2))
    );
    assert_eq!(
        detached.try_object().unwrap().get("n"),
        Some(Value::integer(1))
    );
}

#[test]
fn test_field_order_is_preserved() {
    let original = Object::new();
    original.insert("zeta", Value::integer(1));
    original.insert("alpha", Value::integer(2));
    original.insert("mid", Value::integer(3));

    let copy = Value::object(original).deep_clone().try_object().unwrap();
    assert_eq!(copy.keys(), vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_empty_containers() {
    let empty_array = Value::array(Array::new()).deep_clone().try_array().unwrap();
    assert!(empty_array.is_empty());

    let empty_object = Value::object(Object::new()).deep_clone().try_object().unwrap();
    assert!(empty_object.is_empty());
    assert!(empty_object.class().is_none());
}
