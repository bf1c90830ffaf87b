//! Deep cloning of values
//!
//! [`deep_clone`] produces a copy that shares no mutable storage with the
//! original at any depth. This is the counterpart to `Value::clone`, which
//! copies container handles and therefore aliases storage.
//!
//! Immutable payloads (text, function handles, class handles) are shared by
//! the copy; sharing them is unobservable because nothing can write through
//! them. Every mutable container gets fresh storage:
//!
//! - dates are rebuilt from the same millisecond instant
//! - arrays get a new backing store with each element cloned recursively
//! - objects get a new field store with every field cloned recursively,
//!   keeping the same class handle so the copy answers to the same kind
//!   and methods
//!
//! Each container is snapshotted under a single read lock before recursing,
//! so a copy taken during concurrent mutation is consistent per container.
//!
//! Input must be acyclic. A value reachable from itself recurses without
//! bound until the stack overflows; no cycle detection is performed.

use tracing::trace;

use crate::collections::{Array, Object};
use crate::core::value::Value;
use crate::temporal::Date;

/// Recursively clone a value into independent storage
///
/// Total over acyclic input: never fails, never mutates the original.
/// The result compares equal to the original, but mutating one is never
/// visible through the other.
///
/// # Examples
///
/// ```
/// use castor_value::{deep_clone, Array, Value};
///
/// let original = Value::array(Array::from_vec(vec![Value::integer(1)]));
/// let copy = deep_clone(&original);
/// assert_eq!(copy, original);
///
/// if let (Value::Array(a), Value::Array(b)) = (&original, &copy) {
///     a.push(Value::integer(2));
///     assert_eq!(a.len(), 2);
///     assert_eq!(b.len(), 1);
/// }
/// ```
#[must_use]
pub fn deep_clone(value: &Value) -> Value {
    trace!(kind = %value.kind(), "Deep cloning value");
    clone_value(value)
}

fn clone_value(value: &Value) -> Value {
    match value {
        Value::Null => Value::Null,
        Value::Date(date) => Value::Date(clone_date(date)),
        Value::Array(array) => Value::Array(clone_array(array)),
        Value::Object(object) => Value::Object(clone_object(object)),
        Value::Undefined => Value::Undefined,
        Value::Boolean(b) => Value::Boolean(*b),
        Value::Integer(i) => Value::Integer(*i),
        Value::Float(f) => Value::Float(*f),
        Value::Text(text) => Value::Text(text.clone()),
        Value::Function(function) => Value::Function(function.clone()),
    }
}

/// New date container holding the same instant
fn clone_date(date: &Date) -> Date {
    Date::from_timestamp_millis(date.timestamp_millis())
}

/// New backing store with each element cloned
fn clone_array(array: &Array) -> Array {
    let snapshot = array.to_vec();
    Array::from_vec(snapshot.iter().map(clone_value).collect())
}

/// Fresh instance of the same class with each field cloned
fn clone_object(object: &Object) -> Object {
    let fresh = match object.class() {
        Some(class) => Object::with_class(class),
        None => Object::new(),
    };
    for (key, value) in object.entries() {
        fresh.insert(key, clone_value(&value));
    }
    fresh
}

impl Value {
    /// Recursively clone this value into independent storage
    ///
    /// See [`deep_clone`].
    #[must_use]
    pub fn deep_clone(&self) -> Value {
        deep_clone(self)
    }
}
