//! Conversions in and out of Value
//!
//! `From` implementations for Rust primitives and the handle types, plus
//! strict accessors: `as_*` returns `Option`, `try_*` returns a
//! `TypeMismatch` error naming the expected and actual kinds. No coercion
//! is performed; an integer is not a float and text never parses itself.

use crate::collections::{Array, Object};
use crate::core::error::{ValueError, ValueResult};
use crate::core::value::Value;
use crate::scalar::{Function, Text};
use crate::temporal::Date;

impl Value {
    // ==================== Accessors (as_*) ====================

    /// Try to get as boolean
    #[inline]
    #[must_use]
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as integer
    #[inline]
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as float
    #[inline]
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get as text reference
    #[inline]
    #[must_use]
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Self::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Try to get as string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t.as_str()),
            _ => None,
        }
    }

    /// Try to get as date reference
    #[inline]
    #[must_use]
    pub fn as_date(&self) -> Option<&Date> {
        match self {
            Self::Date(d) => Some(d),
            _ => None,
        }
    }

    /// Try to get as array reference
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Try to get as object reference
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Try to get as function reference
    #[inline]
    #[must_use]
    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(func) => Some(func),
            _ => None,
        }
    }

    // ==================== Accessors (try_*) ====================

    /// Get as boolean or error
    ///
    /// # Errors
    ///
    /// Returns `ValueError::TypeMismatch` for any other kind.
    pub fn try_boolean(&self) -> ValueResult<bool> {
        self.as_boolean()
            .ok_or_else(|| ValueError::type_mismatch("boolean", self.kind_name()))
    }

    /// Get as integer or error
    ///
    /// # Errors
    ///
    /// Returns `ValueError::TypeMismatch` for any other kind, including float.
    pub fn try_integer(&self) -> ValueResult<i64> {
        self.as_integer()
            .ok_or_else(|| ValueError::type_mismatch("integer", self.kind_name()))
    }

    /// Get as float or error
    ///
    /// # Errors
    ///
    /// Returns `ValueError::TypeMismatch` for any other kind, including integer.
    pub fn try_float(&self) -> ValueResult<f64> {
        self.as_float()
            .ok_or_else(|| ValueError::type_mismatch("float", self.kind_name()))
    }

    /// Get a text handle or error
    ///
    /// # Errors
    ///
    /// Returns `ValueError::TypeMismatch` for any other kind.
    pub fn try_text(&self) -> ValueResult<Text> {
        self.as_text()
            .cloned()
            .ok_or_else(|| ValueError::type_mismatch("text", self.kind_name()))
    }

    /// Get a date handle or error
    ///
    /// # Errors
    ///
    /// Returns `ValueError::TypeMismatch` for any other kind.
    pub fn try_date(&self) -> ValueResult<Date> {
        self.as_date()
            .cloned()
            .ok_or_else(|| ValueError::type_mismatch("date", self.kind_name()))
    }

    /// Get an array handle or error
    ///
    /// # Errors
    ///
    /// Returns `ValueError::TypeMismatch` for any other kind.
    pub fn try_array(&self) -> ValueResult<Array> {
        self.as_array()
            .cloned()
            .ok_or_else(|| ValueError::type_mismatch("array", self.kind_name()))
    }

    /// Get an object handle or error
    ///
    /// # Errors
    ///
    /// Returns `ValueError::TypeMismatch` for any other kind.
    pub fn try_object(&self) -> ValueResult<Object> {
        self.as_object()
            .cloned()
            .ok_or_else(|| ValueError::type_mismatch("object", self.kind_name()))
    }

    /// Get a function handle or error
    ///
    /// # Errors
    ///
    /// Returns `ValueError::TypeMismatch` for any other kind.
    pub fn try_function(&self) -> ValueResult<Function> {
        self.as_function()
            .cloned()
            .ok_or_else(|| ValueError::type_mismatch("function", self.kind_name()))
    }
}

// ==================== From implementations ====================

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f64::from(f))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(Text::new(s))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(Text::from(s))
    }
}

impl From<Text> for Value {
    fn from(t: Text) -> Self {
        Value::Text(t)
    }
}

impl From<Date> for Value {
    fn from(d: Date) -> Self {
        Value::Date(d)
    }
}

impl From<Array> for Value {
    fn from(a: Array) -> Self {
        Value::Array(a)
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(o)
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Value::Function(f)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(Array::from_vec(items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_accessors() {
        assert_eq!(Value::boolean(true).as_boolean(), Some(true));
        assert_eq!(Value::integer(5).as_integer(), Some(5));
        assert_eq!(Value::float(1.5).as_float(), Some(1.5));
        assert_eq!(Value::text("hi").as_str(), Some("hi"));

        assert_eq!(Value::integer(5).as_boolean(), None);
        assert_eq!(Value::float(1.0).as_integer(), None);
        assert_eq!(Value::Null.as_str(), None);
    }

    #[test]
    fn test_try_accessors() {
        assert_eq!(Value::integer(5).try_integer().unwrap(), 5);
        assert_eq!(Value::text("hi").try_text().unwrap().as_str(), "hi");

        let err = Value::float(1.0).try_integer().unwrap_err();
        assert_eq!(err.code(), "VALUE_TYPE_MISMATCH");
        assert!(err.to_string().contains("integer"));
        assert!(err.to_string().contains("float"));
    }

    #[test]
    fn test_try_container_accessors_share_storage() {
        let array = Array::from_vec(vec![Value::integer(1)]);
        let value = Value::array(array.clone());

        let handle = value.try_array().unwrap();
        assert!(handle.ptr_eq(&array));

        assert!(Value::Null.try_array().is_err());
        assert!(Value::Null.try_object().is_err());
        assert!(Value::Null.try_date().is_err());
        assert!(Value::Null.try_function().is_err());
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(true), Value::boolean(true));
        assert_eq!(Value::from(42i64), Value::integer(42));
        assert_eq!(Value::from(42i32), Value::integer(42));
        assert_eq!(Value::from(2.5f64), Value::float(2.5));
        assert_eq!(Value::from(2.5f32), Value::float(2.5));
        assert_eq!(Value::from("hello"), Value::text("hello"));
        assert_eq!(Value::from("hello".to_string()), Value::text("hello"));
    }

    #[test]
    fn test_from_handles() {
        assert!(Value::from(Date::unix_epoch()).is_date());
        assert!(Value::from(Array::new()).is_array());
        assert!(Value::from(Object::new()).is_object());
        assert!(Value::from(vec![Value::integer(1)]).is_array());
    }
}
