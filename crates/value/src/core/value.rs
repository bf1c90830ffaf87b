//! Core value enum
//!
//! [`Value`] is the dynamic value domain: one tagged enum covering nulls,
//! scalars, text, dates, collections, objects, and functions. Containers
//! (`Date`, `Array`, `Object`) hold handles to shared mutable storage, so
//! `Value::clone` is a cheap aliasing copy; [`deep_clone`](crate::clone)
//! produces an independent one.

use crate::collections::{Array, Object};
use crate::core::kind::ValueKind;
use crate::scalar::{Function, Text};
use crate::temporal::Date;

// ============================================================================
// Value
// ============================================================================

/// Dynamic value
///
/// # Examples
///
/// ```
/// use castor_value::{Value, ValueKind};
///
/// let v = Value::integer(42);
/// assert_eq!(v.kind(), ValueKind::Integer);
/// assert!(v.is_integer());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Explicit null
    Null,
    /// Absent marker, distinct from null
    Undefined,
    /// Boolean
    Boolean(bool),
    /// 64-bit signed integer
    Integer(i64),
    /// 64-bit float
    Float(f64),
    /// Immutable text
    Text(Text),
    /// Mutable point in time
    Date(Date),
    /// Ordered sequence with shared storage
    Array(Array),
    /// Keyed fields with shared storage, optionally classed
    Object(Object),
    /// Named native function
    Function(Function),
}

impl Value {
    // ==================== Constructors ====================

    /// Create a null value
    #[inline]
    #[must_use]
    pub const fn null() -> Self {
        Value::Null
    }

    /// Create an undefined value
    #[inline]
    #[must_use]
    pub const fn undefined() -> Self {
        Value::Undefined
    }

    /// Create a boolean value
    #[inline]
    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        Value::Boolean(value)
    }

    /// Create an integer value
    #[inline]
    #[must_use]
    pub const fn integer(value: i64) -> Self {
        Value::Integer(value)
    }

    /// Create a float value
    #[inline]
    #[must_use]
    pub const fn float(value: f64) -> Self {
        Value::Float(value)
    }

    /// Create a text value
    #[must_use]
    pub fn text(value: impl Into<Text>) -> Self {
        Value::Text(value.into())
    }

    /// Create a date value
    #[inline]
    #[must_use]
    pub fn date(date: Date) -> Self {
        Value::Date(date)
    }

    /// Create an array value
    #[inline]
    #[must_use]
    pub fn array(array: Array) -> Self {
        Value::Array(array)
    }

    /// Create an object value
    #[inline]
    #[must_use]
    pub fn object(object: Object) -> Self {
        Value::Object(object)
    }

    /// Create a function value
    #[inline]
    #[must_use]
    pub fn function(function: Function) -> Self {
        Value::Function(function)
    }

    // ==================== Kind ====================

    /// Get the kind of this value
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        ValueKind::from_value(self)
    }

    /// Get the kind name of this value
    #[inline]
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        self.kind().name()
    }

    // ==================== Predicates ====================

    /// Check if this is a null value
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if this is an undefined value
    #[inline]
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Check if this is a boolean value
    #[inline]
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    /// Check if this is an integer value
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    /// Check if this is a float value
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Check if this is a numeric value
    #[inline]
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Float(_))
    }

    /// Check if this is a text value
    #[inline]
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Check if this is a date value
    #[inline]
    #[must_use]
    pub const fn is_date(&self) -> bool {
        matches!(self, Value::Date(_))
    }

    /// Check if this is an array value
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Check if this is an object value
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Check if this is a function value
    #[inline]
    #[must_use]
    pub const fn is_function(&self) -> bool {
        matches!(self, Value::Function(_))
    }
}

impl Default for Value {
    /// Default is null
    fn default() -> Self {
        Value::Null
    }
}

// ============================================================================
// Compile-time checks
// ============================================================================

static_assertions::assert_impl_all!(Value: Send, Sync, Clone);
