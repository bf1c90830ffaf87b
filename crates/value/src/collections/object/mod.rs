//! Object type with shared mutable field storage
//!
//! [`Object`] is a handle to an ordered field map. `Clone` copies the handle,
//! so two clones observe each other's mutations; an independent copy is made
//! by deep-cloning every field into a fresh instance. Fields keep insertion
//! order, which is the order enumeration and serialization walk them in.
//!
//! An object optionally carries a [`Class`] handle assigned at construction.
//! The class never changes for the lifetime of the instance and lives outside
//! the field lock.

pub mod builder;

pub use builder::ObjectBuilder;

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::class::Class;
use crate::core::error::{ValueError, ValueResult};
use crate::core::value::Value;

// ============================================================================
// Object
// ============================================================================

#[derive(Debug)]
struct ObjectInner {
    class: Option<Class>,
    fields: RwLock<IndexMap<String, Value>>,
}

/// Shared-storage object value
///
/// # Examples
///
/// ```
/// use castor_value::{Object, Value};
///
/// let obj = Object::new();
/// obj.insert("name", Value::text("Alice"));
///
/// let alias = obj.clone();
/// alias.insert("age", Value::integer(30));
///
/// // Both handles see the same storage
/// assert_eq!(obj.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Object {
    inner: Arc<ObjectInner>,
}

impl Object {
    // ==================== Construction ====================

    /// Create an empty classless object
    pub fn new() -> Self {
        Self {
            inner: Arc::new(ObjectInner {
                class: None,
                fields: RwLock::new(IndexMap::new()),
            }),
        }
    }

    /// Create an empty instance of a class
    pub fn with_class(class: Class) -> Self {
        Self {
            inner: Arc::new(ObjectInner {
                class: Some(class),
                fields: RwLock::new(IndexMap::new()),
            }),
        }
    }

    /// Create a classless object from key-value entries
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        Self {
            inner: Arc::new(ObjectInner {
                class: None,
                fields: RwLock::new(entries.into_iter().collect()),
            }),
        }
    }

    // ==================== Properties ====================

    /// Get the number of fields
    pub fn len(&self) -> usize {
        self.inner.fields.read().len()
    }

    /// Check if the object has no fields
    pub fn is_empty(&self) -> bool {
        self.inner.fields.read().is_empty()
    }

    /// Get the class this object is an instance of
    #[inline]
    pub fn class(&self) -> Option<Class> {
        self.inner.class.clone()
    }

    /// Get the class name, if any
    #[inline]
    pub fn class_name(&self) -> Option<&str> {
        self.inner.class.as_ref().map(Class::name)
    }

    /// Check if this object is an instance of the given class
    ///
    /// Identity-based: only the exact class handle matches, not a
    /// same-named definition built elsewhere.
    pub fn is_instance_of(&self, class: &Class) -> bool {
        self.inner
            .class
            .as_ref()
            .is_some_and(|own| own.ptr_eq(class))
    }

    // ==================== Field access ====================

    /// Get a field value by key
    ///
    /// Returns a handle to the stored value; for containers the handle
    /// shares storage with the field.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.inner.fields.read().get(key).cloned()
    }

    /// Get a field value by key or error
    ///
    /// # Errors
    ///
    /// Returns `ValueError::KeyNotFound` if the key is absent.
    pub fn try_get(&self, key: &str) -> ValueResult<Value> {
        self.get(key).ok_or_else(|| ValueError::key_not_found(key))
    }

    /// Check if a key exists
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.fields.read().contains_key(key)
    }

    // ==================== Mutation ====================

    /// Set a field, returning the previous value if the key existed
    ///
    /// New keys are appended at the end of the enumeration order;
    /// existing keys keep their position.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.inner.fields.write().insert(key.into(), value.into())
    }

    /// Remove a field, returning its value if the key existed
    ///
    /// Later fields shift up to preserve enumeration order.
    pub fn remove(&self, key: &str) -> Option<Value> {
        self.inner.fields.write().shift_remove(key)
    }

    /// Remove all fields
    pub fn clear(&self) {
        self.inner.fields.write().clear();
    }

    // ==================== Enumeration ====================

    /// Get all keys in insertion order
    pub fn keys(&self) -> Vec<String> {
        self.inner.fields.read().keys().cloned().collect()
    }

    /// Get all values in insertion order
    pub fn values(&self) -> Vec<Value> {
        self.inner.fields.read().values().cloned().collect()
    }

    /// Snapshot all entries in insertion order
    ///
    /// The snapshot is taken under a single read lock, so it is internally
    /// consistent even while other handles mutate concurrently.
    pub fn entries(&self) -> Vec<(String, Value)> {
        self.inner
            .fields
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    // ==================== Methods ====================

    /// Invoke a class method on this object
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OperationNotSupported` for classless objects and
    /// `ValueError::UnknownMethod` if the class has no such method.
    pub fn call_method(&self, name: &str, args: &[Value]) -> ValueResult<Value> {
        match &self.inner.class {
            Some(class) => class.invoke(self, name, args),
            None => Err(ValueError::operation_not_supported(
                name,
                "classless object",
            )),
        }
    }

    // ==================== Identity ====================

    /// Check if two handles share the same field storage
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

// ============================================================================
// Trait implementations
// ============================================================================

impl Default for Object {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.class_name() {
            write!(f, "{name} ")?;
        }
        write!(f, "{{")?;
        let entries = self.entries();
        let mut first = true;
        for (key, value) in &entries {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{key}: {value}")?;
        }
        write!(f, "}}")
    }
}

impl PartialEq for Object {
    /// Structural equality over a consistent snapshot
    ///
    /// Two objects are equal when their classes are identical (both absent,
    /// or the same handle) and their fields compare equal key by key.
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        let classes_match = match (&self.inner.class, &other.inner.class) {
            (None, None) => true,
            (Some(a), Some(b)) => a.ptr_eq(b),
            _ => false,
        };
        if !classes_match {
            return false;
        }
        let entries = self.entries();
        if entries.len() != other.len() {
            return false;
        }
        entries
            .iter()
            .all(|(key, value)| other.get(key).is_some_and(|v| v == *value))
    }
}

impl FromIterator<(String, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}
