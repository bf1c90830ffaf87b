//! Builder for constructing objects

use crate::class::Class;
use crate::collections::Object;
use crate::core::value::Value;

/// Builder for constructing objects field by field
///
/// # Examples
///
/// ```
/// use castor_value::{ObjectBuilder, Value};
///
/// let obj = ObjectBuilder::new()
///     .insert("name", Value::text("Alice"))
///     .insert("age", Value::integer(30))
///     .build();
///
/// assert_eq!(obj.len(), 2);
/// assert_eq!(obj.keys(), vec!["name", "age"]);
/// ```
#[derive(Debug, Default)]
pub struct ObjectBuilder {
    entries: Vec<(String, Value)>,
    class: Option<Class>,
}

impl ObjectBuilder {
    /// Create a new empty builder
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            class: None,
        }
    }

    /// Create a builder with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            class: None,
        }
    }

    /// Make the built object an instance of a class
    #[must_use]
    pub fn class(mut self, class: Class) -> Self {
        self.class = Some(class);
        self
    }

    /// Add a field
    #[must_use]
    pub fn insert(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    /// Add multiple fields from an iterator
    #[must_use]
    pub fn extend<I, K, V>(mut self, iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.entries
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Remove all pending fields with the given key
    #[must_use]
    pub fn remove(mut self, key: &str) -> Self {
        self.entries.retain(|(k, _)| k != key);
        self
    }

    /// Remove all pending fields
    #[must_use]
    pub fn clear(mut self) -> Self {
        self.entries.clear();
        self
    }

    /// Get the number of pending fields
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the builder has no pending fields
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if a key is pending
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Build the object
    ///
    /// Fields are applied in insertion order; a key added twice keeps its
    /// first position with the last value.
    pub fn build(self) -> Object {
        let object = match self.class {
            Some(class) => Object::with_class(class),
            None => Object::new(),
        };
        for (key, value) in self.entries {
            object.insert(key, value);
        }
        object
    }
}

/// Create an object from key-value pairs
///
/// # Examples
///
/// ```
/// use castor_value::{object, Value};
///
/// let empty = object! {};
/// assert!(empty.is_empty());
///
/// let point = object! {
///     "x" => Value::integer(1),
///     "y" => Value::integer(2),
/// };
/// assert_eq!(point.keys(), vec!["x", "y"]);
/// ```
#[macro_export]
macro_rules! object {
    () => {
        $crate::collections::Object::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let builder = $crate::collections::ObjectBuilder::new();
        $(let builder = builder.insert($key, $value);)+
        builder.build()
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_empty() {
        let obj = ObjectBuilder::new().build();
        assert!(obj.is_empty());
        assert!(obj.class().is_none());
    }

    #[test]
    fn test_builder_preserves_order() {
        let obj = ObjectBuilder::with_capacity(3)
            .insert("c", Value::integer(3))
            .insert("a", Value::integer(1))
            .insert("b", Value::integer(2))
            .build();

        assert_eq!(obj.keys(), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_builder_duplicate_key_last_wins() {
        let obj = ObjectBuilder::new()
            .insert("x", Value::integer(1))
            .insert("y", Value::integer(2))
            .insert("x", Value::integer(10))
            .build();

        assert_eq!(obj.len(), 2);
        assert_eq!(obj.get("x"), Some(Value::integer(10)));
        assert_eq!(obj.keys(), vec!["x", "y"]);
    }

    #[test]
    fn test_builder_class() {
        let class = Class::builder("Point").build();
        let obj = ObjectBuilder::new()
            .class(class.clone())
            .insert("x", Value::integer(0))
            .build();

        assert!(obj.is_instance_of(&class));
        assert_eq!(obj.len(), 1);
    }

    #[test]
    fn test_builder_extend_and_remove() {
        let builder = ObjectBuilder::new()
            .extend(vec![("a", Value::integer(1)), ("b", Value::integer(2))])
            .insert("c", Value::integer(3));
        assert_eq!(builder.len(), 3);
        assert!(builder.contains_key("b"));

        let obj = builder.remove("b").build();
        assert_eq!(obj.keys(), vec!["a", "c"]);
    }

    #[test]
    fn test_object_macro() {
        let empty = object! {};
        assert!(empty.is_empty());

        let obj = object! {
            "one" => Value::integer(1),
            "two" => Value::integer(2),
        };
        assert_eq!(obj.keys(), vec!["one", "two"]);
        assert_eq!(obj.get("two"), Some(Value::integer(2)));
    }
}
