//! Behavior tags for object values
//!
//! A [`Class`] names a kind and carries its method table. Instances hold a
//! cheap handle to their class; any clone of an instance shares that handle,
//! so the clone answers to the same kind and exposes the same methods.
//! Methods live on the class, never per instance, and are therefore not
//! duplicated when an instance is copied.

pub mod registry;

pub use registry::ClassRegistry;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::collections::Object;
use crate::core::error::{ValueError, ValueResult};
use crate::core::value::Value;

/// Type alias for a native method bound to a class
///
/// The first argument is the receiving instance.
pub type Method = fn(&Object, &[Value]) -> ValueResult<Value>;

/// Shared class definition
///
/// Holds the class name and its method table. Instances and clones all point
/// at one `ClassDef` through [`Class`] handles.
pub struct ClassDef {
    name: String,
    methods: HashMap<String, Method>,
}

impl ClassDef {
    /// Get the class name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a method by name
    pub fn method(&self, name: &str) -> Option<Method> {
        self.methods.get(name).copied()
    }

    /// Check if a method exists
    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Get all method names
    pub fn method_names(&self) -> Vec<String> {
        self.methods.keys().cloned().collect()
    }
}

impl fmt::Debug for ClassDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassDef")
            .field("name", &self.name)
            .field("methods", &self.method_names())
            .finish()
    }
}

/// Behavior tag handle
///
/// Cloning a `Class` is cheap and shares the definition. Equality is handle
/// identity: two classes compare equal exactly when they share one
/// [`ClassDef`], so separately built classes with identical names stay
/// distinct kinds.
#[derive(Debug, Clone)]
pub struct Class {
    def: Arc<ClassDef>,
}

impl Class {
    /// Start building a class with the given name
    pub fn builder(name: impl Into<String>) -> ClassBuilder {
        ClassBuilder::new(name)
    }

    /// Get the class name
    #[inline]
    pub fn name(&self) -> &str {
        self.def.name()
    }

    /// Look up a method by name
    pub fn method(&self, name: &str) -> Option<Method> {
        self.def.method(name)
    }

    /// Check if a method exists
    pub fn has_method(&self, name: &str) -> bool {
        self.def.has_method(name)
    }

    /// Get all method names
    pub fn method_names(&self) -> Vec<String> {
        self.def.method_names()
    }

    /// Invoke a method on a receiving instance
    ///
    /// # Errors
    ///
    /// Returns `ValueError::UnknownMethod` if the class has no such method.
    pub fn invoke(&self, receiver: &Object, name: &str, args: &[Value]) -> ValueResult<Value> {
        let method = self
            .method(name)
            .ok_or_else(|| ValueError::unknown_method(self.name(), name))?;

        method(receiver, args)
    }

    /// Construct a zero-field instance of this class
    pub fn instantiate(&self) -> Object {
        Object::with_class(self.clone())
    }

    /// Check whether two handles share the same definition
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.def, &other.def)
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Class {}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Builder for class definitions
///
/// # Examples
///
/// ```
/// use castor_value::class::Class;
/// use castor_value::{Object, Value, ValueResult};
///
/// fn area(receiver: &Object, _args: &[Value]) -> ValueResult<Value> {
///     let width = receiver.try_get("width")?.try_integer()?;
///     let height = receiver.try_get("height")?.try_integer()?;
///     Ok(Value::integer(width * height))
/// }
///
/// let rect = Class::builder("Rect").method("area", area).build();
/// assert_eq!(rect.name(), "Rect");
/// assert!(rect.has_method("area"));
/// ```
#[derive(Debug)]
pub struct ClassBuilder {
    name: String,
    methods: HashMap<String, Method>,
}

impl ClassBuilder {
    /// Create a new builder
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: HashMap::new(),
        }
    }

    /// Add a method
    pub fn method(mut self, name: impl Into<String>, method: Method) -> Self {
        self.methods.insert(name.into(), method);
        self
    }

    /// Add multiple methods
    pub fn methods<I>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = (String, Method)>,
    {
        self.methods.extend(methods);
        self
    }

    /// Build the class
    pub fn build(self) -> Class {
        debug!(
            class = %self.name,
            method_count = self.methods.len(),
            "Built class definition"
        );

        Class {
            def: Arc::new(ClassDef {
                name: self.name,
                methods: self.methods,
            }),
        }
    }
}
