//! Registry of class definitions
//!
//! The registry owns the mapping from kind names to class handles. It is the
//! declared way kinds come into existence and the source of zero-field
//! default instances; cloning itself never consults it, because every
//! instance carries its class handle directly.

use std::collections::HashMap;

use tracing::debug;

use crate::class::Class;
use crate::collections::Object;
use crate::core::error::{ValueError, ValueResult};

/// Registry of all defined classes
#[derive(Debug, Default)]
pub struct ClassRegistry {
    classes: HashMap<String, Class>,
}

impl ClassRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            classes: HashMap::new(),
        }
    }

    /// Define a class
    ///
    /// # Errors
    ///
    /// Returns `ValueError::DuplicateClass` if the name is already taken.
    pub fn define(&mut self, class: Class) -> ValueResult<()> {
        let name = class.name().to_string();
        if self.classes.contains_key(&name) {
            return Err(ValueError::duplicate_class(name));
        }

        debug!(
            class = %name,
            method_count = class.method_names().len(),
            "Registered class"
        );
        self.classes.insert(name, class);
        Ok(())
    }

    /// Look up a class by name
    pub fn get(&self, name: &str) -> Option<Class> {
        self.classes.get(name).cloned()
    }

    /// Look up a class by name or error
    ///
    /// # Errors
    ///
    /// Returns `ValueError::UnknownClass` if no class has that name.
    pub fn try_get(&self, name: &str) -> ValueResult<Class> {
        self.get(name)
            .ok_or_else(|| ValueError::unknown_class(name))
    }

    /// Check if a class exists
    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Get all class names
    pub fn names(&self) -> Vec<String> {
        self.classes.keys().cloned().collect()
    }

    /// Get the number of defined classes
    #[inline]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Check if the registry is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Construct a zero-field instance of the named class
    ///
    /// # Errors
    ///
    /// Returns `ValueError::UnknownClass` if no class has that name.
    pub fn instantiate(&self, name: &str) -> ValueResult<Object> {
        Ok(self.try_get(name)?.instantiate())
    }
}
