//! Array type for castor-value
//!
//! This module provides an ordered sequence with shared mutable storage:
//! - Cheap handle cloning via `Arc` (every handle observes mutations made
//!   through any other handle)
//! - In-place mutation guarded by `parking_lot::RwLock`
//! - Independent duplication is the job of [`crate::clone::deep_clone`],
//!   never of `Clone`

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::core::error::{ValueError, ValueResult};
use crate::core::value::Value;

/// Type alias for items stored in arrays
pub type ValueItem = Value;

/// Ordered sequence with shared mutable storage
///
/// Two handles obtained by cloning refer to one element store; mutating
/// through either is visible through both. [`Array::ptr_eq`] distinguishes
/// shared handles from independent stores.
#[derive(Debug, Clone)]
pub struct Array {
    inner: Arc<RwLock<Vec<ValueItem>>>,
}

impl Array {
    /// Create an empty array
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create from a Vec
    #[must_use]
    pub fn from_vec(vec: Vec<ValueItem>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(vec)),
        }
    }

    /// Create with preallocated capacity
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Vec::with_capacity(capacity))),
        }
    }

    /// Get the length
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Check if empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Get element at index
    ///
    /// Returns a handle to the stored value. For collection elements the
    /// handle shares storage with the store; use deep clone for an
    /// independent copy.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<ValueItem> {
        self.inner.read().get(index).cloned()
    }

    /// Get element at index or error
    ///
    /// # Errors
    ///
    /// Returns `ValueError::IndexOutOfBounds` if `index >= len()`
    pub fn try_get(&self, index: usize) -> ValueResult<ValueItem> {
        self.get(index)
            .ok_or_else(|| ValueError::index_out_of_bounds(index, self.len()))
    }

    /// Get first element
    #[must_use]
    pub fn first(&self) -> Option<ValueItem> {
        self.inner.read().first().cloned()
    }

    /// Get last element
    #[must_use]
    pub fn last(&self) -> Option<ValueItem> {
        self.inner.read().last().cloned()
    }

    /// Append an element in place
    pub fn push(&self, value: impl Into<ValueItem>) {
        self.inner.write().push(value.into());
    }

    /// Remove and return the last element
    pub fn pop(&self) -> Option<ValueItem> {
        self.inner.write().pop()
    }

    /// Replace the element at index in place
    ///
    /// # Errors
    ///
    /// Returns `ValueError::IndexOutOfBounds` if `index >= len()`
    pub fn set(&self, index: usize, value: impl Into<ValueItem>) -> ValueResult<()> {
        let mut guard = self.inner.write();
        let length = guard.len();
        match guard.get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                Ok(())
            }
            None => Err(ValueError::index_out_of_bounds(index, length)),
        }
    }

    /// Insert an element at index in place
    ///
    /// # Errors
    ///
    /// Returns `ValueError::IndexOutOfBounds` if `index > len()`
    pub fn insert(&self, index: usize, value: impl Into<ValueItem>) -> ValueResult<()> {
        let mut guard = self.inner.write();
        if index > guard.len() {
            return Err(ValueError::index_out_of_bounds(index, guard.len()));
        }
        guard.insert(index, value.into());
        Ok(())
    }

    /// Remove and return the element at index
    ///
    /// # Errors
    ///
    /// Returns `ValueError::IndexOutOfBounds` if `index >= len()`
    pub fn remove(&self, index: usize) -> ValueResult<ValueItem> {
        let mut guard = self.inner.write();
        if index >= guard.len() {
            return Err(ValueError::index_out_of_bounds(index, guard.len()));
        }
        Ok(guard.remove(index))
    }

    /// Remove all elements
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Check if the array contains a value (deep equality)
    pub fn contains(&self, value: &ValueItem) -> bool {
        self.to_vec().iter().any(|v| v == value)
    }

    /// Snapshot the elements as a Vec of handles
    ///
    /// The snapshot is taken under the read lock and released before the
    /// caller sees it, so iteration never holds the store locked.
    #[must_use]
    pub fn to_vec(&self) -> Vec<ValueItem> {
        self.inner.read().clone()
    }

    /// Iterate over a snapshot of the elements
    pub fn iter(&self) -> impl Iterator<Item = ValueItem> {
        self.to_vec().into_iter()
    }

    /// Check whether two handles share the same element store
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for Array {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        self.to_vec() == other.to_vec()
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        let mut first = true;
        for item in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

impl From<Vec<ValueItem>> for Array {
    fn from(vec: Vec<ValueItem>) -> Self {
        Self::from_vec(vec)
    }
}

impl FromIterator<ValueItem> for Array {
    fn from_iter<I: IntoIterator<Item = ValueItem>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

// ==================== IntoIterator ====================

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_vec().into_iter()
    }
}

impl IntoIterator for &Array {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_vec().into_iter()
    }
}

/// Create an array from a list of values
///
/// # Examples
///
/// ```
/// use castor_value::{array, Value};
///
/// let empty = array![];
/// assert!(empty.is_empty());
///
/// let items = array![1, 2, 3];
/// assert_eq!(items.len(), 3);
/// assert_eq!(items.get(2), Some(Value::integer(3)));
/// ```
#[macro_export]
macro_rules! array {
    () => {
        $crate::collections::Array::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::collections::Array::from_vec(vec![
            $($crate::core::value::Value::from($item)),+
        ])
    };
}
