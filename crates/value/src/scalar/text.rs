//! Text (UTF-8 string) type for castor-value
//!
//! This module provides a Text type that:
//! - Guarantees UTF-8 validity
//! - Clones cheaply via `Arc<str>`
//! - Is immutable, so sharing the allocation between a value and its deep
//!   clone is safe and intentional

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

/// UTF-8 text string with efficient cloning
///
/// Uses `Arc<str>` internally for cheap cloning of large strings. There is
/// no mutation surface, so handle sharing is never observable.
#[derive(Debug, Clone)]
pub struct Text {
    inner: Arc<str>,
}

impl Text {
    /// Create a new Text from a String (takes ownership)
    pub fn new(s: String) -> Self {
        Self {
            inner: Arc::from(s.into_boxed_str()),
        }
    }

    /// Get the string as &str
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Get the byte length
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Get the character count (O(n) operation)
    pub fn char_count(&self) -> usize {
        self.inner.chars().count()
    }

    /// Check if this text contains the given pattern
    pub fn contains(&self, pattern: &str) -> bool {
        self.inner.contains(pattern)
    }

    /// Check if this text starts with the given pattern
    pub fn starts_with(&self, pattern: &str) -> bool {
        self.inner.starts_with(pattern)
    }

    /// Check if this text ends with the given pattern
    pub fn ends_with(&self, pattern: &str) -> bool {
        self.inner.ends_with(pattern)
    }

    /// Check whether two handles share the same allocation
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Get underlying Arc for zero-copy cloning
    pub fn into_arc(self) -> Arc<str> {
        self.inner
    }
}

// Deref to &str for convenience
impl Deref for Text {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl PartialEq for Text {
    fn eq(&self, other: &Self) -> bool {
        self.inner.as_ref() == other.inner.as_ref()
    }
}

impl Eq for Text {}

impl PartialOrd for Text {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Text {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.inner.as_ref().cmp(other.inner.as_ref())
    }
}

impl Hash for Text {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.as_ref().hash(state);
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

// Conversions
impl From<String> for Text {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self {
            inner: Arc::from(s),
        }
    }
}

impl From<Arc<str>> for Text {
    fn from(arc: Arc<str>) -> Self {
        Self { inner: arc }
    }
}

impl From<Text> for String {
    fn from(text: Text) -> Self {
        text.inner.to_string()
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}
