//! Callable values for castor-value
//!
//! A `Function` is a named native callable stored as a value. Callables are
//! deliberately shared rather than duplicated: there are no copy semantics
//! for code, so a deep clone returns the same handle and invoking either
//! handle runs the same native function.

use std::fmt;
use std::sync::Arc;

use crate::core::error::ValueResult;
use crate::core::value::Value;

/// Type alias for the native code behind a function value
pub type NativeFn = fn(&[Value]) -> ValueResult<Value>;

/// Internal function storage
struct FunctionInner {
    name: String,
    call: NativeFn,
}

/// A named callable value
///
/// Equality is handle identity: two `Function` values compare equal exactly
/// when they share the same underlying callable.
#[derive(Clone)]
pub struct Function {
    inner: Arc<FunctionInner>,
}

impl Function {
    /// Create a named function from native code
    pub fn new(name: impl Into<String>, call: NativeFn) -> Self {
        Self {
            inner: Arc::new(FunctionInner {
                name: name.into(),
                call,
            }),
        }
    }

    /// Get the function name
    #[inline]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Invoke with the given arguments
    pub fn call(&self, args: &[Value]) -> ValueResult<Value> {
        (self.inner.call)(args)
    }

    /// Check whether two handles refer to the same function object
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.inner.name)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[function {}]", self.inner.name)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Function {}
