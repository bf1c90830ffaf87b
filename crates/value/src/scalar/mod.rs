//! Scalar types for castor-value
//!
//! This module contains the atomic value types: they are returned unchanged
//! by a deep clone because they are either immutable (text) or deliberately
//! shared (functions).

pub mod function;
pub mod text;

// Re-exports
pub use function::{Function, NativeFn};
pub use text::Text;
