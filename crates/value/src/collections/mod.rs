//! Collection value types
//!
//! Containers with shared mutable storage:
//! - [`Array`]: ordered sequence of values
//! - [`Object`]: ordered key-value fields, optionally classed

pub mod array;
pub mod object;

pub use array::Array;
pub use object::{Object, ObjectBuilder};
