//! # Castor Value
//!
//! Dynamic value model with reference-semantics containers and deep cloning.
//!
//! ## Features
//!
//! - **One `Value` enum**: nulls, booleans, integers, floats, text, dates,
//!   arrays, objects, and native functions behind a single tagged type
//! - **Reference semantics**: `Value::clone` is a cheap handle copy; two
//!   clones of a container observe each other's mutations
//! - **Deep cloning**: [`deep_clone`] rebuilds a value with fresh storage at
//!   every depth, so the copy and the original never share mutable state
//! - **Classes**: named kinds with native methods; instances keep their
//!   class identity through deep clones
//! - **JSON interop** (feature `serde`): total conversion in both directions
//!
//! ## Quick Start
//!
//! ```rust
//! use castor_value::{deep_clone, object, Value};
//!
//! let original = Value::object(object! {
//!     "name" => Value::text("widget"),
//!     "tags" => Value::from(vec![Value::text("a"), Value::text("b")]),
//! });
//!
//! // An independent copy: equal now, disconnected from here on
//! let copy = deep_clone(&original);
//! assert_eq!(copy, original);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): serde support and `serde_json` interop

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(clippy::all)]

pub mod class;
pub mod clone;
pub mod collections;
pub mod core;
pub mod scalar;
pub mod temporal;

// Re-export core types
pub use crate::core::error::{ValueError, ValueResult, ValueResultExt};
pub use crate::core::kind::ValueKind;
pub use crate::core::value::Value;

// Re-export scalar and collection types
pub use collections::{Array, Object, ObjectBuilder};
pub use scalar::{Function, NativeFn, Text};

// Re-export temporal types
pub use temporal::Date;

// Re-export the class system
pub use class::{Class, ClassBuilder, ClassRegistry, Method};

// Re-export the deep clone entry point
pub use clone::deep_clone;

// Re-export serde_json::json! macro for convenience
#[cfg(feature = "serde")]
pub use serde_json::json;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{Value, ValueError, ValueKind, ValueResult, ValueResultExt, deep_clone};
    pub use crate::{Array, Date, Function, Object, ObjectBuilder, Text};
    pub use crate::{Class, ClassBuilder, ClassRegistry};

    #[cfg(feature = "serde")]
    pub use serde_json::json;
}
