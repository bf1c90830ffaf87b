//! Core modules
//!
//! Fundamental types and utilities of the value model.
//!
//! ## Core Components
//!
//! ### [`value`] - The Value enum
//!
//! The central [`Value`] enum represents any data value. Scalars are stored
//! inline; text, dates, collections, and functions are cheap Arc-backed
//! handles.
//!
//! ### [`error`] - Error handling
//!
//! One strongly-typed [`ValueError`] enum covering type mismatches, access
//! errors, class and method lookups, parsing, and serialization.
//!
//! ### [`kind`] - Type classification
//!
//! The [`ValueKind`] system provides type classification, type codes for
//! debugging, and category checks (numeric, collection, scalar).
//!
//! ### [`convert`] - Conversions
//!
//! `From` implementations for Rust primitives plus strict `as_*`/`try_*`
//! accessors.
//!
//! Most users interact with re-exported items from the crate root, but this
//! module provides direct access for advanced use cases.

pub mod convert;
pub mod display;
pub mod error;
pub mod kind;
#[cfg(feature = "serde")]
pub mod serde;
pub mod value;

/// Convenient re-exports of the most commonly used core types.
pub use error::{ValueError, ValueResult, ValueResultExt};
pub use kind::ValueKind;
pub use value::Value;
