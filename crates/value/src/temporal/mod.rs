//! Temporal types for castor-value
//!
//! This module provides the instant-in-time container used by the value
//! model. Storage is shared between handles; see [`date::Date`].

/// Instant-in-time container
pub mod date;

// Re-export main types
pub use date::Date;
