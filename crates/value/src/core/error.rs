//! Value error types
//!
//! Self-contained error handling for all value operations.
//! No central error crate dependency - this module stands alone.

use thiserror::Error;

// ============================================================================
// MAIN ERROR TYPE
// ============================================================================

/// Value management errors
///
/// All fallible value operations return this error type. Deep cloning itself
/// is total and never produces one of these; they cover the surrounding
/// surface (indexed access, method dispatch, class registration, parsing,
/// conversions).
#[non_exhaustive]
#[derive(Error, Debug, Clone)]
pub enum ValueError {
    /// Type mismatch between expected and actual types
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// Conversion between types failed
    #[error("Cannot convert from {from} to {to}")]
    ConversionError { from: String, to: String },

    /// Array index out of bounds
    #[error("Index {index} out of bounds (length: {length})")]
    IndexOutOfBounds { index: usize, length: usize },

    /// Object key not found
    #[error("Key not found: '{key}'")]
    KeyNotFound { key: String },

    /// Class not present in the registry
    #[error("Unknown class: '{name}'")]
    UnknownClass { name: String },

    /// Class name already registered
    #[error("Class already defined: '{name}'")]
    DuplicateClass { name: String },

    /// Method not defined on the class
    #[error("Class '{class}' has no method '{method}'")]
    UnknownMethod { class: String, method: String },

    /// Operation not supported for this value type
    #[error("Operation '{operation}' not supported for {value_type}")]
    OperationNotSupported {
        operation: String,
        value_type: String,
    },

    /// Parse error for specific format
    #[error("Invalid {format_type} format: {input}")]
    ParseError {
        format_type: String,
        input: String,
        position: Option<usize>,
    },

    /// Value out of range
    #[error("Value {value} out of range [{min}, {max}]")]
    OutOfRange {
        value: String,
        min: String,
        max: String,
    },

    /// Validation error
    #[error("Validation failed: {reason}")]
    ValidationFailed { reason: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Deserialization error
    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    /// Context information (nested error with additional info)
    #[error("{message}: {source}")]
    WithContext {
        message: String,
        #[source]
        source: Box<ValueError>,
    },
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValueError {
    /// Create a type mismatch error
    pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a conversion error
    pub fn conversion_error(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::ConversionError {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create an index out of bounds error
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        Self::IndexOutOfBounds { index, length }
    }

    /// Create a key not found error
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    /// Create an unknown class error
    pub fn unknown_class(name: impl Into<String>) -> Self {
        Self::UnknownClass { name: name.into() }
    }

    /// Create a duplicate class error
    pub fn duplicate_class(name: impl Into<String>) -> Self {
        Self::DuplicateClass { name: name.into() }
    }

    /// Create an unknown method error
    pub fn unknown_method(class: impl Into<String>, method: impl Into<String>) -> Self {
        Self::UnknownMethod {
            class: class.into(),
            method: method.into(),
        }
    }

    /// Create an operation not supported error
    pub fn operation_not_supported(
        operation: impl Into<String>,
        value_type: impl Into<String>,
    ) -> Self {
        Self::OperationNotSupported {
            operation: operation.into(),
            value_type: value_type.into(),
        }
    }

    /// Create a parse error
    pub fn parse_error(format_type: impl Into<String>, input: impl Into<String>) -> Self {
        Self::ParseError {
            format_type: format_type.into(),
            input: input.into(),
            position: None,
        }
    }

    /// Create a parse error with position
    pub fn parse_error_at(
        format_type: impl Into<String>,
        input: impl Into<String>,
        position: usize,
    ) -> Self {
        Self::ParseError {
            format_type: format_type.into(),
            input: input.into(),
            position: Some(position),
        }
    }

    /// Create an out of range error
    pub fn out_of_range(
        value: impl Into<String>,
        min: impl Into<String>,
        max: impl Into<String>,
    ) -> Self {
        Self::OutOfRange {
            value: value.into(),
            min: min.into(),
            max: max.into(),
        }
    }

    /// Create a validation error
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::ValidationFailed {
            reason: reason.into(),
        }
    }

    /// Add context to an error
    pub fn with_context(self, message: impl Into<String>) -> Self {
        Self::WithContext {
            message: message.into(),
            source: Box::new(self),
        }
    }

    /// Add key context
    pub fn at_key(self, key: impl Into<String>) -> Self {
        self.with_context(format!("at key: '{}'", key.into()))
    }

    /// Add index context
    pub fn at_index(self, index: usize) -> Self {
        self.with_context(format!("at index: {}", index))
    }
}

// ============================================================================
// ERROR CLASSIFICATION
// ============================================================================

impl ValueError {
    /// Get error code for monitoring
    pub fn code(&self) -> &'static str {
        match self {
            Self::TypeMismatch { .. } => "VALUE_TYPE_MISMATCH",
            Self::ConversionError { .. } => "VALUE_CONVERSION_ERROR",
            Self::IndexOutOfBounds { .. } => "VALUE_INDEX_OUT_OF_BOUNDS",
            Self::KeyNotFound { .. } => "VALUE_KEY_NOT_FOUND",
            Self::UnknownClass { .. } => "VALUE_UNKNOWN_CLASS",
            Self::DuplicateClass { .. } => "VALUE_DUPLICATE_CLASS",
            Self::UnknownMethod { .. } => "VALUE_UNKNOWN_METHOD",
            Self::OperationNotSupported { .. } => "VALUE_OPERATION_NOT_SUPPORTED",
            Self::ParseError { .. } => "VALUE_PARSE_ERROR",
            Self::OutOfRange { .. } => "VALUE_OUT_OF_RANGE",
            Self::ValidationFailed { .. } => "VALUE_VALIDATION_FAILED",
            Self::SerializationError(_) => "VALUE_SERIALIZATION_ERROR",
            Self::DeserializationError(_) => "VALUE_DESERIALIZATION_ERROR",
            Self::WithContext { source, .. } => source.code(),
        }
    }

    /// Check if this is a client error (caller's fault)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::TypeMismatch { .. }
                | Self::ConversionError { .. }
                | Self::IndexOutOfBounds { .. }
                | Self::KeyNotFound { .. }
                | Self::UnknownClass { .. }
                | Self::DuplicateClass { .. }
                | Self::UnknownMethod { .. }
                | Self::OperationNotSupported { .. }
                | Self::ParseError { .. }
                | Self::OutOfRange { .. }
                | Self::ValidationFailed { .. }
        )
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        // Value errors are generally not retryable (client errors)
        matches!(
            self,
            Self::SerializationError(_) | Self::DeserializationError(_)
        )
    }
}

// ============================================================================
// EXTERNAL ERROR CONVERSIONS
// ============================================================================

/// Convert from serde_json errors
#[cfg(feature = "serde")]
impl From<serde_json::Error> for ValueError {
    fn from(error: serde_json::Error) -> Self {
        Self::SerializationError(error.to_string())
    }
}

// ============================================================================
// RESULT TYPE
// ============================================================================

/// Result type alias for value operations
pub type Result<T> = std::result::Result<T, ValueError>;

/// Canonical alias used throughout the crate
pub type ValueResult<T> = Result<T>;

// ============================================================================
// RESULT EXTENSION TRAIT
// ============================================================================

/// Extension trait for Result types (value-specific)
pub trait ValueResultExt<T> {
    /// Convert to ValueError with custom message
    fn or_value_error<S: Into<String>>(self, msg: S) -> Result<T>;

    /// Add context to error
    fn with_value_context<S: Into<String>, F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S;
}

impl<T, E> ValueResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error,
{
    fn or_value_error<S: Into<String>>(self, msg: S) -> Result<T> {
        self.map_err(|_| ValueError::validation(msg))
    }

    fn with_value_context<S: Into<String>, F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
    {
        self.map_err(|e| ValueError::validation(format!("{}: {}", f().into(), e)))
    }
}

// ============================================================================
// TESTS
// ============================================================================
