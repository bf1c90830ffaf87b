//! Value kinds and classification utilities.
//!
//! This module defines `ValueKind`, a lightweight classification for `Value`
//! used in error messages, dispatch logging and type predicates.
//!
//! Quick example:
//! ```rust
//! use castor_value::{Value, ValueKind};
//!
//! let v = Value::from(3.14);
//! assert_eq!(ValueKind::from_value(&v), ValueKind::Float);
//! assert!(ValueKind::Float.is_numeric());
//! assert_eq!(ValueKind::Float.code(), 'f');
//! assert_eq!(ValueKind::from_code('i'), Some(ValueKind::Integer));
//! ```
use crate::core::value::Value;
use core::fmt::{Display, Formatter};

/// Represents the kind/type of a Value
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ValueKind {
    Null,
    Undefined,
    Boolean,
    Integer,
    Float,
    Text,
    Date,
    Array,
    Object,
    Function,
}

impl ValueKind {
    /// Get all available kinds
    pub fn all() -> Vec<Self> {
        vec![
            Self::Null,
            Self::Undefined,
            Self::Boolean,
            Self::Integer,
            Self::Float,
            Self::Text,
            Self::Date,
            Self::Array,
            Self::Object,
            Self::Function,
        ]
    }

    /// Check if this kind is numeric
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }

    /// Check if this kind is a collection
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::Array | Self::Object)
    }

    /// Check if this kind is primitive (not a collection)
    pub const fn is_primitive(&self) -> bool {
        !self.is_collection()
    }

    /// Check if this kind is temporal (date/time-related)
    pub const fn is_temporal(&self) -> bool {
        matches!(self, Self::Date)
    }

    /// Check if this kind is callable
    pub const fn is_callable(&self) -> bool {
        matches!(self, Self::Function)
    }

    /// Check if values of this kind are atomic for cloning purposes
    ///
    /// Scalar kinds are returned unchanged by a deep clone: they are either
    /// immutable (numbers, booleans, text, absence markers) or deliberately
    /// shared (functions).
    pub const fn is_scalar(&self) -> bool {
        matches!(
            self,
            Self::Undefined
                | Self::Boolean
                | Self::Integer
                | Self::Float
                | Self::Text
                | Self::Function
        )
    }

    /// Get the kind from a Value
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Undefined => Self::Undefined,
            Value::Boolean(_) => Self::Boolean,
            Value::Integer(_) => Self::Integer,
            Value::Float(_) => Self::Float,
            Value::Text(_) => Self::Text,
            Value::Date(_) => Self::Date,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
            Value::Function(_) => Self::Function,
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "null" | "nil" | "none" => Some(Self::Null),
            "undefined" | "void" => Some(Self::Undefined),
            "bool" | "boolean" => Some(Self::Boolean),
            "int" | "integer" | "i64" => Some(Self::Integer),
            "float" | "f64" | "double" => Some(Self::Float),
            "text" | "string" | "str" => Some(Self::Text),
            "date" | "instant" => Some(Self::Date),
            "array" | "list" | "vec" => Some(Self::Array),
            "object" | "map" | "dict" => Some(Self::Object),
            "function" | "callable" | "fn" => Some(Self::Function),
            _ => None,
        }
    }

    /// Get a descriptive name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Undefined => "undefined",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Text => "text",
            Self::Date => "date",
            Self::Array => "array",
            Self::Object => "object",
            Self::Function => "function",
        }
    }

    /// Get a short type code (useful for serialization)
    pub const fn code(&self) -> char {
        match self {
            Self::Null => 'n',
            Self::Undefined => 'u',
            Self::Boolean => 'b',
            Self::Integer => 'i',
            Self::Float => 'f',
            Self::Text => 's',
            Self::Date => 'd',
            Self::Array => 'a',
            Self::Object => 'o',
            Self::Function => 'c',
        }
    }

    /// Parse from type code
    pub fn from_code(c: char) -> Option<Self> {
        match c {
            'n' => Some(Self::Null),
            'u' => Some(Self::Undefined),
            'b' => Some(Self::Boolean),
            'i' => Some(Self::Integer),
            'f' => Some(Self::Float),
            's' => Some(Self::Text),
            'd' => Some(Self::Date),
            'a' => Some(Self::Array),
            'o' => Some(Self::Object),
            'c' => Some(Self::Function),
            _ => None,
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}
