//! Display implementations for Value
//!
//! This module provides human-readable formatting for all Value types.

use std::fmt;

use crate::core::value::Value;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),

            Value::Undefined => write!(f, "undefined"),

            Value::Boolean(b) => write!(f, "{b}"),

            Value::Integer(i) => write!(f, "{i}"),

            Value::Float(fl) => {
                if fl.is_nan() {
                    write!(f, "NaN")
                } else if *fl == f64::INFINITY {
                    write!(f, "+Infinity")
                } else if *fl == f64::NEG_INFINITY {
                    write!(f, "-Infinity")
                } else {
                    write!(f, "{fl}")
                }
            }

            Value::Text(t) => write!(f, "{}", t.as_str()),

            Value::Date(d) => write!(f, "{d}"),

            Value::Array(arr) => write!(f, "{arr}"),

            Value::Object(obj) => write!(f, "{obj}"),

            Value::Function(func) => write!(f, "{func}"),
        }
    }
}
