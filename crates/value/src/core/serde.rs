//! Serde serialization and deserialization for Value
//!
//! JSON follows the usual dynamic-object conventions:
//!
//! - `Null`, `Undefined`, and `Function` serialize as JSON null at top level
//!   and in array positions; inside objects, `Undefined` and `Function`
//!   fields are skipped entirely
//! - `NaN` serializes as null, infinities as the strings `"+Infinity"` and
//!   `"-Infinity"`
//! - `Date` serializes as its ISO-8601 string
//!
//! Deserialization is total and classless: any JSON document becomes a
//! value, numbers become `Integer` when they fit `i64` exactly and `Float`
//! otherwise, and objects come back without a class.

use std::fmt;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::collections::{Array, Object};
use crate::core::value::Value;
use crate::scalar::Text;

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_none(),

            Value::Undefined => serializer.serialize_none(),

            Value::Boolean(b) => serializer.serialize_bool(*b),

            Value::Integer(i) => serializer.serialize_i64(*i),

            Value::Float(f) => {
                if f.is_nan() {
                    // JSON has no NaN
                    serializer.serialize_none()
                } else if *f == f64::INFINITY {
                    serializer.serialize_str("+Infinity")
                } else if *f == f64::NEG_INFINITY {
                    serializer.serialize_str("-Infinity")
                } else {
                    serializer.serialize_f64(*f)
                }
            }

            Value::Text(t) => serializer.serialize_str(t.as_str()),

            Value::Date(d) => serializer.serialize_str(&d.to_iso_string()),

            Value::Function(_) => serializer.serialize_none(),

            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let snapshot = arr.to_vec();
                let mut seq = serializer.serialize_seq(Some(snapshot.len()))?;
                for item in &snapshot {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }

            Value::Object(obj) => {
                use serde::ser::SerializeMap;
                let entries: Vec<(String, Value)> = obj
                    .entries()
                    .into_iter()
                    .filter(|(_, v)| !matches!(v, Value::Undefined | Value::Function(_)))
                    .collect();
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in &entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any valid JSON value")
    }

    fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Boolean(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Integer(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        if let Ok(i) = i64::try_from(v) {
            Ok(Value::Integer(i))
        } else {
            // Too large for i64, lose precision instead of failing
            Ok(Value::Float(v as f64))
        }
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Float(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        // Revive the strings the serializer uses for non-finite floats
        match v {
            "+Infinity" => Ok(Value::Float(f64::INFINITY)),
            "-Infinity" => Ok(Value::Float(f64::NEG_INFINITY)),
            "NaN" => Ok(Value::Float(f64::NAN)),
            _ => Ok(Value::Text(Text::new(v.to_string()))),
        }
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        self.visit_str(&v)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Null)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Null)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));

        while let Some(elem) = seq.next_element::<Value>()? {
            items.push(elem);
        }

        Ok(Value::Array(Array::from_vec(items)))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));

        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            entries.push((key, value));
        }

        Ok(Value::Object(Object::from_entries(entries)))
    }
}

// ==================== serde_json interop ====================

fn json_from_value(value: &Value) -> serde_json::Value {
    match value {
        Value::Null | Value::Undefined | Value::Function(_) => serde_json::Value::Null,
        Value::Boolean(b) => serde_json::Value::Bool(*b),
        Value::Integer(i) => serde_json::Value::Number((*i).into()),
        Value::Float(f) => {
            if *f == f64::INFINITY {
                serde_json::Value::String("+Infinity".to_string())
            } else if *f == f64::NEG_INFINITY {
                serde_json::Value::String("-Infinity".to_string())
            } else if let Some(n) = serde_json::Number::from_f64(*f) {
                serde_json::Value::Number(n)
            } else {
                // NaN
                serde_json::Value::Null
            }
        }
        Value::Text(t) => serde_json::Value::String(t.as_str().to_string()),
        Value::Date(d) => serde_json::Value::String(d.to_iso_string()),
        Value::Array(arr) => {
            serde_json::Value::Array(arr.to_vec().iter().map(json_from_value).collect())
        }
        Value::Object(obj) => {
            let map: serde_json::Map<String, serde_json::Value> = obj
                .entries()
                .into_iter()
                .filter(|(_, v)| !matches!(v, Value::Undefined | Value::Function(_)))
                .map(|(k, v)| (k, json_from_value(&v)))
                .collect();
            serde_json::Value::Object(map)
        }
    }
}

fn value_from_json(json: &serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(*b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Integer(i)
            } else if let Some(f) = n.as_f64() {
                Value::Float(f)
            } else {
                Value::Null
            }
        }
        serde_json::Value::String(s) => Value::Text(Text::from(s.as_str())),
        serde_json::Value::Array(items) => {
            Value::Array(items.iter().map(value_from_json).collect())
        }
        serde_json::Value::Object(map) => Value::Object(Object::from_entries(
            map.iter().map(|(k, v)| (k.clone(), value_from_json(v))),
        )),
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        json_from_value(value)
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        json_from_value(&value)
    }
}

impl From<&serde_json::Value> for Value {
    fn from(json: &serde_json::Value) -> Self {
        value_from_json(json)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        value_from_json(&json)
    }
}

impl Value {
    /// Convert to a `serde_json::Value`
    ///
    /// Classes do not survive the trip; an object serializes as its fields.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        json_from_value(self)
    }

    /// Build a value from a `serde_json::Value`
    ///
    /// Total: every JSON document converts. Objects come back classless,
    /// in the map's iteration order.
    #[must_use]
    pub fn from_json(json: &serde_json::Value) -> Value {
        value_from_json(json)
    }
}
