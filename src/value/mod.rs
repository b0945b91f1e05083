//! Dynamic value representation that paths are resolved against.
//!
//! `Value` is a closed sum type covering everything a JSON or YAML document
//! can hold: objects, arrays, strings, numbers, booleans, and null. Objects
//! keep their keys in insertion order.
//!
//! # Example
//!
//! ```
//! use datapath::value::{Number, Value};
//! use indexmap::IndexMap;
//!
//! let mut map = IndexMap::new();
//! map.insert("name".to_string(), Value::from("datapath"));
//! map.insert("version".to_string(), Value::Number(Number::Integer(1)));
//! let object = Value::Object(map);
//!
//! assert!(object.is_object());
//! assert_eq!(object.type_name(), "object");
//! ```

pub mod convert;

use crate::path::Step;
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// A number held by a [`Value`], either an integer or a float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }
}

/// A dynamically-shaped data value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Key-value pairs in insertion order
    Object(IndexMap<String, Value>),
    /// An ordered sequence of values
    Array(Vec<Value>),
    String(String),
    Number(Number),
    Boolean(bool),
    #[default]
    Null,
}

impl Value {
    /// Returns the kind name used in diagnostics.
    ///
    /// # Example
    ///
    /// ```
    /// use datapath::value::Value;
    ///
    /// assert_eq!(Value::from(1).type_name(), "integer");
    /// assert_eq!(Value::from(1.5).type_name(), "float");
    /// assert_eq!(Value::Null.type_name(), "null");
    /// ```
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Object(_) => "object",
            Value::Array(_) => "array",
            Value::String(_) => "string",
            Value::Number(Number::Integer(_)) => "integer",
            Value::Number(Number::Float(_)) => "float",
            Value::Boolean(_) => "boolean",
            Value::Null => "null",
        }
    }

    /// Looks up a single step in this value.
    ///
    /// Field steps only apply to objects and index steps only apply to
    /// arrays, with the index in `[0, len)`. Anything else yields `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use datapath::path::Step;
    /// use datapath::value::Value;
    ///
    /// let arr = Value::Array(vec![Value::from("a"), Value::from("b")]);
    /// assert_eq!(arr.get(&Step::Index(1)), Some(&Value::from("b")));
    /// assert_eq!(arr.get(&Step::Index(2)), None);
    /// assert_eq!(arr.get(&Step::Index(-1)), None);
    /// assert_eq!(arr.get(&Step::from("len")), None);
    /// ```
    pub fn get(&self, step: &Step) -> Option<&Value> {
        match (self, step) {
            (Value::Object(entries), Step::Field(name)) => entries.get(name.as_str()),
            (Value::Array(items), Step::Index(idx)) => {
                usize::try_from(*idx).ok().and_then(|i| items.get(i))
            }
            _ => None,
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer held by this value. Floats are not truncated.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(Number::Integer(i)) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(entries) => Some(entries),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    /// Renders the value as compact JSON.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => f.write_str(&json),
            Err(_) => Err(std::fmt::Error),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::String(s) => serializer.serialize_str(s),
            Value::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Null => serializer.serialize_unit(),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Number(Number::Integer(i))
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Number(Number::Integer(i64::from(i)))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Number(Number::Integer(i64::from(i)))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Number(Number::Float(f))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(entries: IndexMap<String, Value>) -> Self {
        Value::Object(entries)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_display() {
        assert_eq!(format!("{}", Number::Integer(42)), "42");
        assert_eq!(format!("{}", Number::Float(42.5)), "42.5");
    }

    #[test]
    fn test_number_type_checks() {
        let int = Number::Integer(42);
        assert!(int.is_integer());
        assert!(!int.is_float());

        let float = Number::Float(42.0);
        assert!(float.is_float());
        assert!(!float.is_integer());
        assert_eq!(float.as_f64(), 42.0);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Object(IndexMap::new()).type_name(), "object");
        assert_eq!(Value::Array(vec![]).type_name(), "array");
        assert_eq!(Value::from("x").type_name(), "string");
        assert_eq!(Value::from(true).type_name(), "boolean");
    }

    #[test]
    fn test_get_field_on_object() {
        let mut map = IndexMap::new();
        map.insert("key".to_string(), Value::from(7));
        let obj = Value::Object(map);

        assert_eq!(obj.get(&Step::from("key")), Some(&Value::from(7)));
        assert_eq!(obj.get(&Step::from("missing")), None);
        assert_eq!(obj.get(&Step::Index(0)), None);
    }

    #[test]
    fn test_get_on_scalar_is_none() {
        assert_eq!(Value::from(1).get(&Step::Index(0)), None);
        assert_eq!(Value::from("abc").get(&Step::Index(0)), None);
        assert_eq!(Value::Null.get(&Step::from("a")), None);
    }

    #[test]
    fn test_as_i64_does_not_truncate_floats() {
        assert_eq!(Value::from(3).as_i64(), Some(3));
        assert_eq!(Value::from(3.0).as_i64(), None);
        assert_eq!(Value::from(3).as_f64(), Some(3.0));
    }

    #[test]
    fn test_as_bool_and_as_str() {
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from(1).as_bool(), None);
        assert_eq!(Value::from("on").as_bool(), None);
        assert_eq!(Value::from("on").as_str(), Some("on"));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some("a")), Value::from("a"));
    }

    #[test]
    fn test_display_is_compact_json() {
        let mut map = IndexMap::new();
        map.insert("b".to_string(), Value::from(vec![Value::from(1), Value::Null]));
        map.insert("a".to_string(), Value::from(false));
        assert_eq!(Value::Object(map).to_string(), r#"{"b":[1,null],"a":false}"#);
    }
}
