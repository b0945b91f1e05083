//! Type descriptors for post-resolution assertions.

use crate::value::{Number, Value};
use std::fmt;

/// The expected type of a resolved value.
///
/// Integer and float are distinct kinds: `1.0` is not an integer, and
/// booleans never count as numbers. Use [`ValueType::Number`] to accept both
/// numeric kinds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Matches every value, including null
    Any,
    Null,
    Boolean,
    Integer,
    Float,
    /// Integer or float
    Number,
    String,
    Array,
    Object,
    /// Matches if any of the alternatives matches
    OneOf(Vec<ValueType>),
}

impl ValueType {
    /// Returns true if `value` conforms to this type.
    ///
    /// # Example
    ///
    /// ```
    /// use datapath::path::ValueType;
    /// use datapath::value::Value;
    ///
    /// assert!(ValueType::Integer.matches(&Value::from(1)));
    /// assert!(!ValueType::Integer.matches(&Value::from(1.0)));
    /// assert!(ValueType::Number.matches(&Value::from(1.0)));
    /// assert!(!ValueType::String.matches(&Value::Null));
    /// ```
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            ValueType::Any => true,
            ValueType::Null => value.is_null(),
            ValueType::Boolean => matches!(value, Value::Boolean(_)),
            ValueType::Integer => matches!(value, Value::Number(Number::Integer(_))),
            ValueType::Float => matches!(value, Value::Number(Number::Float(_))),
            ValueType::Number => matches!(value, Value::Number(_)),
            ValueType::String => matches!(value, Value::String(_)),
            ValueType::Array => matches!(value, Value::Array(_)),
            ValueType::Object => matches!(value, Value::Object(_)),
            ValueType::OneOf(alternatives) => alternatives.iter().any(|ty| ty.matches(value)),
        }
    }

    /// Returns true if null satisfies this type.
    pub fn accepts_null(&self) -> bool {
        self.matches(&Value::Null)
    }

    /// Parses a type name as written on the command line, e.g. `integer` or
    /// `string|null`.
    ///
    /// Returns `None` for unknown names.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.contains('|') {
            let alternatives = name
                .split('|')
                .map(|part| Self::from_name(part.trim()))
                .collect::<Option<Vec<_>>>()?;
            return Some(ValueType::OneOf(alternatives));
        }

        let ty = match name {
            "any" => ValueType::Any,
            "null" => ValueType::Null,
            "boolean" | "bool" => ValueType::Boolean,
            "integer" | "int" => ValueType::Integer,
            "float" => ValueType::Float,
            "number" => ValueType::Number,
            "string" | "str" => ValueType::String,
            "array" | "list" => ValueType::Array,
            "object" | "map" => ValueType::Object,
            _ => return None,
        };
        Some(ty)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Any => f.write_str("any"),
            ValueType::Null => f.write_str("null"),
            ValueType::Boolean => f.write_str("boolean"),
            ValueType::Integer => f.write_str("integer"),
            ValueType::Float => f.write_str("float"),
            ValueType::Number => f.write_str("number"),
            ValueType::String => f.write_str("string"),
            ValueType::Array => f.write_str("array"),
            ValueType::Object => f.write_str("object"),
            ValueType::OneOf(alternatives) => {
                for (i, ty) in alternatives.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{}", ty)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booleans_are_not_numbers() {
        let value = Value::from(true);
        assert!(!ValueType::Integer.matches(&value));
        assert!(!ValueType::Number.matches(&value));
        assert!(ValueType::Boolean.matches(&value));
    }

    #[test]
    fn test_accepts_null() {
        assert!(ValueType::Any.accepts_null());
        assert!(ValueType::Null.accepts_null());
        assert!(ValueType::OneOf(vec![ValueType::String, ValueType::Null]).accepts_null());
        assert!(!ValueType::String.accepts_null());
        assert!(!ValueType::OneOf(vec![]).accepts_null());
    }

    #[test]
    fn test_one_of_matches_any_alternative() {
        let ty = ValueType::OneOf(vec![ValueType::Integer, ValueType::String]);
        assert!(ty.matches(&Value::from(1)));
        assert!(ty.matches(&Value::from("one")));
        assert!(!ty.matches(&Value::from(1.5)));
    }

    #[test]
    fn test_from_name() {
        assert_eq!(ValueType::from_name("int"), Some(ValueType::Integer));
        assert_eq!(ValueType::from_name("object"), Some(ValueType::Object));
        assert_eq!(
            ValueType::from_name("string | null"),
            Some(ValueType::OneOf(vec![ValueType::String, ValueType::Null]))
        );
        assert_eq!(ValueType::from_name("integr"), None);
        assert_eq!(ValueType::from_name("string|bogus"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(ValueType::Number.to_string(), "number");
        assert_eq!(
            ValueType::OneOf(vec![ValueType::Integer, ValueType::Null]).to_string(),
            "integer | null"
        );
    }
}
