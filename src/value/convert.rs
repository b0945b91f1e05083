//! Conversions from serde's JSON and YAML value types into [`Value`].
//!
//! Documents are decoded by `serde_json` or `serde_yaml` and then converted
//! here, so the path resolver only ever sees the closed [`Value`] model.

use super::{Number, Value};
use indexmap::IndexMap;

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
            serde_json::Value::Array(arr) => {
                Value::Array(arr.into_iter().map(Into::into).collect())
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Number(n) => Value::Number(json_number(&n)),
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Null => Value::Null,
        }
    }
}

impl From<serde_yaml::Value> for Value {
    fn from(value: serde_yaml::Value) -> Self {
        match value {
            serde_yaml::Value::Mapping(map) => {
                let mut entries = IndexMap::with_capacity(map.len());
                for (k, v) in map {
                    let key = yaml_key(k);
                    if entries.contains_key(&key) {
                        log::warn!(
                            "duplicate YAML key '{}' after stringifying; keeping the last value",
                            key
                        );
                    }
                    entries.insert(key, Value::from(v));
                }
                Value::Object(entries)
            }
            serde_yaml::Value::Sequence(seq) => {
                Value::Array(seq.into_iter().map(Into::into).collect())
            }
            serde_yaml::Value::String(s) => Value::String(s),
            serde_yaml::Value::Number(n) => Value::Number(yaml_number(&n)),
            serde_yaml::Value::Bool(b) => Value::Boolean(b),
            serde_yaml::Value::Null => Value::Null,
            // Tags carry no meaning for lookups
            serde_yaml::Value::Tagged(tagged) => tagged.value.into(),
        }
    }
}

/// Integers that fit in `i64` stay integers; larger unsigned values become floats.
fn json_number(n: &serde_json::Number) -> Number {
    match n.as_i64() {
        Some(i) => Number::Integer(i),
        None => Number::Float(n.as_f64().unwrap_or(f64::NAN)),
    }
}

fn yaml_number(n: &serde_yaml::Number) -> Number {
    match n.as_i64() {
        Some(i) => Number::Integer(i),
        None => Number::Float(n.as_f64().unwrap_or(f64::NAN)),
    }
}

/// Renders a YAML mapping key as a string.
///
/// Object keys are always strings in [`Value`], so scalar keys such as
/// `1: one` or `true: yes` are stringified. Collection keys fall back to
/// their compact JSON rendering. Keys that collide after stringifying
/// (`1` and `"1"`) keep the position of the first and the value of the last.
fn yaml_key(key: serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s,
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Null => "null".to_string(),
        serde_yaml::Value::Tagged(tagged) => yaml_key(tagged.value),
        other => Value::from(other).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_preserves_key_order() {
        let json: serde_json::Value =
            serde_json::from_str(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
        let value = Value::from(json);

        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_from_json_numbers() {
        let json: serde_json::Value =
            serde_json::from_str(r#"[1, -2, 2.5, 18446744073709551615]"#).unwrap();
        let value = Value::from(json);
        let items = value.as_array().unwrap();

        assert_eq!(items[0], Value::Number(Number::Integer(1)));
        assert_eq!(items[1], Value::Number(Number::Integer(-2)));
        assert_eq!(items[2], Value::Number(Number::Float(2.5)));
        assert!(items[3].as_f64().is_some());
        assert_eq!(items[3].as_i64(), None);
    }

    #[test]
    fn test_from_yaml_nested() {
        let yaml: serde_yaml::Value = serde_yaml::from_str(
            "server:\n  port: 8080\n  hosts:\n    - a\n    - b\nenabled: true\n",
        )
        .unwrap();
        let value = Value::from(yaml);

        let server = value.as_object().unwrap().get("server").unwrap();
        assert_eq!(
            server.as_object().unwrap().get("port"),
            Some(&Value::from(8080))
        );
        assert_eq!(
            value.as_object().unwrap().get("enabled"),
            Some(&Value::from(true))
        );
    }

    #[test]
    fn test_yaml_non_string_keys_are_stringified() {
        let yaml: serde_yaml::Value =
            serde_yaml::from_str("1: one\ntrue: yes\n~: nothing\n").unwrap();
        let value = Value::from(yaml);
        let entries = value.as_object().unwrap();

        assert_eq!(entries.get("1"), Some(&Value::from("one")));
        assert_eq!(entries.get("true"), Some(&Value::from("yes")));
        assert_eq!(entries.get("null"), Some(&Value::from("nothing")));
    }

    #[test]
    fn test_yaml_colliding_keys_keep_last_value() {
        let yaml: serde_yaml::Value = serde_yaml::from_str("1: a\n\"1\": b\nz: c\n").unwrap();
        let value = Value::from(yaml);
        let entries = value.as_object().unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries.get("1"), Some(&Value::from("b")));
        assert_eq!(entries.get_index_of("1"), Some(0));
    }

    #[test]
    fn test_yaml_tags_are_unwrapped() {
        let yaml: serde_yaml::Value = serde_yaml::from_str("point: !Point [1, 2]\n").unwrap();
        let value = Value::from(yaml);
        let point = value.as_object().unwrap().get("point").unwrap();

        assert_eq!(point, &Value::from(vec![Value::from(1), Value::from(2)]));
    }
}
