//! Datapath - declarative, reusable paths into nested data.
//!
//! Build a [`PathExpression`] once, one field name or index at a time, and
//! resolve it against any [`Value`] later:
//!
//! ```
//! use datapath::{root, ResolveOptions, ValueType, Value};
//!
//! let data: Value = serde_json::json!({"foo": {"bar": [{"baz": 1}, {"baz": 2}]}}).into();
//!
//! let baz = |i| root().field("foo").field("bar").index(i).field("baz");
//! assert_eq!(baz(0).get(&data).unwrap(), &Value::from(1));
//! assert_eq!(baz(5).resolve_or(&data, 42), Value::from(42));
//!
//! let optional = ResolveOptions::new().with_optional(ValueType::Integer);
//! assert!(baz(5).resolve(&data, &optional).unwrap().is_null());
//! ```

pub mod config;
pub mod file;
pub mod path;
pub mod value;

pub use path::{PathError, PathExpression, ResolveOptions, Step, ValueType};
pub use value::{Number, Value};

/// Returns the empty path, the starting point for building any path.
pub fn root() -> PathExpression {
    PathExpression::root()
}
