//! Declarative paths into nested data.
//!
//! A [`PathExpression`] is an immutable list of [`Step`]s built up one field
//! name or index at a time. Resolving it against a [`Value`](crate::value::Value)
//! walks the steps in order and either returns the value found, falls back
//! to a default or null, or reports why the lookup failed.
//!
//! # Resolution rules
//!
//! - `Field(name)` applies to objects containing `name`
//! - `Index(i)` applies to arrays with `0 <= i < len`
//! - Any other combination is a lookup failure
//!
//! On a lookup failure, a `default` is returned if one was given, otherwise
//! null if an `optional` type was given, otherwise [`PathError::PathNotFound`].
//!
//! # Examples
//!
//! ```
//! use datapath::path::{PathExpression, ResolveOptions, ValueType};
//! use datapath::value::Value;
//!
//! let data: Value = serde_json::json!({"foo": {"bar": [{"baz": 1}, {"baz": 2}]}}).into();
//! let bar = PathExpression::root().field("foo").field("bar");
//!
//! assert_eq!(bar.index(1).field("baz").get(&data).unwrap(), &Value::from(2));
//! assert!(bar.index(5).field("baz").get(&data).is_err());
//!
//! let options = ResolveOptions::new().with_type(ValueType::String);
//! assert!(bar.index(0).field("baz").resolve(&data, &options).is_err());
//! ```

pub mod error;
pub mod expression;
pub mod resolver;
pub mod step;
pub mod types;

pub use error::PathError;
pub use expression::PathExpression;
pub use resolver::{ResolveOptions, Resolver};
pub use step::Step;
pub use types::ValueType;
