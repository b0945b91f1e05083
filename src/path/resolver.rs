use super::error::PathError;
use super::expression::PathExpression;
use super::types::ValueType;
use crate::value::Value;
use std::borrow::Cow;

/// Options controlling how a path is resolved.
///
/// * `default` - returned as-is when a step cannot be resolved; never type checked
/// * `type_` - the resolved value must match this type
/// * `optional` - the resolved value must be null or match this type, and a
///   failed lookup yields null instead of an error
/// * `check_type` - when false, `type_` and `optional` are not asserted
#[derive(Debug, Clone, PartialEq)]
pub struct ResolveOptions {
    pub default: Option<Value>,
    pub type_: Option<ValueType>,
    pub optional: Option<ValueType>,
    pub check_type: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            default: None,
            type_: None,
            optional: None,
            check_type: true,
        }
    }
}

impl ResolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_type(mut self, ty: ValueType) -> Self {
        self.type_ = Some(ty);
        self
    }

    pub fn with_optional(mut self, ty: ValueType) -> Self {
        self.optional = Some(ty);
        self
    }

    pub fn with_check_type(mut self, check_type: bool) -> Self {
        self.check_type = check_type;
        self
    }
}

/// Walks a [`PathExpression`] over a borrowed input value.
pub struct Resolver<'a> {
    root: &'a Value,
}

impl<'a> Resolver<'a> {
    pub fn new(root: &'a Value) -> Self {
        Resolver { root }
    }

    /// Follows the steps of `path`, stopping at the first one that cannot
    /// be applied.
    ///
    /// On failure returns the position of that step and the value it was
    /// applied to. Nothing is copied or rendered here.
    fn walk(&self, path: &PathExpression) -> Result<&'a Value, (usize, &'a Value)> {
        let mut current = self.root;
        for (position, step) in path.steps().iter().enumerate() {
            current = current.get(step).ok_or((position, current))?;
        }
        Ok(current)
    }

    /// Follows every step of `path` strictly, failing on the first step
    /// that cannot be applied.
    pub fn lookup(&self, path: &PathExpression) -> Result<&'a Value, PathError> {
        self.walk(path)
            .map_err(|(position, value)| not_found(path, position, value))
    }

    /// Returns the value at `path`, or `None` if any step cannot be applied.
    pub fn find(&self, path: &PathExpression) -> Option<&'a Value> {
        self.walk(path).ok()
    }

    /// Resolves `path` with fallback and type assertion as configured by `options`.
    ///
    /// A failed lookup returns `options.default` if set, else null if
    /// `options.optional` is set, else the lookup error. A successful lookup
    /// is then checked against `type_` (or `optional` when no `type_` is
    /// given) unless `check_type` is false.
    pub fn resolve(
        &self,
        path: &PathExpression,
        options: &ResolveOptions,
    ) -> Result<Cow<'a, Value>, PathError> {
        let value = match self.walk(path) {
            Ok(value) => value,
            Err((position, value)) => {
                if let Some(default) = &options.default {
                    log::trace!("{}: using default, step {} not found", path, position + 1);
                    return Ok(Cow::Owned(default.clone()));
                }
                if options.optional.is_some() {
                    log::trace!("{}: optional lookup, step {} not found", path, position + 1);
                    return Ok(Cow::Owned(Value::Null));
                }
                return Err(not_found(path, position, value));
            }
        };

        if options.check_type {
            check_type(path, value, options)?;
        }
        Ok(Cow::Borrowed(value))
    }
}

fn not_found(path: &PathExpression, position: usize, value: &Value) -> PathError {
    PathError::PathNotFound {
        path: path.to_string(),
        position,
        step: path.steps()[position].clone(),
        value: value.clone(),
    }
}

/// Asserts the resolved value against the requested type.
///
/// `type_` is strictly stronger than `optional`, so only `type_` is checked
/// when both are given.
fn check_type(
    path: &PathExpression,
    value: &Value,
    options: &ResolveOptions,
) -> Result<(), PathError> {
    let (expected, ok) = match (&options.type_, &options.optional) {
        (Some(ty), _) => (ty, ty.matches(value)),
        (None, Some(ty)) => (ty, value.is_null() || ty.matches(value)),
        (None, None) => return Ok(()),
    };

    if ok {
        Ok(())
    } else {
        Err(PathError::TypeMismatch {
            path: path.to_string(),
            expected: expected.clone(),
            actual: value.type_name(),
        })
    }
}

impl PathExpression {
    /// Resolves this path against `data`.
    ///
    /// # Example
    ///
    /// ```
    /// use datapath::{PathExpression, ResolveOptions, ValueType, Value};
    ///
    /// let data = Value::from(vec![Value::from(10), Value::from(20)]);
    /// let second = PathExpression::root().index(1);
    /// let tenth = PathExpression::root().index(9);
    ///
    /// let options = ResolveOptions::new().with_type(ValueType::Integer);
    /// assert_eq!(*second.resolve(&data, &options).unwrap(), Value::from(20));
    ///
    /// let options = ResolveOptions::new().with_default(0);
    /// assert_eq!(*tenth.resolve(&data, &options).unwrap(), Value::from(0));
    ///
    /// let options = ResolveOptions::new().with_optional(ValueType::Integer);
    /// assert!(tenth.resolve(&data, &options).unwrap().is_null());
    ///
    /// assert!(tenth.resolve(&data, &ResolveOptions::new()).is_err());
    /// ```
    pub fn resolve<'a>(
        &self,
        data: &'a Value,
        options: &ResolveOptions,
    ) -> Result<Cow<'a, Value>, PathError> {
        Resolver::new(data).resolve(self, options)
    }

    /// Resolves this path strictly, with no fallback and no type assertion.
    pub fn get<'a>(&self, data: &'a Value) -> Result<&'a Value, PathError> {
        Resolver::new(data).lookup(self)
    }

    /// Resolves this path, returning `default` if any step cannot be applied.
    pub fn resolve_or(&self, data: &Value, default: impl Into<Value>) -> Value {
        match Resolver::new(data).find(self) {
            Some(value) => value.clone(),
            None => default.into(),
        }
    }

    /// Resolves this path, returning `None` if any step cannot be applied.
    pub fn resolve_optional<'a>(&self, data: &'a Value) -> Option<&'a Value> {
        Resolver::new(data).find(self)
    }

    /// Resolves this path strictly and asserts the result has type `ty`.
    pub fn resolve_as<'a>(
        &self,
        data: &'a Value,
        ty: &ValueType,
    ) -> Result<&'a Value, PathError> {
        let value = self.get(data)?;
        if ty.matches(value) {
            Ok(value)
        } else {
            Err(PathError::TypeMismatch {
                path: self.to_string(),
                expected: ty.clone(),
                actual: value.type_name(),
            })
        }
    }
}
