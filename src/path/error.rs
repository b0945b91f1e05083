//! Error types for path resolution.

use super::step::Step;
use super::types::ValueType;
use crate::value::Value;
use std::fmt;

/// Errors that can occur while resolving a path.
#[derive(Debug, Clone, PartialEq)]
pub enum PathError {
    /// A step could not be applied to the value reached so far.
    PathNotFound {
        /// The full path being resolved, rendered for display.
        path: String,
        /// Zero-based position of the failing step within the path.
        position: usize,
        step: Step,
        /// The value the step was applied to.
        value: Value,
    },
    /// The resolved value does not satisfy the expected type.
    TypeMismatch {
        path: String,
        expected: ValueType,
        actual: &'static str,
    },
}

impl PathError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, PathError::PathNotFound { .. })
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, PathError::TypeMismatch { .. })
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::PathNotFound {
                path,
                position,
                step,
                value,
            } => write!(
                f,
                "Invalid path or index {} (step {} of {}) at {}",
                step,
                position + 1,
                path,
                value
            ),
            PathError::TypeMismatch {
                path,
                expected,
                actual,
            } => write!(
                f,
                "Type mismatch at {}: expected {}, found {}",
                path, expected, actual
            ),
        }
    }
}

impl std::error::Error for PathError {}
