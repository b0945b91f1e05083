//! Access keys that make up a path.

use std::fmt;

/// A single step in a [`PathExpression`](super::PathExpression).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Step {
    /// Named member of an object (`.name`)
    Field(String),
    /// Position in an array (`[0]`). Any value is accepted here; the
    /// resolver rejects indexes outside `[0, len)`.
    Index(i64),
}

impl Step {
    pub fn as_field(&self) -> Option<&str> {
        match self {
            Step::Field(name) => Some(name),
            Step::Index(_) => None,
        }
    }

    pub fn as_index(&self) -> Option<i64> {
        match self {
            Step::Field(_) => None,
            Step::Index(idx) => Some(*idx),
        }
    }

    /// Returns true if the name can be written after a `.` without quoting.
    fn is_plain_identifier(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(c) if c.is_alphabetic() || c == '_' => {}
            _ => return false,
        }
        chars.all(|c| c.is_alphanumeric() || c == '_' || c == '-')
    }

    /// Writes the step as it appears in a rendered path, e.g. `.foo`,
    /// `["a key"]` or `[3]`.
    pub(crate) fn write_segment(&self, f: &mut impl fmt::Write) -> fmt::Result {
        match self {
            Step::Field(name) if Self::is_plain_identifier(name) => write!(f, ".{}", name),
            Step::Field(name) => {
                f.write_str("[\"")?;
                for ch in name.chars() {
                    if ch == '"' || ch == '\\' {
                        f.write_char('\\')?;
                    }
                    f.write_char(ch)?;
                }
                f.write_str("\"]")
            }
            Step::Index(idx) => write!(f, "[{}]", idx),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Field(name) => write!(f, "'{}'", name),
            Step::Index(idx) => write!(f, "{}", idx),
        }
    }
}

impl From<&str> for Step {
    fn from(name: &str) -> Self {
        Step::Field(name.to_string())
    }
}

impl From<String> for Step {
    fn from(name: String) -> Self {
        Step::Field(name)
    }
}

impl From<&String> for Step {
    fn from(name: &String) -> Self {
        Step::Field(name.clone())
    }
}

impl From<i64> for Step {
    fn from(idx: i64) -> Self {
        Step::Index(idx)
    }
}

impl From<i32> for Step {
    fn from(idx: i32) -> Self {
        Step::Index(i64::from(idx))
    }
}

impl From<u32> for Step {
    fn from(idx: u32) -> Self {
        Step::Index(i64::from(idx))
    }
}

impl From<usize> for Step {
    /// Indexes beyond `i64::MAX` saturate; they are out of range for any array anyway.
    fn from(idx: usize) -> Self {
        Step::Index(i64::try_from(idx).unwrap_or(i64::MAX))
    }
}
