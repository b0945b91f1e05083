use super::step::Step;
use std::fmt;

/// An immutable sequence of access steps.
///
/// Extending a path never modifies it; [`field`](Self::field) and
/// [`index`](Self::index) return a new path with one more step, so a base
/// path can be shared and extended in different directions.
///
/// # Example
///
/// ```
/// use datapath::PathExpression;
///
/// let items = PathExpression::root().field("foo").field("bar");
/// let first = items.index(0).field("baz");
/// let second = items.index(1).field("baz");
///
/// assert_eq!(items.to_string(), "$.foo.bar");
/// assert_eq!(first.to_string(), "$.foo.bar[0].baz");
/// assert_eq!(second.to_string(), "$.foo.bar[1].baz");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathExpression {
    steps: Vec<Step>,
}

impl PathExpression {
    /// The empty path, which resolves to the input itself.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a path from an explicit list of steps.
    pub fn from_steps(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Returns a new path with `step` appended.
    pub fn at(&self, step: impl Into<Step>) -> Self {
        let mut steps = Vec::with_capacity(self.steps.len() + 1);
        steps.extend_from_slice(&self.steps);
        steps.push(step.into());
        Self { steps }
    }

    /// Returns a new path with a field access appended.
    pub fn field(&self, name: impl Into<String>) -> Self {
        self.at(Step::Field(name.into()))
    }

    /// Returns a new path with an index access appended.
    ///
    /// The index is not validated here; out-of-range and negative indexes
    /// fail at resolution time.
    pub fn index(&self, idx: i64) -> Self {
        self.at(Step::Index(idx))
    }

    /// Returns a new path with all steps of `other` appended.
    pub fn join(&self, other: &PathExpression) -> Self {
        let mut steps = Vec::with_capacity(self.steps.len() + other.steps.len());
        steps.extend_from_slice(&self.steps);
        steps.extend_from_slice(&other.steps);
        Self { steps }
    }

    /// Returns the path without its last step, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        self.steps.split_last().map(|(_, rest)| Self {
            steps: rest.to_vec(),
        })
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Display for PathExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for step in &self.steps {
            step.write_segment(f)?;
        }
        Ok(())
    }
}

impl FromIterator<Step> for PathExpression {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Step>> for PathExpression {
    fn from(steps: Vec<Step>) -> Self {
        Self::from_steps(steps)
    }
}
