//! Rules for tabular queries.
//!
//! A [`Rule`] is a single filter predicate over a matrix row: a column
//! name, an operator, and a comparison value.

use std::fmt;

use crate::error::Result;
use crate::matrix::{cell, Row};
use crate::op::{compare, Op};
use crate::value::{Key, Value};

/// A single row predicate.
///
/// # Example
///
/// ```
/// use standout_collect::{row, Key, Op, Rule, Value};
///
/// let adult = Rule::new("age", Op::Gte, 18);
/// let jane = row([("name", Value::from("Jane")), ("age", Value::from(27))]);
/// assert_eq!(adult.matches(&Key::Int(1), &jane), Ok(true));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    /// The column to read.
    pub column: String,
    /// The comparison operator.
    pub op: Op,
    /// The value to compare against.
    pub value: Value,
}

impl Rule {
    /// Creates a new rule.
    pub fn new(column: impl Into<String>, op: Op, value: impl Into<Value>) -> Self {
        Rule {
            column: column.into(),
            op,
            value: value.into(),
        }
    }

    /// Evaluates this rule against the row stored under `key`.
    ///
    /// Fails with `MissingColumn` if the row has no such column.
    pub fn matches(&self, key: &Key, row: &Row) -> Result<bool> {
        let cell = cell(key, row, &self.column)?;
        Ok(compare(self.op, cell, &self.value).is_truthy())
    }
}

impl<C: Into<String>, V: Into<Value>> From<(C, Op, V)> for Rule {
    fn from((column, op, value): (C, Op, V)) -> Self {
        Rule::new(column, op, value)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.column, self.op, self.value)
    }
}
