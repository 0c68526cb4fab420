//! Fluent rule-based filtering of a [`Matrix`].
//!
//! A [`Select`] keeps the matrix it started from and a current result.
//! Each step rewrites the current result:
//!
//! ```text
//! where_(r, [o1, o2])      current = r ∨ o1 ∨ o2         (over current)
//! where_not(r, [o1])       current = current ∖ (r ∨ o1)
//! where_between(c, a, b)   current = a ≤ c ≤ b           (over current)
//! where_not_between(c,a,b) current = c < a ∨ c > b       (over current)
//! or(r)                    current = current ∪ r         (over the origin)
//! ```
//!
//! Consecutive steps conjoin, since each runs on the previous result; `or`
//! is the one way back out to rows already filtered away.

use crate::error::Result;
use crate::matrix::Matrix;
use crate::op::Op;
use crate::rowset::Where;
use crate::rule::Rule;
use crate::value::Value;

/// Stateful query over a [`Matrix`].
///
/// # Example
///
/// ```
/// use standout_collect::{row, Key, Matrix, Op, Value};
///
/// let people = Matrix::from_iter([
///     (1, row([("id", Value::from(1)), ("lastname", Value::from("Doe"))])),
///     (2, row([("id", Value::from(2)), ("lastname", Value::from("Roe"))])),
///     (3, row([("id", Value::from(3)), ("lastname", Value::from("Doe"))])),
/// ]);
///
/// let result = people
///     .select()
///     .where_(("lastname", Op::Eq, "Doe"), [])?
///     .where_(("id", Op::Gt, 1), [])?
///     .result();
/// assert_eq!(result.keys(), vec![Key::Int(3)]);
/// # Ok::<(), standout_collect::CollectError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Select {
    origin: Matrix,
    current: Matrix,
}

impl Select {
    /// Starts a query over `matrix`.
    pub fn new(matrix: Matrix) -> Self {
        Select {
            current: matrix.clone(),
            origin: matrix,
        }
    }

    /// Keeps rows matching `rule` or any of `or_rules`.
    pub fn where_<I>(self, rule: impl Into<Rule>, or_rules: I) -> Result<Self>
    where
        I: IntoIterator<Item = Rule>,
    {
        let rule = rule.into();
        let or_rules: Vec<Rule> = or_rules.into_iter().collect();
        let next = Where::any(&self.current, &rule, &or_rules)?;
        Ok(self.advance("where", next))
    }

    /// Drops rows matching `rule` or any of `or_rules`.
    pub fn where_not<I>(self, rule: impl Into<Rule>, or_rules: I) -> Result<Self>
    where
        I: IntoIterator<Item = Rule>,
    {
        let rule = rule.into();
        let or_rules: Vec<Rule> = or_rules.into_iter().collect();
        let matched = Where::any(&self.current, &rule, &or_rules)?;
        let next = Where::difference(&self.current, &matched);
        Ok(self.advance("where_not", next))
    }

    /// Keeps rows with `start <= column <= end`.
    pub fn where_between(
        self,
        column: &str,
        start: impl Into<Value>,
        end: impl Into<Value>,
    ) -> Result<Self> {
        self.where_(Rule::new(column, Op::Gte, start), [])?
            .where_(Rule::new(column, Op::Lte, end), [])
    }

    /// Keeps rows with `column < start` or `column > end`.
    pub fn where_not_between(
        self,
        column: &str,
        start: impl Into<Value>,
        end: impl Into<Value>,
    ) -> Result<Self> {
        let below = Where::matching(&self.current, &Rule::new(column, Op::Lt, start))?;
        let above = Where::matching(&self.current, &Rule::new(column, Op::Gt, end))?;
        let next = Where::union(&below, &above);
        Ok(self.advance("where_not_between", next))
    }

    /// Adds back rows of the original matrix matching `rule`.
    pub fn or(self, rule: impl Into<Rule>) -> Result<Self> {
        let matched = Where::matching(&self.origin, &rule.into())?;
        let next = Where::union(&self.current, &matched);
        Ok(self.advance("or", next))
    }

    /// The current result.
    pub fn result(self) -> Matrix {
        self.current
    }

    /// Borrows the current result.
    pub fn current(&self) -> &Matrix {
        &self.current
    }

    fn advance(mut self, step: &'static str, next: Matrix) -> Self {
        tracing::debug!(
            step,
            before = self.current.len(),
            after = next.len(),
            "select step"
        );
        self.current = next;
        self
    }
}
