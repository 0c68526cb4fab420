//! Comparison operators for query rules.
//!
//! The [`Op`] enum defines the operators a [`Rule`](crate::Rule) can apply
//! between a row's cell and the rule's value. All of them work on any pair
//! of values through the regular ordering.

use std::cmp::Ordering;

use crate::ordering::RegularOrd;
use crate::value::Value;

/// Comparison operator for a query rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Equal.
    Eq,
    /// Not equal.
    Ne,
    /// Greater than.
    Gt,
    /// Greater than or equal.
    Gte,
    /// Less than.
    Lt,
    /// Less than or equal.
    Lte,
    /// Three-way comparison yielding `-1`, `0` or `1`.
    Spaceship,
}

impl Op {
    /// Evaluates a comparison given an ordering result.
    ///
    /// `Spaceship` holds whenever the sides differ, the way a non-zero
    /// three-way result reads as true.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self {
            Op::Eq => ordering == Ordering::Equal,
            Op::Ne | Op::Spaceship => ordering != Ordering::Equal,
            Op::Gt => ordering == Ordering::Greater,
            Op::Gte => ordering != Ordering::Less,
            Op::Lt => ordering == Ordering::Less,
            Op::Lte => ordering != Ordering::Greater,
        }
    }

    /// Returns the display name of this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "==",
            Op::Ne => "!=",
            Op::Gt => ">",
            Op::Gte => ">=",
            Op::Lt => "<",
            Op::Lte => "<=",
            Op::Spaceship => "<=>",
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of [`compare`]: a verdict for ordering operators, a three-way
/// result for `Spaceship`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Bool(bool),
    Order(i8),
}

impl Comparison {
    /// Reads the result as a boolean; a non-zero order counts as true.
    pub fn is_truthy(self) -> bool {
        match self {
            Comparison::Bool(b) => b,
            Comparison::Order(n) => n != 0,
        }
    }
}

/// Compares a row's cell against a rule value.
///
/// ```
/// use standout_collect::{compare, Comparison, Op, Value};
///
/// assert_eq!(compare(Op::Gt, &Value::from(3), &Value::from(2)), Comparison::Bool(true));
/// assert_eq!(compare(Op::Spaceship, &Value::from(1), &Value::from(2)), Comparison::Order(-1));
/// ```
pub fn compare(op: Op, left: &Value, right: &Value) -> Comparison {
    match op {
        Op::Spaceship => Comparison::Order(left.spaceship(right)),
        _ => Comparison::Bool(op.eval_ordering(left.regular_cmp(right))),
    }
}
