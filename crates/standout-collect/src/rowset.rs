//! Rule evaluation and row-set algebra over matrices.
//!
//! Rows are compared by content: two rows are the same row when they have
//! the same columns and every paired cell compares equal under the regular
//! ordering, whatever their keys.


use crate::error::Result;
use crate::matrix::{Matrix, Row};
use crate::ordering::RegularOrd;
use crate::rule::Rule;
use crate::traits::{ArrayableStorage, Filterable, Readable, Storage};
use crate::value::Key;

/// Stateless evaluator behind [`Select`](crate::Select).
pub struct Where;

impl Where {
    /// Rows of `matrix` matching `rule`, keys preserved.
    ///
    /// Fails on the first row lacking the rule's column; nothing is
    /// returned in that case.
    pub fn matching(matrix: &Matrix, rule: &Rule) -> Result<Matrix> {
        let mut kept = Vec::new();
        for (key, row) in matrix.iter() {
            if rule.matches(&key, row)? {
                kept.push((key, row.clone()));
            }
        }
        Ok(Matrix::from_entries(kept))
    }

    /// Rows of `matrix` matching `rule` or any of `or_rules`.
    ///
    /// Every rule is evaluated against `matrix` itself, never against a
    /// partial result.
    pub fn any<'r, I>(matrix: &Matrix, rule: &Rule, or_rules: I) -> Result<Matrix>
    where
        I: IntoIterator<Item = &'r Rule>,
    {
        let mut result = Self::matching(matrix, rule)?;
        for or_rule in or_rules {
            result = Self::union(&result, &Self::matching(matrix, or_rule)?);
        }
        Ok(result)
    }

    /// Rows of `left`, followed by rows of `right` not already in `left`.
    ///
    /// A new row whose key is already taken is kept under the next free
    /// integer key.
    pub fn union(left: &Matrix, right: &Matrix) -> Matrix {
        let mut storage = left.storage().clone();
        for (key, row) in right.iter() {
            if storage.values().any(|r| Self::same_row(r, row)) {
                continue;
            }
            let key = if storage.contains_key(&key) {
                free_key(&storage)
            } else {
                key
            };
            storage.insert(key, row.clone());
        }
        Matrix::from_storage(storage)
    }

    /// Rows of `left` that have no equal row in `right`.
    pub fn difference(left: &Matrix, right: &Matrix) -> Matrix {
        left.filter(|_, row| !right.storage().values().any(|r| Self::same_row(row, r)))
    }

    /// Three-way comparison of two rows.
    ///
    /// Rows compare by width, then by their sorted column names, then cell
    /// by cell in sorted column order.
    pub fn spaceship(a: &Row, b: &Row) -> i8 {
        let mut left: Vec<&String> = a.keys().collect();
        let mut right: Vec<&String> = b.keys().collect();
        left.sort();
        right.sort();
        let order = a.len().cmp(&b.len()).then_with(|| left.cmp(&right));
        if order.is_ne() {
            return order as i8;
        }
        left.iter()
            .filter_map(|column| Some(a.get(*column)?.spaceship(b.get(*column)?)))
            .find(|o| *o != 0)
            .unwrap_or(0)
    }

    /// Returns `true` if two rows hold the same cells.
    pub fn same_row(a: &Row, b: &Row) -> bool {
        Self::spaceship(a, b) == 0
    }
}

// One past the largest integer key, or the smallest unused non-negative
// integer when that would overflow.
fn free_key(storage: &Storage<Key, Row>) -> Key {
    let next = storage
        .keys()
        .filter_map(Key::as_int)
        .max()
        .map_or(Some(0), |n| n.checked_add(1));
    let n = next.unwrap_or_else(|| {
        (0..i64::MAX)
            .find(|n| !storage.contains_key(&Key::Int(*n)))
            .unwrap_or(i64::MAX)
    });
    Key::Int(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::row;
    use crate::op::Op;
    use crate::value::Value;

    fn table() -> Matrix {
        Matrix::from_iter([
            (1, row([("id", 1), ("age", 21)])),
            (2, row([("id", 2), ("age", 27)])),
            (3, row([("id", 3), ("age", 25)])),
        ])
    }

    #[test]
    fn matching_keeps_keys() {
        let result = Where::matching(&table(), &Rule::new("age", Op::Gt, 22)).unwrap();
        assert_eq!(result.keys(), vec![Key::Int(2), Key::Int(3)]);
    }

    #[test]
    fn any_ors_against_the_same_matrix() {
        let first = Rule::new("id", Op::Eq, 1);
        let others = [Rule::new("id", Op::Eq, 3), Rule::new("age", Op::Eq, 21)];
        let result = Where::any(&table(), &first, &others).unwrap();
        assert_eq!(result.keys(), vec![Key::Int(1), Key::Int(3)]);
    }

    #[test]
    fn union_deduplicates_by_content() {
        let left = Matrix::from_iter([("a", row([("x", 1)]))]);
        let right = Matrix::from_iter([("b", row([("x", 1)])), ("c", row([("x", 2)]))]);
        let union = Where::union(&left, &right);
        assert_eq!(union.keys(), vec![Key::from("a"), Key::from("c")]);
    }

    #[test]
    fn union_keeps_distinct_rows_with_colliding_keys() {
        let left = Matrix::from_iter([(1, row([("x", 1)]))]);
        let right = Matrix::from_iter([(1, row([("x", 2)])), (5, row([("x", 1)]))]);
        let union = Where::union(&left, &right);
        assert_eq!(union.len(), 2);
        assert_eq!(union.keys(), vec![Key::Int(1), Key::Int(2)]);
        assert_eq!(union.cell(&Key::Int(2), "x"), Ok(&Value::from(2)));
    }

    #[test]
    fn union_rekeys_past_the_largest_integer() {
        let left = Matrix::from_iter([(Key::Int(i64::MAX), row([("x", 1)])), (Key::from("a"), row([("x", 2)]))]);
        let right = Matrix::from_iter([("a", row([("x", 3)]))]);
        let union = Where::union(&left, &right);
        assert_eq!(union.keys(), vec![Key::Int(i64::MAX), Key::from("a"), Key::Int(0)]);
    }

    #[test]
    fn difference_removes_by_content() {
        let left = Matrix::from_iter([("a", row([("x", 1)])), ("b", row([("x", 2)]))]);
        let right = Matrix::from_iter([("z", row([("x", 2)]))]);
        assert_eq!(Where::difference(&left, &right).keys(), vec![Key::from("a")]);
    }

    #[test]
    fn row_spaceship() {
        let a = row([("x", Value::from(1)), ("y", Value::from("b"))]);
        let b = row([("x", Value::from(1.0)), ("y", Value::from("b"))]);
        let c = row([("x", Value::from(1)), ("y", Value::from("c"))]);
        let wider = row([("x", Value::from(1)), ("y", Value::from("b")), ("z", Value::Null)]);
        assert_eq!(Where::spaceship(&a, &b), 0);
        assert_eq!(Where::spaceship(&a, &c), -1);
        assert_eq!(Where::spaceship(&c, &a), 1);
        assert!(!Where::same_row(&a, &wider));
        assert!(!Where::same_row(&wider, &a));
    }

    #[test]
    fn row_spaceship_is_antisymmetric() {
        let x = row([("x", 1)]);
        let y = row([("y", 1)]);
        assert_eq!(Where::spaceship(&x, &y), -1);
        assert_eq!(Where::spaceship(&y, &x), 1);
        let xy = row([("x", 1), ("y", 2)]);
        let yx = row([("y", 2), ("x", 1)]);
        assert!(Where::same_row(&xy, &yx));
    }

    #[test]
    fn missing_column_fails() {
        assert!(Where::matching(&table(), &Rule::new("name", Op::Eq, "x")).is_err());
    }
}
