//! Integration tests for tables and rule-based selection.

use standout_collect::{
    row, CollectError, Key, Matrix, Op, Operations, Readable, Rule, Sortable, Value, Where,
};

fn people() -> Matrix {
    let person = |id: i64, first: &str, last: &str, age: i64| {
        (
            id,
            row([
                ("id", Value::from(id)),
                ("firstname", Value::from(first)),
                ("lastname", Value::from(last)),
                ("age", Value::from(age)),
            ]),
        )
    };
    Matrix::from_iter([
        person(1, "John", "Doe", 21),
        person(2, "Jane", "Doe", 27),
        person(3, "Richard", "Roe", 25),
        person(4, "Johnie", "Doe", 14),
        person(5, "Janie", "Doe", 16),
    ])
}

fn sorted_keys(matrix: &Matrix) -> Vec<Key> {
    let mut keys = matrix.keys();
    keys.sort();
    keys
}

// ============================================================================
// Select
// ============================================================================

#[test]
fn and_then_or() {
    let result = people()
        .select()
        .where_(("id", Op::Gt, 2), [])
        .unwrap()
        .where_(("lastname", Op::Eq, "Doe"), [])
        .unwrap()
        .or(("firstname", Op::Eq, "Richard"))
        .unwrap()
        .result();

    assert_eq!(sorted_keys(&result), vec![Key::Int(3), Key::Int(4), Key::Int(5)]);
}

#[test]
fn or_rules_are_evaluated_against_the_same_rows() {
    let result = people()
        .select()
        .where_(
            ("age", Op::Lt, 15),
            [Rule::new("firstname", Op::Eq, "Richard"), Rule::new("age", Op::Gt, 26)],
        )
        .unwrap()
        .result();

    assert_eq!(sorted_keys(&result), vec![Key::Int(2), Key::Int(3), Key::Int(4)]);
}

#[test]
fn where_not_and_between() {
    let not_doe = people()
        .select()
        .where_not(("lastname", Op::Eq, "Doe"), [])
        .unwrap()
        .result();
    assert_eq!(not_doe.keys(), vec![Key::Int(3)]);

    let teens = people().select().where_between("age", 13, 19).unwrap().result();
    assert_eq!(sorted_keys(&teens), vec![Key::Int(4), Key::Int(5)]);

    let outside = people()
        .select()
        .where_not_between("age", 15, 25)
        .unwrap()
        .result();
    assert_eq!(sorted_keys(&outside), vec![Key::Int(2), Key::Int(4)]);
}

#[test]
fn missing_column_fails_the_select() {
    let mut rows = people().to_map();
    rows.insert(Key::Int(6), row([("id", 6)]));
    let table = Matrix::from(rows);

    let err = table
        .select()
        .where_(("age", Op::Gt, 0), [])
        .unwrap_err();
    assert_eq!(
        err,
        CollectError::MissingColumn {
            column: "age".into(),
            row: "6".into()
        }
    );
}

#[test]
fn where_evaluator_is_usable_directly() {
    let doe = Where::matching(&people(), &Rule::new("lastname", Op::Eq, "Doe")).unwrap();
    let young = Where::matching(&people(), &Rule::new("age", Op::Lt, 18)).unwrap();
    assert_eq!(Where::difference(&doe, &young).keys(), vec![Key::Int(1), Key::Int(2)]);
    assert_eq!(Where::union(&young, &doe).len(), 4);
}

// ============================================================================
// Projection and partitioning
// ============================================================================

#[test]
fn column_projection() {
    let ages = people().column("age").unwrap();
    assert_eq!(ages.count_by().elements(), 5);

    let names = people().column_by("firstname", "id").unwrap();
    assert_eq!(names.get(&Key::Int(5)), Ok(&Value::from("Janie")));
}

#[test]
fn unique_and_duplicates() {
    let table = people();
    let unique = table.unique("lastname").unwrap();
    let repeats = table.duplicates("lastname").unwrap();

    assert_eq!(unique.keys(), vec![Key::Int(1), Key::Int(3)]);
    assert_eq!(repeats.keys(), vec![Key::Int(2), Key::Int(4), Key::Int(5)]);
    assert_eq!(unique.len() + repeats.len(), table.len());
}

#[test]
fn collapse_and_sort() {
    let table = Matrix::from_iter([(1, row([("a", 3), ("b", 1)])), (2, row([("a", 2)]))]);
    let sorted = table.collapse().sort().asc();
    assert_eq!(sorted.to_vec(), vec![Value::from(1), Value::from(2), Value::from(3)]);
}
