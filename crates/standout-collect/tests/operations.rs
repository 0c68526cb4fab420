//! Integration tests for the operation layer.

use std::num::NonZeroUsize;

use standout_collect::{
    Arr, Associative, Category, Chunkable, Classify, CollectError, Indexed, Key, Mix, Operations,
    Primitive, Readable, Result, Sortable, Type, Value, Writable,
};

fn person() -> Associative {
    Associative::new()
        .with("firstname", "John")
        .with("lastname", "Doe")
        .with("age", 25)
        .with(10, 2)
}

// ============================================================================
// Find / Contains
// ============================================================================

#[test]
fn find_key_by_value() {
    assert_eq!(person().find().key(&Value::from("Doe")), Some(Key::from("lastname")));
}

#[test]
fn find_neighbours() {
    let list = Indexed::from(vec!["a", "b", "c"]);
    assert_eq!(list.find().before(&Value::from("b")), Some(&Value::from("a")));
    assert_eq!(list.find().after(&Value::from("b")), Some(&Value::from("c")));
    assert_eq!(list.find().after(&Value::from("c")), None);
    assert_eq!(list.find().before(&Value::from("a")), None);
}

#[test]
fn contains_on_every_container() {
    assert!(person().contains().value(&Value::from(25)));
    assert!(person().contains().key_or_value(&Value::from(10)));
    assert!(Arr::from_iter([("k", 1)]).contains().pair(&Key::from("k"), &Value::from(1)));
    assert!(Mix::from_iter([(1.5, "x")]).contains().key(&Value::from(1.5)));
}

// ============================================================================
// Intersect
// ============================================================================

#[test]
fn intersect_in_keys_keeps_left_values_and_order() {
    let right = Associative::from_iter([(Key::Int(10), "ten"), (Key::from("firstname"), "Jane")]);
    let result = person().intersect().in_keys(&right);
    assert_eq!(result.keys(), vec![Key::from("firstname"), Key::Int(10)]);
    assert_eq!(result.get(&Key::from("firstname")), Ok(&Value::from("John")));
}

// ============================================================================
// Skip / Take
// ============================================================================

#[test]
fn take_until_plus_skip_until_is_whole() {
    let list = Indexed::from(vec![4, 8, 15, 16, 23, 42]);
    let is_odd = |_: &usize, v: &Value| v.as_number().is_some_and(|n| n.to_f64() as i64 % 2 != 0);

    let mut joined = list.take().until(is_odd).to_vec();
    joined.extend(list.skip().until(is_odd).to_vec());
    assert_eq!(joined, list.to_vec());
}

#[test]
fn take_and_skip_with_negative_counts() {
    let list = Indexed::from(vec![1, 2, 3]);
    assert!(list.take().first(-1).is_empty());
    assert_eq!(list.skip().first(-1).len(), 3);
    assert!(list.take().last(-1).is_empty());
    assert_eq!(list.skip().last(-1).len(), 3);
}

// ============================================================================
// Sort / Chunk
// ============================================================================

#[test]
fn sort_mixed_values() {
    let list = Indexed::from(vec![
        Value::from("b"),
        Value::from(10),
        Value::Null,
        Value::from("9"),
        Value::from(true),
    ]);
    assert_eq!(
        list.sort().asc().to_vec(),
        vec![
            Value::Null,
            Value::from(true),
            Value::from("9"),
            Value::from(10),
            Value::from("b"),
        ]
    );
}

#[test]
fn chunk_keyed_container() {
    let arr = Arr::from_iter([("a", 1), ("b", 2), ("c", 3), ("d", 4)]);
    let size = NonZeroUsize::new(3).unwrap();
    let chunks = arr.chunk().size(size);
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[1].keys(), vec![Key::from("d")]);
}

// ============================================================================
// Is / Ensure / CountBy / When
// ============================================================================

#[test]
fn is_and_ensure() {
    let list = Indexed::from(vec![1, 2, 3]);
    assert_eq!(list.is().all(Category::Numeric), Ok(true));
    assert!(list.ensure().all(Primitive::Int).is_ok());
    assert!(matches!(
        list.ensure().any(Primitive::String),
        Err(CollectError::EnsureFailed { .. })
    ));
}

/// A cell whose type cannot be determined.
#[derive(Debug, Clone, PartialEq)]
struct Opaque;

impl Classify for Opaque {
    fn classify(&self) -> Result<Primitive> {
        Err(CollectError::TypeUnclassifiable {
            value: "opaque".into(),
        })
    }

    fn is_instance_of(&self, _class: &str) -> bool {
        false
    }
}

#[test]
fn unclassifiable_values_fail_type_checks() {
    assert_eq!(
        Type::from(Primitive::Int).matches(&Opaque),
        Err(CollectError::TypeUnclassifiable {
            value: "opaque".into()
        })
    );
    assert_eq!(Type::class("Point").matches(&Opaque), Ok(false));
}

#[test]
fn count_by() {
    let list = Indexed::from(vec!["a", "b", "a"]);
    assert_eq!(list.count_by().elements(), 3);
    assert_eq!(list.count_by().where_(|_, v| *v == Value::from("a")), 2);
    assert_eq!(
        list.count_by().values().get(&Key::from("a")),
        Ok(&Value::from(2))
    );
}

#[test]
fn when_mutates_in_chain() {
    let arr = Arr::new()
        .when()
        .is(true, |arr| arr.set(Value::from(1), Key::from("a")))
        .when()
        .unless(true, |arr| arr.set(Value::from(2), Key::from("b")));
    assert_eq!(arr.keys(), vec![Key::from("a")]);
}
