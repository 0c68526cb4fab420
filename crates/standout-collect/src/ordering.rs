//! Regular value ordering and sort direction.
//!
//! [`RegularOrd`] is the total ordering used by sorting and by rule
//! comparisons. Unlike `PartialEq` on [`Value`], it is loose across numeric
//! representations: `1`, `1.0` and `"1"` compare equal.

use std::cmp::Ordering;

use indexmap::IndexMap;

use crate::value::{Key, Number, ObjRef, Value};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }
}

/// A total "regular" ordering.
///
/// Values fall into ranked classes: null, bool, numeric, text, list, map,
/// object. Numbers and strings that parse as numbers share the numeric class
/// and compare by value, so `1`, `1.0` and `"1"` are equal. Strings that do
/// not parse compare lexically, after every numeric value. NaN sorts after
/// every other number.
pub trait RegularOrd {
    /// Compares `self` with `other`.
    fn regular_cmp(&self, other: &Self) -> Ordering;

    /// Three-way comparison as `-1`, `0` or `1`.
    fn spaceship(&self, other: &Self) -> i8 {
        match self.regular_cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }
}

impl RegularOrd for Value {
    fn regular_cmp(&self, other: &Self) -> Ordering {
        match (Class::of(self), Class::of(other)) {
            (Class::Null, Class::Null) => Ordering::Equal,
            (Class::Bool(a), Class::Bool(b)) => a.cmp(&b),
            (Class::Numeric(a), Class::Numeric(b)) => number_cmp(a, b),
            (Class::Text(a), Class::Text(b)) => a.cmp(b),
            (Class::List(a), Class::List(b)) => a.len().cmp(&b.len()).then_with(|| {
                a.iter()
                    .zip(b)
                    .map(|(x, y)| x.regular_cmp(y))
                    .find(|o| o.is_ne())
                    .unwrap_or(Ordering::Equal)
            }),
            (Class::Map(a), Class::Map(b)) => map_cmp(a, b),
            (Class::Object(a), Class::Object(b)) if a == b => Ordering::Equal,
            (Class::Object(a), Class::Object(b)) => {
                a.class().cmp(b.class()).then_with(|| a.id().cmp(&b.id()))
            }
            (left, right) => left.rank().cmp(&right.rank()),
        }
    }
}

impl RegularOrd for Key {
    fn regular_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl RegularOrd for usize {
    fn regular_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

/// The ordering class of a value.
enum Class<'a> {
    Null,
    Bool(bool),
    Numeric(Number),
    Text(&'a str),
    List(&'a [Value]),
    Map(&'a IndexMap<Key, Value>),
    Object(&'a ObjRef),
}

impl<'a> Class<'a> {
    fn of(value: &'a Value) -> Self {
        match value {
            Value::Null => Class::Null,
            Value::Bool(b) => Class::Bool(*b),
            Value::Number(n) => Class::Numeric(*n),
            Value::String(s) => match Number::parse(s) {
                Some(n) => Class::Numeric(n),
                None => Class::Text(s),
            },
            Value::List(items) => Class::List(items),
            Value::Map(map) => Class::Map(map),
            Value::Object(obj) => Class::Object(obj),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Class::Null => 0,
            Class::Bool(_) => 1,
            Class::Numeric(_) => 2,
            Class::Text(_) => 3,
            Class::List(_) => 4,
            Class::Map(_) => 5,
            Class::Object(_) => 6,
        }
    }
}

/// Compares two numbers exactly, with NaN after every other number.
fn number_cmp(a: Number, b: Number) -> Ordering {
    match (a, b) {
        (Number::I64(x), Number::I64(y)) => x.cmp(&y),
        (Number::F64(x), Number::F64(y)) => float_cmp(x, y),
        (Number::I64(x), Number::F64(y)) => int_float_cmp(x, y),
        (Number::F64(x), Number::I64(y)) => int_float_cmp(y, x).reverse(),
    }
}

fn float_cmp(x: f64, y: f64) -> Ordering {
    match (x.is_nan(), y.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
    }
}

// 2^63, exact in f64.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

fn int_float_cmp(i: i64, f: f64) -> Ordering {
    if f.is_nan() || f >= I64_BOUND {
        return Ordering::Less;
    }
    if f < -I64_BOUND {
        return Ordering::Greater;
    }
    let whole = f.trunc();
    match i.cmp(&(whole as i64)) {
        Ordering::Equal => whole.partial_cmp(&f).unwrap_or(Ordering::Equal),
        other => other,
    }
}

// Maps compare by size, then by their sorted key sets, then value by value
// in sorted key order.
fn map_cmp(a: &IndexMap<Key, Value>, b: &IndexMap<Key, Value>) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| {
        let mut left: Vec<&Key> = a.keys().collect();
        let mut right: Vec<&Key> = b.keys().collect();
        left.sort();
        right.sort();
        left.cmp(&right).then_with(|| {
            left.iter()
                .filter_map(|key| Some(a.get(*key)?.regular_cmp(b.get(*key)?)))
                .find(|o| o.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    })
}
