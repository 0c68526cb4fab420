//! Bulk primitives over whole containers.
//!
//! Slicing, first-key search and sorting, shared by the operation layer's
//! fast paths.

use std::cmp::Ordering;

use crate::traits::{Filterable, Storage};

/// Returns the entries in a window of `container`, with array-slice
/// semantics.
///
/// A non-negative `offset` counts from the start, a negative one from the
/// end. A `length` of `None` runs to the end; a negative length stops that
/// many entries short of the end. Out-of-range windows are clamped, so the
/// result may be empty but the call never fails.
///
/// ```
/// use standout_collect::{bulk, Indexed, Value};
///
/// let letters = Indexed::from(vec!["a", "b", "c", "d"]);
/// assert_eq!(bulk::slice(&letters, 1, Some(2)).to_vec(), vec![Value::from("b"), Value::from("c")]);
/// assert_eq!(bulk::slice(&letters, -1, None).to_vec(), vec![Value::from("d")]);
/// assert_eq!(bulk::slice(&letters, 0, Some(-3)).to_vec(), vec![Value::from("a")]);
/// ```
pub fn slice<C: Filterable>(container: &C, offset: isize, length: Option<isize>) -> C {
    let len = container.count() as isize;
    let start = if offset < 0 {
        (len + offset).max(0)
    } else {
        offset.min(len)
    };
    let end = match length {
        None => len,
        Some(l) if l < 0 => len + l,
        Some(l) => start.saturating_add(l).min(len),
    }
    .max(start);

    C::from_entries(
        container
            .iter()
            .skip(start as usize)
            .take((end - start) as usize)
            .map(|(key, value)| (key, value.clone())),
    )
}

/// Returns the first key whose value equals `value`.
pub fn search<'a, K, V: PartialEq>(storage: &'a Storage<K, V>, value: &V) -> Option<&'a K> {
    storage.iter().find(|(_, v)| *v == value).map(|(k, _)| k)
}

/// Returns the values of `storage` stably sorted by `compare`.
pub fn sorted_values<K, V, F>(storage: &Storage<K, V>, mut compare: F) -> Vec<V>
where
    V: Clone,
    F: FnMut(&V, &V) -> Ordering,
{
    let mut values: Vec<V> = storage.values().cloned().collect();
    values.sort_by(|a, b| compare(a, b));
    values
}

/// Returns a copy of `storage` with entries stably sorted by key.
pub fn sorted_by_key<K, V, F>(storage: &Storage<K, V>, mut compare: F) -> Storage<K, V>
where
    K: Clone + std::hash::Hash + Eq,
    V: Clone,
    F: FnMut(&K, &K) -> Ordering,
{
    let mut sorted = storage.clone();
    sorted.sort_by(|a, _, b, _| compare(a, b));
    sorted
}
