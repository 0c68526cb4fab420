//! Sorting by value or by key.
//!
//! Sorting by value rebuilds the container with dense keys `0..n`, the way
//! a sorted list would be indexed. Sorting by key keeps every key with its
//! value. All sorts are stable.

use std::cmp::Ordering;
use std::hash::Hash;

use crate::bulk;
use crate::ordering::{Dir, RegularOrd};
use crate::traits::{ArrayableStorage, Filterable};

/// Sorts a container into a new one of the same type.
///
/// ```
/// use standout_collect::{Indexed, Sortable, Value};
///
/// let list = Indexed::from(vec![Value::from(3), Value::from("2"), Value::from(1.5)]);
/// assert_eq!(list.sort().asc().to_vec(), vec![Value::from(1.5), Value::from("2"), Value::from(3)]);
/// ```
pub struct Sort<'a, C> {
    container: &'a C,
}

impl<'a, C> Sort<'a, C> {
    pub fn new(container: &'a C) -> Self {
        Sort { container }
    }
}

impl<C: ArrayableStorage + Filterable> Sort<'_, C> {
    /// Values in ascending regular order, densely re-keyed.
    pub fn asc(&self) -> C
    where
        C::Value: RegularOrd,
        C::Key: From<usize>,
    {
        self.values(Dir::Asc)
    }

    /// Values in descending regular order, densely re-keyed.
    pub fn desc(&self) -> C
    where
        C::Value: RegularOrd,
        C::Key: From<usize>,
    {
        self.values(Dir::Desc)
    }

    /// Values in regular order in the given direction, densely re-keyed.
    pub fn values(&self, dir: Dir) -> C
    where
        C::Value: RegularOrd,
        C::Key: From<usize>,
    {
        self.by(|a, b| dir.apply(a.regular_cmp(b)))
    }

    /// Values ordered by `compare`, densely re-keyed.
    pub fn by<F>(&self, compare: F) -> C
    where
        F: FnMut(&C::Value, &C::Value) -> Ordering,
        C::Key: From<usize>,
    {
        let sorted = bulk::sorted_values(self.container.storage(), compare);
        C::from_entries(
            sorted
                .into_iter()
                .enumerate()
                .map(|(index, value)| (C::Key::from(index), value)),
        )
    }

    /// Entries in ascending key order.
    pub fn asc_keys(&self) -> C
    where
        C::Key: RegularOrd + Hash + Eq,
    {
        self.keys(Dir::Asc)
    }

    /// Entries in descending key order.
    pub fn desc_keys(&self) -> C
    where
        C::Key: RegularOrd + Hash + Eq,
    {
        self.keys(Dir::Desc)
    }

    /// Entries ordered by key in the given direction.
    pub fn keys(&self, dir: Dir) -> C
    where
        C::Key: RegularOrd + Hash + Eq,
    {
        let sorted = bulk::sorted_by_key(self.container.storage(), |a, b| {
            dir.apply(a.regular_cmp(b))
        });
        C::from_storage(sorted)
    }
}
