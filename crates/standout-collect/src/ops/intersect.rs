//! Intersection with another container.

use crate::ops::Contains;
use crate::traits::{Filterable, Readable};

/// Keeps the receiver's entries that also appear in another container.
///
/// The result holds the receiver's values in the receiver's order; `other`
/// is only asked what it contains.
pub struct Intersect<'a, C> {
    container: &'a C,
}

impl<'a, C> Intersect<'a, C> {
    pub fn new(container: &'a C) -> Self {
        Intersect { container }
    }
}

impl<C: Filterable> Intersect<'_, C> {
    /// Entries whose key exists in `other`.
    pub fn in_keys<O>(&self, other: &O) -> C
    where
        O: Readable<Key = C::Key>,
    {
        let other = Contains::new(other);
        self.container.filter(|key, _| other.key(key))
    }

    /// Entries whose value is a value of `other`.
    pub fn in_values<O>(&self, other: &O) -> C
    where
        O: Readable<Value = C::Value>,
    {
        let other = Contains::new(other);
        self.container.filter(|_, value| other.value(value))
    }

    /// Entries whose key holds the same value in `other`.
    pub fn in_key_and_value_pairs<O>(&self, other: &O) -> C
    where
        O: Readable<Key = C::Key, Value = C::Value>,
    {
        let other = Contains::new(other);
        self.container.filter(|key, value| other.pair(key, value))
    }
}
