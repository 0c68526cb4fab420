//! Zero-based sequence.

use crate::error::{CollectError, Result};
use crate::traits::{ArrayableStorage, Entries, Filterable, Readable, Storage};
use crate::value::Value;

/// A sequence keyed by position.
///
/// Building from values or entries numbers them `0..n`.
/// [`remove`](Indexed::remove) leaves a gap, and [`push`](Indexed::push)
/// appends one past the largest index rather than filling it.
/// [`reindex`](Indexed::reindex) closes the gaps.
///
/// ```
/// use standout_collect::{Indexed, Readable, Value};
///
/// let names = Indexed::from(vec!["John", "Jane"]);
/// assert_eq!(names.count(), 2);
/// assert_eq!(names.get(&1), Ok(&Value::from("Jane")));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Indexed {
    storage: Storage<usize, Value>,
}

impl Indexed {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Indexed::default()
    }

    /// Appends a value one past the largest index.
    pub fn push(&mut self, value: impl Into<Value>) {
        let index = self.storage.keys().max().map_or(0, |n| n + 1);
        self.storage.insert(index, value.into());
    }

    /// Removes the value at `index`, leaving a gap.
    ///
    /// # Errors
    ///
    /// Returns [`CollectError::KeyNotFound`] if `index` is absent.
    pub fn remove(&mut self, index: &usize) -> Result<Value> {
        self.storage
            .shift_remove(index)
            .ok_or_else(|| CollectError::key_not_found(index))
    }

    /// Renumbers the values `0..n`, keeping their order.
    pub fn reindex(&mut self) {
        let values = std::mem::take(&mut self.storage).into_values();
        self.storage = values.enumerate().collect();
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if there are no values.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Iterates the values in order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.storage.values()
    }

    /// Copies the values out as a `Vec`.
    pub fn to_vec(&self) -> Vec<Value> {
        self.storage.values().cloned().collect()
    }
}

impl<T: Into<Value>> From<Vec<T>> for Indexed {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Into<Value>> FromIterator<T> for Indexed {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Indexed {
            storage: iter.into_iter().map(Into::into).enumerate().collect(),
        }
    }
}

impl Readable for Indexed {
    type Key = usize;
    type Value = Value;

    fn exists(&self, key: &usize) -> bool {
        self.storage.contains_key(key)
    }

    fn get(&self, key: &usize) -> Result<&Value> {
        self.storage
            .get(key)
            .ok_or_else(|| CollectError::key_not_found(key))
    }

    fn iter(&self) -> Entries<'_, usize, Value> {
        Box::new(self.storage.iter().map(|(k, v)| (*k, v)))
    }

    fn count(&self) -> usize {
        self.storage.len()
    }

    fn as_storage(&self) -> Option<&Storage<usize, Value>> {
        Some(&self.storage)
    }
}

impl Filterable for Indexed {
    fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (usize, Value)>,
    {
        entries.into_iter().map(|(_, value)| value).collect()
    }
}

impl ArrayableStorage for Indexed {
    fn storage(&self) -> &Storage<usize, Value> {
        &self.storage
    }

    fn from_storage(storage: Storage<usize, Value>) -> Self {
        Self::from_entries(storage)
    }
}
