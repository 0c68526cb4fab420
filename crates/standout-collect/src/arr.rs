//! Associative mapping with strict in-place mutation.

use indexmap::IndexMap;

use crate::associative::Associative;
use crate::error::{CollectError, Result};
use crate::traits::{ArrayableStorage, Entries, Filterable, Readable, Storage, Writable};
use crate::value::{Key, Value};

/// A mutable mapping that checks existence on every mutation.
///
/// | Method | Key present | Key absent |
/// |--------|-------------|------------|
/// | `set` | overwrite | insert |
/// | `add` | `KeyAlreadyExists` | insert |
/// | `replace` | overwrite | `KeyNotFound` |
/// | `remove` | remove | `KeyNotFound` |
///
/// The `offset_*` methods are subscript-style sugar over the same storage.
///
/// ```
/// use standout_collect::{Arr, CollectError, Key, Readable, Value, Writable};
///
/// let mut arr = Arr::new();
/// arr.add(Value::from("John"), Key::from("name")).unwrap();
/// let again = arr.add(Value::from("Jane"), Key::from("name"));
/// assert!(matches!(again, Err(CollectError::KeyAlreadyExists { .. })));
/// assert_eq!(arr.get(&Key::from("name")), Ok(&Value::from("John")));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Arr {
    storage: Storage<Key, Value>,
}

impl Arr {
    /// Creates an empty array.
    pub fn new() -> Self {
        Arr::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Keys in order.
    pub fn keys(&self) -> Vec<Key> {
        self.storage.keys().cloned().collect()
    }

    /// Iterates the values in order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.storage.values()
    }

    /// Copies the entries out as a map.
    pub fn to_map(&self) -> IndexMap<Key, Value> {
        self.storage.clone()
    }

    /// Indexer read. Same as [`Readable::get`].
    pub fn offset_get(&self, key: &Key) -> Result<&Value> {
        self.get(key)
    }

    /// Indexer write. Upserts under `key`, or appends when `key` is `None`.
    ///
    /// Appending uses one past the largest integer key, or `0` when there is
    /// none.
    pub fn offset_set(&mut self, key: Option<Key>, value: impl Into<Value>) {
        let key = key.unwrap_or_else(|| Key::Int(self.next_index()));
        self.set(value.into(), key);
    }

    /// Indexer existence check.
    pub fn offset_exists(&self, key: &Key) -> bool {
        self.exists(key)
    }

    /// Indexer removal. Absent keys are ignored.
    pub fn offset_unset(&mut self, key: &Key) -> Option<Value> {
        self.storage.shift_remove(key)
    }

    // One past the largest integer key. Once `i64::MAX` is taken, the
    // smallest unused non-negative integer.
    fn next_index(&self) -> i64 {
        let next = self
            .storage
            .keys()
            .filter_map(Key::as_int)
            .max()
            .map_or(Some(0), |n| n.checked_add(1));
        next.unwrap_or_else(|| {
            (0..i64::MAX)
                .find(|n| !self.storage.contains_key(&Key::Int(*n)))
                .unwrap_or(i64::MAX)
        })
    }
}

impl From<IndexMap<Key, Value>> for Arr {
    fn from(storage: IndexMap<Key, Value>) -> Self {
        Arr { storage }
    }
}

impl From<Associative> for Arr {
    fn from(map: Associative) -> Self {
        Arr {
            storage: map.into_map(),
        }
    }
}

impl From<Arr> for Associative {
    fn from(arr: Arr) -> Self {
        Associative::from(arr.storage)
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Arr {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Arr {
            storage: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Readable for Arr {
    type Key = Key;
    type Value = Value;

    fn exists(&self, key: &Key) -> bool {
        self.storage.contains_key(key)
    }

    fn get(&self, key: &Key) -> Result<&Value> {
        self.storage
            .get(key)
            .ok_or_else(|| CollectError::key_not_found(key))
    }

    fn iter(&self) -> Entries<'_, Key, Value> {
        Box::new(self.storage.iter().map(|(k, v)| (k.clone(), v)))
    }

    fn count(&self) -> usize {
        self.storage.len()
    }

    fn as_storage(&self) -> Option<&Storage<Key, Value>> {
        Some(&self.storage)
    }
}

impl Writable for Arr {
    fn set(&mut self, value: Value, key: Key) {
        self.storage.insert(key, value);
    }

    fn add(&mut self, value: Value, key: Key) -> Result<()> {
        if self.storage.contains_key(&key) {
            tracing::trace!(key = %key, "add rejected, key exists");
            return Err(CollectError::key_exists(key));
        }
        self.storage.insert(key, value);
        Ok(())
    }

    fn replace(&mut self, value: Value, key: Key) -> Result<()> {
        match self.storage.get_mut(&key) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => {
                tracing::trace!(key = %key, "replace rejected, key not found");
                Err(CollectError::key_not_found(key))
            }
        }
    }

    fn remove(&mut self, key: &Key) -> Result<Value> {
        self.storage.shift_remove(key).ok_or_else(|| {
            tracing::trace!(key = %key, "remove rejected, key not found");
            CollectError::key_not_found(key)
        })
    }
}

impl Filterable for Arr {
    fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Key, Value)>,
    {
        Arr {
            storage: entries.into_iter().collect(),
        }
    }
}

impl ArrayableStorage for Arr {
    fn storage(&self) -> &Storage<Key, Value> {
        &self.storage
    }

    fn from_storage(storage: Storage<Key, Value>) -> Self {
        Arr { storage }
    }
}
