//! Ordered key/value mapping.

use indexmap::IndexMap;

use crate::error::{CollectError, Result};
use crate::traits::{ArrayableStorage, Entries, Filterable, Readable, Storage};
use crate::value::{Key, Value};

/// An ordered mapping from integer or string keys to values.
///
/// Keys are explicit and stable. `Associative` is transformation-only:
/// every filter, sort or slice returns a new instance. Use
/// [`Arr`](crate::Arr) for strict in-place mutation.
///
/// ```
/// use standout_collect::{Associative, Key, Readable, Value};
///
/// let person = Associative::from_iter([("firstname", "John"), ("lastname", "Doe")]);
/// assert_eq!(person.get(&Key::from("lastname")), Ok(&Value::from("Doe")));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Associative {
    storage: Storage<Key, Value>,
}

impl Associative {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Associative::default()
    }

    /// Returns a copy with `value` stored under `key`.
    pub fn with(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.storage.insert(key.into(), value.into());
        self
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

    /// Unwraps the backing map.
    pub fn into_map(self) -> IndexMap<Key, Value> {
        self.storage
    }
}

impl From<IndexMap<Key, Value>> for Associative {
    fn from(storage: IndexMap<Key, Value>) -> Self {
        Associative { storage }
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Associative {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Associative {
            storage: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Readable for Associative {
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

impl Filterable for Associative {
    fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Key, Value)>,
    {
        Associative {
            storage: entries.into_iter().collect(),
        }
    }
}

impl ArrayableStorage for Associative {
    fn storage(&self) -> &Storage<Key, Value> {
        &self.storage
    }

    fn from_storage(storage: Storage<Key, Value>) -> Self {
        Associative { storage }
    }
}
