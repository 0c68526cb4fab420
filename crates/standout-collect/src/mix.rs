//! Mapping keyed by arbitrary values.

use indexmap::IndexMap;

use crate::error::{CollectError, Result};
use crate::traits::{Entries, Filterable, Readable, Writable};
use crate::value::Value;

/// A mapping whose keys may be any [`Value`].
///
/// Lookups go through the key's [canonical form](Value::canonical), while
/// iteration hands back the original key. Keys with the same canonical form
/// are one entry: the last write wins, both key and value.
///
/// ```
/// use standout_collect::{Mix, Readable, Value, Writable};
///
/// let mut mix = Mix::new();
/// mix.set(Value::from("one"), Value::from(vec![1, 2]));
/// mix.set(Value::from("int"), Value::from(1));
/// mix.set(Value::from("float"), Value::from(1.0));
/// assert_eq!(mix.count(), 3);
/// assert!(mix.exists(&Value::from(vec![1, 2])));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mix {
    storage: IndexMap<String, (Value, Value)>,
}

impl Mix {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Mix::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Original keys in order.
    pub fn keys(&self) -> Vec<Value> {
        self.storage.values().map(|(k, _)| k.clone()).collect()
    }

    /// Copies the entries out as `(key, value)` pairs.
    pub fn to_entries(&self) -> Vec<(Value, Value)> {
        self.storage.values().cloned().collect()
    }
}

impl<K: Into<Value>, V: Into<Value>> FromIterator<(K, V)> for Mix {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Mix::from_entries(iter.into_iter().map(|(k, v)| (k.into(), v.into())))
    }
}

impl Readable for Mix {
    type Key = Value;
    type Value = Value;

    fn exists(&self, key: &Value) -> bool {
        self.storage.contains_key(&key.canonical())
    }

    fn get(&self, key: &Value) -> Result<&Value> {
        self.storage
            .get(&key.canonical())
            .map(|(_, v)| v)
            .ok_or_else(|| CollectError::key_not_found(key))
    }

    fn iter(&self) -> Entries<'_, Value, Value> {
        Box::new(self.storage.values().map(|(k, v)| (k.clone(), v)))
    }

    fn count(&self) -> usize {
        self.storage.len()
    }
}

impl Writable for Mix {
    fn set(&mut self, value: Value, key: Value) {
        self.storage.insert(key.canonical(), (key, value));
    }

    fn add(&mut self, value: Value, key: Value) -> Result<()> {
        let canonical = key.canonical();
        if self.storage.contains_key(&canonical) {
            return Err(CollectError::key_exists(key));
        }
        self.storage.insert(canonical, (key, value));
        Ok(())
    }

    fn replace(&mut self, value: Value, key: Value) -> Result<()> {
        match self.storage.get_mut(&key.canonical()) {
            Some(slot) => {
                *slot = (key, value);
                Ok(())
            }
            None => Err(CollectError::key_not_found(key)),
        }
    }

    fn remove(&mut self, key: &Value) -> Result<Value> {
        self.storage
            .shift_remove(&key.canonical())
            .map(|(_, v)| v)
            .ok_or_else(|| CollectError::key_not_found(key))
    }
}

impl Filterable for Mix {
    fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Value, Value)>,
    {
        let mut mix = Mix::new();
        for (key, value) in entries {
            mix.set(value, key);
        }
        mix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{ObjRef, Object};

    #[test]
    fn keys_of_different_types_are_distinct() {
        let mix = Mix::from_iter([
            (Value::from(1), "int"),
            (Value::from(1.0), "float"),
            (Value::from("1"), "string"),
            (Value::from(true), "bool"),
        ]);
        assert_eq!(mix.count(), 4);
        assert_eq!(mix.get(&Value::from(1.0)), Ok(&Value::from("float")));
    }

    #[test]
    fn iteration_returns_original_keys() {
        let list = Value::from(vec!["a", "b"]);
        let mix = Mix::from_iter([(list.clone(), 1)]);
        let (key, value) = mix.iter().next().unwrap();
        assert_eq!(key, list);
        assert_eq!(value, &Value::from(1));
    }

    #[test]
    fn equal_canonical_forms_collapse() {
        let mut mix = Mix::new();
        mix.set(Value::from("first"), Value::from(vec![1, 2]));
        mix.set(Value::from("second"), Value::from(vec![1, 2]));
        assert_eq!(mix.count(), 1);
        assert_eq!(mix.get(&Value::from(vec![1, 2])), Ok(&Value::from("second")));
    }

    #[test]
    fn non_finite_keys_stay_distinct() {
        let mut mix = Mix::new();
        mix.set(Value::from("nan"), Value::from(f64::NAN));
        mix.set(Value::from("inf"), Value::from(f64::INFINITY));
        mix.set(Value::from("-inf"), Value::from(f64::NEG_INFINITY));
        assert_eq!(mix.count(), 3);
        assert_eq!(mix.get(&Value::from(f64::NAN)), Ok(&Value::from("nan")));
        assert_eq!(mix.get(&Value::from(f64::NEG_INFINITY)), Ok(&Value::from("-inf")));
    }

    #[test]
    fn strict_mutations() {
        let mut mix = Mix::from_iter([(Value::Null, 0)]);
        assert!(mix.add(Value::from(1), Value::Null).is_err());
        assert!(mix.replace(Value::from(1), Value::from(false)).is_err());
        assert!(mix.replace(Value::from(1), Value::Null).is_ok());
        assert_eq!(mix.remove(&Value::Null), Ok(Value::from(1)));
        assert!(mix.is_empty());
    }

    #[test]
    fn objects_key_by_contents() {
        let a = Value::from(ObjRef::new(Object::new("User").with("id", 1)));
        let b = Value::from(ObjRef::new(Object::new("User").with("id", 1)));
        let mix = Mix::from_iter([(a, "a")]);
        assert!(mix.exists(&b));
    }
}
