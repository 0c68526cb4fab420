//! Mapping keyed by object identity.

use indexmap::IndexMap;

use crate::error::{CollectError, Result};
use crate::traits::{Entries, Filterable, Readable, Writable};
use crate::value::{ObjRef, Value};

/// A mapping from objects to associated data.
///
/// Keys compare by identity: two distinct objects with identical contents
/// are two entries.
///
/// ```
/// use standout_collect::{Obj, ObjRef, Object, Readable, Value};
///
/// let a = ObjRef::new(Object::new("User"));
/// let b = ObjRef::new(Object::new("User"));
///
/// let mut storage = Obj::new();
/// storage.attach(a.clone(), Value::from("admin"));
/// assert!(storage.exists(&a));
/// assert!(!storage.exists(&b));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Obj {
    storage: IndexMap<ObjRef, Value>,
}

impl Obj {
    /// Creates an empty storage.
    pub fn new() -> Self {
        Obj::default()
    }

    /// Stores `data` for `object`, replacing any earlier data.
    pub fn attach(&mut self, object: ObjRef, data: impl Into<Value>) {
        self.storage.insert(object, data.into());
    }

    /// Forgets `object`, returning its data. Absent objects are ignored.
    pub fn detach(&mut self, object: &ObjRef) -> Option<Value> {
        self.storage.shift_remove(object)
    }

    /// Number of attached objects.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if no object is attached.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Attached objects in order.
    pub fn objects(&self) -> Vec<ObjRef> {
        self.storage.keys().cloned().collect()
    }

    /// Copies the entries out as `(object, data)` pairs.
    pub fn to_entries(&self) -> Vec<(ObjRef, Value)> {
        self.storage
            .iter()
            .map(|(o, v)| (o.clone(), v.clone()))
            .collect()
    }
}

impl FromIterator<(ObjRef, Value)> for Obj {
    fn from_iter<I: IntoIterator<Item = (ObjRef, Value)>>(iter: I) -> Self {
        Obj {
            storage: iter.into_iter().collect(),
        }
    }
}

impl Readable for Obj {
    type Key = ObjRef;
    type Value = Value;

    fn exists(&self, key: &ObjRef) -> bool {
        self.storage.contains_key(key)
    }

    fn get(&self, key: &ObjRef) -> Result<&Value> {
        self.storage
            .get(key)
            .ok_or_else(|| CollectError::key_not_found(key))
    }

    fn iter(&self) -> Entries<'_, ObjRef, Value> {
        Box::new(self.storage.iter().map(|(o, v)| (o.clone(), v)))
    }

    fn count(&self) -> usize {
        self.storage.len()
    }
}

impl Writable for Obj {
    fn set(&mut self, value: Value, key: ObjRef) {
        self.attach(key, value);
    }

    fn add(&mut self, value: Value, key: ObjRef) -> Result<()> {
        if self.storage.contains_key(&key) {
            return Err(CollectError::key_exists(&key));
        }
        self.storage.insert(key, value);
        Ok(())
    }

    fn replace(&mut self, value: Value, key: ObjRef) -> Result<()> {
        match self.storage.get_mut(&key) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(CollectError::key_not_found(&key)),
        }
    }

    fn remove(&mut self, key: &ObjRef) -> Result<Value> {
        self.detach(key)
            .ok_or_else(|| CollectError::key_not_found(key))
    }
}

impl Filterable for Obj {
    fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (ObjRef, Value)>,
    {
        entries.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Object;

    fn user(name: &str) -> ObjRef {
        ObjRef::new(Object::new("User").with("name", name))
    }

    #[test]
    fn identity_not_contents() {
        let a = user("Jane");
        let twin = user("Jane");
        let mut storage = Obj::new();
        storage.attach(a.clone(), 1);
        storage.attach(twin.clone(), 2);
        assert_eq!(storage.count(), 2);
        assert_eq!(storage.get(&a), Ok(&Value::from(1)));
        assert_eq!(storage.get(&twin), Ok(&Value::from(2)));
    }

    #[test]
    fn attach_replaces_data() {
        let a = user("Jane");
        let mut storage = Obj::new();
        storage.attach(a.clone(), "old");
        storage.attach(a.clone(), "new");
        assert_eq!(storage.len(), 1);
        assert_eq!(storage.get(&a), Ok(&Value::from("new")));
    }

    #[test]
    fn detach_is_silent() {
        let a = user("Jane");
        let mut storage = Obj::new();
        assert_eq!(storage.detach(&a), None);
        storage.attach(a.clone(), 1);
        assert_eq!(storage.detach(&a), Some(Value::from(1)));
        assert!(storage.is_empty());
    }

    #[test]
    fn strict_mutations() {
        let a = user("Jane");
        let mut storage = Obj::new();
        assert!(storage.replace(Value::from(1), a.clone()).is_err());
        assert!(storage.add(Value::from(1), a.clone()).is_ok());
        assert!(storage.add(Value::from(2), a.clone()).is_err());
        assert_eq!(storage.remove(&a), Ok(Value::from(1)));
        assert!(storage.remove(&a).is_err());
    }

    #[test]
    fn iteration_yields_objects_as_keys() {
        let a = user("Jane");
        let storage = Obj::from_iter([(a.clone(), Value::from("admin"))]);
        let (key, data) = storage.iter().next().unwrap();
        assert_eq!(key, a);
        assert_eq!(data, &Value::from("admin"));
    }
}
