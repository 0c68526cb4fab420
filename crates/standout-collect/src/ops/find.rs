//! Single-element lookups.

use crate::bulk;
use crate::traits::Readable;

/// Finds keys and values by key, value or predicate.
///
/// Every lookup returns `None` when nothing qualifies.
pub struct Find<'a, C> {
    container: &'a C,
}

impl<'a, C> Find<'a, C> {
    pub fn new(container: &'a C) -> Self {
        Find { container }
    }
}

impl<'a, C: Readable> Find<'a, C> {
    /// First key holding `value`.
    pub fn key(&self, value: &C::Value) -> Option<C::Key> {
        let container: &'a C = self.container;
        if let Some(storage) = container.as_storage() {
            return bulk::search(storage, value).cloned();
        }
        container
            .iter()
            .find(|(_, v)| *v == value)
            .map(|(key, _)| key)
    }

    /// Value under `key`.
    pub fn value(&self, key: &C::Key) -> Option<&'a C::Value> {
        let container: &'a C = self.container;
        container.get(key).ok()
    }

    /// First value matching `predicate`.
    pub fn first<F>(&self, mut predicate: F) -> Option<&'a C::Value>
    where
        F: FnMut(&C::Key, &C::Value) -> bool,
    {
        let container: &'a C = self.container;
        container
            .iter()
            .find(|(k, v)| predicate(k, *v))
            .map(|(_, v)| v)
    }

    /// Key of the first value matching `predicate`.
    pub fn first_key<F>(&self, mut predicate: F) -> Option<C::Key>
    where
        F: FnMut(&C::Key, &C::Value) -> bool,
    {
        self.container
            .iter()
            .find(|(k, v)| predicate(k, *v))
            .map(|(k, _)| k)
    }

    /// Last value matching `predicate`.
    ///
    /// Always reads the whole container.
    pub fn last<F>(&self, mut predicate: F) -> Option<&'a C::Value>
    where
        F: FnMut(&C::Key, &C::Value) -> bool,
    {
        let container: &'a C = self.container;
        container
            .iter()
            .filter(|(k, v)| predicate(k, *v))
            .last()
            .map(|(_, v)| v)
    }

    /// Key of the last value matching `predicate`.
    pub fn last_key<F>(&self, mut predicate: F) -> Option<C::Key>
    where
        F: FnMut(&C::Key, &C::Value) -> bool,
    {
        self.container
            .iter()
            .filter(|(k, v)| predicate(k, *v))
            .last()
            .map(|(k, _)| k)
    }

    /// Value just before the first occurrence of `value`.
    pub fn before(&self, value: &C::Value) -> Option<&'a C::Value> {
        self.before_where(|_, v| v == value)
    }

    /// Value just before the first match of `predicate`.
    ///
    /// If nothing matches, this is the last value. If the first value
    /// matches, there is nothing before it.
    pub fn before_where<F>(&self, mut predicate: F) -> Option<&'a C::Value>
    where
        F: FnMut(&C::Key, &C::Value) -> bool,
    {
        let container: &'a C = self.container;
        let mut previous = None;
        for (key, value) in container.iter() {
            if predicate(&key, value) {
                return previous;
            }
            previous = Some(value);
        }
        previous
    }

    /// Value just after the first occurrence of `value`.
    pub fn after(&self, value: &C::Value) -> Option<&'a C::Value> {
        self.after_where(|_, v| v == value)
    }

    /// Value just after the first match of `predicate`.
    pub fn after_where<F>(&self, mut predicate: F) -> Option<&'a C::Value>
    where
        F: FnMut(&C::Key, &C::Value) -> bool,
    {
        let container: &'a C = self.container;
        let mut entries = container.iter();
        entries.by_ref().find(|(k, v)| predicate(k, *v))?;
        entries.next().map(|(_, v)| v)
    }
}
