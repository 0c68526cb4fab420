//! Membership checks.

use crate::bulk;
use crate::error::Result;
use crate::traits::{AsKey, Readable};
use crate::types::{Classify, Type};

/// Membership checks over a container.
///
/// Containers exposing bulk storage answer key lookups from their map;
/// everything else falls back to iteration with early exit.
pub struct Contains<'a, C> {
    container: &'a C,
}

impl<'a, C> Contains<'a, C> {
    pub fn new(container: &'a C) -> Self {
        Contains { container }
    }
}

impl<C: Readable> Contains<'_, C> {
    pub fn key(&self, key: &C::Key) -> bool {
        self.container.exists(key)
    }

    pub fn value(&self, value: &C::Value) -> bool {
        match self.container.as_storage() {
            Some(storage) => bulk::search(storage, value).is_some(),
            None => self.container.iter().any(|(_, v)| v == value),
        }
    }

    /// Returns `true` if `key` holds exactly `value`.
    pub fn pair(&self, key: &C::Key, value: &C::Value) -> bool {
        self.container.get(key).is_ok_and(|v| v == value)
    }

    /// Returns `true` if `needle` is a key (when it can be read as one) or a
    /// value of the container.
    pub fn key_or_value(&self, needle: &C::Value) -> bool
    where
        C::Value: AsKey<C::Key>,
    {
        needle.as_key().is_some_and(|key| self.key(&key)) || self.value(needle)
    }

    /// Returns `true` if any value is of type `ty`.
    pub fn of_type(&self, ty: impl Into<Type>) -> Result<bool>
    where
        C::Value: Classify,
    {
        let ty = ty.into();
        for (_, value) in self.container.iter() {
            if ty.matches(value)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Returns `true` if any entry matches `predicate`.
    pub fn where_<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&C::Key, &C::Value) -> bool,
    {
        self.container.iter().any(|(k, v)| predicate(&k, v))
    }
}
