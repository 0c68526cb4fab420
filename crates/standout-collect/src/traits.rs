//! Capability traits implemented by containers.
//!
//! Each trait describes one ability a container may have. Operations are
//! generic over the smallest set they need, so a new container picks up the
//! whole operation layer by implementing these:
//!
//! | Trait | Ability |
//! |-------|---------|
//! | [`Readable`] | existence checks, lookup, iteration |
//! | [`Writable`] | insert, replace, remove in place |
//! | [`Filterable`] | build a new instance from a subset of entries |
//! | [`ArrayableStorage`] | bulk access to the backing key/value map |
//! | [`Sortable`] | `Sort` (blanket, for arrayable + filterable) |
//! | [`Chunkable`] | `Chunk` (blanket, for arrayable + filterable) |

use std::fmt::Debug;

use indexmap::IndexMap;

use crate::error::Result;
use crate::ops::{Chunk, Sort};
use crate::value::{Key, ObjRef, Value};

/// Backing key/value storage exposed by [`ArrayableStorage`] containers.
pub type Storage<K, V> = IndexMap<K, V>;

/// Iterator over a container's entries, keys by value and values by
/// reference.
pub type Entries<'a, K, V> = Box<dyn Iterator<Item = (K, &'a V)> + 'a>;

/// Existence checks, lookup and iteration.
pub trait Readable {
    type Key: Clone + PartialEq + Debug;
    type Value: Clone + PartialEq + Debug;

    /// Returns `true` if an entry exists under `key`.
    fn exists(&self, key: &Self::Key) -> bool;

    /// Returns the value under `key`.
    ///
    /// Fails with `KeyNotFound` if there is no such entry.
    fn get(&self, key: &Self::Key) -> Result<&Self::Value>;

    /// Iterates the entries in order.
    ///
    /// Every call walks the current storage; nothing is snapshotted.
    fn iter(&self) -> Entries<'_, Self::Key, Self::Value>;

    /// Number of entries.
    fn count(&self) -> usize {
        self.iter().count()
    }

    /// Bulk view of the backing map, for containers that have one.
    ///
    /// Operations use this to take map lookups instead of linear scans.
    fn as_storage(&self) -> Option<&Storage<Self::Key, Self::Value>> {
        None
    }
}

/// In-place mutation with strict existence rules.
pub trait Writable: Readable {
    /// Inserts or overwrites the entry under `key`.
    fn set(&mut self, value: Self::Value, key: Self::Key);

    /// Inserts a new entry; fails with `KeyAlreadyExists` if `key` is taken.
    fn add(&mut self, value: Self::Value, key: Self::Key) -> Result<()>;

    /// Overwrites an existing entry; fails with `KeyNotFound` otherwise.
    fn replace(&mut self, value: Self::Value, key: Self::Key) -> Result<()>;

    /// Removes an entry and returns its value; fails with `KeyNotFound` if
    /// absent.
    fn remove(&mut self, key: &Self::Key) -> Result<Self::Value>;
}

/// Decision returned to [`Filterable::filter_by`] for each entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Keep the entry.
    Keep,
    /// Leave the entry out.
    Drop,
    /// Leave the entry out and stop reading the source.
    Stop,
}

/// Containers that can be rebuilt from a subset of their entries.
pub trait Filterable: Readable + Sized {
    /// Builds a container from entries.
    ///
    /// Keyed containers keep the given keys (a repeated key keeps its first
    /// position and its last value); sequences renumber from zero.
    fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Self::Key, Self::Value)>;

    /// Returns a new container holding the entries `decide` keeps.
    ///
    /// Iteration ends at the first [`Step::Stop`]; later entries are never
    /// visited.
    fn filter_by<F>(&self, mut decide: F) -> Self
    where
        F: FnMut(&Self::Key, &Self::Value) -> Step,
    {
        let mut kept = Vec::new();
        for (key, value) in self.iter() {
            match decide(&key, value) {
                Step::Keep => kept.push((key, value.clone())),
                Step::Drop => {}
                Step::Stop => break,
            }
        }
        Self::from_entries(kept)
    }

    /// Returns a new container holding the entries matching `keep`.
    fn filter<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&Self::Key, &Self::Value) -> bool,
    {
        self.filter_by(|key, value| if keep(key, value) { Step::Keep } else { Step::Drop })
    }
}

/// Containers backed by a single ordered key/value map.
pub trait ArrayableStorage: Readable + Sized {
    /// The backing map.
    fn storage(&self) -> &Storage<Self::Key, Self::Value>;

    /// Builds a container of the same type around `storage`.
    fn from_storage(storage: Storage<Self::Key, Self::Value>) -> Self;
}

/// Containers that can be sorted.
pub trait Sortable: ArrayableStorage + Filterable {
    /// Opens a [`Sort`] over this container.
    fn sort(&self) -> Sort<'_, Self> {
        Sort::new(self)
    }
}

impl<C: ArrayableStorage + Filterable> Sortable for C {}

/// Containers that can be split into fixed-size groups.
pub trait Chunkable: ArrayableStorage + Filterable {
    /// Opens a [`Chunk`] over this container.
    fn chunk(&self) -> Chunk<'_, Self> {
        Chunk::new(self)
    }
}

impl<C: ArrayableStorage + Filterable> Chunkable for C {}

/// Reads a value as a key of type `K`, if it can be one.
///
/// Used by `Contains::key_or_value` to test one needle against both keys and
/// values.
pub trait AsKey<K> {
    fn as_key(&self) -> Option<K>;
}

impl AsKey<Key> for Value {
    fn as_key(&self) -> Option<Key> {
        match self {
            Value::Number(crate::Number::I64(n)) => Some(Key::Int(*n)),
            Value::String(s) => Some(Key::Str(s.clone())),
            _ => None,
        }
    }
}

impl AsKey<usize> for Value {
    fn as_key(&self) -> Option<usize> {
        match self {
            Value::Number(crate::Number::I64(n)) => usize::try_from(*n).ok(),
            _ => None,
        }
    }
}

impl AsKey<Value> for Value {
    fn as_key(&self) -> Option<Value> {
        Some(self.clone())
    }
}

impl AsKey<ObjRef> for Value {
    fn as_key(&self) -> Option<ObjRef> {
        self.as_object().cloned()
    }
}
