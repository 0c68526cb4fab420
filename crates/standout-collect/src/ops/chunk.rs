//! Splitting into fixed-size groups.

use std::num::NonZeroUsize;

use crate::traits::{ArrayableStorage, Filterable};

/// Splits a container into groups of equal size.
pub struct Chunk<'a, C> {
    container: &'a C,
}

impl<'a, C> Chunk<'a, C> {
    pub fn new(container: &'a C) -> Self {
        Chunk { container }
    }
}

impl<C: ArrayableStorage + Filterable> Chunk<'_, C> {
    /// Groups of `size` entries in order; the last may be shorter.
    ///
    /// Keyed containers keep their keys in every group, while each
    /// `Indexed` group is numbered from zero.
    pub fn size(&self, size: NonZeroUsize) -> Vec<C> {
        let size = size.get();
        let mut chunks = Vec::new();
        let mut current = Vec::with_capacity(size);
        for (key, value) in self.container.storage() {
            current.push((key.clone(), value.clone()));
            if current.len() == size {
                chunks.push(C::from_entries(std::mem::take(&mut current)));
            }
        }
        if !current.is_empty() {
            chunks.push(C::from_entries(current));
        }
        chunks
    }
}
