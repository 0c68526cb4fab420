//! Dropping leading or trailing entries.

use crate::bulk;
use crate::ops::Toggle;
use crate::traits::{Filterable, Readable, Step};

/// Drops entries from the front or back of a container.
///
/// Keyed containers keep their keys; `Indexed` renumbers.
pub struct Skip<'a, C> {
    container: &'a C,
}

impl<'a, C> Skip<'a, C> {
    pub fn new(container: &'a C) -> Self {
        Skip { container }
    }
}

impl<C: Filterable> Skip<'_, C> {
    /// Everything but the first `n` entries. Negative `n` skips nothing.
    pub fn first(&self, n: isize) -> C {
        bulk::slice(self.container, n.max(0), None)
    }

    /// Everything but the last `n` entries. Negative `n` skips nothing.
    pub fn last(&self, n: isize) -> C {
        let keep = (Readable::count(self.container) as isize - n.max(0)).max(0);
        bulk::slice(self.container, 0, Some(keep))
    }

    /// Drops entries until `predicate` first holds, then keeps the rest,
    /// starting with the matching entry.
    pub fn until<F>(&self, predicate: F) -> C
    where
        F: FnMut(&C::Key, &C::Value) -> bool,
    {
        self.drop_while_searching(predicate, true)
    }

    /// Drops entries while `predicate` holds, then keeps the rest.
    pub fn while_<F>(&self, predicate: F) -> C
    where
        F: FnMut(&C::Key, &C::Value) -> bool,
    {
        self.drop_while_searching(predicate, false)
    }

    fn drop_while_searching<F>(&self, mut predicate: F, found_when: bool) -> C
    where
        F: FnMut(&C::Key, &C::Value) -> bool,
    {
        let mut state = Toggle::Searching;
        self.container.filter_by(|key, value| {
            if state == Toggle::Searching && predicate(key, value) == found_when {
                state = Toggle::Found;
            }
            match state {
                Toggle::Searching => Step::Drop,
                Toggle::Found => Step::Keep,
            }
        })
    }
}
