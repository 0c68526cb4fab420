//! Keeping leading or trailing entries.

use crate::bulk;
use crate::ops::Toggle;
use crate::traits::{Filterable, Step};

/// Keeps entries from the front or back of a container.
///
/// `until` and `while_` stop reading the source as soon as the stop
/// condition is met, so `take().until(p)` followed by `skip().until(p)`
/// always rebuilds the original entries.
pub struct Take<'a, C> {
    container: &'a C,
}

impl<'a, C> Take<'a, C> {
    pub fn new(container: &'a C) -> Self {
        Take { container }
    }
}

impl<C: Filterable> Take<'_, C> {
    /// The first `n` entries. Negative `n` takes nothing.
    pub fn first(&self, n: isize) -> C {
        bulk::slice(self.container, 0, Some(n.max(0)))
    }

    /// The last `n` entries. Negative `n` takes nothing.
    pub fn last(&self, n: isize) -> C {
        if n <= 0 {
            return C::from_entries(std::iter::empty());
        }
        bulk::slice(self.container, -n, None)
    }

    /// Entries before the first one matching `predicate`.
    pub fn until<F>(&self, predicate: F) -> C
    where
        F: FnMut(&C::Key, &C::Value) -> bool,
    {
        self.keep_while_searching(predicate, true)
    }

    /// Entries up to the first one not matching `predicate`.
    pub fn while_<F>(&self, predicate: F) -> C
    where
        F: FnMut(&C::Key, &C::Value) -> bool,
    {
        self.keep_while_searching(predicate, false)
    }

    fn keep_while_searching<F>(&self, mut predicate: F, found_when: bool) -> C
    where
        F: FnMut(&C::Key, &C::Value) -> bool,
    {
        let mut state = Toggle::Searching;
        self.container.filter_by(|key, value| {
            if predicate(key, value) == found_when {
                state = Toggle::Found;
            }
            match state {
                Toggle::Searching => Step::Keep,
                Toggle::Found => Step::Stop,
            }
        })
    }
}
