//! Counting entries.

use indexmap::IndexMap;

use crate::associative::Associative;
use crate::traits::Readable;
use crate::value::{Key, Value};

/// Counts entries of a container.
pub struct CountBy<'a, C> {
    container: &'a C,
}

impl<'a, C> CountBy<'a, C> {
    pub fn new(container: &'a C) -> Self {
        CountBy { container }
    }
}

impl<C: Readable> CountBy<'_, C> {
    /// Number of entries, counted by iteration.
    pub fn elements(&self) -> usize {
        self.container.iter().count()
    }

    /// Number of entries matching `predicate`.
    pub fn where_<F>(&self, mut predicate: F) -> usize
    where
        F: FnMut(&C::Key, &C::Value) -> bool,
    {
        self.container
            .iter()
            .filter(|(k, v)| predicate(k, *v))
            .count()
    }

    /// Occurrences of each value, keyed by the value read as a key and in
    /// order of first appearance.
    ///
    /// ```
    /// use standout_collect::{Indexed, Key, Operations, Value};
    ///
    /// let votes = Indexed::from(vec!["yes", "no", "yes"]);
    /// let tally = votes.count_by().values();
    /// assert_eq!(tally.keys(), vec![Key::from("yes"), Key::from("no")]);
    /// assert_eq!(tally.to_map()[&Key::from("yes")], Value::from(2));
    /// ```
    pub fn values(&self) -> Associative
    where
        C: Readable<Value = Value>,
    {
        let mut counts: IndexMap<Key, i64> = IndexMap::new();
        for (_, value) in self.container.iter() {
            *counts.entry(Key::from_value(value)).or_insert(0) += 1;
        }
        counts.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Indexed, Mix};

    #[test]
    fn elements() {
        assert_eq!(CountBy::new(&Indexed::from(vec![1, 2, 3])).elements(), 3);
        assert_eq!(CountBy::new(&Mix::new()).elements(), 0);
    }

    #[test]
    fn where_predicate() {
        let list = Indexed::from(vec![1, 20, 3, 40]);
        let count = CountBy::new(&list).where_(|_, v| v.as_number().is_some_and(|n| n.to_f64() > 10.0));
        assert_eq!(count, 2);
    }

    #[test]
    fn values_merge_equal_keys() {
        let list = Indexed::from(vec![Value::from(1), Value::from(1.0), Value::from("1"), Value::from(1)]);
        let tally = CountBy::new(&list).values();
        assert_eq!(tally.keys(), vec![Key::Int(1), Key::from("1")]);
        assert_eq!(tally.get(&Key::Int(1)), Ok(&Value::from(3)));
        assert_eq!(tally.get(&Key::from("1")), Ok(&Value::from(1)));
    }
}
