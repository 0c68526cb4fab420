//! Tabular container: keyed rows of named cells.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::associative::Associative;
use crate::error::{CollectError, Result};
use crate::indexed::Indexed;
use crate::select::Select;
use crate::traits::{ArrayableStorage, Entries, Filterable, Readable, Storage};
use crate::value::{Key, Value};

/// One row of a [`Matrix`]: column name to cell value.
pub type Row = IndexMap<String, Value>;

/// Builds a [`Row`] from `(column, value)` pairs.
///
/// ```
/// use standout_collect::{row, Value};
///
/// let r = row([("id", Value::from(1)), ("name", Value::from("John"))]);
/// assert_eq!(r["name"], Value::from("John"));
/// ```
pub fn row<I, C, V>(cells: I) -> Row
where
    I: IntoIterator<Item = (C, V)>,
    C: Into<String>,
    V: Into<Value>,
{
    cells
        .into_iter()
        .map(|(c, v)| (c.into(), v.into()))
        .collect()
}

/// Looks up `column` in a row, failing with `MissingColumn` if absent.
pub(crate) fn cell<'a>(key: &Key, row: &'a Row, column: &str) -> Result<&'a Value> {
    row.get(column)
        .ok_or_else(|| CollectError::missing_column(column, key))
}

/// A table: an ordered mapping from row keys to [`Row`]s.
///
/// Rows need not share the same columns, but any operation naming a column
/// fails with `MissingColumn` as soon as a row under consideration lacks it.
///
/// ```
/// use standout_collect::{row, Matrix, Value};
///
/// let people = Matrix::from_iter([
///     (1, row([("name", Value::from("John")), ("age", Value::from(21))])),
///     (2, row([("name", Value::from("Jane")), ("age", Value::from(27))])),
/// ]);
/// let names = people.column("name").unwrap();
/// assert_eq!(names.to_vec(), vec![Value::from("John"), Value::from("Jane")]);
/// assert!(people.column("email").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Matrix {
    storage: Storage<Key, Row>,
}

impl Matrix {
    /// Creates an empty table.
    pub fn new() -> Self {
        Matrix::default()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Row keys in order.
    pub fn keys(&self) -> Vec<Key> {
        self.storage.keys().cloned().collect()
    }

    /// Iterates the rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.storage.values()
    }

    /// Copies the rows out as a map.
    pub fn to_map(&self) -> IndexMap<Key, Row> {
        self.storage.clone()
    }

    /// Returns the value of `column` in the row under `key`.
    pub fn cell(&self, key: &Key, column: &str) -> Result<&Value> {
        let row = self.get(key)?;
        cell(key, row, column)
    }

    /// Projects one column across all rows.
    pub fn column(&self, name: &str) -> Result<Indexed> {
        let mut values = Indexed::new();
        for (key, row) in &self.storage {
            values.push(cell(key, row, name)?.clone());
        }
        Ok(values)
    }

    /// Projects one column across all rows, keyed by another column.
    ///
    /// Index cells become keys through [`Key::from_value`]; rows sharing an
    /// index keep the first position and the last value.
    pub fn column_by(&self, name: &str, index_by: &str) -> Result<Associative> {
        let mut entries = Vec::with_capacity(self.storage.len());
        for (key, row) in &self.storage {
            let value = cell(key, row, name)?.clone();
            let index = Key::from_value(cell(key, row, index_by)?);
            entries.push((index, value));
        }
        Ok(Associative::from_entries(entries))
    }

    /// Flattens every row's cells into one sequence, row by row.
    pub fn collapse(&self) -> Indexed {
        self.storage
            .values()
            .flat_map(|row| row.values().cloned())
            .collect()
    }

    /// Rows holding the first occurrence of each distinct `column` value.
    pub fn unique(&self, column: &str) -> Result<Matrix> {
        Ok(self.partition(column)?.0)
    }

    /// Rows repeating a `column` value seen in an earlier row.
    pub fn duplicates(&self, column: &str) -> Result<Matrix> {
        Ok(self.partition(column)?.1)
    }

    /// Opens a fluent [`Select`] over a copy of this table.
    pub fn select(&self) -> Select {
        Select::new(self.clone())
    }

    fn partition(&self, column: &str) -> Result<(Matrix, Matrix)> {
        let mut seen = HashSet::new();
        let mut unique = Storage::new();
        let mut repeated = Storage::new();
        for (key, row) in &self.storage {
            let value = cell(key, row, column)?;
            let target = if seen.insert(value.canonical()) {
                &mut unique
            } else {
                &mut repeated
            };
            target.insert(key.clone(), row.clone());
        }
        Ok((Matrix::from_storage(unique), Matrix::from_storage(repeated)))
    }
}

impl From<IndexMap<Key, Row>> for Matrix {
    fn from(storage: IndexMap<Key, Row>) -> Self {
        Matrix { storage }
    }
}

impl<K: Into<Key>> FromIterator<(K, Row)> for Matrix {
    fn from_iter<I: IntoIterator<Item = (K, Row)>>(iter: I) -> Self {
        Matrix {
            storage: iter.into_iter().map(|(k, r)| (k.into(), r)).collect(),
        }
    }
}

impl Readable for Matrix {
    type Key = Key;
    type Value = Row;

    fn exists(&self, key: &Key) -> bool {
        self.storage.contains_key(key)
    }

    fn get(&self, key: &Key) -> Result<&Row> {
        self.storage
            .get(key)
            .ok_or_else(|| CollectError::key_not_found(key))
    }

    fn iter(&self) -> Entries<'_, Key, Row> {
        Box::new(self.storage.iter().map(|(k, r)| (k.clone(), r)))
    }

    fn count(&self) -> usize {
        self.storage.len()
    }

    fn as_storage(&self) -> Option<&Storage<Key, Row>> {
        Some(&self.storage)
    }
}

impl Filterable for Matrix {
    fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Key, Row)>,
    {
        Matrix {
            storage: entries.into_iter().collect(),
        }
    }
}

impl ArrayableStorage for Matrix {
    fn storage(&self) -> &Storage<Key, Row> {
        &self.storage
    }

    fn from_storage(storage: Storage<Key, Row>) -> Self {
        Matrix { storage }
    }
}
