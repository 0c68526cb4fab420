//! Error types for the collect crate.

use thiserror::Error;

/// Errors raised by container mutation, lookup and query operations.
///
/// Every failing call leaves its receiver untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollectError {
    /// `add` on a key that is already occupied.
    #[error("key '{key}' already exists")]
    KeyAlreadyExists { key: String },

    /// `get`, `replace` or `remove` on an absent key.
    #[error("key '{key}' not found")]
    KeyNotFound { key: String },

    /// A tabular operation referenced a column some row does not have.
    #[error("column '{column}' is missing from row '{row}'")]
    MissingColumn { column: String, row: String },

    /// A value could not be mapped to any known type tag.
    #[error("cannot classify value: {value}")]
    TypeUnclassifiable { value: String },

    /// An `Ensure` assertion did not hold.
    #[error("expectation failed: {check}")]
    EnsureFailed { check: String },
}

impl CollectError {
    pub(crate) fn key_exists(key: impl std::fmt::Display) -> Self {
        CollectError::KeyAlreadyExists {
            key: key.to_string(),
        }
    }

    pub(crate) fn key_not_found(key: impl std::fmt::Display) -> Self {
        CollectError::KeyNotFound {
            key: key.to_string(),
        }
    }

    pub(crate) fn missing_column(column: &str, row: impl std::fmt::Display) -> Self {
        CollectError::MissingColumn {
            column: column.to_string(),
            row: row.to_string(),
        }
    }
}

/// Result type for collect operations.
pub type Result<T> = std::result::Result<T, CollectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_key() {
        assert_eq!(
            CollectError::key_exists("age").to_string(),
            "key 'age' already exists"
        );
        assert_eq!(CollectError::key_not_found(7).to_string(), "key '7' not found");
        assert_eq!(
            CollectError::missing_column("age", 3).to_string(),
            "column 'age' is missing from row '3'"
        );
    }
}
