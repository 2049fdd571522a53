//! Error handling for catalog operations
//!
//! Every failure a catalog can report is an expected, non-fatal condition:
//! the operation that produced it leaves the catalog untouched. The variants
//! carry the entity kind and the offending key so callers can log or display
//! them without extra bookkeeping.

use std::fmt;
use thiserror::Error;

/// Error type for catalog and management system operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// `add` on a key that is already present
    #[error("{kind} '{key}' already exists")]
    AlreadyExists { kind: &'static str, key: String },

    /// `remove`, `update` or a lookup on a key that is absent
    #[error("{kind} '{key}' not found")]
    NotFound { kind: &'static str, key: String },

    /// Aggregation over a catalog holding no records
    #[error("cannot aggregate over an empty {kind} catalog")]
    EmptyCollection { kind: &'static str },

    /// `update` given a record whose own key differs from the target key
    #[error("{kind} update for '{expected}' carries key '{found}'")]
    KeyMismatch { kind: &'static str, expected: String, found: String },
}

impl CatalogError {
    /// Stable label for log fields
    pub fn category(&self) -> &'static str {
        match self {
            CatalogError::AlreadyExists { .. } => "already_exists",
            CatalogError::NotFound { .. } => "not_found",
            CatalogError::EmptyCollection { .. } => "empty_collection",
            CatalogError::KeyMismatch { .. } => "key_mismatch",
        }
    }

    /// Entity kind the failing operation targeted
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::AlreadyExists { kind, .. }
            | CatalogError::NotFound { kind, .. }
            | CatalogError::EmptyCollection { kind }
            | CatalogError::KeyMismatch { kind, .. } => kind,
        }
    }

    /// Whether the caller can carry on using the catalog.
    ///
    /// Always true: no operation leaves partial state behind.
    pub fn is_recoverable(&self) -> bool {
        true
    }
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Convenience constructors
impl CatalogError {
    /// Create an "already exists" error for `key`
    pub fn already_exists(kind: &'static str, key: impl fmt::Display) -> Self {
        Self::AlreadyExists { kind, key: key.to_string() }
    }

    /// Create a "not found" error for `key`
    pub fn not_found(kind: &'static str, key: impl fmt::Display) -> Self {
        Self::NotFound { kind, key: key.to_string() }
    }

    /// Create an "empty collection" error
    pub fn empty(kind: &'static str) -> Self {
        Self::EmptyCollection { kind }
    }

    /// Create a key mismatch error
    pub fn key_mismatch(
        kind: &'static str,
        expected: impl fmt::Display,
        found: impl fmt::Display,
    ) -> Self {
        Self::KeyMismatch { kind, expected: expected.to_string(), found: found.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_kind_and_key() {
        let err = CatalogError::already_exists("employee", 6);
        assert_eq!(err.to_string(), "employee '6' already exists");
        assert_eq!(err.category(), "already_exists");

        let err = CatalogError::not_found("department", "Legal");
        assert_eq!(err.to_string(), "department 'Legal' not found");
        assert_eq!(err.kind(), "department");
    }

    #[test]
    fn test_every_error_is_recoverable() {
        let errors = [
            CatalogError::already_exists("book", "1984"),
            CatalogError::not_found("book", "1984"),
            CatalogError::empty("book"),
            CatalogError::key_mismatch("book", "1984", "Beloved"),
        ];

        for err in errors {
            assert!(err.is_recoverable(), "{} should be recoverable", err.category());
        }
    }
}
