//! Core error types for the bond recommender.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use bond_recommender_exchange::ExchangeError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the recommender.
///
/// Database-specific errors are wrapped in string form to keep this type
/// database-agnostic.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Exchange request failed: {0}")]
    Exchange(#[from] ExchangeError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Operation cancelled")]
    Cancelled,

    /// A background task died before reporting a result.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// True for a storage lookup that matched no row.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Database(DatabaseError::NotFound(_)))
    }

    /// True for a create that hit a uniqueness constraint.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Error::Database(DatabaseError::UniqueViolation(_)))
    }
}

/// Database-agnostic error type for storage operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert storage-specific errors (Diesel, SQLite, etc.) into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate key).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown collection \"{0}\"")]
    UnknownCollection(String),

    #[error("Invalid duration \"{0}\", expected one of 1y, 2y, 3y, 4y, 5y")]
    InvalidDuration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_predicates() {
        let missing = Error::Database(DatabaseError::NotFound("bond 7".into()));
        assert!(missing.is_not_found());
        assert!(!missing.is_already_exists());

        let duplicate = Error::Database(DatabaseError::UniqueViolation("bonds.isin".into()));
        assert!(duplicate.is_already_exists());
        assert!(!duplicate.is_not_found());

        assert!(!Error::NotFound("bond".into()).is_not_found());
        assert!(!Error::Cancelled.is_already_exists());
    }

    #[test]
    fn test_exchange_error_passes_through() {
        let err: Error = ExchangeError::MissingProperty {
            property: "FACEUNIT".into(),
            isin: "RU000A100CN3".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Exchange request failed: missing property FACEUNIT for RU000A100CN3"
        );
    }
}
