//! Error types for the citation store

use thiserror::Error;

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised by [`crate::CitationStore`]
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying SQLite failure
    #[error("Database error: {0}")]
    Database(String),

    /// Schema could not be brought to the current version
    #[error("Migration error: {0}")]
    Migration(String),

    /// No record with this id
    #[error("Citation not found: {0}")]
    NotFound(i64),

    /// Could not prepare the database location
    #[error("IO error: {0}")]
    Io(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Database(err.to_string())
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}
