//! Directory error types.

use thiserror::Error;

/// Errors that can occur during directory operations.
///
/// Absence of a record is not an error; lookups return `Ok(None)`.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Backend connection error.
    #[error("Directory connection error: {0}")]
    Connection(String),

    /// Backend query error.
    #[error("Directory query error: {0}")]
    Query(String),

    /// Internal directory error.
    #[error("Internal directory error: {0}")]
    Internal(String),
}

impl DirectoryError {
    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Creates a query error.
    #[must_use]
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

/// Result type for directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;
