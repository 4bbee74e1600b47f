//! Custom error types for expense-sync
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.
//!
//! Local-data errors (`InvalidInput`, `Persistence`) propagate to the caller.
//! Remote errors (`RemoteUnreachable`, `RemoteRejected`) are produced by the
//! transport layer and absorbed by the sync engine into a boolean outcome.

use thiserror::Error;

/// The main error type for expense-sync operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Rejected input to a mutating operation (nothing was changed)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The local durable write failed
    #[error("Persistence failure: {0}")]
    Persistence(String),

    /// The remote store could not be reached (transport error, DNS, timeout)
    #[error("Remote unreachable: {0}")]
    RemoteUnreachable(String),

    /// The remote store answered but the response was unusable
    #[error("Remote rejected request: {0}")]
    RemoteRejected(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ExpenseError {
    /// Create an invalid-input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Check if this is an invalid-input error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Check if this is a persistence failure
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }

    /// Check if this error came from the remote path
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::RemoteUnreachable(_) | Self::RemoteRejected(_))
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense-sync operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExpenseError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_input_error() {
        let err = ExpenseError::invalid_input("detail cannot be empty");
        assert_eq!(err.to_string(), "Invalid input: detail cannot be empty");
        assert!(err.is_invalid_input());
        assert!(!err.is_remote());
    }

    #[test]
    fn test_remote_errors_are_remote() {
        assert!(ExpenseError::RemoteUnreachable("dns".into()).is_remote());
        assert!(ExpenseError::RemoteRejected("503".into()).is_remote());
        assert!(!ExpenseError::Persistence("disk full".into()).is_remote());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ExpenseError = io_err.into();
        assert!(matches!(err, ExpenseError::Io(_)));
    }
}
