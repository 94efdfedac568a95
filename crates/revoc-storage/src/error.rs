//! Storage error types.

use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Connection to the storage backend failed.
    #[error("storage connection error: {0}")]
    Connection(String),

    /// Storage operation timed out.
    #[error("storage operation timed out")]
    Timeout,

    /// Record serialization/deserialization error.
    #[error("storage serialization error: {0}")]
    Serialization(String),

    /// A live record already exists under the given context and key.
    #[error("record already exists")]
    AlreadyExists,

    /// No live record exists under the given context and key.
    #[error("record not found")]
    NotFound,

    /// Invalid backend configuration.
    #[error("storage configuration error: {0}")]
    Configuration(String),

    /// Internal backend error.
    #[error("internal storage error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = StorageError::NotFound;
        assert_eq!(err.to_string(), "record not found");

        let err = StorageError::Connection("refused".to_string());
        assert!(err.to_string().contains("refused"));
    }
}
