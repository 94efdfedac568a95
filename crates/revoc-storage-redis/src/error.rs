//! Redis storage error conversion.

use revoc_storage::StorageError;

/// Converts a `fred` Redis error to a `StorageError`.
#[allow(clippy::needless_pass_by_value)]
pub fn from_redis_error(err: fred::error::Error) -> StorageError {
    match err.kind() {
        fred::error::ErrorKind::IO => StorageError::Connection(err.to_string()),
        fred::error::ErrorKind::Timeout => StorageError::Timeout,
        fred::error::ErrorKind::Config => StorageError::Configuration(err.to_string()),
        _ => StorageError::Internal(err.to_string()),
    }
}

/// Converts a serialization error to a `StorageError`.
#[allow(clippy::needless_pass_by_value)]
pub fn from_serde_error(err: serde_json::Error) -> StorageError {
    StorageError::Serialization(err.to_string())
}
