//! Storage provider trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StorageResult;

/// A single record held by a storage backend.
///
/// For revocation entries the presence of the record is the signal; the
/// value carries optional free-form detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageRecord {
    /// Stored value.
    pub value: String,

    /// Absolute timestamp after which the backend may reclaim the record.
    pub expiration: DateTime<Utc>,
}

/// Server-side key-value storage consumed by the revocation cache.
///
/// Records live under a `(context, key)` pair, where the context label
/// subdivides one physical store into independent logical namespaces.
/// Expiration is enforced by the backend: an expired record behaves as
/// absent for every operation.
///
/// Implementations must be thread-safe and must publish their capability
/// limits truthfully; callers size contexts and keys against
/// [`max_context_length`](Self::max_context_length) and
/// [`max_key_length`](Self::max_key_length) before every call.
#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// Reads the record stored under `(context, key)`.
    ///
    /// Returns `None` if no record exists or the record has expired.
    async fn read(&self, context: &str, key: &str) -> StorageResult<Option<StorageRecord>>;

    /// Creates a record under `(context, key)`.
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::AlreadyExists` if a live record is present.
    async fn create(
        &self,
        context: &str,
        key: &str,
        value: &str,
        expiration: DateTime<Utc>,
    ) -> StorageResult<()>;

    /// Replaces the record under `(context, key)`, resetting its expiration.
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::NotFound` if no live record is present.
    async fn update(
        &self,
        context: &str,
        key: &str,
        value: &str,
        expiration: DateTime<Utc>,
    ) -> StorageResult<()>;

    /// Deletes the record under `(context, key)`.
    ///
    /// Returns `Ok(())` even if no record exists.
    async fn delete(&self, context: &str, key: &str) -> StorageResult<()>;

    /// Longest context label this backend accepts.
    fn max_context_length(&self) -> usize;

    /// Longest key this backend accepts.
    fn max_key_length(&self) -> usize;

    /// Whether this backend holds its state on the server.
    ///
    /// A client-held store (a cookie and the like) can be forged or
    /// discarded by the party being checked and must never back a
    /// revocation list.
    fn is_server_side(&self) -> bool;
}
