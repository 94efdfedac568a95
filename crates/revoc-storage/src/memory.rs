//! In-memory storage backend.
//!
//! For development and tests. For production with multiple instances, use
//! a shared store (see `revoc-storage-redis`).

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::error::{StorageError, StorageResult};
use crate::provider::{StorageProvider, StorageRecord};

/// In-memory storage backend.
///
/// Expired records are purged lazily: `read`, `create` and `update` treat
/// them as absent.
pub struct MemoryStorage {
    records: RwLock<HashMap<(String, String), StorageRecord>>,
    max_context_length: usize,
    max_key_length: usize,
}

impl MemoryStorage {
    /// Creates an in-memory backend with effectively unbounded limits.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(usize::MAX, usize::MAX)
    }

    /// Creates an in-memory backend with explicit capability limits.
    #[must_use]
    pub fn with_limits(max_context_length: usize, max_key_length: usize) -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            max_context_length,
            max_key_length,
        }
    }

    /// Number of live records currently held.
    pub async fn len(&self) -> usize {
        let now = Utc::now();
        self.records
            .read()
            .await
            .values()
            .filter(|r| r.expiration > now)
            .count()
    }

    /// Whether the backend holds no live records.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StorageProvider for MemoryStorage {
    async fn read(&self, context: &str, key: &str) -> StorageResult<Option<StorageRecord>> {
        let records = self.records.read().await;
        let record = records.get(&(context.to_string(), key.to_string()));
        Ok(record.filter(|r| r.expiration > Utc::now()).cloned())
    }

    async fn create(
        &self,
        context: &str,
        key: &str,
        value: &str,
        expiration: DateTime<Utc>,
    ) -> StorageResult<()> {
        let mut records = self.records.write().await;
        let entry = (context.to_string(), key.to_string());

        if records
            .get(&entry)
            .is_some_and(|r| r.expiration > Utc::now())
        {
            return Err(StorageError::AlreadyExists);
        }

        records.insert(
            entry,
            StorageRecord {
                value: value.to_string(),
                expiration,
            },
        );
        Ok(())
    }

    async fn update(
        &self,
        context: &str,
        key: &str,
        value: &str,
        expiration: DateTime<Utc>,
    ) -> StorageResult<()> {
        let mut records = self.records.write().await;
        let entry = (context.to_string(), key.to_string());

        if !records
            .get(&entry)
            .is_some_and(|r| r.expiration > Utc::now())
        {
            return Err(StorageError::NotFound);
        }

        records.insert(
            entry,
            StorageRecord {
                value: value.to_string(),
                expiration,
            },
        );
        Ok(())
    }

    async fn delete(&self, context: &str, key: &str) -> StorageResult<()> {
        self.records
            .write()
            .await
            .remove(&(context.to_string(), key.to_string()));
        Ok(())
    }

    fn max_context_length(&self) -> usize {
        self.max_context_length
    }

    fn max_key_length(&self) -> usize {
        self.max_key_length
    }

    fn is_server_side(&self) -> bool {
        true
    }
}
