//! Redis storage provider implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fred::prelude::*;
use revoc_storage::{StorageError, StorageProvider, StorageRecord, StorageResult};

use crate::config::RedisConfig;
use crate::error::{from_redis_error, from_serde_error};

/// Redis-based storage provider.
///
/// Records are stored as JSON under `prefix:context:key` with a Redis TTL
/// matching the record expiration, so the store reclaims revocations on
/// its own.
pub struct RedisStorage {
    client: Client,
    config: RedisConfig,
}

impl RedisStorage {
    /// Connects to Redis and returns the storage provider.
    ///
    /// ## Errors
    ///
    /// Returns an error if the connection cannot be established.
    pub async fn connect(config: RedisConfig) -> StorageResult<Self> {
        let redis_config = Config::from_url(&config.connection_url())
            .map_err(|e| StorageError::Configuration(e.to_string()))?;

        let client = Client::new(
            redis_config,
            None,
            None,
            Some(ReconnectPolicy::new_exponential(0, 1000, 30_000, 2)),
        );

        client.init().await.map_err(from_redis_error)?;

        Ok(Self { client, config })
    }

    /// Returns the underlying Redis client.
    #[must_use]
    pub const fn client(&self) -> &Client {
        &self.client
    }
}

/// Remaining lifetime of a record in whole milliseconds, floored at one.
fn expiration_to_px(expiration: DateTime<Utc>) -> i64 {
    (expiration - Utc::now()).num_milliseconds().max(1)
}

#[async_trait]
impl StorageProvider for RedisStorage {
    async fn read(&self, context: &str, key: &str) -> StorageResult<Option<StorageRecord>> {
        let key = self.config.record_key(context, key);
        let value: Option<String> = self.client.get(&key).await.map_err(from_redis_error)?;

        match value {
            Some(raw) => {
                let record: StorageRecord =
                    serde_json::from_str(&raw).map_err(from_serde_error)?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    async fn create(
        &self,
        context: &str,
        key: &str,
        value: &str,
        expiration: DateTime<Utc>,
    ) -> StorageResult<()> {
        let key = self.config.record_key(context, key);
        let record = StorageRecord {
            value: value.to_string(),
            expiration,
        };
        let serialized = serde_json::to_string(&record).map_err(from_serde_error)?;

        let result: Option<String> = self
            .client
            .set(
                &key,
                serialized,
                Some(Expiration::PX(expiration_to_px(expiration))),
                Some(SetOptions::NX),
                false,
            )
            .await
            .map_err(from_redis_error)?;

        if result.is_some() {
            Ok(())
        } else {
            Err(StorageError::AlreadyExists)
        }
    }

    async fn update(
        &self,
        context: &str,
        key: &str,
        value: &str,
        expiration: DateTime<Utc>,
    ) -> StorageResult<()> {
        let key = self.config.record_key(context, key);
        let record = StorageRecord {
            value: value.to_string(),
            expiration,
        };
        let serialized = serde_json::to_string(&record).map_err(from_serde_error)?;

        let result: Option<String> = self
            .client
            .set(
                &key,
                serialized,
                Some(Expiration::PX(expiration_to_px(expiration))),
                Some(SetOptions::XX),
                false,
            )
            .await
            .map_err(from_redis_error)?;

        if result.is_some() {
            Ok(())
        } else {
            Err(StorageError::NotFound)
        }
    }

    async fn delete(&self, context: &str, key: &str) -> StorageResult<()> {
        let key = self.config.record_key(context, key);
        self.client
            .del::<(), _>(&key)
            .await
            .map_err(from_redis_error)
    }

    fn max_context_length(&self) -> usize {
        self.config.max_context_length
    }

    fn max_key_length(&self) -> usize {
        self.config.max_key_length
    }

    fn is_server_side(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn expiration_converts_to_remaining_millis() {
        let px = expiration_to_px(Utc::now() + Duration::seconds(10));
        assert!(px > 9_000 && px <= 10_000);
    }

    #[test]
    fn past_expiration_floors_at_one_milli() {
        let px = expiration_to_px(Utc::now() - Duration::seconds(10));
        assert_eq!(px, 1);
    }
}
