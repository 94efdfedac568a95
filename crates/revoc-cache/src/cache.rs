//! The revocation cache.

use std::borrow::Cow;
use std::sync::Arc;

use chrono::Utc;
use revoc_storage::StorageProvider;
use tokio::sync::Mutex;

use crate::config::CacheConfig;
use crate::error::ConfigError;
use crate::normalize::normalize;

/// Value stored for plain revocations. Presence is the signal; the content
/// carries no meaning.
const REVOCATION_MARKER: &str = "y";

/// Storage-abstracted, time-bounded revocation list.
///
/// Identifiers are revoked within a named context (see [`crate::context`])
/// and stay revoked for the configured entry lifetime; re-revoking an
/// identifier restarts the window from the moment of renewal. Expired
/// entries are reclaimed by the backend, never by the cache.
///
/// ## Failure policy
///
/// Steady-state operations return plain booleans. When the backend raises
/// an I/O error, `revoke`, `unrevoke` and `is_revoked` all return the
/// negation of the `strict` flag, uniformly:
///
/// - `strict = true`: revoke reports failure and is_revoked reports "not
///   revoked" during an outage;
/// - `strict = false`: revoke reports success and is_revoked reports
///   "revoked" during an outage.
///
/// An unverifiable input (a context label over the backend limit, an empty
/// argument) makes mutations report failure while `is_revoked` assumes the
/// unsafe answer and reports "revoked".
///
/// ## Concurrency
///
/// One mutex scoped to the cache instance serializes every operation, so
/// the read-then-write sequence behaves atomically against a backend that
/// only offers independent read/create/update calls. The guarantee holds
/// within this instance only; independent cache instances sharing one
/// backend are not serialized against each other.
pub struct RevocationCache {
    storage: Arc<dyn StorageProvider>,
    entry_expiration: chrono::Duration,
    strict: bool,
    /// Serializes every read-then-write sequence against the backend.
    lock: Mutex<()>,
}

impl RevocationCache {
    /// Validates the configuration and activates the cache.
    ///
    /// ## Errors
    ///
    /// Rejects a zero or out-of-range `entry_expiration` and any backend
    /// that does not hold its state server-side.
    pub fn new(
        storage: Arc<dyn StorageProvider>,
        config: CacheConfig,
    ) -> Result<Self, ConfigError> {
        if config.entry_expiration.is_zero() {
            return Err(ConfigError::NonPositiveExpiration);
        }
        let entry_expiration = chrono::Duration::from_std(config.entry_expiration)
            .map_err(|_| ConfigError::ExpirationOutOfRange)?;
        if !storage.is_server_side() {
            return Err(ConfigError::ClientSideStorage);
        }

        Ok(Self {
            storage,
            entry_expiration,
            strict: config.strict,
            lock: Mutex::new(()),
        })
    }

    /// Records or refreshes a revocation of `key` within `context`.
    ///
    /// Returns `true` once the identifier is recorded as revoked, whether
    /// newly inserted or renewed. Returns `false` when the context cannot
    /// be normalized, and `!strict` when the backend fails.
    pub async fn revoke(&self, context: &str, key: &str) -> bool {
        self.revoke_with_record(context, key, REVOCATION_MARKER)
            .await
    }

    /// Same as [`revoke`](Self::revoke), storing a caller-supplied record
    /// value (an operator note, an incident tag) instead of the marker.
    pub async fn revoke_with_record(&self, context: &str, key: &str, record: &str) -> bool {
        let Some(key) = self.effective_key(context, key) else {
            return false;
        };
        let expiration = Utc::now() + self.entry_expiration;

        let _guard = self.lock.lock().await;
        let result = match self.storage.read(context, &key).await {
            Ok(Some(_)) => self.storage.update(context, &key, record, expiration).await,
            Ok(None) => self.storage.create(context, &key, record, expiration).await,
            Err(err) => Err(err),
        };

        match result {
            Ok(()) => true,
            Err(err) => {
                tracing::error!("storage error while revoking key: {}", err);
                !self.strict
            }
        }
    }

    /// Queries whether `key` is currently revoked within `context`.
    ///
    /// Never mutates state. An unverifiable identifier is assumed revoked:
    /// when the context cannot be normalized this returns `true` rather
    /// than vouching for a key it cannot check. A backend failure returns
    /// `!strict`.
    pub async fn is_revoked(&self, context: &str, key: &str) -> bool {
        let Some(key) = self.effective_key(context, key) else {
            return true;
        };

        let _guard = self.lock.lock().await;
        match self.storage.read(context, &key).await {
            Ok(record) => record.is_some(),
            Err(err) => {
                tracing::error!("storage error while checking revocation: {}", err);
                !self.strict
            }
        }
    }

    /// Removes a revocation of `key` within `context`.
    ///
    /// Returns `true` when the entry is gone afterwards, including when it
    /// was never present. Returns `false` when the context cannot be
    /// normalized, and `!strict` when the backend fails.
    pub async fn unrevoke(&self, context: &str, key: &str) -> bool {
        let Some(key) = self.effective_key(context, key) else {
            return false;
        };

        let _guard = self.lock.lock().await;
        match self.storage.delete(context, &key).await {
            Ok(()) => true,
            Err(err) => {
                tracing::error!("storage error while unrevoking key: {}", err);
                !self.strict
            }
        }
    }

    /// Returns the record value stored for a revoked `key`, if any.
    ///
    /// `None` covers unrevoked keys, unverifiable input and backend
    /// failures alike; a data read has no boolean to substitute, so errors
    /// are only logged.
    pub async fn revocation_record(&self, context: &str, key: &str) -> Option<String> {
        let key = self.effective_key(context, key)?;

        let _guard = self.lock.lock().await;
        match self.storage.read(context, &key).await {
            Ok(record) => record.map(|r| r.value),
            Err(err) => {
                tracing::error!("storage error while reading revocation record: {}", err);
                None
            }
        }
    }

    /// Normalizes the pair, or `None` when the call must not reach the
    /// backend.
    fn effective_key<'a>(&self, context: &str, key: &'a str) -> Option<Cow<'a, str>> {
        if context.is_empty() || key.is_empty() {
            tracing::error!("revocation cache called with an empty context or key");
            return None;
        }

        match normalize(
            context,
            key,
            self.storage.max_context_length(),
            self.storage.max_key_length(),
        ) {
            Ok(key) => Some(key),
            Err(err) => {
                tracing::error!("refusing storage operation: {}", err);
                None
            }
        }
    }
}
