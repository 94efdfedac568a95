//! Revocation cache configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Revocation cache configuration.
///
/// Fixed when the cache is constructed; the cache never mutates it
/// afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Lifetime added to "now" to compute each entry's expiration.
    ///
    /// Must be strictly positive. Re-revoking an identifier restarts this
    /// window from the moment of renewal.
    #[serde(default = "default_entry_expiration")]
    pub entry_expiration: Duration,

    /// Error-fallback policy for backend failures.
    ///
    /// Every cache operation that hits a backend error returns the
    /// negation of this flag; see [`RevocationCache`](crate::RevocationCache)
    /// for the exact consequences.
    #[serde(default)]
    pub strict: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            entry_expiration: default_entry_expiration(),
            strict: false,
        }
    }
}

impl CacheConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the entry lifetime.
    #[must_use]
    pub const fn entry_expiration(mut self, entry_expiration: Duration) -> Self {
        self.entry_expiration = entry_expiration;
        self
    }

    /// Sets the error-fallback policy.
    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

const fn default_entry_expiration() -> Duration {
    Duration::from_secs(6 * 60 * 60)
}
