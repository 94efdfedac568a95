//! # revoc-cache
//!
//! Storage-abstracted, time-bounded revocation list for opaque
//! security-token identifiers (authorization codes, access tokens,
//! refresh tokens).
//!
//! The cache marks identifiers as revoked within a named context and
//! answers "has this identifier been revoked?" with safe fallbacks when
//! the storage backend fails. It works against any server-side
//! [`revoc_storage::StorageProvider`]; expiration enforcement is entirely
//! the backend's job.
//!
//! ## Modules
//!
//! - [`cache`] - The [`RevocationCache`] itself
//! - [`config`] - Immutable cache configuration
//! - [`context`] - Well-known revocation context labels
//! - [`normalize`] - Key normalization against backend capability limits
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use revoc_cache::{context, CacheConfig, RevocationCache};
//! use revoc_storage::MemoryStorage;
//!
//! #[tokio::main]
//! async fn main() {
//!     let storage = Arc::new(MemoryStorage::new());
//!     let cache = RevocationCache::new(storage, CacheConfig::default())
//!         .expect("valid configuration");
//!
//!     cache.revoke(context::ACCESS_TOKEN, "token-id").await;
//!     assert!(cache.is_revoked(context::ACCESS_TOKEN, "token-id").await);
//! }
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cache;
pub mod config;
pub mod context;
pub mod error;
pub mod normalize;

pub use cache::RevocationCache;
pub use config::CacheConfig;
pub use error::ConfigError;
pub use normalize::{normalize, ContextTooLong};
