//! # revoc-storage
//!
//! Storage backend abstraction for the revocation cache.
//!
//! This crate defines the interface a storage backend must implement to
//! hold revocation records, together with the error taxonomy shared by all
//! implementations.
//!
//! ## Providers
//!
//! - [`StorageProvider`] - Key-value storage of revocation records with
//!   backend-enforced expiration
//! - [`MemoryStorage`] - In-memory implementation for development and tests
//!
//! The primary production implementation is Redis-based (see
//! `revoc-storage-redis`).
//!
//! ## Example
//!
//! ```ignore
//! use chrono::{Duration, Utc};
//! use revoc_storage::{MemoryStorage, StorageProvider};
//!
//! async fn mark(storage: &MemoryStorage) -> revoc_storage::StorageResult<()> {
//!     storage
//!         .create("logins", "abc123", "y", Utc::now() + Duration::hours(6))
//!         .await
//! }
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod memory;
pub mod provider;

pub use error::{StorageError, StorageResult};
pub use memory::MemoryStorage;
pub use provider::{StorageProvider, StorageRecord};
