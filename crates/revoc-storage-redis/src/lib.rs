//! # revoc-storage-redis
//!
//! Redis storage backend for the revocation cache.
//!
//! This crate implements the [`revoc_storage::StorageProvider`] trait on
//! top of Redis using the `fred` crate. Record expiration is delegated to
//! Redis key TTLs, so revoked identifiers disappear from the store without
//! any sweeper of our own.
//!
//! ## Features
//!
//! - Automatic reconnection with exponential backoff
//! - TLS support
//! - Key prefixing so one Redis database can serve several deployments
//!
//! ## Example
//!
//! ```ignore
//! use revoc_storage_redis::{RedisConfig, RedisStorage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RedisConfig::default()
//!         .host("localhost")
//!         .port(6379);
//!
//!     let storage = RedisStorage::connect(config).await?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod config;
pub mod error;
pub mod provider;

pub use config::RedisConfig;
pub use provider::RedisStorage;
