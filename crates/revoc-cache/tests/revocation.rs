//! End-to-end revocation behavior against the in-memory backend.

use std::sync::Arc;
use std::time::Duration;

use revoc_cache::{context, CacheConfig, RevocationCache};
use revoc_storage::MemoryStorage;

fn cache_with(config: CacheConfig) -> RevocationCache {
    RevocationCache::new(Arc::new(MemoryStorage::new()), config).expect("valid configuration")
}

#[tokio::test]
async fn revoke_then_check() {
    let cache = cache_with(CacheConfig::default());

    assert!(!cache.is_revoked(context::ACCESS_TOKEN, "token-1").await);
    assert!(cache.revoke(context::ACCESS_TOKEN, "token-1").await);
    assert!(cache.is_revoked(context::ACCESS_TOKEN, "token-1").await);
}

#[tokio::test]
async fn revoking_twice_is_idempotent() {
    let cache = cache_with(CacheConfig::default());

    assert!(cache.revoke(context::REFRESH_TOKEN, "token-2").await);
    assert!(cache.revoke(context::REFRESH_TOKEN, "token-2").await);
    assert!(cache.is_revoked(context::REFRESH_TOKEN, "token-2").await);
}

#[tokio::test]
async fn entries_expire_after_their_lifetime() {
    let cache = cache_with(CacheConfig::new().entry_expiration(Duration::from_millis(500)));

    assert!(cache.revoke(context::AUTHORIZATION_CODE, "code-1").await);
    tokio::time::sleep(Duration::from_millis(600)).await;
    assert!(!cache.is_revoked(context::AUTHORIZATION_CODE, "code-1").await);
}

#[tokio::test]
async fn renewal_restarts_the_expiration_window() {
    let cache = cache_with(CacheConfig::new().entry_expiration(Duration::from_millis(500)));

    assert!(cache.revoke(context::AUTHORIZATION_CODE, "code-2").await);
    tokio::time::sleep(Duration::from_millis(300)).await;

    // Renewal pushes expiry forward from now, not from the first revoke.
    assert!(cache.revoke(context::AUTHORIZATION_CODE, "code-2").await);
    tokio::time::sleep(Duration::from_millis(300)).await;

    assert!(cache.is_revoked(context::AUTHORIZATION_CODE, "code-2").await);
}

#[tokio::test]
async fn oversized_key_is_still_revocable() {
    let storage = Arc::new(MemoryStorage::with_limits(1024, 128));
    let cache = RevocationCache::new(storage, CacheConfig::default()).expect("valid configuration");
    let long_key = "k".repeat(400);

    assert!(!cache.is_revoked(context::ACCESS_TOKEN, &long_key).await);
    assert!(cache.revoke(context::ACCESS_TOKEN, &long_key).await);
    assert!(cache.is_revoked(context::ACCESS_TOKEN, &long_key).await);
}

#[tokio::test]
async fn unrevoke_removes_the_entry() {
    let cache = cache_with(CacheConfig::default());

    assert!(cache.revoke(context::ACCESS_TOKEN, "token-3").await);
    assert!(cache.unrevoke(context::ACCESS_TOKEN, "token-3").await);
    assert!(!cache.is_revoked(context::ACCESS_TOKEN, "token-3").await);

    // Unrevoking an absent key succeeds.
    assert!(cache.unrevoke(context::ACCESS_TOKEN, "never-revoked").await);
}

#[tokio::test]
async fn revocation_record_round_trips() {
    let cache = cache_with(CacheConfig::default());

    assert_eq!(
        cache.revocation_record(context::ACCESS_TOKEN, "token-4").await,
        None
    );

    assert!(cache.revoke(context::ACCESS_TOKEN, "token-4").await);
    assert!(cache
        .revocation_record(context::ACCESS_TOKEN, "token-4")
        .await
        .is_some());

    assert!(
        cache
            .revoke_with_record(context::ACCESS_TOKEN, "token-5", "incident-492")
            .await
    );
    assert_eq!(
        cache.revocation_record(context::ACCESS_TOKEN, "token-5").await,
        Some("incident-492".to_string())
    );
}

#[tokio::test]
async fn renewal_overwrites_the_stored_record() {
    let cache = cache_with(CacheConfig::default());

    assert!(
        cache
            .revoke_with_record(context::REFRESH_TOKEN, "token-6", "first")
            .await
    );
    assert!(
        cache
            .revoke_with_record(context::REFRESH_TOKEN, "token-6", "second")
            .await
    );
    assert_eq!(
        cache.revocation_record(context::REFRESH_TOKEN, "token-6").await,
        Some("second".to_string())
    );
}

#[tokio::test]
async fn concurrent_revocations_of_one_key_all_succeed() {
    let cache = Arc::new(cache_with(CacheConfig::default()));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let cache = Arc::clone(&cache);
        handles.push(tokio::spawn(async move {
            cache.revoke(context::ACCESS_TOKEN, "contended").await
        }));
    }

    for handle in handles {
        assert!(handle.await.expect("revocation task panicked"));
    }
    assert!(cache.is_revoked(context::ACCESS_TOKEN, "contended").await);
}
