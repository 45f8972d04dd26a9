//! Redis store tests
//!
//! Note: These tests require a Redis server on localhost:6379.

use coord_domain::ports::KvStoreProvider;
use coord_providers::kv_store::RedisKvStore;
use std::time::Duration;

fn unique(prefix: &str) -> String {
    format!("coord-test:{prefix}:{}", std::process::id())
}

#[test]
fn test_redis_store_creation() {
    assert!(RedisKvStore::new("redis://localhost:6379").is_ok());
    assert!(RedisKvStore::new("invalid://url").is_err());

    let store = RedisKvStore::with_host_port("localhost", 6379)
        .unwrap()
        .with_request_timeout(Duration::from_millis(250));
    assert_eq!(store.request_timeout(), Duration::from_millis(250));
    assert_eq!(store.provider_name(), "redis");
}

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn test_redis_lock_primitives() {
    let store = RedisKvStore::new("redis://localhost:6379").unwrap();
    let key = unique("lock");
    store.delete(&key).await.unwrap();

    assert!(store.set_if_absent(&key, "a", Duration::from_secs(5)).await.unwrap());
    assert!(!store.set_if_absent(&key, "b", Duration::from_secs(5)).await.unwrap());
    assert!(!store.delete_if_equals(&key, "b").await.unwrap());
    assert!(store.delete_if_equals(&key, "a").await.unwrap());
    assert!(!store.delete(&key).await.unwrap());
}

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn test_redis_record_expires() {
    let store = RedisKvStore::new("redis://localhost:6379").unwrap();
    let key = unique("expiry");
    store.delete(&key).await.unwrap();

    assert!(store.set_if_absent(&key, "a", Duration::from_millis(200)).await.unwrap());
    tokio::time::sleep(Duration::from_millis(400)).await;
    assert!(store.set_if_absent(&key, "b", Duration::from_secs(5)).await.unwrap());
    store.delete(&key).await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn test_redis_delete_matching_and_ping() {
    let store = RedisKvStore::new("redis://localhost:6379").unwrap();
    let prefix = unique("scan");
    for i in 0..5 {
        store
            .set_if_absent(&format!("{prefix}:{i}"), "1", Duration::from_secs(30))
            .await
            .unwrap();
    }

    assert_eq!(store.delete_matching(&format!("{prefix}:*")).await.unwrap(), 5);
    assert!(store.health_check().await.is_ok());
}
