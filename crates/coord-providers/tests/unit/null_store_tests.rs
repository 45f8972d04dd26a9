//! Null store tests

use coord_domain::ports::KvStoreProvider;
use coord_providers::kv_store::NullKvStore;
use std::time::Duration;

#[tokio::test]
async fn test_null_store_grants_everything() {
    let store = NullKvStore::new();
    let ttl = Duration::from_secs(1);

    assert!(store.set_if_absent("k", "a", ttl).await.unwrap());
    assert!(store.set_if_absent("k", "b", ttl).await.unwrap());
    assert!(!store.delete_if_equals("k", "a").await.unwrap());
    assert!(!store.delete("k").await.unwrap());
    assert_eq!(store.delete_matching("*").await.unwrap(), 0);
    assert!(store.health_check().await.is_ok());
    assert_eq!(store.provider_name(), "null");
}
