//! In-memory store tests
//!
//! Expiry is driven by the paused tokio clock.

use coord_domain::ports::KvStoreProvider;
use coord_providers::constants::{MEMORY_SWEEP_INTERVAL_SECS, STORE_MAX_TTL_SECS};
use coord_providers::kv_store::InMemoryKvStore;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_set_if_absent_only_once() {
    let store = InMemoryKvStore::new();

    assert!(store.set_if_absent("k", "a", Duration::from_secs(5)).await.unwrap());
    assert!(!store.set_if_absent("k", "b", Duration::from_secs(5)).await.unwrap());
    assert_eq!(store.get("k").as_deref(), Some("a"));
}

#[tokio::test(start_paused = true)]
async fn test_expired_record_behaves_as_absent() {
    let store = InMemoryKvStore::new();
    store.set_if_absent("k", "a", Duration::from_secs(2)).await.unwrap();

    tokio::time::advance(Duration::from_secs(2)).await;

    assert_eq!(store.get("k"), None);
    assert!(store.is_empty());
    assert!(!store.delete_if_equals("k", "a").await.unwrap());
    assert!(store.set_if_absent("k", "b", Duration::from_secs(2)).await.unwrap());
    assert_eq!(store.get("k").as_deref(), Some("b"));
}

#[tokio::test(start_paused = true)]
async fn test_ttl_counts_down() {
    let store = InMemoryKvStore::new();
    store.set_if_absent("k", "a", Duration::from_secs(10)).await.unwrap();

    tokio::time::advance(Duration::from_secs(4)).await;

    assert_eq!(store.ttl("k"), Some(Duration::from_secs(6)));
}

#[tokio::test(start_paused = true)]
async fn test_unused_expired_keys_are_swept() {
    let store = InMemoryKvStore::new();
    for i in 0..500 {
        store
            .set_if_absent(&format!("debounce:lock:like:post:{i}:u1"), "1", Duration::from_secs(2))
            .await
            .unwrap();
    }
    assert_eq!(store.stored_len(), 500);

    tokio::time::advance(Duration::from_secs(MEMORY_SWEEP_INTERVAL_SECS)).await;
    assert_eq!(store.len(), 0);

    // the next write sweeps every stale record it never touches itself
    store.set_if_absent("order:1", "owner", Duration::from_secs(60)).await.unwrap();
    assert_eq!(store.stored_len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_sweep_waits_for_interval() {
    let store = InMemoryKvStore::new().with_sweep_interval(Duration::from_secs(10));
    store.set_if_absent("a", "1", Duration::from_secs(1)).await.unwrap();

    tokio::time::advance(Duration::from_secs(5)).await;
    store.set_if_absent("b", "1", Duration::from_secs(60)).await.unwrap();
    assert_eq!(store.stored_len(), 2);

    tokio::time::advance(Duration::from_secs(5)).await;
    store.set_if_absent("c", "1", Duration::from_secs(60)).await.unwrap();
    assert_eq!(store.stored_len(), 2);
    assert_eq!(store.get("a"), None);
}

#[tokio::test(start_paused = true)]
async fn test_purge_expired_empties_raw_map() {
    let store = InMemoryKvStore::new();
    store.set_if_absent("a", "1", Duration::from_secs(1)).await.unwrap();
    store.set_if_absent("b", "1", Duration::from_secs(3)).await.unwrap();

    tokio::time::advance(Duration::from_secs(3)).await;

    assert_eq!(store.purge_expired(), 2);
    assert_eq!(store.stored_len(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_huge_ttl_is_clamped() {
    let store = InMemoryKvStore::new();

    assert!(store.set_if_absent("forever", "owner", Duration::MAX).await.unwrap());
    assert_eq!(store.ttl("forever"), Some(Duration::from_secs(STORE_MAX_TTL_SECS)));
    assert!(!store.set_if_absent("forever", "other", Duration::MAX).await.unwrap());
}

#[tokio::test]
async fn test_delete_if_equals_checks_value() {
    let store = InMemoryKvStore::new();
    store.set_if_absent("k", "owner-a", Duration::from_secs(30)).await.unwrap();

    assert!(!store.delete_if_equals("k", "owner-b").await.unwrap());
    assert_eq!(store.get("k").as_deref(), Some("owner-a"));
    assert!(store.delete_if_equals("k", "owner-a").await.unwrap());
    assert_eq!(store.get("k"), None);
}

#[tokio::test]
async fn test_delete_reports_presence() {
    let store = InMemoryKvStore::new();
    assert!(!store.delete("missing").await.unwrap());

    store.set_if_absent("k", "v", Duration::from_secs(30)).await.unwrap();
    assert!(store.delete("k").await.unwrap());
    assert!(!store.delete("k").await.unwrap());
}

#[tokio::test]
async fn test_delete_matching_glob() {
    let store = InMemoryKvStore::new();
    let ttl = Duration::from_secs(30);
    store.set_if_absent("debounce:lock:like:post:1:u1", "1", ttl).await.unwrap();
    store.set_if_absent("debounce:lock:post:create:u1", "1", ttl).await.unwrap();
    store.set_if_absent("order:42", "owner", ttl).await.unwrap();

    let removed = store.delete_matching("debounce:lock:*").await.unwrap();

    assert_eq!(removed, 2);
    assert_eq!(store.len(), 1);
    assert_eq!(store.get("order:42").as_deref(), Some("owner"));
}

#[tokio::test]
async fn test_delete_matching_rejects_bad_pattern() {
    let store = InMemoryKvStore::new();
    let err = store.delete_matching("debounce:[").await.unwrap_err();
    assert!(err.is_store_failure());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_set_if_absent_has_one_winner() {
    let store = Arc::new(InMemoryKvStore::new());
    let mut handles = Vec::new();
    for i in 0..32 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store
                .set_if_absent("contended", &format!("owner-{i}"), Duration::from_secs(30))
                .await
                .unwrap()
        }));
    }

    let mut winners = 0;
    for handle in handles {
        if handle.await.unwrap() {
            winners += 1;
        }
    }
    assert_eq!(winners, 1);
}

#[test]
fn test_provider_name() {
    assert_eq!(InMemoryKvStore::new().provider_name(), "memory");
}
