//! Composition root tests

use coord_application::ports::services::{DebounceServiceInterface, LockServiceInterface};
use coord_domain::Error;
use coord_domain::ports::KvStoreProvider;
use coord_domain::value_objects::{DebounceAction, FailurePolicy};
use coord_infrastructure::bootstrap::CoordinationContext;
use coord_infrastructure::config::AppConfig;
use coord_providers::kv_store::InMemoryKvStore;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_from_config_with_memory_store() {
    let context = CoordinationContext::from_config(&AppConfig::default()).unwrap();

    assert_eq!(context.store().provider_name(), "memory");
    assert!(context.store().health_check().await.is_ok());

    let locks = context.locks();
    assert!(locks.acquire("order:1", "owner-a", None).await);
    assert!(!locks.acquire("order:1", "owner-b", None).await);
    assert!(locks.release("order:1", "owner-a").await);
}

#[tokio::test]
async fn test_debounce_shares_the_lock_store() {
    let store = InMemoryKvStore::new();
    let context = CoordinationContext::with_store(&AppConfig::default(), Arc::new(store.clone()));

    let debounce = context.debounce();
    assert!(debounce.admit_action(DebounceAction::Like, "U1", "post", "P7").await);
    assert!(!debounce.admit_action(DebounceAction::Like, "U1", "post", "P7").await);
    assert_eq!(store.get("debounce:lock:like:post:P7:U1").as_deref(), Some("1"));
}

#[tokio::test(start_paused = true)]
async fn test_config_sections_reach_the_services() {
    let mut config = AppConfig::default();
    config.lock.default_ttl_secs = 30;
    config.lock.failure_policy.acquire = FailurePolicy::FailClosed;
    config.debounce.namespace = "throttle:".to_string();
    config.debounce.post_secs = 45;

    let store = InMemoryKvStore::new();
    let context = CoordinationContext::with_store(&config, Arc::new(store.clone()));

    let settings = *context.lock_manager().settings();
    assert_eq!(settings.default_ttl, Duration::from_secs(30));
    assert_eq!(settings.failure_policy.acquire, FailurePolicy::FailClosed);

    context
        .debounce()
        .admit_action(DebounceAction::Post, "U1", "board", "general")
        .await;
    assert_eq!(
        store.ttl("throttle:post:board:general:U1"),
        Some(Duration::from_secs(45))
    );
}

#[test]
fn test_unknown_provider_is_a_configuration_error() {
    let mut config = AppConfig::default();
    config.store.provider = "etcd".to_string();

    let err = CoordinationContext::from_config(&config).unwrap_err();
    match err {
        Error::Configuration { message, .. } => {
            assert!(message.contains("etcd"));
            assert!(message.contains("memory"));
        }
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[test]
fn test_all_store_providers_are_linked() {
    let names: Vec<&str> = CoordinationContext::available_store_providers()
        .into_iter()
        .map(|(name, _)| name)
        .collect();

    for expected in ["memory", "null", "redis"] {
        assert!(names.contains(&expected), "missing provider {expected}");
    }
}
