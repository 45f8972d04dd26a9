//! Configuration loader tests
//!
//! Tests touching environment variables mutate process state and must run
//! sequentially:
//!
//! ```bash
//! cargo test -p coord-infrastructure --test unit config_loader -- --test-threads=1 --ignored
//! ```

use coord_domain::Error;
use coord_domain::value_objects::FailurePolicy;
use coord_infrastructure::config::{AppConfig, ConfigLoader, validate_app_config};
use std::env;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("coord.toml");
    std::fs::write(&path, contents).unwrap();
    path
}

fn loader_for(path: &Path) -> ConfigLoader {
    // unique prefix keeps ambient COORD_* variables out of the result
    ConfigLoader::new()
        .with_env_prefix("COORD_LOADER_TEST")
        .with_config_path(path)
}

fn expect_config_error(config: &AppConfig, needle: &str) {
    match validate_app_config(config) {
        Err(Error::Configuration { message, .. }) => {
            assert!(message.contains(needle), "unexpected message: {message}");
        }
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[test]
fn test_defaults_without_file() {
    let dir = TempDir::new().unwrap();
    let config = loader_for(&dir.path().join("missing.toml")).load().unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.store.provider, "memory");
    assert_eq!(config.lock.default_ttl_secs, 15);
    assert_eq!(config.lock.max_retries, 3);
    assert_eq!(config.lock.retry_interval_ms, 100);
    assert_eq!(config.debounce.namespace, "debounce:lock:");
    assert_eq!(config.debounce.marker, "1");
}

#[test]
fn test_toml_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[store]
provider = "redis"
redis_url = "redis://cache.internal:6379"
request_timeout_ms = 500

[lock]
default_ttl_secs = 30

[lock.failure_policy]
acquire = "fail_closed"

[debounce]
comment_secs = 8
rejection_message = "slow down"
"#,
    );

    let config = loader_for(&path).load().unwrap();

    assert_eq!(config.store.provider, "redis");
    assert_eq!(
        config.store.redis_url.as_deref(),
        Some("redis://cache.internal:6379")
    );
    assert_eq!(config.store.request_timeout_ms, 500);
    assert_eq!(config.lock.default_ttl_secs, 30);
    assert_eq!(config.lock.max_retries, 3);
    assert_eq!(config.lock.failure_policy.acquire, FailurePolicy::FailClosed);
    assert_eq!(config.lock.failure_policy.release, FailurePolicy::FailClosed);
    assert_eq!(config.debounce.comment_secs, 8);
    assert_eq!(config.debounce.like_secs, 2);
    assert_eq!(config.debounce.rejection_message, "slow down");
}

#[test]
fn test_settings_conversion() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r"
[lock]
default_ttl_secs = 0
max_retries = 0
retry_interval_ms = 250

[debounce]
like_secs = 3
",
    );

    let config = loader_for(&path).load().unwrap();
    let lock = config.lock.settings();
    assert_eq!(lock.default_ttl, Duration::from_secs(15));
    assert_eq!(lock.retry.max_retries, 3);
    assert_eq!(lock.retry.interval, Duration::from_millis(250));

    let debounce = config.debounce.settings();
    assert_eq!(debounce.ttl_policy.like_secs, 3);
    assert_eq!(debounce.ttl_policy.post_secs, 10);

    let store = config.store.provider_config();
    assert_eq!(store.provider, "memory");
    assert_eq!(store.uri, None);
    assert_eq!(store.request_timeout_ms, Some(2000));
}

#[test]
fn test_invalid_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[lock]\ndefault_ttl_secs = \"forever\"\n");

    let err = loader_for(&path).load().unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_validation_rules() {
    let mut config = AppConfig::default();
    config.logging.level = "chatty".to_string();
    expect_config_error(&config, "Invalid log level");

    let mut config = AppConfig::default();
    config.store.request_timeout_ms = 0;
    expect_config_error(&config, "timeout");

    let mut config = AppConfig::default();
    config.store.provider = "redis".to_string();
    expect_config_error(&config, "Redis URL");

    let mut config = AppConfig::default();
    config.debounce.namespace.clear();
    expect_config_error(&config, "namespace");

    let mut config = AppConfig::default();
    config.debounce.marker.clear();
    expect_config_error(&config, "marker");

    let mut config = AppConfig::default();
    config.store.provider = "redis".to_string();
    config.store.redis_url = Some("redis://127.0.0.1:6379".to_string());
    assert!(validate_app_config(&config).is_ok());
}

#[test]
fn test_redis_without_url_fails_to_load() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[store]\nprovider = \"redis\"\n");

    assert!(loader_for(&path).load().is_err());
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.toml");

    let mut config = AppConfig::default();
    config.debounce.post_secs = 60;
    config.logging.json_format = true;

    let loader = loader_for(&path);
    loader.save_to_file(&config, &path).unwrap();
    assert_eq!(loader.load().unwrap(), config);
}

#[test]
fn test_save_to_missing_directory_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent").join("coord.toml");

    let err = ConfigLoader::new()
        .save_to_file(&AppConfig::default(), &path)
        .unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[debounce]\nlike_secs = 4\n");

    // SAFETY: run with --test-threads=1
    unsafe {
        env::set_var("COORD_ENV_TEST_DEBOUNCE__LIKE_SECS", "9");
        env::set_var("COORD_ENV_TEST_LOCK__FAILURE_POLICY__RELEASE", "fail_open");
    }

    let result = ConfigLoader::new()
        .with_env_prefix("COORD_ENV_TEST")
        .with_config_path(&path)
        .load();

    // SAFETY: run with --test-threads=1
    unsafe {
        env::remove_var("COORD_ENV_TEST_DEBOUNCE__LIKE_SECS");
        env::remove_var("COORD_ENV_TEST_LOCK__FAILURE_POLICY__RELEASE");
    }

    let config = result.unwrap();
    assert_eq!(config.debounce.like_secs, 9);
    assert_eq!(config.lock.failure_policy.release, FailurePolicy::FailOpen);
}
