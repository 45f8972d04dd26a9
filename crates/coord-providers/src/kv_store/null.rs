//! Null key-value store provider
//!
//! Stores nothing. Every `set_if_absent` succeeds, so every lock is granted
//! and every debounced action admitted. Selecting it switches coordination
//! off without touching callers.

use async_trait::async_trait;
use coord_domain::error::Result;
use coord_domain::ports::KvStoreProvider;
use std::sync::Arc;
use std::time::Duration;

/// Null store that records nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullKvStore;

impl NullKvStore {
    /// Create a new null store
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl KvStoreProvider for NullKvStore {
    async fn set_if_absent(&self, _key: &str, _value: &str, _ttl: Duration) -> Result<bool> {
        Ok(true)
    }

    async fn delete_if_equals(&self, _key: &str, _expected: &str) -> Result<bool> {
        Ok(false)
    }

    async fn delete(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    async fn delete_matching(&self, _pattern: &str) -> Result<u64> {
        Ok(0)
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

use coord_application::ports::registry::{
    KV_STORE_PROVIDERS, KvStoreProviderConfig, KvStoreProviderEntry,
};

fn null_store_factory(
    _config: &KvStoreProviderConfig,
) -> std::result::Result<Arc<dyn KvStoreProvider>, String> {
    Ok(Arc::new(NullKvStore::new()))
}

#[linkme::distributed_slice(KV_STORE_PROVIDERS)]
static NULL_PROVIDER: KvStoreProviderEntry = KvStoreProviderEntry {
    name: "null",
    description: "No-op store; grants every lock (coordination disabled)",
    factory: null_store_factory,
};
