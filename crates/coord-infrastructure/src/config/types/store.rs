//! Key-value store configuration types

use crate::constants::DEFAULT_STORE_PROVIDER;
use coord_application::ports::registry::KvStoreProviderConfig;
use coord_providers::constants::STORE_DEFAULT_REQUEST_TIMEOUT_MS;
use serde::{Deserialize, Serialize};

/// Key-value store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Registered provider name (redis, memory, null)
    pub provider: String,

    /// Redis connection URL, required by the redis provider
    pub redis_url: Option<String>,

    /// Upper bound on a single store round trip
    pub request_timeout_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_STORE_PROVIDER.to_string(),
            redis_url: None,
            request_timeout_ms: STORE_DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl StoreConfig {
    /// Registry configuration for resolving the provider
    pub fn provider_config(&self) -> KvStoreProviderConfig {
        let config = KvStoreProviderConfig::new(self.provider.as_str())
            .with_request_timeout_ms(self.request_timeout_ms);
        match &self.redis_url {
            Some(url) => config.with_uri(url.as_str()),
            None => config,
        }
    }
}
