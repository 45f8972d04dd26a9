//! Key-Value Store Provider Registry
//!
//! Auto-registration system for key-value store providers.
//! Providers register themselves via `#[linkme::distributed_slice]` and are
//! discovered at runtime by name.

use std::collections::HashMap;
use std::sync::Arc;

use coord_domain::ports::KvStoreProvider;

/// Configuration for key-value store provider creation
///
/// Contains all configuration options that a store provider might need.
/// Providers should use what they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct KvStoreProviderConfig {
    /// Provider name (e.g., "redis", "memory", "null")
    pub provider: String,
    /// Connection URI (for networked stores)
    pub uri: Option<String>,
    /// Upper bound on a single store round trip in milliseconds
    pub request_timeout_ms: Option<u64>,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl KvStoreProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the URI
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Set the request timeout in milliseconds
    pub fn with_request_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.request_timeout_ms = Some(timeout_ms);
        self
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Registry entry for key-value store providers
///
/// Each provider implementation registers one entry holding metadata and a
/// factory function that creates instances.
pub struct KvStoreProviderEntry {
    /// Unique provider name (e.g., "redis", "memory", "null")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn(&KvStoreProviderConfig) -> Result<Arc<dyn KvStoreProvider>, String>,
}

#[linkme::distributed_slice]
pub static KV_STORE_PROVIDERS: [KvStoreProviderEntry] = [..];

/// Resolve key-value store provider by name from registry
///
/// # Returns
/// * `Ok(Arc<dyn KvStoreProvider>)` - Created provider instance
/// * `Err(String)` - Error message if provider not found or creation failed
pub fn resolve_kv_store_provider(
    config: &KvStoreProviderConfig,
) -> Result<Arc<dyn KvStoreProvider>, String> {
    let provider_name = &config.provider;

    if let Some(entry) = KV_STORE_PROVIDERS.iter().find(|e| e.name == provider_name) {
        return (entry.factory)(config);
    }

    let available: Vec<&str> = KV_STORE_PROVIDERS.iter().map(|e| e.name).collect();
    Err(format!(
        "Unknown key-value store provider '{provider_name}'. Available providers: {available:?}"
    ))
}

/// List all registered key-value store providers as (name, description)
pub fn list_kv_store_providers() -> Vec<(&'static str, &'static str)> {
    KV_STORE_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
