//! Composition Root
//!
//! Wires the coordination services from configuration.
//!
//! ```text
//! AppConfig -> linkme registry -> KvStoreProvider
//!                                      |
//!                                 LockManager
//!                                      | (LockServiceInterface)
//!                                 DebounceGate
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let config = ConfigLoader::new().load()?;
//! let context = CoordinationContext::from_config(&config)?;
//!
//! if context.locks().acquire("order:42", &owner, None).await {
//!     // ...
//! }
//! ```

use crate::config::AppConfig;
use coord_application::ports::registry::{list_kv_store_providers, resolve_kv_store_provider};
use coord_application::ports::services::{DebounceServiceInterface, LockServiceInterface};
use coord_application::use_cases::{DebounceGate, LockManager};
use coord_domain::error::{Error, Result};
use coord_domain::ports::KvStoreProvider;
use std::sync::Arc;
use tracing::info;

/// Shared coordination services built from one configuration
///
/// Cheap to clone; every clone shares the same store connection.
#[derive(Clone)]
pub struct CoordinationContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    store: Arc<dyn KvStoreProvider>,
    lock_manager: Arc<LockManager>,
    debounce_gate: Arc<DebounceGate>,
}

impl CoordinationContext {
    /// Resolve the configured store and build the services on top of it
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let store = resolve_kv_store_provider(&config.store.provider_config())
            .map_err(Error::config)?;
        info!(
            provider = store.provider_name(),
            "Key-value store provider resolved"
        );
        Ok(Self::with_store(config, store))
    }

    /// Build the services over an already constructed store
    pub fn with_store(config: &AppConfig, store: Arc<dyn KvStoreProvider>) -> Self {
        let lock_manager = Arc::new(LockManager::with_settings(
            Arc::clone(&store),
            config.lock.settings(),
        ));
        let debounce_gate = Arc::new(DebounceGate::with_settings(
            lock_manager.clone(),
            config.debounce.settings(),
        ));

        Self {
            config: Arc::new(config.clone()),
            store,
            lock_manager,
            debounce_gate,
        }
    }

    /// Backing key-value store
    pub fn store(&self) -> Arc<dyn KvStoreProvider> {
        Arc::clone(&self.store)
    }

    /// Concrete lock manager
    pub fn lock_manager(&self) -> Arc<LockManager> {
        Arc::clone(&self.lock_manager)
    }

    /// Concrete debounce gate
    pub fn debounce_gate(&self) -> Arc<DebounceGate> {
        Arc::clone(&self.debounce_gate)
    }

    /// Lock service behind its interface
    pub fn locks(&self) -> Arc<dyn LockServiceInterface> {
        self.lock_manager.clone()
    }

    /// Debounce service behind its interface
    pub fn debounce(&self) -> Arc<dyn DebounceServiceInterface> {
        self.debounce_gate.clone()
    }

    /// Registered store providers as (name, description)
    pub fn available_store_providers() -> Vec<(&'static str, &'static str)> {
        list_kv_store_providers()
    }
}

impl std::fmt::Debug for CoordinationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoordinationContext")
            .field("store", &self.store.provider_name())
            .field("lock_manager", &self.lock_manager)
            .field("debounce_gate", &self.debounce_gate)
            .finish_non_exhaustive()
    }
}
