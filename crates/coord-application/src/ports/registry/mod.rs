//! Provider Registry System
//!
//! Auto-registration infrastructure for store providers. Uses the `linkme`
//! crate for compile-time registration of providers that are discovered
//! and instantiated at runtime.
//!
//! ## Usage
//!
//! ### Registering a Provider (in coord-providers)
//!
//! ```ignore
//! use coord_application::ports::registry::{KV_STORE_PROVIDERS, KvStoreProviderEntry};
//!
//! #[linkme::distributed_slice(KV_STORE_PROVIDERS)]
//! static MEMORY_PROVIDER: KvStoreProviderEntry = KvStoreProviderEntry {
//!     name: "memory",
//!     description: "In-process key-value store",
//!     factory: |_| Ok(Arc::new(InMemoryKvStore::new())),
//! };
//! ```
//!
//! ### Resolving a Provider (in coord-infrastructure)
//!
//! ```ignore
//! use coord_application::ports::registry::{KvStoreProviderConfig, resolve_kv_store_provider};
//!
//! let store = resolve_kv_store_provider(&KvStoreProviderConfig::new("redis"))?;
//! ```

pub mod kv_store;

pub use kv_store::{
    KV_STORE_PROVIDERS, KvStoreProviderConfig, KvStoreProviderEntry, list_kv_store_providers,
    resolve_kv_store_provider,
};
