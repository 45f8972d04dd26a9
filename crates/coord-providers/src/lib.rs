//! # Coordination - Provider Implementations
//!
//! Key-value store adapters implementing the `KvStoreProvider` port from
//! `coord-domain`. Each provider registers itself in the registry declared
//! by `coord-application` and is selected by name from configuration.
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! coord-providers = { version = "0.1", default-features = false, features = ["store-redis"] }
//! ```

pub use coord_domain::error::{Error, Result};
pub use coord_domain::ports::KvStoreProvider;

/// Provider-specific constants
pub mod constants;

/// Key-value store provider implementations
pub mod kv_store;
