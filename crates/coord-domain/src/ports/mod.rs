//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and external layers.
//! Low-level crates (providers) implement them; the application layer
//! consumes them through `Arc<dyn ...>` handles injected at construction.

/// Key-value store port
pub mod kv_store;
/// Guard-style lock port
pub mod lock;

pub use kv_store::KvStoreProvider;
pub use lock::{LockGuard, LockProvider};
