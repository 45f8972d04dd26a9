//! Application Ports
//!
//! - `services` - interfaces of the lock and debounce services
//! - `registry` - compile-time registry of key-value store providers

pub mod registry;
pub mod services;

pub use coord_domain::ports::{KvStoreProvider, LockGuard, LockProvider};
pub use services::{DebounceServiceInterface, LockServiceInterface};
