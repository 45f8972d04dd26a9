//! Use Case Implementations
//!
//! - [`lock_service`] - distributed lock manager
//! - [`debounce_service`] - debounce gate built on the lock manager

pub mod debounce_service;
pub mod lock_service;

pub use debounce_service::{DebounceGate, DebounceSettings};
pub use lock_service::{LockManager, LockSettings};
