//! Configuration
//!
//! Typed configuration sections and the figment-based loader.

pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, validate_app_config};
pub use types::{AppConfig, DebounceConfig, LockConfig, LoggingConfig, StoreConfig};
