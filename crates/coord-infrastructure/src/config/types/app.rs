//! Root configuration

use super::{DebounceConfig, LockConfig, LoggingConfig, StoreConfig};
use serde::{Deserialize, Serialize};

/// Root application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Key-value store configuration
    pub store: StoreConfig,

    /// Lock manager configuration
    pub lock: LockConfig,

    /// Debounce gate configuration
    pub debounce: DebounceConfig,
}
