//! Lock manager configuration types

use coord_application::use_cases::LockSettings;
use coord_domain::constants::{
    DEFAULT_LOCK_MAX_RETRIES, DEFAULT_LOCK_RETRY_INTERVAL_MS, DEFAULT_LOCK_TTL_SECS,
};
use coord_domain::value_objects::{LockFailurePolicy, RetryOptions};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Lock manager configuration
///
/// Zero values fall back to the built-in defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LockConfig {
    /// TTL applied when a caller passes none
    pub default_ttl_secs: u64,

    /// Attempts made by a retrying acquire
    pub max_retries: u32,

    /// Pause between retrying attempts
    pub retry_interval_ms: u64,

    /// Outcome of acquire / release when the store fails
    pub failure_policy: LockFailurePolicy,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            default_ttl_secs: DEFAULT_LOCK_TTL_SECS,
            max_retries: DEFAULT_LOCK_MAX_RETRIES,
            retry_interval_ms: DEFAULT_LOCK_RETRY_INTERVAL_MS,
            failure_policy: LockFailurePolicy::default(),
        }
    }
}

impl LockConfig {
    /// Lock manager settings
    pub fn settings(&self) -> LockSettings {
        let ttl_secs = if self.default_ttl_secs == 0 {
            DEFAULT_LOCK_TTL_SECS
        } else {
            self.default_ttl_secs
        };
        LockSettings {
            default_ttl: Duration::from_secs(ttl_secs),
            retry: RetryOptions::new(
                self.max_retries,
                Duration::from_millis(self.retry_interval_ms),
            ),
            failure_policy: self.failure_policy,
        }
    }
}
