//! Lock value objects
//!
//! Owner tokens, retry options and the failure policy applied when the
//! backing store cannot be reached.

use crate::constants::{
    DEFAULT_LOCK_MAX_RETRIES, DEFAULT_LOCK_RETRY_INTERVAL_MS, DEFAULT_LOCK_TTL_SECS,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Caller-supplied value proving lock possession
///
/// Any unique string works (a snowflake id, a session token). Use
/// [`OwnerToken::generate`] when the caller has no natural identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerToken(String);

impl OwnerToken {
    /// Wrap an existing token
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Generate a fresh random token
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    /// Token as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for OwnerToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// What an operation reports when the store fails underneath it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Report success and let the business flow continue
    FailOpen,
    /// Report failure
    FailClosed,
}

impl FailurePolicy {
    /// Boolean outcome reported to the caller on store failure
    pub fn outcome(self) -> bool {
        matches!(self, Self::FailOpen)
    }
}

/// Per-operation failure policy of the lock manager
///
/// The acquire default is fail-open: a store outage admits every caller,
/// which weakens mutual exclusion for the duration of the outage. Set
/// `acquire` to [`FailurePolicy::FailClosed`] to trade availability for
/// strict exclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockFailurePolicy {
    /// Outcome of `acquire` on store failure
    pub acquire: FailurePolicy,
    /// Outcome of `release` on store failure
    pub release: FailurePolicy,
}

impl Default for LockFailurePolicy {
    fn default() -> Self {
        Self {
            acquire: FailurePolicy::FailOpen,
            release: FailurePolicy::FailClosed,
        }
    }
}

impl LockFailurePolicy {
    /// Policy that denies on every store failure
    pub fn strict() -> Self {
        Self {
            acquire: FailurePolicy::FailClosed,
            release: FailurePolicy::FailClosed,
        }
    }
}

/// Retry budget for a retrying acquire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryOptions {
    /// Maximum number of acquire attempts
    pub max_retries: u32,
    /// Pause between attempts
    pub interval: Duration,
}

impl RetryOptions {
    /// Create retry options; zero values fall back to the defaults
    pub fn new(max_retries: u32, interval: Duration) -> Self {
        Self {
            max_retries,
            interval,
        }
        .normalized()
    }

    /// Replace zero values with the defaults
    pub fn normalized(self) -> Self {
        let defaults = Self::default();
        Self {
            max_retries: if self.max_retries == 0 {
                defaults.max_retries
            } else {
                self.max_retries
            },
            interval: if self.interval.is_zero() {
                defaults.interval
            } else {
                self.interval
            },
        }
    }
}

impl Default for RetryOptions {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_LOCK_MAX_RETRIES,
            interval: Duration::from_millis(DEFAULT_LOCK_RETRY_INTERVAL_MS),
        }
    }
}

/// Resolve a requested lock TTL, falling back to `default` when the
/// request is absent or zero
pub fn effective_ttl(requested: Option<Duration>, default: Duration) -> Duration {
    match requested {
        Some(ttl) if !ttl.is_zero() => ttl,
        _ if default.is_zero() => Duration::from_secs(DEFAULT_LOCK_TTL_SECS),
        _ => default,
    }
}
