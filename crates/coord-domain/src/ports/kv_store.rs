//! Key-Value Store Provider Port
//!
//! The atomic primitives the coordination layer needs from its backing
//! store. Every method is a single round trip and must be atomic per key.

use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Shared key-value store with native per-key expiry
///
/// Any store offering set-if-absent with expiry, compare-and-delete and
/// unconditional delete can back the lock manager. A record whose expiry
/// has elapsed must behave exactly like an absent one.
#[async_trait]
pub trait KvStoreProvider: Send + Sync {
    /// Create `key -> value` expiring after `ttl`, only if `key` is absent
    ///
    /// Returns `true` iff this call created the record.
    async fn set_if_absent(&self, key: &str, value: &str, ttl: Duration) -> Result<bool>;

    /// Delete `key` only if its current value equals `expected`
    ///
    /// The compare and the delete must happen as one atomic step.
    async fn delete_if_equals(&self, key: &str, expected: &str) -> Result<bool>;

    /// Delete `key` unconditionally; returns whether a record was removed
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Delete every key matching a glob `pattern`; returns the count removed
    ///
    /// Administrative only, never used on a request path.
    async fn delete_matching(&self, pattern: &str) -> Result<u64>;

    /// Single round trip proving the store is reachable
    async fn health_check(&self) -> Result<()>;

    /// Get the name of this provider
    fn provider_name(&self) -> &str;
}
