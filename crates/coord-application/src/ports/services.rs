//! Application Service Port Interfaces
//!
//! Contracts implemented by the application services. Callers (the request
//! handlers of the forum) hold these as `Arc<dyn ...>`.
//!
//! Every operation answers with a plain boolean or count: store failures
//! are logged and folded into the configured failure policy, never
//! returned to the caller.

use async_trait::async_trait;
use coord_domain::value_objects::{DebounceAction, DebounceKey, RetryOptions};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

// ============================================================================
// Lock Service Interface
// ============================================================================

/// Named, time-bounded exclusive locks over the shared store
#[async_trait]
pub trait LockServiceInterface: Send + Sync {
    /// Create the lock record `name -> owner` if absent
    ///
    /// `ttl` of `None` or zero uses the configured default. Returns `true`
    /// iff this call now holds the lock. Empty `name` or `owner` returns
    /// `false`. On store failure the acquire failure policy decides.
    async fn acquire(&self, name: &str, owner: &str, ttl: Option<Duration>) -> bool;

    /// Delete the lock record iff it is still held by `owner`
    ///
    /// Returns `true` iff a record was deleted.
    async fn release(&self, name: &str, owner: &str) -> bool;

    /// [`acquire`](Self::acquire) up to `retry.max_retries` times, pausing
    /// `retry.interval` between attempts
    ///
    /// Cancelling `cancel` ends the loop immediately with `false`; an
    /// attempt already in flight is allowed to finish.
    async fn acquire_with_retry(
        &self,
        name: &str,
        owner: &str,
        ttl: Option<Duration>,
        retry: RetryOptions,
        cancel: &CancellationToken,
    ) -> bool;

    /// Delete the lock record regardless of owner
    async fn force_release(&self, name: &str) -> bool;

    /// Delete every lock record matching a glob `pattern`
    async fn force_release_matching(&self, pattern: &str) -> u64;
}

// ============================================================================
// Debounce Service Interface
// ============================================================================

/// One-shot gate suppressing repeated user actions within a window
#[async_trait]
pub trait DebounceServiceInterface: Send + Sync {
    /// Admit the action identified by `key` unless it was admitted within
    /// the last `ttl`
    async fn admit(&self, key: &DebounceKey, ttl: Duration) -> bool;

    /// Derive the key and the window for a typed action, then [`admit`](Self::admit)
    async fn admit_action(
        &self,
        action: DebounceAction,
        actor: &str,
        target_kind: &str,
        target_id: &str,
    ) -> bool;

    /// Remove the gate for `key` so the next attempt is admitted
    async fn force_clear(&self, key: &DebounceKey) -> bool;

    /// Remove every gate in the debounce namespace
    async fn clear_all(&self) -> u64;

    /// Deterministic key for an (action, actor, target) tuple
    fn key_for(
        &self,
        action: DebounceAction,
        actor: &str,
        target_kind: &str,
        target_id: &str,
    ) -> DebounceKey {
        DebounceKey::for_action(action, actor, target_kind, target_id)
    }
}
