//! Lock Manager
//!
//! Distributed mutual exclusion over a shared key-value store. All exclusion
//! comes from the store's atomic primitives; the manager keeps no in-process
//! locks and is shared freely between request tasks.
//!
//! ## Failure handling
//!
//! Store errors never reach the caller. They are logged with the lock name
//! and owner and mapped to a boolean by [`LockFailurePolicy`]. The default
//! acquire policy is fail-open, so during a store outage every caller is
//! told it holds the lock.

use crate::ports::services::LockServiceInterface;
use async_trait::async_trait;
use coord_domain::constants::DEFAULT_LOCK_TTL_SECS;
use coord_domain::error::{Error, Result};
use coord_domain::ports::{KvStoreProvider, LockGuard, LockProvider};
use coord_domain::value_objects::{LockFailurePolicy, OwnerToken, RetryOptions, effective_ttl};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, warn};

/// Lock manager settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockSettings {
    /// TTL applied when the caller passes none or zero
    pub default_ttl: Duration,
    /// Retry budget used by [`LockProvider::acquire_lock`]
    pub retry: RetryOptions,
    /// Outcome of each operation on store failure
    pub failure_policy: LockFailurePolicy,
}

impl Default for LockSettings {
    fn default() -> Self {
        Self {
            default_ttl: Duration::from_secs(DEFAULT_LOCK_TTL_SECS),
            retry: RetryOptions::default(),
            failure_policy: LockFailurePolicy::default(),
        }
    }
}

/// Lock manager backed by an injected key-value store
#[derive(Clone)]
pub struct LockManager {
    store: Arc<dyn KvStoreProvider>,
    settings: LockSettings,
}

impl LockManager {
    /// Create a lock manager with default settings
    pub fn new(store: Arc<dyn KvStoreProvider>) -> Self {
        Self::with_settings(store, LockSettings::default())
    }

    /// Create a lock manager with custom settings
    pub fn with_settings(store: Arc<dyn KvStoreProvider>, settings: LockSettings) -> Self {
        Self { store, settings }
    }

    /// Current settings
    pub fn settings(&self) -> &LockSettings {
        &self.settings
    }

    /// Backing store
    pub fn store(&self) -> &Arc<dyn KvStoreProvider> {
        &self.store
    }
}

#[async_trait]
impl LockServiceInterface for LockManager {
    async fn acquire(&self, name: &str, owner: &str, ttl: Option<Duration>) -> bool {
        if name.is_empty() || owner.is_empty() {
            warn!(lock_name = name, owner, "Lock name and owner must not be empty");
            return false;
        }

        let ttl = effective_ttl(ttl, self.settings.default_ttl);
        match self.store.set_if_absent(name, owner, ttl).await {
            Ok(true) => {
                debug!(lock_name = name, owner, ttl_secs = ttl.as_secs(), "Lock acquired");
                true
            }
            Ok(false) => {
                debug!(lock_name = name, owner, "Lock held by another owner");
                false
            }
            Err(e) => {
                let outcome = self.settings.failure_policy.acquire.outcome();
                error!(
                    lock_name = name,
                    owner,
                    error = %e,
                    granted = outcome,
                    "Lock acquire failed on store error"
                );
                outcome
            }
        }
    }

    async fn release(&self, name: &str, owner: &str) -> bool {
        if name.is_empty() || owner.is_empty() {
            warn!(lock_name = name, owner, "Lock name and owner must not be empty");
            return false;
        }

        match self.store.delete_if_equals(name, owner).await {
            Ok(true) => {
                debug!(lock_name = name, owner, "Lock released");
                true
            }
            Ok(false) => {
                debug!(
                    lock_name = name,
                    owner, "Lock not released: expired or held by another owner"
                );
                false
            }
            Err(e) => {
                let outcome = self.settings.failure_policy.release.outcome();
                error!(
                    lock_name = name,
                    owner,
                    error = %e,
                    released = outcome,
                    "Lock release failed on store error"
                );
                outcome
            }
        }
    }

    async fn acquire_with_retry(
        &self,
        name: &str,
        owner: &str,
        ttl: Option<Duration>,
        retry: RetryOptions,
        cancel: &CancellationToken,
    ) -> bool {
        if name.is_empty() || owner.is_empty() {
            warn!(lock_name = name, owner, "Lock name and owner must not be empty");
            return false;
        }

        let retry = retry.normalized();
        for attempt in 1..=retry.max_retries {
            if cancel.is_cancelled() {
                warn!(lock_name = name, owner, attempt, "Lock retry cancelled");
                return false;
            }
            if self.acquire(name, owner, ttl).await {
                return true;
            }
            if attempt < retry.max_retries {
                tokio::select! {
                    biased;
                    () = cancel.cancelled() => {
                        warn!(lock_name = name, owner, attempt, "Lock retry cancelled");
                        return false;
                    }
                    () = tokio::time::sleep(retry.interval) => {}
                }
            }
        }

        warn!(
            lock_name = name,
            owner,
            attempts = retry.max_retries,
            "Lock still unavailable after retries"
        );
        false
    }

    async fn force_release(&self, name: &str) -> bool {
        if name.is_empty() {
            warn!("Lock name must not be empty");
            return false;
        }

        match self.store.delete(name).await {
            Ok(removed) => {
                debug!(lock_name = name, removed, "Lock force-released");
                removed
            }
            Err(e) => {
                error!(lock_name = name, error = %e, "Lock force-release failed on store error");
                false
            }
        }
    }

    async fn force_release_matching(&self, pattern: &str) -> u64 {
        if pattern.is_empty() {
            warn!("Lock pattern must not be empty");
            return 0;
        }

        match self.store.delete_matching(pattern).await {
            Ok(count) => {
                debug!(pattern, count, "Locks force-released by pattern");
                count
            }
            Err(e) => {
                error!(pattern, error = %e, "Pattern force-release failed on store error");
                0
            }
        }
    }
}

#[async_trait]
impl LockProvider for LockManager {
    async fn acquire_lock(&self, key: &str) -> Result<LockGuard> {
        if key.is_empty() {
            return Err(Error::invalid_argument("Lock key must not be empty"));
        }

        let token = OwnerToken::generate();
        let acquired = self
            .acquire_with_retry(
                key,
                token.as_str(),
                None,
                self.settings.retry,
                &CancellationToken::new(),
            )
            .await;

        if acquired {
            Ok(LockGuard {
                key: key.to_string(),
                token: token.to_string(),
            })
        } else {
            Err(Error::lock_unavailable(key))
        }
    }

    async fn release_lock(&self, guard: LockGuard) -> Result<bool> {
        Ok(self.release(&guard.key, &guard.token).await)
    }
}

impl std::fmt::Debug for LockManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LockManager")
            .field("store", &self.store.provider_name())
            .field("settings", &self.settings)
            .finish()
    }
}
