//! Debounce Gate
//!
//! Throttles user-triggered actions (likes, comments, posts) across
//! concurrent requests and server processes. Each (actor, action, target)
//! tuple maps to a short-lived lock record in a private namespace; the
//! first attempt creates it, repeats inside the window find it present and
//! are rejected. Records are never released on the success path, only by
//! expiry.
//!
//! Per key: `ABSENT -> ADMITTED (ttl running) -> ABSENT (expiry)`.

use crate::ports::services::{DebounceServiceInterface, LockServiceInterface};
use async_trait::async_trait;
use coord_domain::constants::{DEBOUNCE_MARKER, DEBOUNCE_NAMESPACE, DEBOUNCE_REJECTION_MESSAGE};
use coord_domain::error::{Error, Result};
use coord_domain::value_objects::{DebounceAction, DebounceKey, DebounceTtlPolicy};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Debounce gate settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebounceSettings {
    /// Prefix of every debounce record name
    pub namespace: String,
    /// Value stored in every debounce record
    pub marker: String,
    /// Window per action kind
    pub ttl_policy: DebounceTtlPolicy,
    /// Message carried by [`Error::TooFrequent`]
    pub rejection_message: String,
}

impl Default for DebounceSettings {
    fn default() -> Self {
        Self {
            namespace: DEBOUNCE_NAMESPACE.to_string(),
            marker: DEBOUNCE_MARKER.to_string(),
            ttl_policy: DebounceTtlPolicy::default(),
            rejection_message: DEBOUNCE_REJECTION_MESSAGE.to_string(),
        }
    }
}

/// Debounce gate delegating to a lock service
#[derive(Clone)]
pub struct DebounceGate {
    locks: Arc<dyn LockServiceInterface>,
    settings: DebounceSettings,
}

impl DebounceGate {
    /// Create a gate with default settings
    pub fn new(locks: Arc<dyn LockServiceInterface>) -> Self {
        Self::with_settings(locks, DebounceSettings::default())
    }

    /// Create a gate with custom settings
    pub fn with_settings(locks: Arc<dyn LockServiceInterface>, settings: DebounceSettings) -> Self {
        Self { locks, settings }
    }

    /// Current settings
    pub fn settings(&self) -> &DebounceSettings {
        &self.settings
    }

    /// Lock record name backing `key`
    pub fn record_name(&self, key: &DebounceKey) -> String {
        format!("{}{}", self.settings.namespace, key)
    }

    /// Admit `key`, run `action`, and clear the gate again if the action fails
    ///
    /// A failed action leaves the user free to retry at once. Rejection
    /// yields [`Error::TooFrequent`]; an empty key yields
    /// [`Error::InvalidArgument`] without running the action.
    pub async fn run_debounced<T, F, Fut>(
        &self,
        key: &DebounceKey,
        ttl: Duration,
        action: F,
    ) -> Result<T>
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = Result<T>> + Send,
        T: Send,
    {
        if key.is_empty() {
            return Err(Error::invalid_argument("Debounce key must not be empty"));
        }
        if !self.admit(key, ttl).await {
            return Err(Error::too_frequent(
                key.as_str(),
                self.settings.rejection_message.as_str(),
            ));
        }

        match action().await {
            Ok(value) => {
                debug!(key = %key, "Debounced action completed");
                Ok(value)
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Debounced action failed, clearing gate");
                self.force_clear(key).await;
                Err(e)
            }
        }
    }

    /// [`run_debounced`](Self::run_debounced) with key and window derived
    /// from a typed action
    pub async fn run_action<T, F, Fut>(
        &self,
        action: DebounceAction,
        actor: &str,
        target_kind: &str,
        target_id: &str,
        run: F,
    ) -> Result<T>
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = Result<T>> + Send,
        T: Send,
    {
        let key = DebounceKey::for_action(action, actor, target_kind, target_id);
        let ttl = self.settings.ttl_policy.ttl_for(action);
        self.run_debounced(&key, ttl, run).await
    }
}

#[async_trait]
impl DebounceServiceInterface for DebounceGate {
    async fn admit(&self, key: &DebounceKey, ttl: Duration) -> bool {
        if key.is_empty() {
            warn!("Debounce key must not be empty");
            return false;
        }

        let name = self.record_name(key);
        let admitted = self
            .locks
            .acquire(&name, &self.settings.marker, Some(ttl))
            .await;

        if admitted {
            debug!(key = %key, ttl_secs = ttl.as_secs(), "Debounce gate admitted action");
        } else {
            info!(key = %key, "Debounce gate rejected action: too frequent");
        }
        admitted
    }

    async fn admit_action(
        &self,
        action: DebounceAction,
        actor: &str,
        target_kind: &str,
        target_id: &str,
    ) -> bool {
        let key = self.key_for(action, actor, target_kind, target_id);
        self.admit(&key, self.settings.ttl_policy.ttl_for(action))
            .await
    }

    async fn force_clear(&self, key: &DebounceKey) -> bool {
        if key.is_empty() {
            warn!("Debounce key must not be empty");
            return false;
        }

        let cleared = self.locks.force_release(&self.record_name(key)).await;
        debug!(key = %key, cleared, "Debounce gate cleared");
        cleared
    }

    async fn clear_all(&self) -> u64 {
        let pattern = format!("{}*", escape_glob(&self.settings.namespace));
        let count = self.locks.force_release_matching(&pattern).await;
        info!(namespace = %self.settings.namespace, count, "Debounce namespace cleared");
        count
    }
}

impl std::fmt::Debug for DebounceGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DebounceGate")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

/// Escape glob metacharacters so `s` matches literally
fn escape_glob(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '*' | '?' | '[' | ']' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
