//! In-memory key-value store provider
//!
//! Process-local store with per-key expiry. Suitable for tests and
//! single-process deployments; records are not shared across processes.
//!
//! Deadlines are measured on the tokio clock, so tests running with a
//! paused runtime can expire records deterministically with
//! `tokio::time::advance`.
//!
//! Expired records are dropped when their key is touched again and by a
//! sweep that writes run at most once per sweep interval, so keys that are
//! never reused (one debounce key per actor and target) do not accumulate.

use super::bounded_ttl;
use crate::constants::MEMORY_SWEEP_INTERVAL_SECS;
use async_trait::async_trait;
use coord_domain::error::{Error, Result};
use coord_domain::ports::KvStoreProvider;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use globset::Glob;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

#[derive(Debug, Clone)]
struct Record {
    value: String,
    expires_at: Instant,
}

impl Record {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at <= now
    }
}

/// In-memory key-value store
///
/// Per-key atomicity comes from the shard lock taken by the map's entry
/// API. Clones share the same records.
#[derive(Debug, Clone)]
pub struct InMemoryKvStore {
    records: Arc<DashMap<String, Record>>,
    last_sweep: Arc<Mutex<Instant>>,
    sweep_interval: Duration,
}

impl Default for InMemoryKvStore {
    fn default() -> Self {
        Self {
            records: Arc::new(DashMap::new()),
            last_sweep: Arc::new(Mutex::new(Instant::now())),
            sweep_interval: Duration::from_secs(MEMORY_SWEEP_INTERVAL_SECS),
        }
    }
}

impl InMemoryKvStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Sweep expired records at most once per `interval`
    #[must_use]
    pub fn with_sweep_interval(mut self, interval: Duration) -> Self {
        self.sweep_interval = interval;
        self
    }

    /// Current value of `key`, if present and unexpired
    pub fn get(&self, key: &str) -> Option<String> {
        let now = Instant::now();
        self.records
            .get(key)
            .filter(|record| !record.is_expired(now))
            .map(|record| record.value.clone())
    }

    /// Remaining time to live of `key`, if present and unexpired
    pub fn ttl(&self, key: &str) -> Option<Duration> {
        let now = Instant::now();
        self.records
            .get(key)
            .filter(|record| !record.is_expired(now))
            .map(|record| record.expires_at - now)
    }

    /// Number of unexpired records
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.records
            .iter()
            .filter(|record| !record.is_expired(now))
            .count()
    }

    /// Whether the store holds no unexpired record
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of records held, including expired ones not yet swept
    pub fn stored_len(&self) -> usize {
        self.records.len()
    }

    /// Drop every expired record, returning how many were dropped
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.records.len();
        self.records.retain(|_, record| !record.is_expired(now));
        before.saturating_sub(self.records.len())
    }

    /// Purge expired records if the sweep interval has elapsed
    ///
    /// Skipped when another task is already sweeping.
    fn maybe_sweep(&self, now: Instant) {
        let Ok(mut last_sweep) = self.last_sweep.try_lock() else {
            return;
        };
        if now.saturating_duration_since(*last_sweep) < self.sweep_interval {
            return;
        }
        *last_sweep = now;
        let purged = self.purge_expired();
        if purged > 0 {
            debug!(purged, "Expired in-memory records swept");
        }
    }
}

#[async_trait]
impl KvStoreProvider for InMemoryKvStore {
    async fn set_if_absent(&self, key: &str, value: &str, ttl: Duration) -> Result<bool> {
        let now = Instant::now();
        self.maybe_sweep(now);

        let ttl = bounded_ttl(ttl);
        let expires_at = now
            .checked_add(ttl)
            .ok_or_else(|| Error::store(format!("TTL of {ttl:?} overflows the clock")))?;
        let record = Record {
            value: value.to_string(),
            expires_at,
        };

        match self.records.entry(key.to_string()) {
            Entry::Occupied(mut occupied) => {
                if occupied.get().is_expired(now) {
                    occupied.insert(record);
                    Ok(true)
                } else {
                    Ok(false)
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(record);
                Ok(true)
            }
        }
    }

    async fn delete_if_equals(&self, key: &str, expected: &str) -> Result<bool> {
        let now = Instant::now();
        let removed = self
            .records
            .remove_if(key, |_, record| {
                !record.is_expired(now) && record.value == expected
            })
            .is_some();
        if !removed {
            self.records.remove_if(key, |_, record| record.is_expired(now));
        }
        Ok(removed)
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let now = Instant::now();
        Ok(self
            .records
            .remove(key)
            .is_some_and(|(_, record)| !record.is_expired(now)))
    }

    async fn delete_matching(&self, pattern: &str) -> Result<u64> {
        let matcher = Glob::new(pattern)
            .map_err(|e| Error::store_with_source(format!("Invalid key pattern '{pattern}'"), e))?
            .compile_matcher();

        let now = Instant::now();
        let mut removed = 0u64;
        self.records.retain(|key, record| {
            if record.is_expired(now) {
                return false;
            }
            if matcher.is_match(key.as_str()) {
                removed += 1;
                return false;
            }
            true
        });
        debug!(pattern, removed, "In-memory records removed by pattern");
        Ok(removed)
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use coord_application::ports::registry::{
    KV_STORE_PROVIDERS, KvStoreProviderConfig, KvStoreProviderEntry,
};

fn memory_store_factory(
    _config: &KvStoreProviderConfig,
) -> std::result::Result<Arc<dyn KvStoreProvider>, String> {
    Ok(Arc::new(InMemoryKvStore::new()))
}

#[linkme::distributed_slice(KV_STORE_PROVIDERS)]
static MEMORY_PROVIDER: KvStoreProviderEntry = KvStoreProviderEntry {
    name: "memory",
    description: "In-process key-value store (single instance, tests)",
    factory: memory_store_factory,
};
