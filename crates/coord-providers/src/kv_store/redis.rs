//! Redis key-value store provider
//!
//! Shared store for multi-instance deployments.
//!
//! | Operation | Redis |
//! |-----------|-------|
//! | `set_if_absent` | `SET key value NX PX ttl` (ttl clamped) |
//! | `delete_if_equals` | Lua compare-and-delete script |
//! | `delete` | `DEL` |
//! | `delete_matching` | `SCAN MATCH` pages + `DEL` |
//! | `health_check` | `PING` |
//!
//! One auto-reconnecting multiplexed connection is shared by every caller
//! and opened lazily on first use. Each round trip is bounded by the
//! request timeout; an elapsed timeout is reported as a store error.
//!
//! ## Example
//!
//! ```ignore
//! use coord_providers::kv_store::RedisKvStore;
//!
//! let store = RedisKvStore::new("redis://localhost:6379")?;
//! ```

use super::bounded_ttl;
use crate::constants::{REDIS_RELEASE_SCRIPT, REDIS_SCAN_BATCH, STORE_DEFAULT_REQUEST_TIMEOUT_MS};
use async_trait::async_trait;
use coord_domain::error::{Error, Result};
use coord_domain::ports::KvStoreProvider;
use redis::aio::ConnectionManager;
use redis::{Client, RedisResult, Script};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::debug;

/// Redis key-value store provider
pub struct RedisKvStore {
    client: Client,
    connection: OnceCell<ConnectionManager>,
    release_script: Script,
    request_timeout: Duration,
}

impl RedisKvStore {
    /// Create a new Redis store with connection string
    ///
    /// No connection is opened until the first operation.
    ///
    /// # Arguments
    ///
    /// * `connection_string` - Redis connection URL (e.g., "redis://localhost:6379")
    pub fn new(connection_string: &str) -> Result<Self> {
        let client = Client::open(connection_string).map_err(|e| {
            Error::config_with_source(format!("Failed to create Redis client: {e}"), e)
        })?;

        Ok(Self {
            client,
            connection: OnceCell::new(),
            release_script: Script::new(REDIS_RELEASE_SCRIPT),
            request_timeout: Duration::from_millis(STORE_DEFAULT_REQUEST_TIMEOUT_MS),
        })
    }

    /// Create a new Redis store with host and port
    pub fn with_host_port(host: &str, port: u16) -> Result<Self> {
        Self::new(&format!("redis://{host}:{port}"))
    }

    /// Bound every round trip by `timeout`
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Configured request timeout
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    fn timeout_ms(&self) -> u64 {
        u64::try_from(self.request_timeout.as_millis()).unwrap_or(u64::MAX)
    }

    /// Get the shared connection, opening it on first use
    async fn connection(&self) -> Result<ConnectionManager> {
        let connection = self
            .connection
            .get_or_try_init(|| async {
                match tokio::time::timeout(
                    self.request_timeout,
                    ConnectionManager::new(self.client.clone()),
                )
                .await
                {
                    Ok(Ok(manager)) => {
                        debug!("Redis connection established");
                        Ok(manager)
                    }
                    Ok(Err(e)) => Err(Error::store_with_source(
                        format!("Failed to connect to Redis: {e}"),
                        e,
                    )),
                    Err(_) => Err(Error::timeout("connect", self.timeout_ms())),
                }
            })
            .await?;
        Ok(connection.clone())
    }

    /// Run one round trip under the request timeout
    async fn bounded<T, F>(&self, operation: &str, request: F) -> Result<T>
    where
        F: Future<Output = RedisResult<T>>,
    {
        match tokio::time::timeout(self.request_timeout, request).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(Error::store_with_source(
                format!("Redis {operation} failed: {e}"),
                e,
            )),
            Err(_) => Err(Error::timeout(operation, self.timeout_ms())),
        }
    }
}

#[async_trait]
impl KvStoreProvider for RedisKvStore {
    async fn set_if_absent(&self, key: &str, value: &str, ttl: Duration) -> Result<bool> {
        let mut conn = self.connection().await?;
        let ttl_ms = u64::try_from(bounded_ttl(ttl).as_millis())
            .unwrap_or(u64::MAX)
            .max(1);

        let reply: Option<String> = self
            .bounded(
                "SET NX",
                redis::cmd("SET")
                    .arg(key)
                    .arg(value)
                    .arg("NX")
                    .arg("PX")
                    .arg(ttl_ms)
                    .query_async(&mut conn),
            )
            .await?;
        Ok(reply.is_some())
    }

    async fn delete_if_equals(&self, key: &str, expected: &str) -> Result<bool> {
        let mut conn = self.connection().await?;
        let mut invocation = self.release_script.key(key);
        invocation.arg(expected);

        let deleted: i64 = self
            .bounded("EVAL release", invocation.invoke_async(&mut conn))
            .await?;
        Ok(deleted > 0)
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let mut conn = self.connection().await?;
        let deleted: i64 = self
            .bounded("DEL", redis::cmd("DEL").arg(key).query_async(&mut conn))
            .await?;
        Ok(deleted > 0)
    }

    async fn delete_matching(&self, pattern: &str) -> Result<u64> {
        let mut conn = self.connection().await?;
        let mut cursor: u64 = 0;
        let mut removed: u64 = 0;

        loop {
            let (next, keys): (u64, Vec<String>) = self
                .bounded(
                    "SCAN",
                    redis::cmd("SCAN")
                        .arg(cursor)
                        .arg("MATCH")
                        .arg(pattern)
                        .arg("COUNT")
                        .arg(REDIS_SCAN_BATCH)
                        .query_async(&mut conn),
                )
                .await?;

            if !keys.is_empty() {
                let deleted: u64 = self
                    .bounded("DEL", redis::cmd("DEL").arg(&keys).query_async(&mut conn))
                    .await?;
                removed += deleted;
            }

            if next == 0 {
                debug!(pattern, removed, "Redis pattern scan complete");
                break;
            }
            cursor = next;
        }

        Ok(removed)
    }

    async fn health_check(&self) -> Result<()> {
        let mut conn = self.connection().await?;
        let _pong: String = self
            .bounded("PING", redis::cmd("PING").query_async(&mut conn))
            .await?;
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "redis"
    }
}

impl std::fmt::Debug for RedisKvStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisKvStore")
            .field("connected", &self.connection.initialized())
            .field("request_timeout", &self.request_timeout)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use crate::constants::REDIS_DEFAULT_URL;
use coord_application::ports::registry::{
    KV_STORE_PROVIDERS, KvStoreProviderConfig, KvStoreProviderEntry,
};

/// Factory function for creating Redis store instances
fn redis_store_factory(
    config: &KvStoreProviderConfig,
) -> std::result::Result<Arc<dyn KvStoreProvider>, String> {
    let uri = config.uri.as_deref().unwrap_or(REDIS_DEFAULT_URL);
    let timeout = Duration::from_millis(
        config
            .request_timeout_ms
            .unwrap_or(STORE_DEFAULT_REQUEST_TIMEOUT_MS),
    );

    let store = RedisKvStore::new(uri)
        .map_err(|e| format!("Failed to create Redis store: {e}"))?
        .with_request_timeout(timeout);

    Ok(Arc::new(store))
}

#[linkme::distributed_slice(KV_STORE_PROVIDERS)]
static REDIS_PROVIDER: KvStoreProviderEntry = KvStoreProviderEntry {
    name: "redis",
    description: "Redis shared key-value store (multi-instance)",
    factory: redis_store_factory,
};
