//! Key-Value Store Provider Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`NullKvStore`] | Disabled | Grants everything, stores nothing |
//! | [`InMemoryKvStore`] | Local | Process-local store with expiry |
//! | [`RedisKvStore`] | Distributed | Redis-backed for multi-instance |
//!
//! ## Provider Selection Guide
//!
//! - **Testing**: `InMemoryKvStore` (deterministic expiry on the tokio clock)
//! - **Single Instance**: `InMemoryKvStore`
//! - **Multi Instance**: `RedisKvStore`

#[cfg(feature = "store-memory")]
pub mod memory;
pub mod null;
#[cfg(feature = "store-redis")]
pub mod redis;

#[cfg(feature = "store-memory")]
pub use memory::InMemoryKvStore;
pub use null::NullKvStore;
#[cfg(feature = "store-redis")]
pub use redis::RedisKvStore;

use crate::constants::STORE_MAX_TTL_SECS;
use std::time::Duration;

/// Clamp `ttl` to the longest TTL any store accepts
pub fn bounded_ttl(ttl: Duration) -> Duration {
    ttl.min(Duration::from_secs(STORE_MAX_TTL_SECS))
}
