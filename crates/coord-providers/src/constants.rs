//! Provider-specific constants

/// Redis URL used when none is configured
pub const REDIS_DEFAULT_URL: &str = "redis://127.0.0.1:6379";

/// Upper bound on one store round trip when none is configured (milliseconds)
pub const STORE_DEFAULT_REQUEST_TIMEOUT_MS: u64 = 2000;

/// Keys requested per `SCAN` page during pattern deletes
pub const REDIS_SCAN_BATCH: usize = 1000;

/// Atomic compare-and-delete evaluated server side
///
/// Deletes `KEYS[1]` only while it still holds `ARGV[1]`, so a holder whose
/// lock already expired cannot delete the next holder's record.
pub const REDIS_RELEASE_SCRIPT: &str = r"
if redis.call('get', KEYS[1]) == ARGV[1] then
    return redis.call('del', KEYS[1])
else
    return 0
end
";

/// Longest TTL a store accepts; longer requests are clamped (about 30 years)
///
/// Keeps deadline arithmetic on the runtime clock and Redis' own
/// `now + PX` check from overflowing.
pub const STORE_MAX_TTL_SECS: u64 = 86_400 * 365 * 30;

/// Minimum pause between sweeps of expired in-memory records
pub const MEMORY_SWEEP_INTERVAL_SECS: u64 = 30;
