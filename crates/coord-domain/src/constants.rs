//! Domain constants
//!
//! Defaults shared by the lock manager, the debounce gate and their
//! configuration. Infrastructure config falls back to these values.

// ============================================================================
// Lock Manager
// ============================================================================

/// Lock TTL used when the caller passes none or zero (seconds)
pub const DEFAULT_LOCK_TTL_SECS: u64 = 15;

/// Attempts made by a retrying acquire when the caller passes zero
pub const DEFAULT_LOCK_MAX_RETRIES: u32 = 3;

/// Pause between retrying acquire attempts when the caller passes zero (milliseconds)
pub const DEFAULT_LOCK_RETRY_INTERVAL_MS: u64 = 100;

// ============================================================================
// Debounce Gate
// ============================================================================

/// Private key namespace for debounce records
pub const DEBOUNCE_NAMESPACE: &str = "debounce:lock:";

/// Value stored under every debounce record
pub const DEBOUNCE_MARKER: &str = "1";

/// Separator between debounce key segments
pub const DEBOUNCE_KEY_SEPARATOR: char = ':';

/// Leading segment of endpoint-style keys built by `DebounceKeyBuilder`
///
/// No action name equals it, so endpoint keys never overlap action keys.
pub const DEBOUNCE_ENDPOINT_SEGMENT: &str = "ep";

/// Like / unlike window (seconds)
pub const DEBOUNCE_LIKE_TTL_SECS: u64 = 2;

/// Dislike / undislike window (seconds)
pub const DEBOUNCE_DISLIKE_TTL_SECS: u64 = 2;

/// Comment window (seconds)
pub const DEBOUNCE_COMMENT_TTL_SECS: u64 = 5;

/// Post creation window (seconds)
pub const DEBOUNCE_POST_TTL_SECS: u64 = 10;

/// Message attached to rejected debounced actions
pub const DEBOUNCE_REJECTION_MESSAGE: &str = "operation too frequent, please try again later";
