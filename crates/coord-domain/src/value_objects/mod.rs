//! Value Objects
//!
//! Immutable values describing locks and debounce gates.

/// Debounce actions, TTL policy and keys
pub mod debounce;
/// Owner tokens, retry options and failure policy
pub mod lock;

pub use debounce::{DebounceAction, DebounceKey, DebounceKeyBuilder, DebounceTtlPolicy};
pub use lock::{FailurePolicy, LockFailurePolicy, OwnerToken, RetryOptions, effective_ttl};
