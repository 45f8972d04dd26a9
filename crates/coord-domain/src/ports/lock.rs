//! Distributed Lock Provider Port
//!
//! Defines the contract for guard-style lock coordination: the provider
//! picks the owner token and hands it back inside the guard.

use crate::error::Result;
use async_trait::async_trait;

/// Lock guard token returned when a lock is acquired
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockGuard {
    /// Lock key
    pub key: String,
    /// Unique token for this lock acquisition
    pub token: String,
}

/// Distributed lock provider interface
#[async_trait]
pub trait LockProvider: Send + Sync {
    /// Acquire a distributed lock, retrying within the provider's budget
    ///
    /// Fails with `Error::LockUnavailable` when the budget is exhausted.
    async fn acquire_lock(&self, key: &str) -> Result<LockGuard>;

    /// Release a distributed lock; returns whether the record was deleted
    async fn release_lock(&self, guard: LockGuard) -> Result<bool>;
}
