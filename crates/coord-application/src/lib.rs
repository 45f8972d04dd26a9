//! Application Layer - Coordination
//!
//! Implements the coordination use cases on top of the domain ports.
//!
//! ## Use Cases
//!
//! - [`LockManager`]: acquire/release named, time-bounded locks with
//!   ownership tokens, plus a cancellable retry loop
//! - [`DebounceGate`]: one-shot admission gate per (actor, action, target)
//!
//! ## Ports (Interfaces)
//!
//! - `ports::services::*`: service interfaces handed to callers
//! - `ports::registry::*`: compile-time registry of store providers
//!
//! ## Dependencies
//!
//! This crate depends only on `coord-domain` and async plumbing; the store
//! is always injected.

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
