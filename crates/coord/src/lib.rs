//! # Forum Coordination Layer
//!
//! Distributed mutual exclusion and per-user action debouncing for a
//! horizontally scaled forum backend, built over a shared key-value store.
//!
//! - **Lock manager**: named, owner-tokened, TTL-bounded locks with bounded
//!   retry. Only the owner that acquired a lock can release it.
//! - **Debounce gate**: admits the first (actor, action, target) attempt and
//!   rejects repeats until a short window expires.
//!
//! ## Example
//!
//! ```ignore
//! use coord::infrastructure::{ConfigLoader, CoordinationContext};
//! use coord::domain::value_objects::DebounceAction;
//!
//! let config = ConfigLoader::new().load()?;
//! let context = CoordinationContext::from_config(&config)?;
//!
//! if !context.debounce().admit_action(DebounceAction::Like, "user42", "post", "100").await {
//!     return Err(too_frequent());
//! }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Error type, value objects and store / lock ports
//! - `application` - Lock manager, debounce gate and the provider registry
//! - `providers` - Redis, in-memory and null key-value stores
//! - `infrastructure` - Configuration, logging and the composition root

/// Domain layer - error type, value objects and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use coord_domain::*;
}

/// Application layer - lock manager and debounce gate
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use coord_application::*;
}

/// Provider layer - key-value store adapters
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use coord_providers::*;
}

/// Infrastructure layer - configuration, logging and wiring
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use coord_infrastructure::*;
}

pub mod cli;

pub use coord_domain::error::{Error, Result};
