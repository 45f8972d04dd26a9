//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and domain layers.
//!
//! Store adapters live in `coord-providers` and are reached through the
//! linkme registry; this crate links them in and wires them from configuration.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration (defaults, TOML, `COORD_` environment) |
//! | [`logging`] | Structured logging with tracing |
//! | [`bootstrap`] | Composition root building the store, lock manager and debounce gate |
//! | [`error_ext`] | Context helpers for foreign errors |
//! | [`constants`] | Infrastructure constants |

// Force linkme registration of every store provider
extern crate coord_providers;

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::CoordinationContext;
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
