//! # Coordination Domain
//!
//! Core types of the forum coordination layer: a distributed lock over a
//! shared key-value store and a debounce gate built on top of it.
//!
//! ## Contents
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Domain error type and `Result` alias |
//! | [`constants`] | Lock and debounce defaults |
//! | [`value_objects`] | Owner tokens, failure policy, debounce keys |
//! | [`ports`] | Store and lock traits implemented by providers |
//!
//! This crate performs no I/O.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
