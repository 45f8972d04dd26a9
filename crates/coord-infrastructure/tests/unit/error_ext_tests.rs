//! Error Extension Tests

use coord_domain::error::{Error, Result};
use coord_infrastructure::error_ext::ErrorContext;
use std::io;

fn not_found() -> std::result::Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "file not found"))
}

#[test]
fn test_config_context_keeps_source() {
    let result: Result<()> = not_found().config_context("failed to read coord.toml");

    match result {
        Err(Error::Configuration { message, source }) => {
            assert!(message.contains("failed to read coord.toml"));
            assert!(message.contains("file not found"));
            assert!(source.is_some());
        }
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[test]
fn test_store_context_keeps_source() {
    let result: Result<()> = not_found().store_context("redis unreachable");

    match result {
        Err(Error::Store { message, source }) => {
            assert!(message.starts_with("redis unreachable"));
            assert!(source.is_some());
        }
        other => panic!("Expected Store error, got {other:?}"),
    }
}

#[test]
fn test_context_is_internal() {
    let result: Result<()> = not_found().context("loading");
    assert!(matches!(result, Err(Error::Internal { ref message }) if message == "loading: file not found"));
}

#[test]
fn test_with_context_is_lazy() {
    let mut evaluated = false;
    let ok: std::result::Result<u8, io::Error> = Ok(7);
    let value = ok
        .with_context(|| {
            evaluated = true;
            "never built"
        })
        .unwrap();

    assert_eq!(value, 7);
    assert!(!evaluated);
}
