//! Unit tests for domain error types

use coord_domain::Error;

#[test]
fn test_invalid_argument_error() {
    let error = Error::invalid_argument("lock name must not be empty");
    match error {
        Error::InvalidArgument { message } => assert_eq!(message, "lock name must not be empty"),
        _ => panic!("Expected InvalidArgument error"),
    }
}

#[test]
fn test_store_error_keeps_source() {
    let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
    let error = Error::store_with_source("SET NX failed", io);
    match &error {
        Error::Store { message, source } => {
            assert_eq!(message, "SET NX failed");
            assert!(source.is_some());
        }
        _ => panic!("Expected Store error"),
    }
    assert!(error.is_store_failure());
}

#[test]
fn test_timeout_is_store_failure() {
    let error = Error::timeout("set_if_absent", 2000);
    assert!(error.is_store_failure());
    assert!(error.to_string().contains("2000ms"));
}

#[test]
fn test_too_frequent_display() {
    let error = Error::too_frequent("like:post:7:u1", "slow down");
    assert_eq!(error.to_string(), "slow down (key: like:post:7:u1)");
    assert!(!error.is_store_failure());
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
    let error: Error = io.into();
    assert!(matches!(error, Error::Io { .. }));
    assert!(error.to_string().contains("read-only"));
    assert!(!error.is_store_failure());
}
