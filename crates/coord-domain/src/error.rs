//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the coordination layer
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Key-value store operation error
    #[error("Store error: {message}")]
    Store {
        /// Description of the store error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A store round trip exceeded its request timeout
    #[error("Operation '{operation}' timed out after {timeout_ms}ms")]
    Timeout {
        /// Store operation that timed out
        operation: String,
        /// Configured timeout in milliseconds
        timeout_ms: u64,
    },

    /// The named lock could not be obtained within the retry budget
    #[error("Lock unavailable: {name}")]
    LockUnavailable {
        /// Lock name
        name: String,
    },

    /// A debounced action was rejected because it was already admitted
    /// within its TTL window
    #[error("{message} (key: {key})")]
    TooFrequent {
        /// Debounce key that rejected the action
        key: String,
        /// User-facing rejection message
        message: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Basic error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn config_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Store error creation methods
impl Error {
    /// Create a store error
    pub fn store<S: Into<String>>(message: S) -> Self {
        Self::Store {
            message: message.into(),
            source: None,
        }
    }

    /// Create a store error with source
    pub fn store_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Store {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a timeout error for a store operation
    pub fn timeout<S: Into<String>>(operation: S, timeout_ms: u64) -> Self {
        Self::Timeout {
            operation: operation.into(),
            timeout_ms,
        }
    }
}

// Coordination outcome errors
impl Error {
    /// Create a lock unavailable error
    pub fn lock_unavailable<S: Into<String>>(name: S) -> Self {
        Self::LockUnavailable { name: name.into() }
    }

    /// Create a "too frequent" rejection error
    pub fn too_frequent<K: Into<String>, M: Into<String>>(key: K, message: M) -> Self {
        Self::TooFrequent {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Whether this error came from the backing store (connectivity or timeout)
    pub fn is_store_failure(&self) -> bool {
        matches!(self, Self::Store { .. } | Self::Timeout { .. })
    }
}
