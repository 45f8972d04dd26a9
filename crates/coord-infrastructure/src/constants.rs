//! Infrastructure constants

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "COORD";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "coord.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "coord";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "COORD_LOG";

/// File name stem used when a log file path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "coord";

/// Store provider used when none is configured
pub const DEFAULT_STORE_PROVIDER: &str = "memory";

/// Store provider name that requires a connection URL
pub const REDIS_STORE_PROVIDER: &str = "redis";
