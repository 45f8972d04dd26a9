//! Configuration types

mod app;
mod debounce;
mod lock;
mod logging;
mod store;

pub use app::AppConfig;
pub use debounce::DebounceConfig;
pub use lock::LockConfig;
pub use logging::LoggingConfig;
pub use store::StoreConfig;
