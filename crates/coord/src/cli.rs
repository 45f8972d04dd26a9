//! Administrative command line interface
//!
//! | Command | Effect |
//! |---------|--------|
//! | `providers` | List registered key-value stores |
//! | `health` | One round trip to the configured store |
//! | `acquire <name>` | Acquire a lock, printing the owner token |
//! | `release <name> <owner>` | Release a lock held by `owner` |
//! | `debounce-clear <key>` | Reopen one debounce gate |
//! | `debounce-clear-all` | Reopen every debounce gate |
//!
//! Each command reports success as `true`, which maps to exit status 0.

use coord_application::ports::services::{DebounceServiceInterface, LockServiceInterface};
use coord_domain::error::Result;
use coord_domain::ports::KvStoreProvider;
use coord_domain::value_objects::{DebounceKey, OwnerToken};
use coord_infrastructure::bootstrap::CoordinationContext;
use coord_infrastructure::logging::log_health_check;
use std::path::PathBuf;
use std::time::Duration;

/// Command line interface for the coordination layer
#[derive(clap::Parser, Debug)]
#[command(name = "coord")]
#[command(about = "Forum coordination layer - distributed locks and debounce gates")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Administrative commands
#[derive(clap::Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List registered key-value store providers
    Providers,

    /// Check that the configured store is reachable
    Health,

    /// Acquire a named lock
    Acquire {
        /// Lock name
        name: String,

        /// Owner token (generated when omitted)
        #[arg(long)]
        owner: Option<String>,

        /// Time to live in seconds (configured default when omitted)
        #[arg(long)]
        ttl: Option<u64>,
    },

    /// Release a named lock held by `owner`
    Release {
        /// Lock name
        name: String,

        /// Owner token used to acquire the lock
        owner: String,
    },

    /// Clear one debounce gate
    DebounceClear {
        /// Debounce key (without namespace)
        key: String,
    },

    /// Clear every debounce gate
    DebounceClearAll,
}

/// Run `command` against `context`
///
/// Returns the boolean outcome of the command.
pub async fn execute(command: &Command, context: &CoordinationContext) -> Result<bool> {
    match command {
        Command::Providers => {
            for (name, description) in CoordinationContext::available_store_providers() {
                println!("{name:<8} {description}");
            }
            Ok(true)
        }
        Command::Health => {
            let store = context.store();
            match store.health_check().await {
                Ok(()) => {
                    log_health_check(store.provider_name(), true, None);
                    println!("{}: ok", store.provider_name());
                    Ok(true)
                }
                Err(e) => {
                    let details = e.to_string();
                    log_health_check(store.provider_name(), false, Some(&details));
                    println!("{}: {details}", store.provider_name());
                    Ok(false)
                }
            }
        }
        Command::Acquire { name, owner, ttl } => {
            let owner = owner
                .as_deref()
                .map_or_else(OwnerToken::generate, OwnerToken::new);
            let acquired = context
                .locks()
                .acquire(name, owner.as_str(), ttl.map(Duration::from_secs))
                .await;
            if acquired {
                println!("{owner}");
            }
            Ok(acquired)
        }
        Command::Release { name, owner } => Ok(context.locks().release(name, owner).await),
        Command::DebounceClear { key } => {
            Ok(context.debounce().force_clear(&DebounceKey::new(key.as_str())).await)
        }
        Command::DebounceClearAll => {
            let cleared = context.debounce().clear_all().await;
            println!("{cleared}");
            Ok(true)
        }
    }
}
