//! Coordination layer administrative CLI - Entry Point
//!
//! Lives in the `coord` facade crate next to the library so the binary and
//! the library share one name.

// Force-link coord-providers to ensure linkme registrations are included
extern crate coord_providers;

use clap::Parser;
use coord::cli::{Cli, execute};
use coord_infrastructure::bootstrap::CoordinationContext;
use coord_infrastructure::config::ConfigLoader;
use coord_infrastructure::logging::init_logging;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let loader = match &cli.config {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let config = loader.load()?;
    init_logging(&config.logging)?;

    let context = CoordinationContext::from_config(&config)?;
    if execute(&cli.command, &context).await? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
