use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use scip_finder::cli::Cli;
use scip_finder::commands::find::{self, FindRequest};
use scip_finder::config::Config;
use scip_finder::logging::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    // A broken config file is reported once logging is up
    let (config, config_error) = match Config::load(&cwd) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    // The guard must outlive the command so buffered logs are flushed
    let _logging_guard = init_logging(&config.logging, &cwd)?;

    if let Some(e) = config_error {
        tracing::warn!("Ignoring configuration: {:#}", e);
    }
    tracing::debug!("Working directory: {}", cwd.display());

    let request = FindRequest::from_cli(cli, &config);
    find::run(&request, &config, &cwd)
}
