//! CLI module.

use anyhow::Result;
use args::{Args, CommandExecutor};
use clap::Parser;
use github_labelbot_config::{validate_configuration, Config};
use github_labelbot_logging::configure_logging;

pub(crate) mod args;
mod commands;
#[cfg(test)]
mod testutils;
pub(crate) mod utils;

/// Initialize command line.
pub fn initialize_command_line() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    configure_logging(&config)?;
    validate_configuration(&config)?;

    let args = Args::parse();
    CommandExecutor::parse_args(config, args)
}
