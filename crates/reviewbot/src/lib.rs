//! CLI module.

use anyhow::Result;
use args::{Args, CommandExecutor};
use clap::Parser;
use reviewbot_config::Config;
use reviewbot_core::use_cases::action::ActionOutcome;
use reviewbot_logging::configure_logging;
use tracing::info;

pub(crate) mod args;

/// Get version data.
pub fn get_version_data() -> String {
    format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Initialize command line and run the action once.
pub fn initialize_command_line() -> Result<ActionOutcome> {
    dotenv::dotenv().ok();

    let config = Config::from_env(env!("CARGO_PKG_VERSION").to_string())?;
    configure_logging(&config)?;

    info!("{}", get_version_data());

    let args = Args::parse();
    CommandExecutor::parse_args(config, args)
}
