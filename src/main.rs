mod cli;
mod commands;
mod config;
mod logging;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use commands::handle_command;
use config::Config;

fn main() -> Result<()> {
	let cli = Cli::parse();

	// Load configuration
	let config = Config::load().context("Failed to load configuration")?;
	config.validate().context("Invalid configuration")?;

	let _logger = logging::init_logging(&config.logging.level)?;

	handle_command(&config, cli.command)
}
