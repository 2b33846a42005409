//! Logger bootstrap for the command-line tool.
//!
//! The library only emits through the `log` facade; this wires it to stderr.
//! `RUST_LOG` takes precedence over the configured level.

use anyhow::{Context, Result};
use flexi_logger::{Logger, LoggerHandle};
use log::debug;

/// Starts stderr logging. Keep the returned handle alive for the whole run.
pub fn init_logging(level: &str) -> Result<LoggerHandle> {
	let handle = Logger::try_with_env_or_str(level)
		.with_context(|| format!("Invalid log level `{level}`"))?
		.log_to_stderr()
		.format_for_stderr(flexi_logger::default_format)
		.start()
		.context("Failed to start logger")?;

	debug!("logging started at level {level}, version {}", env!("CARGO_PKG_VERSION"));
	Ok(handle)
}
