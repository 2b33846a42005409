use serde::{Deserialize, Serialize};

const LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
	/// Log level: off, error, warn, info, debug, trace
	#[serde(default = "default_level")]
	pub level: String,
}

fn default_level() -> String { "warn".to_string() }

impl LoggingConfig {
	pub fn validate(&self) -> anyhow::Result<()> {
		if !LEVELS.contains(&self.level.to_lowercase().as_str()) {
			anyhow::bail!("logging.level must be one of: {}", LEVELS.join(", "));
		}
		Ok(())
	}
}

impl Default for LoggingConfig {
	fn default() -> Self { Self { level: default_level() } }
}
