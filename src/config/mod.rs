mod dates;
mod logging;

use std::{env, fs, path::PathBuf};

use anyhow::{Context, Result};
pub use dates::DatesConfig;
use serde::{Deserialize, Serialize};

/// Configuration for the chronofile command-line tool.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
	#[serde(default)]
	pub dates:   DatesConfig,
	#[serde(default)]
	pub logging: logging::LoggingConfig,
}

impl Config {
	/// Loads configuration from the default config file path.
	/// Auto-generates config with defaults on first run.
	pub fn load() -> Result<Self> {
		let config_path = Self::get_config_path()?;

		if !config_path.exists() {
			let config = Self::default();
			config.save()?;
			return Ok(config);
		}

		let config_str = fs::read_to_string(&config_path).context("Failed to read config file")?;

		let config: Self = toml::from_str(&config_str).context("Failed to parse config file")?;
		config.validate()?;
		Ok(config)
	}

	/// Saves the configuration to the default config file path with inline
	/// comments.
	pub fn save(&self) -> Result<()> {
		let config_path = Self::get_config_path()?;

		if let Some(parent) = config_path.parent() {
			fs::create_dir_all(parent).context("Failed to create config directory")?;
		}

		fs::write(&config_path, self.to_toml_with_comments()).context("Failed to write config file")?;

		Ok(())
	}

	/// Generates TOML string with helpful inline comments for each field
	fn to_toml_with_comments(&self) -> String {
		format!(
			r#"# chronofile configuration file

[dates]
# Pattern used by `chronofile parse` when --format is not given
default_format = "{default_format}"
{locale}
[logging]
# Log level: off, error, warn, info, debug, trace (RUST_LOG overrides)
level = "{level}"
"#,
			default_format = self.dates.default_format,
			locale = if let Some(ref locale) = self.dates.locale {
				format!("locale = \"{locale}\"\n")
			} else {
				"# Locale for month and weekday names, e.g. \"de_DE\"\n# locale = \"en_US\"\n".to_string()
			},
			level = self.logging.level,
		)
	}

	/// Returns the platform-specific configuration file path following XDG spec.
	/// Priority order:
	/// 1. $XDG_CONFIG_HOME/chronofile/config.toml
	/// 2. ~/.config/chronofile/config.toml (Unix)
	/// 3. ~/Library/Application Support/chronofile/config.toml (macOS fallback)
	/// 4. %APPDATA%\chronofile\config.toml (Windows)
	pub fn get_config_path() -> Result<PathBuf> {
		let config_dir = if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
			// Use XDG_CONFIG_HOME if set
			PathBuf::from(xdg_config)
		} else if cfg!(target_os = "macos") {
			// On macOS, prefer ~/.config but fall back to Application Support
			let home = dirs::home_dir().context("Failed to get home directory")?;
			let xdg_path = home.join(".config");
			if xdg_path.exists() {
				xdg_path
			} else {
				// Fall back to Application Support on macOS
				dirs::config_dir().unwrap_or_else(|| home.join("Library/Application Support"))
			}
		} else {
			// On other platforms, use standard config dir
			dirs::config_dir().context("Failed to get config directory")?
		};

		Ok(config_dir.join("chronofile").join("config.toml"))
	}

	/// Validates the configuration values.
	pub fn validate(&self) -> Result<()> {
		self.dates.validate()?;
		self.logging.validate()?;
		Ok(())
	}
}
