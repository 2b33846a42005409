use anyhow::{Context, Result};
use chronofile::dates::{Pattern, date_formats, resolve_locale};
use serde::{Deserialize, Serialize};

/// Date parsing defaults for the `parse` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatesConfig {
	/// Pattern used when `--format` is not given
	#[serde(default = "default_format")]
	pub default_format: String,

	/// Locale for month and weekday names; English when unset
	#[serde(default)]
	pub locale: Option<String>,
}

fn default_format() -> String { date_formats::DEFAULT_PARSE_PATTERN.to_string() }

impl DatesConfig {
	pub fn validate(&self) -> Result<()> {
		Pattern::compile(&self.default_format).context("dates.default_format is not a valid pattern")?;
		if let Some(ref locale) = self.locale {
			resolve_locale(locale).context("dates.locale is not a known locale")?;
		}
		Ok(())
	}
}

impl Default for DatesConfig {
	fn default() -> Self { Self { default_format: default_format(), locale: None } }
}
