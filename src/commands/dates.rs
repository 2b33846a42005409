use anyhow::{Context, Result};
use chronofile::{Timestamp, dates::{self, Locale}};

use super::print_list;
use crate::config::DatesConfig;

/// Handles the now command - prints the current timestamp
pub fn handle_now(file_safe: bool) -> Result<()> {
	let now = if file_safe { dates::current_timestamp_string_file_safe() } else { dates::current_timestamp_string() };
	println!("{now}");
	Ok(())
}

/// Handles the parse command - parses text with a pattern and locale
pub fn handle_parse(
	config: &DatesConfig,
	text: &str,
	format: Option<String>,
	locale: Option<String>,
	output: Option<String>,
) -> Result<()> {
	let format = format.unwrap_or_else(|| config.default_format.clone());
	let locale = locale.or_else(|| config.locale.clone()).map(|name| dates::resolve_locale(&name)).transpose()?;

	let parsed = match locale {
		Some(locale) => dates::parse_date_localized(text, &format, locale),
		None => dates::parse_date(text, &format),
	};
	let ts = parsed.with_context(|| format!("Could not parse '{text}' with pattern '{format}'"))?;

	print_timestamp(&ts, output.as_deref(), locale)
}

/// Handles the timestamp command - parses yyyy-MM-dd HH:mm:ss[.SSS]
pub fn handle_timestamp(text: &str) -> Result<()> {
	let ts = dates::parse_timestamp(text).with_context(|| format!("Not a timestamp: '{text}'"))?;
	print_timestamp(&ts, None, None)
}

/// Handles the day command - parses yyyyMMdd
pub fn handle_day(text: &str) -> Result<()> {
	let ts = dates::parse_date_only(text).with_context(|| format!("Not a yyyyMMdd day: '{text}'"))?;
	print_timestamp(&ts, None, None)
}

/// Handles the strip-time command - truncates a timestamp to midnight
pub fn handle_strip_time(text: &str) -> Result<()> {
	let ts = dates::parse_timestamp(text).with_context(|| format!("Not a timestamp: '{text}'"))?;
	let day = dates::remove_time(&ts)?;
	print_timestamp(&day, None, None)
}

/// Handles the range command - lists every day between two days
pub fn handle_range(start: &str, end: &str, json: bool) -> Result<()> {
	let start = dates::parse_date_only(start).with_context(|| format!("Not a yyyyMMdd day: '{start}'"))?;
	let end = dates::parse_date_only(end).with_context(|| format!("Not a yyyyMMdd day: '{end}'"))?;
	let days = dates::generate_date_range_strings(&start, &end)?;
	print_list(&days, json)
}

fn print_timestamp(ts: &Timestamp, output: Option<&str>, locale: Option<Locale>) -> Result<()> {
	let formatted = match output {
		Some(pattern) => dates::format_date(ts, pattern, locale)?,
		None => dates::format_timestamp(ts),
	};
	println!("{formatted}");
	Ok(())
}
