//! Locale lookup and localized-name normalization for parsing.
//!
//! chrono formats localized names but only parses English ones, so localized
//! month, weekday and AM/PM names in the input are rewritten to their English
//! forms before parsing.

use chrono::{Locale, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::error::DateError;

/// Resolves a locale name such as `de_DE`, `de-DE`, `de` or `C`.
pub fn resolve_locale(name: &str) -> Result<Locale, DateError> {
	let normalized = name.trim().replace('-', "_");
	// Drop an encoding suffix such as ".UTF-8".
	let normalized = normalized.split('.').next().unwrap_or_default();

	if matches!(normalized, "" | "C" | "POSIX") {
		return Ok(Locale::POSIX);
	}
	if let Ok(locale) = Locale::try_from(normalized) {
		return Ok(locale);
	}
	if !normalized.contains('_') {
		let fallback = match normalized {
			"en" => "en_US".to_string(),
			lang => format!("{lang}_{}", lang.to_uppercase()),
		};
		if let Ok(locale) = Locale::try_from(fallback.as_str()) {
			return Ok(locale);
		}
	}
	Err(DateError::UnknownLocale(name.to_string()))
}

/// Rewrites localized month, weekday and AM/PM names in `text` to English.
///
/// Names are matched longest first, left to right, in a single pass, ignoring
/// case.
pub(crate) fn normalize_names(text: &str, locale: Locale) -> String {
	let table = name_table(locale);
	if table.is_empty() {
		return text.to_string();
	}

	let mut out = String::with_capacity(text.len());
	let mut rest = text;
	'scan: while !rest.is_empty() {
		for (localized, english) in &table {
			if let Some(tail) = strip_prefix_ignore_case(rest, localized) {
				out.push_str(english);
				rest = tail;
				continue 'scan;
			}
		}
		let mut chars = rest.chars();
		if let Some(c) = chars.next() {
			out.push(c);
		}
		rest = chars.as_str();
	}
	out
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
	let mut chars = text.chars();
	for expected in prefix.chars() {
		let found = chars.next()?;
		if !found.to_lowercase().eq(expected.to_lowercase()) {
			return None;
		}
	}
	Some(chars.as_str())
}

fn name_table(locale: Locale) -> Vec<(String, String)> {
	let mut pairs = Vec::with_capacity(12 * 2 + 7 * 2 + 2);

	// 2001-01-01 was a Monday.
	let months = (1..=12).filter_map(|month| NaiveDate::from_ymd_opt(2001, month, 1));
	let weekdays = (1..=7).filter_map(|day| NaiveDate::from_ymd_opt(2001, 1, day));
	for (date, specs) in months.map(|d| (d, ["%B", "%b"])).chain(weekdays.map(|d| (d, ["%A", "%a"]))) {
		let dt = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
		for spec in specs {
			pairs.push((dt.format_localized(spec, locale).to_string(), dt.format(spec).to_string()));
		}
	}
	for hour in [0, 12] {
		if let Some(dt) = NaiveDate::from_ymd_opt(2001, 1, 1).and_then(|d| d.and_hms_opt(hour, 0, 0)) {
			let dt = Utc.from_utc_datetime(&dt);
			pairs.push((dt.format_localized("%p", locale).to_string(), dt.format("%p").to_string()));
		}
	}

	pairs.retain(|(localized, english)| !localized.is_empty() && localized != english);
	pairs.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));
	pairs
}
