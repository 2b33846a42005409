//! Timestamp parsing. Every parser returns `None` on failure instead of an
//! error, since bad input is expected here.

use std::borrow::Cow;

use chrono::{
	Local, Locale, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
	format::{ParseResult, Parsed, StrftimeItems},
};
use log::trace;

use super::{date_formats, locale::normalize_names, pattern::Pattern};
use crate::Timestamp;

/// Parses `text` with the default pattern `dd.MM.yyyy` (e.g. "17.12.2009").
pub fn parse_date_default(text: &str) -> Option<Timestamp> { parse_date(text, date_formats::DEFAULT_PARSE_PATTERN) }

/// Parses `text` with a `SimpleDateFormat`-style pattern in the local time
/// zone.
///
/// Fields missing from the pattern default to `1970-01-01 00:00:00.000`, so
/// `MM/yyyy` reads the first of the month and `HH:mm` a time on the epoch day.
/// A pattern with an offset field (`z`, `Z`, `X`) yields that instant in local
/// time.
/// Returns `None` if the pattern is unsupported or the text does not match.
pub fn parse_date(text: &str, format: &str) -> Option<Timestamp> {
	let pattern = match Pattern::compile(format) {
		Ok(pattern) => pattern,
		Err(e) => {
			trace!("rejecting pattern: {e}");
			return None;
		}
	};
	parse_with(text, &pattern)
}

/// Like [`parse_date`], but month, weekday and AM/PM names are read in the
/// given locale.
pub fn parse_date_localized(text: &str, format: &str, locale: Locale) -> Option<Timestamp> {
	parse_date(&normalize_names(text, locale), format)
}

/// Parses a `yyyyMMdd` day string into local midnight of that day.
pub fn parse_date_only(text: &str) -> Option<Timestamp> {
	let date = NaiveDate::parse_from_str(text, date_formats::DAY).ok()?;
	resolve_local(&date.and_time(NaiveTime::MIN))
}

/// Parses `yyyy-MM-dd HH:mm:ss.SSS`, falling back to `yyyy-MM-dd HH:mm:ss`.
pub fn parse_timestamp(text: &str) -> Option<Timestamp> {
	NaiveDateTime::parse_from_str(text, date_formats::TIMESTAMP_MILLIS)
		.or_else(|_| NaiveDateTime::parse_from_str(text, date_formats::TIMESTAMP_SECONDS))
		.ok()
		.and_then(|naive| resolve_local(&naive))
}

/// [`parse_timestamp`] for input that may be absent.
pub fn parse_timestamp_opt(text: Option<&str>) -> Option<Timestamp> { text.and_then(parse_timestamp) }

fn parse_with(text: &str, pattern: &Pattern) -> Option<Timestamp> {
	let text = if pattern.accepts_zone_names() { Cow::Owned(normalize_zone_names(text)) } else { Cow::Borrowed(text) };

	let mut parsed = Parsed::new();
	if let Err(e) = chrono::format::parse(&mut parsed, &text, StrftimeItems::new(pattern.parse_str())) {
		trace!("'{text}' does not match '{}': {e}", pattern.source());
		return None;
	}
	fill_missing_fields(&mut parsed).ok()?;

	let resolved = if parsed.offset().is_some() {
		parsed.to_datetime().map(|dt| Some(dt.with_timezone(&Local)))
	} else {
		parsed.to_naive_datetime_with_offset(0).map(|naive| resolve_local(&naive))
	};
	match resolved {
		Ok(ts) => ts,
		Err(e) => {
			trace!("'{text}' is not a valid date for '{}': {e}", pattern.source());
			None
		}
	}
}

/// Fields the pattern left out take their value from `1970-01-01 00:00:00`.
/// A 12-hour field without an AM/PM marker counts as AM.
fn fill_missing_fields(parsed: &mut Parsed) -> ParseResult<()> {
	if parsed.year().is_none() && parsed.year_div_100().is_none() && parsed.year_mod_100().is_none() {
		parsed.set_year(1970)?;
	}
	if parsed.ordinal().is_none() {
		if parsed.month().is_none() {
			parsed.set_month(1)?;
		}
		if parsed.day().is_none() {
			parsed.set_day(1)?;
		}
	}
	match (parsed.hour_div_12(), parsed.hour_mod_12()) {
		(None, None) => parsed.set_hour(0)?,
		(None, Some(_)) => parsed.set_ampm(false)?,
		(Some(_), None) => parsed.set_hour12(12)?,
		(Some(_), Some(_)) => {}
	}
	if parsed.minute().is_none() {
		parsed.set_minute(0)?;
	}
	if parsed.second().is_none() {
		parsed.set_second(0)?;
	}
	Ok(())
}

/// Rewrites `GMT`/`UTC` zone names into offsets: a bare name becomes `Z`,
/// a name followed by an offset (`GMT+02:00`) is dropped.
fn normalize_zone_names(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	let mut rest = text;
	while let Some(c) = rest.chars().next() {
		if let Some(tail) = rest.strip_prefix("GMT").or_else(|| rest.strip_prefix("UTC")) {
			if !tail.starts_with(['+', '-']) {
				out.push('Z');
			}
			rest = tail;
			continue;
		}
		out.push(c);
		rest = &rest[c.len_utf8()..];
	}
	out
}

/// Maps a wall-clock time to a local instant. Times inside a DST gap do not
/// exist and yield `None`; times inside an overlap take the earlier instant.
fn resolve_local(naive: &NaiveDateTime) -> Option<Timestamp> { Local.from_local_datetime(naive).earliest() }
