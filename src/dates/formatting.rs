//! Timestamp formatting with the fixed patterns.

use std::fmt::Display;

use chrono::{DateTime, Local, Locale, TimeZone};

use super::{date_formats, pattern::Pattern};
use crate::error::DateError;

/// Formats a timestamp as `yyyy-MM-dd HH:mm:ss.SSS`.
/// Returns: "2024-01-15 14:30:05.123"
pub fn format_timestamp<Tz: TimeZone>(ts: &DateTime<Tz>) -> String
where
	Tz::Offset: Display,
{
	ts.format(date_formats::TIMESTAMP_MILLIS).to_string()
}

/// Formats the day of a timestamp as `yyyyMMdd`; the time is ignored.
/// Returns: "20240115"
pub fn format_date_only<Tz: TimeZone>(ts: &DateTime<Tz>) -> String
where
	Tz::Offset: Display,
{
	ts.format(date_formats::DAY).to_string()
}

/// Current local time as `yyyy-MM-dd HH:mm:ss.SSS`.
pub fn current_timestamp_string() -> String { format_timestamp(&Local::now()) }

/// Current local time as `yyyy-MM-dd_HH:mm:ss`, meant to be appended to a
/// file name.
///
/// The output still contains colons, which Windows does not accept in file
/// names.
pub fn current_timestamp_string_file_safe() -> String {
	Local::now().format(date_formats::TIMESTAMP_FILE_SAFE).to_string()
}

/// Formats a timestamp with a caller-supplied pattern such as `dd MMMM yyyy`.
///
/// Month and weekday names are localized when `locale` is given.
pub fn format_date<Tz: TimeZone>(ts: &DateTime<Tz>, format: &str, locale: Option<Locale>) -> Result<String, DateError>
where
	Tz::Offset: Display,
{
	let pattern = Pattern::compile(format)?;
	let formatted = match locale {
		Some(locale) => ts.format_localized(pattern.format_str(), locale).to_string(),
		None => ts.format(pattern.format_str()).to_string(),
	};
	Ok(formatted)
}

#[cfg(test)]
mod tests {
	use chrono::{FixedOffset, NaiveDate, Utc};

	use super::*;

	fn sample() -> DateTime<Utc> {
		let naive = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap().and_hms_milli_opt(9, 7, 3, 45).unwrap();
		Utc.from_utc_datetime(&naive)
	}

	#[test]
	fn formats_fixed_patterns() {
		assert_eq!(format_timestamp(&sample()), "2024-01-05 09:07:03.045");
		assert_eq!(format_date_only(&sample()), "20240105");
	}

	#[test]
	fn formats_in_the_value_time_zone() {
		let offset = FixedOffset::east_opt(-10 * 3600).unwrap();
		let ts = sample().with_timezone(&offset);
		assert_eq!(format_date_only(&ts), "20240104");
		assert_eq!(format_timestamp(&ts), "2024-01-04 23:07:03.045");
	}

	#[test]
	fn current_strings_have_expected_shape() {
		let now = current_timestamp_string();
		assert_eq!(now.len(), "yyyy-MM-dd HH:mm:ss.SSS".len());
		assert_eq!(&now[10..11], " ");

		let file_safe = current_timestamp_string_file_safe();
		assert_eq!(file_safe.len(), "yyyy-MM-dd_HH:mm:ss".len());
		assert!(!file_safe.contains(' '));
		assert_eq!(&file_safe[10..11], "_");
	}

	#[test]
	fn formats_custom_patterns() {
		assert_eq!(format_date(&sample(), "dd.MM.yyyy", None).unwrap(), "05.01.2024");
		assert_eq!(format_date(&sample(), "d MMMM yyyy, EEEE", None).unwrap(), "5 January 2024, Friday");
		assert_eq!(format_date(&sample(), "dd MMMM yyyy", Some(Locale::de_DE)).unwrap(), "05 Januar 2024");
		assert!(format_date(&sample(), "yyyy-QQ", None).is_err());
	}

	#[test]
	fn formats_offset_letters() {
		let ts = sample().with_timezone(&FixedOffset::east_opt(2 * 3600).unwrap());
		assert_eq!(format_date(&ts, "HH:mm Z", None).unwrap(), "11:07 +0200");
		assert_eq!(format_date(&ts, "HH:mmXXX", None).unwrap(), "11:07+02:00");
		assert_eq!(format_date(&ts, "HH:mm z", None).unwrap(), "11:07 +02:00");
		assert_eq!(format_date(&sample(), "HH:mm z", None).unwrap(), "09:07 UTC");
	}
}
