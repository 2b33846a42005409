//! Time-of-day removal and inclusive day ranges.

use std::fmt::Display;

use chrono::{DateTime, NaiveTime, TimeZone};

use super::date_formats;
use crate::error::DateError;

/// Returns a copy of `ts` at midnight of the same calendar day, in the same
/// time zone.
///
/// Fails if that midnight does not exist or is ambiguous in the time zone
/// (a DST transition at 00:00); the fields are never silently adjusted.
pub fn remove_time<Tz: TimeZone>(ts: &DateTime<Tz>) -> Result<DateTime<Tz>, DateError> {
	let midnight = ts.date_naive().and_time(NaiveTime::MIN);
	ts.timezone()
		.from_local_datetime(&midnight)
		.single()
		.ok_or_else(|| DateError::InvalidTimestamp(format!("{midnight} is not a single instant in this time zone")))
}

/// Lists every day from `start` to `end` inclusive as `yyyyMMdd`.
///
/// Both ends are truncated to their day first. The start day is always
/// emitted, so an `end` before `start` yields just the start day.
pub fn generate_date_range_strings<Tz: TimeZone>(
	start: &DateTime<Tz>,
	end: &DateTime<Tz>,
) -> Result<Vec<String>, DateError>
where
	Tz::Offset: Display,
{
	let last = remove_time(end)?.date_naive();
	let mut day = remove_time(start)?.date_naive();

	let mut days = Vec::new();
	loop {
		days.push(day.format(date_formats::DAY).to_string());
		match day.succ_opt() {
			Some(next) if next <= last => day = next,
			_ => break,
		}
	}
	Ok(days)
}

#[cfg(test)]
mod tests {
	use chrono::{FixedOffset, LocalResult, NaiveDate, NaiveDateTime, Timelike, Utc};

	use super::*;

	fn zero_offset() -> FixedOffset { FixedOffset::east_opt(0).unwrap() }

	/// A UTC-like zone whose local midnight resolves to `$at_midnight`.
	macro_rules! midnight_transition_zone {
		($name:ident, $at_midnight:expr) => {
			#[derive(Debug, Clone, Copy)]
			struct $name;

			impl TimeZone for $name {
				type Offset = FixedOffset;

				fn from_offset(_: &FixedOffset) -> Self { $name }

				fn offset_from_local_date(&self, _: &NaiveDate) -> LocalResult<FixedOffset> { LocalResult::Single(zero_offset()) }

				fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
					if local.time() == NaiveTime::MIN { $at_midnight } else { LocalResult::Single(zero_offset()) }
				}

				fn offset_from_utc_date(&self, _: &NaiveDate) -> FixedOffset { zero_offset() }

				fn offset_from_utc_datetime(&self, _: &NaiveDateTime) -> FixedOffset { zero_offset() }
			}
		};
	}

	midnight_transition_zone!(SkippedMidnight, LocalResult::None);
	midnight_transition_zone!(RepeatedMidnight, LocalResult::Ambiguous(zero_offset(), FixedOffset::east_opt(3600).unwrap()));

	fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
		Utc.from_utc_datetime(&NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap())
	}

	#[test]
	fn remove_time_zeroes_the_clock() {
		let ts = utc(2021, 8, 9, 17, 45) + chrono::Duration::milliseconds(321);
		let day = remove_time(&ts).unwrap();
		assert_eq!(day.date_naive(), ts.date_naive());
		assert_eq!((day.hour(), day.minute(), day.second(), day.nanosecond()), (0, 0, 0, 0));
	}

	#[test]
	fn remove_time_leaves_input_untouched() {
		let ts = utc(2021, 8, 9, 17, 45);
		let _ = remove_time(&ts).unwrap();
		assert_eq!(ts.hour(), 17);
	}

	#[test]
	fn inclusive_range() {
		let days = generate_date_range_strings(&utc(2020, 1, 1, 0, 0), &utc(2020, 1, 3, 0, 0)).unwrap();
		assert_eq!(days, ["20200101", "20200102", "20200103"]);
	}

	#[test]
	fn range_ignores_time_of_day() {
		let days = generate_date_range_strings(&utc(2020, 2, 28, 23, 59), &utc(2020, 3, 1, 0, 1)).unwrap();
		assert_eq!(days, ["20200228", "20200229", "20200301"]);
	}

	#[test]
	fn single_day_range() {
		let days = generate_date_range_strings(&utc(2020, 1, 1, 8, 0), &utc(2020, 1, 1, 20, 0)).unwrap();
		assert_eq!(days, ["20200101"]);
	}

	#[test]
	fn end_before_start_still_emits_start() {
		let days = generate_date_range_strings(&utc(2020, 1, 3, 0, 0), &utc(2020, 1, 1, 0, 0)).unwrap();
		assert_eq!(days, ["20200103"]);
	}

	#[test]
	fn range_crosses_year_boundary() {
		let days = generate_date_range_strings(&utc(2019, 12, 30, 0, 0), &utc(2020, 1, 2, 0, 0)).unwrap();
		assert_eq!(days, ["20191230", "20191231", "20200101", "20200102"]);
	}

	#[test]
	fn skipped_midnight_is_an_invalid_timestamp() {
		let noon = NaiveDate::from_ymd_opt(2021, 3, 28).unwrap().and_hms_opt(12, 0, 0).unwrap();
		let ts = SkippedMidnight.from_utc_datetime(&noon);

		assert!(matches!(remove_time(&ts), Err(DateError::InvalidTimestamp(_))));
		assert!(matches!(generate_date_range_strings(&ts, &ts), Err(DateError::InvalidTimestamp(_))));
	}

	#[test]
	fn repeated_midnight_is_an_invalid_timestamp() {
		let noon = NaiveDate::from_ymd_opt(2021, 10, 31).unwrap().and_hms_opt(12, 0, 0).unwrap();
		let ts = RepeatedMidnight.from_utc_datetime(&noon);

		assert!(matches!(remove_time(&ts), Err(DateError::InvalidTimestamp(_))));
		assert!(matches!(generate_date_range_strings(&ts, &ts), Err(DateError::InvalidTimestamp(_))));
	}
}
