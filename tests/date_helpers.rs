use chrono::{Datelike, Local, NaiveDate, TimeZone, Timelike, Utc};
use chronofile::{
	Timestamp,
	dates::{
		Locale, format_date_only, format_timestamp, generate_date_range_strings, parse_date, parse_date_default, parse_date_localized, parse_date_only,
		parse_timestamp, remove_time,
	},
};

fn local(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32, ms: u32) -> Timestamp {
	let naive = NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_milli_opt(h, min, s, ms).unwrap();
	Local.from_local_datetime(&naive).earliest().unwrap()
}

#[test]
fn formatted_timestamps_parse_back_exactly() {
	for ts in [local(2000, 1, 1, 0, 0, 0, 0), local(2016, 2, 29, 12, 34, 56, 789), local(2023, 11, 5, 23, 59, 59, 1)] {
		assert_eq!(parse_timestamp(&format_timestamp(&ts)), Some(ts));
	}
}

#[test]
fn remove_time_keeps_the_calendar_day() {
	let ts = local(2022, 4, 18, 15, 42, 7, 999);
	let day = remove_time(&ts).unwrap();

	assert_eq!(day.date_naive(), ts.date_naive());
	assert_eq!((day.hour(), day.minute(), day.second(), day.nanosecond()), (0, 0, 0, 0));
}

#[test]
fn day_strings_round_trip() {
	let ts = local(1999, 12, 31, 18, 0, 0, 0);
	let text = format_date_only(&ts);
	assert_eq!(text, "19991231");

	let parsed = parse_date_only(&text).unwrap();
	assert_eq!(parsed, remove_time(&ts).unwrap());
}

#[test]
fn date_range_is_inclusive() {
	let start = parse_date_only("20200101").unwrap();
	let end = parse_date_only("20200103").unwrap();

	assert_eq!(generate_date_range_strings(&start, &end).unwrap(), ["20200101", "20200102", "20200103"]);
}

#[test]
fn date_range_with_end_before_start_emits_start_once() {
	let start = parse_date_only("20200103").unwrap();
	let end = parse_date_only("20200101").unwrap();

	assert_eq!(generate_date_range_strings(&start, &end).unwrap(), ["20200103"]);
}

#[test]
fn date_range_accepts_other_time_zones() {
	let start = Utc.with_ymd_and_hms(2024, 2, 27, 22, 0, 0).unwrap();
	let end = Utc.with_ymd_and_hms(2024, 3, 1, 1, 0, 0).unwrap();

	assert_eq!(generate_date_range_strings(&start, &end).unwrap(), ["20240227", "20240228", "20240229", "20240301"]);
}

#[test]
fn unparseable_text_is_none() {
	assert!(parse_date_default("not-a-date").is_none());
	assert!(parse_date("2020/01/01", "yyyy-MM-dd").is_none());
	assert!(parse_timestamp("2020-01-01T10:00:00").is_none());
	assert!(parse_date_only("20201301").is_none());
}

#[test]
fn custom_patterns_parse() {
	let ts = parse_date("2021-07-04T09:30", "yyyy-MM-dd'T'HH:mm").unwrap();
	assert_eq!((ts.year(), ts.month(), ts.day()), (2021, 7, 4));
	assert_eq!((ts.hour(), ts.minute()), (9, 30));

	let ts = parse_date("Sun, 4 Jul 2021", "EEE, d MMM yyyy").unwrap();
	assert_eq!((ts.year(), ts.month(), ts.day()), (2021, 7, 4));
}

#[test]
fn locale_is_only_used_when_supplied() {
	let ts = parse_date_localized("4 juillet 2021", "d MMMM yyyy", Locale::fr_FR).unwrap();
	assert_eq!((ts.year(), ts.month(), ts.day()), (2021, 7, 4));

	assert!(parse_date("4 juillet 2021", "d MMMM yyyy").is_none());
	assert!(parse_date("4 July 2021", "d MMMM yyyy").is_some());
}
