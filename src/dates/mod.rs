//! Date formatting, parsing and range helpers.

mod formatting;
mod locale;
mod parsing;
mod pattern;
mod range;

pub use chrono::Locale;
pub use formatting::{current_timestamp_string, current_timestamp_string_file_safe, format_date, format_date_only, format_timestamp};
pub use locale::resolve_locale;
pub use parsing::{parse_date, parse_date_default, parse_date_localized, parse_date_only, parse_timestamp, parse_timestamp_opt};
pub use pattern::Pattern;
pub use range::{generate_date_range_strings, remove_time};

/// Fixed patterns, as chrono strftime strings.
pub mod date_formats {
	/// `yyyy-MM-dd HH:mm:ss.SSS`: "2024-01-15 14:30:05.123"
	pub const TIMESTAMP_MILLIS: &str = "%Y-%m-%d %H:%M:%S%.3f";

	/// `yyyy-MM-dd HH:mm:ss`: "2024-01-15 14:30:05"
	pub const TIMESTAMP_SECONDS: &str = "%Y-%m-%d %H:%M:%S";

	/// `yyyy-MM-dd_HH:mm:ss`: "2024-01-15_14:30:05"
	pub const TIMESTAMP_FILE_SAFE: &str = "%Y-%m-%d_%H:%M:%S";

	/// `yyyyMMdd`: "20240115"
	pub const DAY: &str = "%Y%m%d";

	/// Pattern used by `parse_date_default`, in pattern-letter form.
	pub const DEFAULT_PARSE_PATTERN: &str = "dd.MM.yyyy";
}
