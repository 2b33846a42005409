//! Compiles `SimpleDateFormat`-style patterns (`dd.MM.yyyy`) into chrono
//! strftime strings.

use crate::error::DateError;

/// A compiled date pattern. Immutable, so it can be shared freely or built
/// per call.
///
/// Formatting and parsing may need different strftime strings: offsets are
/// written in one shape but read permissively (`Z`, `+08`, `+0800`, `+08:00`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
	source:     String,
	format:     String,
	parse:      String,
	has_offset: bool,
	zone_names: bool,
}

impl Pattern {
	/// Compiles a pattern such as `yyyy-MM-dd HH:mm:ss.SSS`.
	///
	/// Letters: `y M d H h m s S E a D u z Z X`. Text in single quotes is
	/// literal and `''` is a quote. Any other ASCII letter is rejected.
	///
	/// `S` is always a three-digit millisecond field, whatever its run
	/// length: `ss.S` reads `05.500` but not `05.5`. `X` and `XX` are written
	/// as `+0800` and `XXX` as `+08:00`; `z` is written as the offset's name.
	pub fn compile(pattern: &str) -> Result<Self, DateError> {
		let chars: Vec<char> = pattern.chars().collect();
		let mut format = String::with_capacity(pattern.len() * 2);
		let mut parse = String::with_capacity(pattern.len() * 2);
		let mut has_offset = false;
		let mut zone_names = false;
		let mut i = 0;

		while i < chars.len() {
			let c = chars[i];

			if c == '\'' {
				if chars.get(i + 1) == Some(&'\'') {
					push_literal(&mut format, &mut parse, '\'');
					i += 2;
					continue;
				}
				let mut j = i + 1;
				loop {
					match chars.get(j) {
						None => return Err(unsupported(pattern, "unterminated quoted literal")),
						Some('\'') if chars.get(j + 1) == Some(&'\'') => {
							push_literal(&mut format, &mut parse, '\'');
							j += 2;
						}
						Some('\'') => break,
						Some(&lit) => {
							push_literal(&mut format, &mut parse, lit);
							j += 1;
						}
					}
				}
				i = j + 1;
				continue;
			}

			if !c.is_ascii_alphabetic() {
				push_literal(&mut format, &mut parse, c);
				i += 1;
				continue;
			}

			let run = chars[i..].iter().take_while(|&&x| x == c).count();
			let (format_spec, parse_spec) = match c {
				'z' | 'Z' | 'X' => offset_spec(c, run),
				_ => field_spec(c, run).map(|spec| (spec, spec)),
			}
			.ok_or_else(|| unsupported(pattern, &format!("unsupported field '{}'", c.to_string().repeat(run))))?;
			format.push_str(format_spec);
			parse.push_str(parse_spec);
			has_offset |= matches!(c, 'z' | 'Z' | 'X');
			zone_names |= c == 'z';
			i += run;
		}

		Ok(Self { source: pattern.to_string(), format, parse, has_offset, zone_names })
	}

	/// The pattern as written by the caller.
	pub fn source(&self) -> &str { &self.source }

	/// The chrono strftime string used for formatting.
	pub fn format_str(&self) -> &str { &self.format }

	/// The chrono strftime string used for parsing.
	pub fn parse_str(&self) -> &str { &self.parse }

	/// Whether the pattern carries a UTC offset field.
	pub fn has_offset(&self) -> bool { self.has_offset }

	/// Whether the offset field may be spelled as a zone name (`GMT`, `UTC+02:00`).
	pub fn accepts_zone_names(&self) -> bool { self.zone_names }
}

fn field_spec(letter: char, run: usize) -> Option<&'static str> {
	let spec = match (letter, run) {
		('y', 2) => "%y",
		('y', _) => "%Y",
		('M', 1) => "%-m",
		('M', 2) => "%m",
		('M', 3) => "%b",
		('M', _) => "%B",
		('d', 1) => "%-d",
		('d', _) => "%d",
		('H', 1) => "%-H",
		('H', _) => "%H",
		('h', 1) => "%-I",
		('h', _) => "%I",
		('m', 1) => "%-M",
		('m', _) => "%M",
		('s', 1) => "%-S",
		('s', _) => "%S",
		('S', _) => "%3f",
		('E', 1..=3) => "%a",
		('E', _) => "%A",
		('a', _) => "%p",
		('D', _) => "%j",
		('u', _) => "%u",
		_ => return None,
	};
	Some(spec)
}

/// `(format, parse)` strftime pair for an offset field.
fn offset_spec(letter: char, run: usize) -> Option<(&'static str, &'static str)> {
	let spec = match (letter, run) {
		('z', _) => ("%Z", "%#z"),
		('Z', _) => ("%z", "%z"),
		('X', 1 | 2) => ("%z", "%#z"),
		('X', 3) => ("%:z", "%#z"),
		_ => return None,
	};
	Some(spec)
}

fn push_literal(format: &mut String, parse: &mut String, c: char) {
	for out in [format, parse] {
		if c == '%' {
			out.push_str("%%");
		} else {
			out.push(c);
		}
	}
}

fn unsupported(pattern: &str, reason: &str) -> DateError {
	DateError::UnsupportedPattern { pattern: pattern.to_string(), reason: reason.to_string() }
}
