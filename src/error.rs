//! Error types for the date and file helpers.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised by the date helpers.
///
/// Parsing never produces these; parse functions return `Option` instead.
#[derive(Debug, Error)]
pub enum DateError {
	/// The timestamp could not be normalized without adjusting calendar fields,
	/// e.g. local midnight falls inside a DST gap or overlap.
	#[error("Invalid timestamp: {0}")]
	InvalidTimestamp(String),

	#[error("Unsupported pattern '{pattern}': {reason}")]
	UnsupportedPattern { pattern: String, reason: String },

	#[error("Unknown locale: {0}")]
	UnknownLocale(String),
}

/// Errors raised while persisting or loading a string list.
#[derive(Debug, Error)]
pub enum StoreError {
	#[error("I/O error on '{}': {source}", path.display())]
	Io {
		path:   PathBuf,
		#[source]
		source: io::Error,
	},

	/// The file ended before the declared number of strings was read.
	#[error("Truncated string file '{}': expected {expected} strings, found {found}", path.display())]
	Truncated { path: PathBuf, expected: usize, found: usize },

	#[error("Corrupt string file '{}': {reason}", path.display())]
	Corrupt { path: PathBuf, reason: String },

	/// A string whose encoded form does not fit the 16-bit length prefix.
	#[error("String of {len} encoded bytes exceeds the 65535 byte limit")]
	StringTooLong { len: usize },

	#[error("Too many strings to write: {0}")]
	TooManyStrings(usize),
}

impl StoreError {
	pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self { Self::Io { path: path.into(), source } }
}
