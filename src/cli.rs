//! Command-line interface for chronofile.
//!
//! Exposes the library helpers as subcommands:
//! - now: Print the current timestamp
//! - parse / timestamp / day: Parse date text
//! - strip-time / range: Day arithmetic
//! - write / read: String list files
//! - ls: Recursive file listing
//! - config: Generate or show the configuration file

use clap::{Parser, Subcommand};

/// Main CLI structure parsed by clap.
#[derive(Parser)]
#[command(name = "chronofile")]
#[command(about = "Date formatting helpers and simple file utilities", long_about = None)]
pub struct Cli {
	#[command(subcommand)]
	pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Commands {
	/// Print the current timestamp (yyyy-MM-dd HH:mm:ss.SSS)
	Now {
		/// Use the file-name form (yyyy-MM-dd_HH:mm:ss)
		#[arg(short, long)]
		file_safe: bool,
	},
	/// Parse a date with a pattern (defaults to the configured pattern)
	Parse {
		text:   String,
		/// Pattern such as dd.MM.yyyy
		#[arg(short, long)]
		format: Option<String>,
		/// Locale for month/weekday names, e.g. de_DE
		#[arg(short, long)]
		locale: Option<String>,
		/// Pattern for printing the result (defaults to yyyy-MM-dd HH:mm:ss.SSS)
		#[arg(short, long)]
		output: Option<String>,
	},
	/// Parse a yyyy-MM-dd HH:mm:ss[.SSS] timestamp
	Timestamp { text: String },
	/// Parse a yyyyMMdd day
	Day { text: String },
	/// Print a timestamp truncated to midnight
	StripTime {
		/// yyyy-MM-dd HH:mm:ss[.SSS]
		timestamp: String,
	},
	/// List every day between two yyyyMMdd days, inclusive
	Range {
		start: String,
		end:   String,
		/// Print as a JSON array
		#[arg(short, long)]
		json:  bool,
	},
	/// Write strings to a string list file
	Write {
		file:    String,
		strings: Vec<String>,
	},
	/// Read a string list file
	Read {
		file: String,
		/// Print as a JSON array
		#[arg(short, long)]
		json: bool,
	},
	/// List all files under a folder, recursively
	Ls {
		folder: String,
		/// Print as a JSON array
		#[arg(short, long)]
		json:   bool,
	},
	/// Generate default config file or show current config
	Config {
		/// Show current configuration instead of generating
		#[arg(short, long)]
		show: bool,
	},
}
