mod config;
mod dates;
mod files;

use anyhow::Result;
pub use config::handle_config;
pub use dates::{handle_day, handle_now, handle_parse, handle_range, handle_strip_time, handle_timestamp};
pub use files::{handle_ls, handle_read, handle_write};

use crate::{cli::Commands, config::Config};

/// Dispatches CLI commands to their respective handlers
pub fn handle_command(config: &Config, cmd: Commands) -> Result<()> {
	match cmd {
		Commands::Now { file_safe } => handle_now(file_safe),
		Commands::Parse { text, format, locale, output } => handle_parse(&config.dates, &text, format, locale, output),
		Commands::Timestamp { text } => handle_timestamp(&text),
		Commands::Day { text } => handle_day(&text),
		Commands::StripTime { timestamp } => handle_strip_time(&timestamp),
		Commands::Range { start, end, json } => handle_range(&start, &end, json),
		Commands::Write { file, strings } => handle_write(&file, &strings),
		Commands::Read { file, json } => handle_read(&file, json),
		Commands::Ls { folder, json } => handle_ls(&folder, json),
		Commands::Config { show } => handle_config(config, show),
	}
}

/// Prints one item per line, or a JSON array
fn print_list(items: &[String], json: bool) -> Result<()> {
	if json {
		println!("{}", serde_json::to_string(items)?);
	} else {
		for item in items {
			println!("{item}");
		}
	}
	Ok(())
}
