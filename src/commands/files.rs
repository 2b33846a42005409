use anyhow::{Context, Result};
use chronofile::files;

use super::print_list;

/// Handles the write command - stores strings in a string list file
pub fn handle_write(file: &str, strings: &[String]) -> Result<()> {
	files::write_strings(strings, file).with_context(|| format!("Failed to write {file}"))?;
	println!("Wrote {} string(s) to {file}", strings.len());
	Ok(())
}

/// Handles the read command - prints the strings of a string list file
pub fn handle_read(file: &str, json: bool) -> Result<()> {
	let strings = files::read_strings(file).with_context(|| format!("Failed to read {file}"))?;
	print_list(&strings, json)
}

/// Handles the ls command - lists files under a folder recursively
pub fn handle_ls(folder: &str, json: bool) -> Result<()> {
	let paths: Vec<String> =
		files::list_files_recursive(folder).iter().map(|path| path.display().to_string()).collect();
	if paths.is_empty() && !json {
		eprintln!("No files found under {folder}");
		return Ok(());
	}
	print_list(&paths, json)
}
