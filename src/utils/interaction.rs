//! User interaction utilities.

use std::io::{BufRead, Write, stdin, stdout};

/// Asks a yes/no question on the terminal. Anything but an explicit yes is a no.
pub fn confirm(prompt: &str) -> bool { confirm_with(prompt, &mut stdin().lock(), &mut stdout()) }

fn confirm_with(prompt: &str, input: &mut impl BufRead, output: &mut impl Write) -> bool {
	write!(output, "{prompt} (y/N): ").ok();
	output.flush().ok();
	let mut answer = String::new();
	if input.read_line(&mut answer).is_err() {
		return false;
	}
	matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
