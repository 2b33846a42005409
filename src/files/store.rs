//! String list files.
//!
//! Layout: a big-endian `i32` count, then `count` entries of a big-endian
//! `u16` byte length followed by that many bytes of modified UTF-8. This is
//! the layout `DataOutputStream.writeInt` + `writeUTF` produce.

use std::{fs::File, io::{self, BufReader, BufWriter, Read, Write}, path::Path};

use log::debug;

use super::mutf8;
use crate::error::StoreError;

/// Writes `strings` to `path`, replacing any existing file.
///
/// A failure partway through leaves a partially written file behind.
pub fn write_strings<I>(strings: I, path: impl AsRef<Path>) -> Result<(), StoreError>
where
	I: IntoIterator,
	I::Item: AsRef<str>,
	I::IntoIter: ExactSizeIterator,
{
	let path = path.as_ref();
	let strings = strings.into_iter();
	let count = i32::try_from(strings.len()).map_err(|_| StoreError::TooManyStrings(strings.len()))?;

	let file = File::create(path).map_err(|e| StoreError::io(path, e))?;
	let mut writer = BufWriter::new(file);
	writer.write_all(&count.to_be_bytes()).map_err(|e| StoreError::io(path, e))?;

	for s in strings {
		let encoded = mutf8::encode(s.as_ref());
		let len = u16::try_from(encoded.len()).map_err(|_| StoreError::StringTooLong { len: encoded.len() })?;
		writer.write_all(&len.to_be_bytes()).map_err(|e| StoreError::io(path, e))?;
		writer.write_all(&encoded).map_err(|e| StoreError::io(path, e))?;
	}

	writer.flush().map_err(|e| StoreError::io(path, e))?;
	debug!("wrote {count} strings to {}", path.display());
	Ok(())
}

/// Reads a file written by [`write_strings`], preserving order.
///
/// Fails if the file is missing or unreadable, the count is negative, or the
/// file holds fewer strings than it declares.
pub fn read_strings(path: impl AsRef<Path>) -> Result<Vec<String>, StoreError> {
	let path = path.as_ref();
	let file = File::open(path).map_err(|e| StoreError::io(path, e))?;
	let mut reader = BufReader::new(file);

	let mut count_bytes = [0u8; 4];
	reader.read_exact(&mut count_bytes).map_err(|e| match e.kind() {
		io::ErrorKind::UnexpectedEof => {
			StoreError::Corrupt { path: path.to_path_buf(), reason: "missing count header".to_string() }
		}
		_ => StoreError::io(path, e),
	})?;
	let count = i32::from_be_bytes(count_bytes);
	let expected = usize::try_from(count)
		.map_err(|_| StoreError::Corrupt { path: path.to_path_buf(), reason: format!("negative count {count}") })?;

	// The count is untrusted; don't pre-allocate more than the file could hold.
	let mut strings = Vec::with_capacity(expected.min(4096));
	for found in 0..expected {
		let mut len_bytes = [0u8; 2];
		reader.read_exact(&mut len_bytes).map_err(|e| eof_or_io(path, e, expected, found))?;

		let mut buf = vec![0u8; usize::from(u16::from_be_bytes(len_bytes))];
		reader.read_exact(&mut buf).map_err(|e| eof_or_io(path, e, expected, found))?;

		let s = mutf8::decode(&buf).map_err(|reason| StoreError::Corrupt {
			path:   path.to_path_buf(),
			reason: format!("string {found}: {reason}"),
		})?;
		strings.push(s);
	}

	debug!("read {} strings from {}", strings.len(), path.display());
	Ok(strings)
}

fn eof_or_io(path: &Path, e: io::Error, expected: usize, found: usize) -> StoreError {
	if e.kind() == io::ErrorKind::UnexpectedEof {
		StoreError::Truncated { path: path.to_path_buf(), expected, found }
	} else {
		StoreError::io(path, e)
	}
}
