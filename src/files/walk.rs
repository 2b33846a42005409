//! Breadth-first file listing.

use std::{collections::VecDeque, fs, path::{Path, PathBuf}};

use log::{debug, warn};

/// Lists every non-directory entry under `folder`, at any depth.
///
/// Returns an empty list when `folder` is not an existing directory. Entries
/// come back in discovery order of a breadth-first walk; directories are
/// expanded but never listed themselves. Symlinks to directories are
/// followed, and nothing guards against a link cycle.
pub fn list_files_recursive(folder: impl AsRef<Path>) -> Vec<PathBuf> {
	let folder = folder.as_ref();
	if !folder.is_dir() {
		debug!("{} is not a directory, nothing to list", folder.display());
		return Vec::new();
	}

	let mut files = Vec::new();
	let mut queue: VecDeque<PathBuf> = children(folder).into();

	while let Some(path) = queue.pop_front() {
		if path.is_dir() {
			queue.extend(children(&path));
			continue;
		}
		files.push(path);
	}

	files
}

/// Immediate entries of `dir`. An unreadable directory is logged and treated
/// as empty.
fn children(dir: &Path) -> Vec<PathBuf> {
	let entries = match fs::read_dir(dir) {
		Ok(entries) => entries,
		Err(e) => {
			warn!("skipping unreadable directory {}: {e}", dir.display());
			return Vec::new();
		}
	};

	entries
		.filter_map(|entry| match entry {
			Ok(entry) => Some(entry.path()),
			Err(e) => {
				warn!("skipping entry in {}: {e}", dir.display());
				None
			}
		})
		.collect()
}
