//! File persistence helpers: string list files and recursive listing.

pub mod mutf8;
mod store;
mod walk;

pub use store::{read_strings, write_strings};
pub use walk::list_files_recursive;
