//! Date formatting/parsing helpers and simple file persistence utilities.
//!
//! - [`dates`]: fixed-pattern timestamp formatting, lenient-to-`None` parsing,
//!   time-of-day removal, and inclusive day ranges.
//! - [`files`]: length-prefixed string list files and breadth-first file
//!   listing.

pub mod dates;
pub mod error;
pub mod files;

pub use error::{DateError, StoreError};

/// Timestamp value used throughout the crate: an instant in the process-local
/// time zone.
pub type Timestamp = chrono::DateTime<chrono::Local>;
