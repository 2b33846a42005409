//! Shared helpers for the command handlers.

mod interaction;

pub use interaction::confirm;
