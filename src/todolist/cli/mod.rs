//! # CLI Behavior
//!
//! `todo <command> [flags]`. Flags take either one or two dashes, so
//! `todo add -title "Buy milk"` and `todo add --title "Buy milk"` are the same.
//!
//! - `add -title T`, `done -id N`, `delete -id N`: change the list, print it,
//!   save it.
//! - `list`: print the list.
//! - Anything else prints a hint and exits 0. No command at all is an error.
//!
//! ## Module Structure
//!
//! - `commands`: dispatch and per-command handlers
//! - `render`: terminal output
//! - `setup`: clap definitions and flag normalization

mod commands;
mod render;
pub mod setup;

pub use commands::run;
