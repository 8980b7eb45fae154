//! # CLI
//!
//! Thin terminal client over [`prodcat::api`].
//!
//! - `setup`: argument parsing via clap
//! - `commands`: context wiring and per-command handlers
//! - `print`: output formatting (tables, colors, messages)
//!
//! Running `prodcat` with no command lists the catalog.

mod commands;
mod print;
pub mod setup;

pub use commands::run;
