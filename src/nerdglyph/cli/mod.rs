//! # CLI Layer
//!
//! The only place that knows about stdout, stderr and exit codes.
//!
//! - `setup`: clap definitions
//! - `commands`: context wiring and per-command handlers
//! - `print`: terminal output for `CmdResult`s
//!
//! ## Environment
//!
//! - `NERDGLYPH_HOME`: data directory (dataset + `config.json`)
//! - `NERDGLYPH_SOURCE_URL`: overrides the download URL
//! - `NERDGLYPH_LOG`: tracing filter, e.g. `nerdglyph=debug`

mod commands;
mod print;
pub mod setup;

pub use commands::run;
