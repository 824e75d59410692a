//! # nerdglyph
//!
//! Fuzzy search over the Nerd Fonts glyph registry (`glyphnames.json`), plus an
//! updater that replaces the local copy of the registry with the latest release.
//!
//! Like any good CLI tool, the binary is a thin client over a library that
//! knows nothing about terminals.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints results, picks exit codes       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade: fills in defaults, dispatches               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - search scoring, update decisions, dataset info           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────┐  ┌───────────────────────────┐
//! │  Storage (store/)            │  │  Remote (source.rs)       │
//! │  FileStore, InMemoryStore    │  │  HttpSource, StaticSource │
//! └──────────────────────────────┘  └───────────────────────────┘
//! ```
//!
//! From `api.rs` inward, code returns `Result<CmdResult>` and never writes to
//! stdout/stderr or exits the process. Diagnostics go through `tracing`.
//!
//! ## Scoring
//!
//! Each glyph name is split at its first hyphen (`cod-battery` -> `battery`).
//! A query earns 100 for appearing in that readable part, 50 more for equalling
//! it, 50 for appearing anywhere in the full name, and up to 30 from a
//! Ratcliff/Obershelp similarity against the readable part. See
//! [`commands::search`] and [`similarity`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: search, update and info logic
//! - [`model`]: `Dataset`, `GlyphEntry`, `DatasetMetadata`
//! - [`similarity`]: string similarity ratio
//! - [`store`]: where the local dataset lives
//! - [`source`]: where fresh datasets come from
//! - [`config`]: `config.json` handling
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod similarity;
pub mod source;
pub mod store;
