//! # Storage Layer
//!
//! The [`DatasetStore`] trait abstracts where the local `glyphnames.json` lives.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: the real file on disk
//!   - Backups are written next to it as `glyphnames.json.backup_YYYYMMDD_HHMMSS`
//!   - Output is pretty-printed UTF-8 with non-ASCII glyphs written literally
//!
//! - [`memory::InMemoryStore`]: keeps the document in memory, for tests
//!
//! The store deals in raw JSON documents rather than [`Dataset`]s so that an
//! update writes back exactly what the remote served, key order included.

use crate::error::{GlyphError, Result};
use crate::model::Dataset;
use serde_json::Value;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

pub trait DatasetStore {
    /// The stored document, or `None` when nothing has been installed yet.
    fn read(&self) -> Result<Option<Value>>;

    /// Whether a document is present, regardless of whether it parses.
    fn exists(&self) -> bool;

    /// Replace the stored document.
    fn write(&mut self, document: &Value) -> Result<()>;

    /// Copy the current document aside under a name derived from `stamp`.
    /// Returns the backup location, or `None` if there was nothing to back up.
    fn backup(&mut self, stamp: &str) -> Result<Option<PathBuf>>;

    /// Where the document lives, for display.
    fn location(&self) -> PathBuf;

    /// Read and validate the stored dataset. A missing document is an error.
    fn load(&self) -> Result<Dataset> {
        match self.read()? {
            Some(document) => Dataset::from_value(document),
            None => Err(GlyphError::Dataset(format!(
                "no dataset at {} (run `nerdglyph update` to download it)",
                self.location().display()
            ))),
        }
    }
}

/// File name of a backup taken at `stamp`.
pub fn backup_file_name(file_name: &str, stamp: &str) -> String {
    format!("{}.backup_{}", file_name, stamp)
}
