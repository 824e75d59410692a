use super::{backup_file_name, DatasetStore};
use crate::error::{GlyphError, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DATASET_FILENAME: &str = "glyphnames.json";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store for `glyphnames.json` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(DATASET_FILENAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DATASET_FILENAME.to_string())
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(GlyphError::Io)?;
            }
        }
        Ok(())
    }
}

impl DatasetStore for FileStore {
    fn read(&self) -> Result<Option<Value>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no local dataset");
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(GlyphError::Io)?;
        let document: Value = serde_json::from_str(&content).map_err(GlyphError::Serialization)?;
        debug!(path = %self.path.display(), bytes = content.len(), "read local dataset");
        Ok(Some(document))
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn write(&mut self, document: &Value) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(document).map_err(GlyphError::Serialization)?;
        fs::write(&self.path, &content).map_err(GlyphError::Io)?;
        debug!(path = %self.path.display(), bytes = content.len(), "wrote dataset");
        Ok(())
    }

    fn backup(&mut self, stamp: &str) -> Result<Option<PathBuf>> {
        if !self.exists() {
            return Ok(None);
        }
        let backup_path = self
            .path
            .with_file_name(backup_file_name(&self.file_name(), stamp));
        fs::copy(&self.path, &backup_path).map_err(GlyphError::Io)?;
        debug!(backup = %backup_path.display(), "backed up dataset");
        Ok(Some(backup_path))
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}
