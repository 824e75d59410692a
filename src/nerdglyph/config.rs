use crate::error::{GlyphError, Result};
use crate::source::DEFAULT_SOURCE_URL;
use crate::store::fs::DATASET_FILENAME;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LIMIT: usize = 10;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GlyphConfig {
    /// Where `update` downloads the dataset from
    #[serde(default = "default_source_url")]
    pub source_url: String,

    /// Explicit dataset location; defaults to `<data dir>/glyphnames.json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_path: Option<PathBuf>,

    /// Number of results `search` returns without `--limit`
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Request timeout for `update`, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_source_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for GlyphConfig {
    fn default() -> Self {
        Self {
            source_url: default_source_url(),
            dataset_path: None,
            default_limit: DEFAULT_LIMIT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GlyphConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(GlyphError::Io)?;
        let config: GlyphConfig = serde_json::from_str(&content).map_err(|e| {
            GlyphError::Config(format!("{}: {}", config_path.display(), e))
        })?;
        if config.default_limit == 0 {
            return Err(GlyphError::Config(format!(
                "{}: default_limit must be a positive integer",
                config_path.display()
            )));
        }
        Ok(config)
    }

    /// Dataset location: the configured path, or `glyphnames.json` in `data_dir`.
    /// A relative configured path is taken relative to `data_dir`.
    pub fn dataset_path(&self, data_dir: &Path) -> PathBuf {
        match &self.dataset_path {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => data_dir.join(path),
            None => data_dir.join(DATASET_FILENAME),
        }
    }

    /// Applies `NERDGLYPH_SOURCE_URL`-style overrides.
    pub fn with_source_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.source_url = url;
        }
        self
    }
}
