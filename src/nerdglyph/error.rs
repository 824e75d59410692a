use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlyphError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Malformed entry '{name}': {reason}")]
    MalformedEntry { name: String, reason: String },

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Failed to download {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("Config error: {0}")]
    Config(String),
}

impl GlyphError {
    pub fn malformed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        GlyphError::MalformedEntry {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GlyphError>;
