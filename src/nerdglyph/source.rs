//! Where fresh datasets come from.
//!
//! [`HttpSource`] performs a single blocking GET against the canonical URL.
//! There is no retry: a failed request or an unparsable body is reported to
//! the caller as-is. [`StaticSource`] serves a fixed document and is what the
//! command tests use.

use crate::error::{GlyphError, Result};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/ryanoasis/nerd-fonts/master/glyphnames.json";

pub trait GlyphSource {
    /// Fetch and parse the remote document.
    fn fetch(&self) -> Result<Value>;

    /// Human-readable origin, shown before downloading.
    fn describe(&self) -> String;
}

pub struct HttpSource {
    url: String,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }

    fn fetch_error(&self, message: impl Into<String>) -> GlyphError {
        GlyphError::Fetch {
            url: self.url.clone(),
            message: message.into(),
        }
    }
}

impl GlyphSource for HttpSource {
    fn fetch(&self) -> Result<Value> {
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(self.fetch_error("URL must start with http:// or https://"));
        }

        info!(url = %self.url, "downloading dataset");
        let agent = ureq::AgentBuilder::new().timeout(self.timeout).build();

        let response = match agent.get(&self.url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                let reason = response.status_text().to_string();
                return Err(self.fetch_error(format!("HTTP {} {}", code, reason)));
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(self.fetch_error(transport.to_string()));
            }
        };

        // Parse straight off the socket; `into_string` caps bodies at 10 MB.
        let document: Value = serde_json::from_reader(response.into_reader()).map_err(|e| {
            if e.is_io() {
                self.fetch_error(format!("failed to read body: {}", e))
            } else {
                GlyphError::Serialization(e)
            }
        })?;
        debug!("parsed remote dataset");
        Ok(document)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Serves a fixed document, or a fixed failure.
pub struct StaticSource {
    outcome: std::result::Result<Value, String>,
}

impl StaticSource {
    pub fn new(document: Value) -> Self {
        Self {
            outcome: Ok(document),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
        }
    }
}

impl GlyphSource for StaticSource {
    fn fetch(&self) -> Result<Value> {
        self.outcome.clone().map_err(|message| GlyphError::Fetch {
            url: self.describe(),
            message,
        })
    }

    fn describe(&self) -> String {
        "static://glyphnames.json".to_string()
    }
}
