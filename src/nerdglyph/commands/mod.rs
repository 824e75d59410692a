pub mod info;
pub mod search;
pub mod update;

pub use info::DatasetInfo;
pub use search::GlyphMatch;
pub use update::{UpdateOutcome, UpdateReport};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub matches: Vec<GlyphMatch>,
    pub update: Option<UpdateReport>,
    pub info: Option<DatasetInfo>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_matches(mut self, matches: Vec<GlyphMatch>) -> Self {
        self.matches = matches;
        self
    }

    pub fn with_update(mut self, report: UpdateReport) -> Self {
        self.update = Some(report);
        self
    }

    pub fn with_info(mut self, info: DatasetInfo) -> Self {
        self.info = Some(info);
        self
    }
}

/// `12345` -> `12,345`
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_counts_with_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(10_390), "10,390");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }
}
