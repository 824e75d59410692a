use crate::commands::{format_count, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DatasetStore;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct DatasetInfo {
    pub version: Option<String>,
    pub date: Option<String>,
    pub glyph_count: usize,
    pub location: PathBuf,
}

pub fn run<S: DatasetStore>(store: &S) -> Result<CmdResult> {
    let dataset = store.load()?;
    let info = DatasetInfo {
        version: dataset.version().map(str::to_string),
        date: dataset.date().map(str::to_string),
        glyph_count: dataset.len(),
        location: store.location(),
    };

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Version: {}",
        info.version.as_deref().unwrap_or("unknown")
    )));
    result.add_message(CmdMessage::info(format!(
        "Release date: {}",
        info.date.as_deref().unwrap_or("unknown")
    )));
    result.add_message(CmdMessage::info(format!(
        "Total glyphs: {}",
        format_count(info.glyph_count)
    )));
    result.add_message(CmdMessage::info(format!(
        "Location: {}",
        info.location.display()
    )));

    Ok(result.with_info(info))
}
