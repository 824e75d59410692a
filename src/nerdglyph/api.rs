//! # API Facade
//!
//! The single entry point for nerdglyph operations, whatever the UI.
//!
//! The facade dispatches to `commands/*.rs`, fills in defaults (result limit,
//! backup timestamp) and returns structured `CmdResult`s. It never prints and
//! never exits; that is the CLI's job.
//!
//! `GlyphApi<S, R>` is generic over the [`DatasetStore`] and the [`GlyphSource`],
//! so production wires `FileStore` + `HttpSource` while tests use
//! `InMemoryStore` + `StaticSource`.

use crate::commands;
use crate::error::Result;
use crate::source::GlyphSource;
use crate::store::DatasetStore;
use chrono::Local;

/// Format of the timestamp embedded in backup file names.
pub const BACKUP_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

const DEFAULT_LIMIT: usize = 10;

pub struct GlyphApi<S: DatasetStore, R: GlyphSource> {
    store: S,
    source: R,
    default_limit: usize,
}

impl<S: DatasetStore, R: GlyphSource> GlyphApi<S, R> {
    pub fn new(store: S, source: R) -> Self {
        Self {
            store,
            source,
            default_limit: DEFAULT_LIMIT,
        }
    }

    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit.max(1);
        self
    }

    /// Rank glyphs against `term`. `limit` falls back to the configured default.
    pub fn search(&self, term: &str, limit: Option<usize>) -> Result<commands::CmdResult> {
        let dataset = self.store.load()?;
        let limit = limit.unwrap_or(self.default_limit);
        Ok(commands::search::run(&dataset, term, limit))
    }

    pub fn update(&mut self, force: bool) -> Result<commands::CmdResult> {
        self.update_with_progress(force, |_| {})
    }

    /// Like [`update`](Self::update), but hands each message to `on_message`
    /// as soon as it is produced.
    pub fn update_with_progress<F>(
        &mut self,
        force: bool,
        on_message: F,
    ) -> Result<commands::CmdResult>
    where
        F: FnMut(&commands::CmdMessage),
    {
        let stamp = Local::now().format(BACKUP_STAMP_FORMAT).to_string();
        commands::update::run(&mut self.store, &self.source, force, &stamp, on_message)
    }

    pub fn info(&self) -> Result<commands::CmdResult> {
        commands::info::run(&self.store)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{
    CmdMessage, CmdResult, DatasetInfo, GlyphMatch, MessageLevel, UpdateOutcome, UpdateReport,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticSource;
    use crate::store::memory::InMemoryStore;
    use serde_json::{json, Value};

    fn glyphs(count: usize) -> Value {
        let mut map = serde_json::Map::new();
        map.insert(
            "METADATA".into(),
            json!({"version": "1.0.0", "date": "2024-01-01"}),
        );
        for i in 0..count {
            map.insert(
                format!("md-star_{}", i),
                json!({"char": "*", "code": format!("f{:04x}", i)}),
            );
        }
        Value::Object(map)
    }

    #[test]
    fn search_uses_default_limit() {
        let api = GlyphApi::new(
            InMemoryStore::with_document(glyphs(20)),
            StaticSource::new(glyphs(0)),
        );
        assert_eq!(api.search("star", None).unwrap().matches.len(), 10);
    }

    #[test]
    fn search_honours_configured_and_explicit_limits() {
        let api = GlyphApi::new(
            InMemoryStore::with_document(glyphs(20)),
            StaticSource::new(glyphs(0)),
        )
        .with_default_limit(4);
        assert_eq!(api.search("star", None).unwrap().matches.len(), 4);
        assert_eq!(api.search("star", Some(7)).unwrap().matches.len(), 7);
    }

    #[test]
    fn search_without_dataset_fails() {
        let api = GlyphApi::new(InMemoryStore::new(), StaticSource::new(glyphs(0)));
        assert!(api.search("star", None).is_err());
    }

    #[test]
    fn update_stamps_backups_with_local_time() {
        let mut old = glyphs(1);
        old["METADATA"]["version"] = json!("0.9.0");
        let mut api = GlyphApi::new(InMemoryStore::with_document(old), StaticSource::new(glyphs(3)));

        api.update(false).unwrap();

        let (name, _) = &api.store().backups[0];
        let stamp = name.rsplit("backup_").next().unwrap();
        assert!(chrono::NaiveDateTime::parse_from_str(stamp, BACKUP_STAMP_FORMAT).is_ok());
    }

    #[test]
    fn update_reports_progress_before_failing() {
        let mut api = GlyphApi::new(
            InMemoryStore::with_document(glyphs(1)),
            StaticSource::failing("offline"),
        );
        let mut seen = Vec::new();

        let err = api.update_with_progress(false, |m| seen.push(m.content.clone()));

        assert!(err.is_err());
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], "Current version: 1.0.0");
    }

    #[test]
    fn info_dispatches_to_the_store() {
        let api = GlyphApi::new(
            InMemoryStore::with_document(glyphs(5)),
            StaticSource::new(glyphs(0)),
        );
        assert_eq!(api.info().unwrap().info.unwrap().glyph_count, 5);
    }
}
