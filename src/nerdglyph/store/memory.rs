use super::{backup_file_name, DatasetStore};
use crate::error::{GlyphError, Result};
use serde_json::Value;
use std::path::PathBuf;

const MEMORY_NAME: &str = "memory://glyphnames.json";

/// Keeps the document in memory. `Stored::Corrupt` stands in for a file that
/// exists but does not parse.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    document: Stored,
    pub backups: Vec<(String, Value)>,
    pub writes: usize,
}

#[derive(Debug, Clone, Default)]
enum Stored {
    #[default]
    Empty,
    Document(Value),
    Corrupt,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: Value) -> Self {
        Self {
            document: Stored::Document(document),
            ..Self::default()
        }
    }

    pub fn corrupt() -> Self {
        Self {
            document: Stored::Corrupt,
            ..Self::default()
        }
    }

    pub fn document(&self) -> Option<&Value> {
        match &self.document {
            Stored::Document(doc) => Some(doc),
            _ => None,
        }
    }
}

impl DatasetStore for InMemoryStore {
    fn read(&self) -> Result<Option<Value>> {
        match &self.document {
            Stored::Empty => Ok(None),
            Stored::Document(doc) => Ok(Some(doc.clone())),
            Stored::Corrupt => Err(GlyphError::Dataset("stored document is corrupt".into())),
        }
    }

    fn exists(&self) -> bool {
        !matches!(self.document, Stored::Empty)
    }

    fn write(&mut self, document: &Value) -> Result<()> {
        self.document = Stored::Document(document.clone());
        self.writes += 1;
        Ok(())
    }

    fn backup(&mut self, stamp: &str) -> Result<Option<PathBuf>> {
        let copy = match &self.document {
            Stored::Empty => return Ok(None),
            Stored::Document(doc) => doc.clone(),
            Stored::Corrupt => Value::Null,
        };
        let name = backup_file_name(MEMORY_NAME, stamp);
        self.backups.push((name.clone(), copy));
        Ok(Some(PathBuf::from(name)))
    }

    fn location(&self) -> PathBuf {
        PathBuf::from(MEMORY_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn round_trips_a_document() {
        let mut store = InMemoryStore::new();
        assert!(store.read().unwrap().is_none());
        store.write(&json!({"a": 1})).unwrap();
        assert_eq!(store.read().unwrap(), Some(json!({"a": 1})));
        assert_eq!(store.writes, 1);
    }

    #[test]
    fn corrupt_store_exists_but_fails_to_read() {
        let store = InMemoryStore::corrupt();
        assert!(store.exists());
        assert!(store.read().is_err());
    }

    #[test]
    fn backups_are_recorded_by_stamp() {
        let mut store = InMemoryStore::with_document(json!({"a": 1}));
        let path = store.backup("20240101_000000").unwrap().unwrap();
        assert!(path.to_string_lossy().ends_with(".backup_20240101_000000"));
        assert_eq!(store.backups.len(), 1);
        assert_eq!(store.backups[0].1, json!({"a": 1}));
    }
}
