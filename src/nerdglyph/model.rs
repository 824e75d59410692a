//! Typed view of `glyphnames.json`.
//!
//! The file is a single JSON object whose keys are glyph names
//! (`"cod-battery"`, `"md-home"`, ...) plus one reserved `METADATA` key. Entries
//! are validated once, at load time, so the rest of the crate never has to
//! poke at loosely-typed JSON.

use crate::error::{GlyphError, Result};
use serde_json::{Map, Value};

/// Reserved key holding the dataset's own version and release date.
pub const METADATA_KEY: &str = "METADATA";

#[derive(Debug, Clone, PartialEq)]
pub struct GlyphEntry {
    pub name: String,
    /// The display glyph (`char` in the file).
    pub glyph: String,
    /// Hex code point, case as found in the file.
    pub code: String,
    /// Any other descriptive fields, kept verbatim.
    pub extra: Map<String, Value>,
}

impl GlyphEntry {
    pub fn new(name: impl Into<String>, glyph: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            glyph: glyph.into(),
            code: code.into(),
            extra: Map::new(),
        }
    }

    fn from_value(name: &str, value: Value) -> Result<Self> {
        let Value::Object(mut fields) = value else {
            return Err(GlyphError::malformed(name, "expected an object"));
        };
        let glyph = take_string(&mut fields, name, "char")?;
        let code = take_string(&mut fields, name, "code")?;
        Ok(Self {
            name: name.to_string(),
            glyph,
            code,
            extra: fields,
        })
    }

    /// The part of the name after the category prefix: `cod-battery` -> `battery`.
    pub fn readable_name(&self) -> &str {
        readable_name(&self.name)
    }
}

pub fn readable_name(name: &str) -> &str {
    name.split_once('-').map_or(name, |(_, rest)| rest)
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatasetMetadata {
    pub version: String,
    pub date: String,
    pub extra: Map<String, Value>,
}

impl DatasetMetadata {
    fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut fields) = value else {
            return Err(GlyphError::malformed(METADATA_KEY, "expected an object"));
        };
        let version = take_string(&mut fields, METADATA_KEY, "version")?;
        let date = take_string(&mut fields, METADATA_KEY, "date")?;
        Ok(Self {
            version,
            date,
            extra: fields,
        })
    }
}

/// All glyphs of one dataset, in file order, with the metadata split out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub metadata: Option<DatasetMetadata>,
    pub glyphs: Vec<GlyphEntry>,
}

impl Dataset {
    pub fn from_json(raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(GlyphError::Dataset(
                "expected a JSON object at the top level".to_string(),
            ));
        };

        let mut metadata = None;
        let mut glyphs = Vec::with_capacity(map.len());
        for (name, value) in map {
            if name == METADATA_KEY {
                metadata = Some(DatasetMetadata::from_value(value)?);
            } else {
                glyphs.push(GlyphEntry::from_value(&name, value)?);
            }
        }

        Ok(Self { metadata, glyphs })
    }

    pub fn version(&self) -> Option<&str> {
        self.metadata.as_ref().map(|m| m.version.as_str())
    }

    pub fn date(&self) -> Option<&str> {
        self.metadata.as_ref().map(|m| m.date.as_str())
    }

    /// Number of glyphs, not counting `METADATA`.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

/// Reads `METADATA.version` without validating the rest of the document.
pub fn raw_version(value: &Value) -> Option<&str> {
    value.get(METADATA_KEY)?.get("version")?.as_str()
}

fn take_string(fields: &mut Map<String, Value>, name: &str, field: &str) -> Result<String> {
    match fields.remove(field) {
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(GlyphError::malformed(
            name,
            format!("field '{}' must be a string", field),
        )),
        None => Err(GlyphError::malformed(
            name,
            format!("missing field '{}'", field),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn splits_metadata_from_glyphs() {
        let raw = r#"{
            "METADATA": {"website": "https://nerdfonts.com", "version": "3.2.1", "date": "2024-04-17"},
            "cod-battery": {"char": "\ueb2d", "code": "eb2d"},
            "md-home": {"char": "\udb80\udedc", "code": "f02dc"}
        }"#;
        let dataset = Dataset::from_json(raw).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.version(), Some("3.2.1"));
        assert_eq!(dataset.date(), Some("2024-04-17"));
        let meta = dataset.metadata.as_ref().unwrap();
        assert_eq!(meta.extra["website"], "https://nerdfonts.com");
        assert!(dataset.glyphs.iter().all(|g| g.name != METADATA_KEY));
    }

    #[test]
    fn keeps_file_order() {
        let value = json!({
            "md-zebra": {"char": "z", "code": "f0001"},
            "cod-alpha": {"char": "a", "code": "ea01"},
            "fa-mid": {"char": "m", "code": "f101"}
        });
        let dataset = Dataset::from_value(value).unwrap();
        let names: Vec<_> = dataset.glyphs.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["md-zebra", "cod-alpha", "fa-mid"]);
    }

    #[test]
    fn dataset_without_metadata_is_valid() {
        let dataset = Dataset::from_value(json!({"cod-a": {"char": "a", "code": "ea01"}})).unwrap();
        assert_eq!(dataset.version(), None);
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn missing_code_is_malformed() {
        let err = Dataset::from_value(json!({"cod-a": {"char": "a"}})).unwrap_err();
        match err {
            GlyphError::MalformedEntry { name, reason } => {
                assert_eq!(name, "cod-a");
                assert!(reason.contains("code"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_string_char_is_malformed() {
        let err = Dataset::from_value(json!({"cod-a": {"char": 1, "code": "ea01"}})).unwrap_err();
        assert!(matches!(err, GlyphError::MalformedEntry { .. }));
    }

    #[test]
    fn metadata_without_version_is_malformed() {
        let err = Dataset::from_value(json!({"METADATA": {"date": "2024-01-01"}})).unwrap_err();
        match err {
            GlyphError::MalformedEntry { name, .. } => assert_eq!(name, METADATA_KEY),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn top_level_array_is_rejected() {
        let err = Dataset::from_value(json!([1, 2])).unwrap_err();
        assert!(matches!(err, GlyphError::Dataset(_)));
    }

    #[test]
    fn extra_fields_are_kept() {
        let dataset = Dataset::from_value(json!({
            "cod-a": {"char": "a", "code": "ea01", "aliases": ["alpha"]}
        }))
        .unwrap();
        assert_eq!(dataset.glyphs[0].extra["aliases"], json!(["alpha"]));
    }

    #[test]
    fn readable_name_drops_prefix_only() {
        assert_eq!(readable_name("cod-battery"), "battery");
        assert_eq!(readable_name("md-battery-charging"), "battery-charging");
        assert_eq!(readable_name("plain"), "plain");
    }

    #[test]
    fn raw_version_tolerates_partial_documents() {
        assert_eq!(raw_version(&json!({"METADATA": {"version": "1.0"}})), Some("1.0"));
        assert_eq!(raw_version(&json!({"cod-a": {}})), None);
        assert_eq!(raw_version(&json!("text")), None);
    }
}
