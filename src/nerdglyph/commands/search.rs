use crate::commands::CmdResult;
use crate::model::{Dataset, GlyphEntry};
use crate::similarity::ratio;

const READABLE_SUBSTRING: f64 = 100.0;
const READABLE_EXACT: f64 = 50.0;
const FULL_NAME_SUBSTRING: f64 = 50.0;
const FUZZY_WEIGHT: f64 = 30.0;

#[derive(Debug, Clone, PartialEq)]
pub struct GlyphMatch {
    pub name: String,
    pub glyph: String,
    pub code: String,
    pub score: f64,
}

impl GlyphMatch {
    fn new(entry: &GlyphEntry, score: f64) -> Self {
        Self {
            name: entry.name.clone(),
            glyph: entry.glyph.clone(),
            code: entry.code.clone(),
            score,
        }
    }

    pub fn code_label(&self) -> String {
        format!("U+{}", self.code.to_uppercase())
    }
}

/// Relevance of `entry` for an already lowercased `query`.
pub fn score(entry: &GlyphEntry, query: &str) -> f64 {
    let readable = entry.readable_name().to_lowercase();
    let full = entry.name.to_lowercase();

    let mut score = 0.0;
    if readable.contains(query) {
        score += READABLE_SUBSTRING;
        if readable == query {
            score += READABLE_EXACT;
        }
    }
    if full.contains(query) {
        score += FULL_NAME_SUBSTRING;
    }
    score + ratio(query, &readable) * FUZZY_WEIGHT
}

/// Top `limit` glyphs for `term`, best first. Equal scores keep dataset order.
pub fn run(dataset: &Dataset, term: &str, limit: usize) -> CmdResult {
    let query = term.to_lowercase();

    let mut matches: Vec<GlyphMatch> = dataset
        .glyphs
        .iter()
        .filter_map(|entry| {
            let score = score(entry, &query);
            (score > 0.0).then(|| GlyphMatch::new(entry, score))
        })
        .collect();

    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    matches.truncate(limit);

    CmdResult::default().with_matches(matches)
}
