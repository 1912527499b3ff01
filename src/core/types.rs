// src/core/types.rs
use serde::{Deserialize, Serialize};

/// A normalized keyword or short phrase that stands for one example of a tag.
/// Immutable once it has been assigned a vector position.
pub type Pattern = String;

/// An intent/category label. Many patterns map to one tag.
pub type Tag = String;

/// The on-disk dataset: a flat JSON file shaped
/// `{"questions": [{"tag": ..., "keywords": [...]}, ...]}`.
/// Loaded and stored wholesale; this is the durable source of truth, the
/// in-memory vocabulary structures are derived from it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub questions: Vec<DatasetEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetEntry {
    pub tag: Tag,
    pub keywords: Vec<Pattern>,
}

impl Dataset {
    /// Appends `keywords` to the entry whose tag matches, preserving order.
    /// A missing tag is not an error: a new `{tag, keywords}` entry is
    /// appended instead, so the file always keeps its declared shape.
    pub fn upsert_keywords(&mut self, tag: &str, keywords: &[Pattern]) {
        match self.questions.iter_mut().find(|entry| entry.tag == tag) {
            Some(entry) => entry.keywords.extend_from_slice(keywords),
            None => self.questions.push(DatasetEntry {
                tag: tag.to_string(),
                keywords: keywords.to_vec(),
            }),
        }
    }
}
