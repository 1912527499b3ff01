// src/core/vocabulary.rs
use crate::core::types::{Dataset, Pattern, Tag};
use crate::error::{Error, Result};
use std::collections::{HashMap, HashSet};

/// The in-memory vocabulary: the ordered pattern list, the pattern -> vector
/// position index, and the (pattern, tag) pair list, kept as one value so the
/// three can never drift apart. Append-only; positions are assigned densely
/// from 0 in insertion order and never reassigned.
#[derive(Debug, Clone, Default)]
pub struct VocabularyState {
    patterns: Vec<Pattern>,
    index: HashMap<Pattern, usize>,
    pairs: Vec<(Pattern, Tag)>,
}

impl VocabularyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the vocabulary from a raw dataset, walking entries in file
    /// order. Returns the tag list alongside the state. Keywords are not
    /// deduplicated: a keyword listed twice occupies two pattern slots, and
    /// the index points at its first occurrence.
    pub fn from_dataset(dataset: &Dataset) -> (Vec<Tag>, Self) {
        let mut tags = Vec::new();
        let mut state = Self::new();

        for entry in &dataset.questions {
            tags.push(entry.tag.clone());
            for keyword in &entry.keywords {
                let position = state.patterns.len();
                state.patterns.push(keyword.clone());
                state.index.entry(keyword.clone()).or_insert(position);
                state.pairs.push((keyword.clone(), entry.tag.clone()));
            }
        }

        (tags, state)
    }

    /// Number of patterns, which is also the feature-vector length.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Vector position of `pattern`, if it is known.
    pub fn position(&self, pattern: &str) -> Option<usize> {
        self.index.get(pattern).copied()
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn pairs(&self) -> &[(Pattern, Tag)] {
        &self.pairs
    }

    /// Appends `new_patterns` under `tag`, assigning each the next free
    /// position. All-or-nothing: the whole batch is validated first, and a
    /// pattern that is already indexed (or repeated within the batch) rejects
    /// the batch with the state untouched. O(batch size).
    pub fn extend(&mut self, new_patterns: &[Pattern], tag: &str) -> Result<()> {
        let mut seen = HashSet::new();
        for pattern in new_patterns {
            if self.index.contains_key(pattern) || !seen.insert(pattern) {
                return Err(Error::DuplicatePattern(pattern.clone()));
            }
        }

        for pattern in new_patterns {
            let position = self.patterns.len();
            self.patterns.push(pattern.clone());
            self.index.insert(pattern.clone(), position);
            self.pairs.push((pattern.clone(), tag.to_string()));
        }
        Ok(())
    }
}
