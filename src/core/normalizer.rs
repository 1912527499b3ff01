// src/core/normalizer.rs
use std::collections::HashSet;
use stopwords::{Language, Spark, Stopwords};
use unicode_segmentation::UnicodeSegmentation;

/// Lowercases, tokenizes and filters raw text into the token sequence the
/// vectorizer consumes. The stop-word set is built once at construction and
/// never changes afterwards.
pub struct Normalizer {
    stop_words: HashSet<&'static str>,
}

impl Normalizer {
    /// English stop words, fixed for the lifetime of the value.
    pub fn new() -> Self {
        let stop_words = Spark::stopwords(Language::English)
            .map(|words| words.iter().copied().collect())
            .unwrap_or_default();
        Self { stop_words }
    }

    /// Normalizes `text` into an ordered list of tokens: lowercase, split on
    /// Unicode word boundaries, purely alphanumeric, and not a stop word.
    /// Returns an empty list when everything is filtered out. Pure function.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .unicode_words()
            .filter(|token| token.chars().all(char::is_alphanumeric))
            .filter(|token| !self.stop_words.contains(*token))
            .map(str::to_string)
            .collect()
    }

    /// Space-joined form of [`normalize`](Self::normalize), for callers that
    /// want the flat string rather than the token list.
    pub fn normalize_joined(&self, text: &str) -> String {
        self.normalize(text).join(" ")
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
