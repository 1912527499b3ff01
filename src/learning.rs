// src/learning.rs
use crate::core::types::Dataset;
use crate::core::vocabulary::VocabularyState;
use crate::error::Result;

/// One batch of newly learned keywords for a single tag.
pub struct KeywordBatch {
    pub tag: String,
    pub keywords: Vec<String>,
}

/// Applies keyword batches to the core models: the vocabulary state grows by
/// the batch, and the in-memory dataset gains the keywords under their tag.
pub struct LearningEngine;

impl LearningEngine {
    pub fn new() -> Self {
        Self
    }

    /// Extends the vocabulary first, atomically over its pattern list, index
    /// and pair list. Only when that succeeds is the dataset touched, so a
    /// rejected batch (duplicate pattern) leaves both structures unchanged.
    /// An unknown tag is not an error; the dataset grows a new entry for it.
    pub fn learn(
        &self,
        vocabulary: &mut VocabularyState,
        dataset: &mut Dataset,
        batch: &KeywordBatch,
    ) -> Result<()> {
        vocabulary.extend(&batch.keywords, &batch.tag)?;
        dataset.upsert_keywords(&batch.tag, &batch.keywords);
        Ok(())
    }
}

impl Default for LearningEngine {
    fn default() -> Self {
        Self::new()
    }
}
