// src/core/engine.rs
use crate::core::normalizer::Normalizer;
use crate::core::types::{Dataset, Tag};
use crate::core::vectorizer::{bag_of_words, training_data};
use crate::core::vocabulary::VocabularyState;
use crate::error::Result;
use crate::learning::{KeywordBatch, LearningEngine};
use crate::persistence::{load_dataset, save_dataset};
use std::path::Path;

// The engine owns the dataset copy and everything derived from it. The file
// stays the source of truth; vocabulary, index and pairs are a rebuildable
// cache seeded once and then grown only through `learn`.
pub struct FeatureEngine {
    pub normalizer: Normalizer,
    pub vocabulary: VocabularyState,
    pub tags: Vec<Tag>,
    dataset: Dataset,
    learning_engine: LearningEngine,
    dataset_path: Option<String>,
}

impl FeatureEngine {
    pub fn new() -> Self {
        Self::from_dataset(Dataset::default())
    }

    /// Builds the engine from an already-loaded dataset, indexing it once.
    pub fn from_dataset(dataset: Dataset) -> Self {
        let (tags, vocabulary) = VocabularyState::from_dataset(&dataset);
        Self {
            normalizer: Normalizer::new(),
            vocabulary,
            tags,
            dataset,
            learning_engine: LearningEngine::new(),
            dataset_path: None,
        }
    }

    /// Loads the dataset file at `path`, starting empty when no file exists
    /// yet. A file that exists but cannot be read or parsed is fatal. Either
    /// way the engine remembers the path and persists there on later
    /// `learn`/`save` calls.
    pub fn from_file_or_new(path: &str) -> Result<Self> {
        let file = Path::new(path);
        let mut engine = if file.exists() {
            Self::from_dataset(load_dataset(file)?)
        } else {
            Self::new()
        };
        engine.dataset_path = Some(path.to_string());
        Ok(engine)
    }

    /// Raw text in, feature vector out. Normalizes exactly once and feeds
    /// the token list straight to the vectorizer.
    pub fn transform(&self, text: &str) -> Vec<f32> {
        let tokens = self.normalizer.normalize(text);
        bag_of_words(&tokens, &self.vocabulary)
    }

    /// Training inputs and labels for every known (pattern, tag) pair.
    pub fn training_data(&self) -> (Vec<Vec<f32>>, Vec<Tag>) {
        training_data(&self.vocabulary)
    }

    /// Learns `keywords` under `tag`: the vocabulary and the dataset entry
    /// are updated together, then the dataset file is rewritten when a path
    /// is attached. Feature vectors produced before this call keep their old
    /// length and must be regenerated. An empty batch is a no-op.
    pub fn learn(&mut self, tag: &str, keywords: &[String]) -> Result<()> {
        if tag.is_empty() || keywords.is_empty() {
            return Ok(());
        }
        let batch = KeywordBatch {
            tag: tag.to_string(),
            keywords: keywords.to_vec(),
        };
        self.learning_engine
            .learn(&mut self.vocabulary, &mut self.dataset, &batch)?;
        if !self.tags.contains(&batch.tag) {
            self.tags.push(batch.tag);
        }
        self.save()
    }

    /// Rewrites the dataset file, if a path is attached.
    pub fn save(&self) -> Result<()> {
        if let Some(path) = &self.dataset_path {
            save_dataset(&self.dataset, Path::new(path))
        } else {
            Ok(())
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}

impl Default for FeatureEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DatasetEntry;

    fn engine_with(entries: &[(&str, &[&str])]) -> FeatureEngine {
        FeatureEngine::from_dataset(Dataset {
            questions: entries
                .iter()
                .map(|(tag, keywords)| DatasetEntry {
                    tag: tag.to_string(),
                    keywords: keywords.iter().map(|k| k.to_string()).collect(),
                })
                .collect(),
        })
    }

    #[test]
    fn transform_normalizes_then_vectorizes() {
        let engine = engine_with(&[("demo", &["sample", "text", "example"])]);
        assert_eq!(engine.transform("This is a sample text."), vec![1.0, 1.0, 0.0]);
    }

    #[test]
    fn transform_length_tracks_vocabulary_growth() {
        let mut engine = engine_with(&[("greeting", &["hello"])]);
        let before = engine.transform("hello there");
        assert_eq!(before.len(), 1);

        engine.learn("farewell", &["goodbye".to_string()]).unwrap();
        let after = engine.transform("hello there");
        assert_eq!(after.len(), 2);
    }

    #[test]
    fn learn_registers_new_tags_once() {
        let mut engine = engine_with(&[("greeting", &["hello"])]);
        engine.learn("farewell", &["bye".to_string()]).unwrap();
        engine.learn("farewell", &["later".to_string()]).unwrap();

        assert_eq!(engine.tags, vec!["greeting", "farewell"]);
        assert_eq!(engine.dataset().questions.len(), 2);
    }

    #[test]
    fn empty_batch_is_a_no_op() {
        let mut engine = engine_with(&[("greeting", &["hello"])]);
        engine.learn("greeting", &[]).unwrap();
        engine.learn("", &["x".to_string()]).unwrap();
        assert_eq!(engine.vocabulary.len(), 1);
    }
}
