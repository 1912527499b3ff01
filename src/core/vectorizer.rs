// src/core/vectorizer.rs
use crate::core::types::Tag;
use crate::core::vocabulary::VocabularyState;

/// Bag-of-words presence vector for an already-normalized token sequence.
/// Output length always equals the current vocabulary size. A known token
/// sets its slot to 1.0 (repeats stay 1.0, this is presence, not a count);
/// unknown tokens contribute nothing.
///
/// Vectors produced before a vocabulary extension keep their old length and
/// are stale with respect to the grown vocabulary.
pub fn bag_of_words<S: AsRef<str>>(tokens: &[S], vocabulary: &VocabularyState) -> Vec<f32> {
    let mut bag = vec![0.0f32; vocabulary.len()];
    for token in tokens {
        if let Some(position) = vocabulary.position(token.as_ref()) {
            bag[position] = 1.0;
        }
    }
    bag
}

/// Builds the parallel training inputs and labels for a downstream
/// classifier: one vector per (pattern, tag) pair, in pair-list order.
/// Multi-word patterns are split on whitespace before vectorizing.
pub fn training_data(vocabulary: &VocabularyState) -> (Vec<Vec<f32>>, Vec<Tag>) {
    let mut inputs = Vec::with_capacity(vocabulary.pairs().len());
    let mut labels = Vec::with_capacity(vocabulary.pairs().len());

    for (pattern, tag) in vocabulary.pairs() {
        let tokens: Vec<&str> = pattern.split_whitespace().collect();
        inputs.push(bag_of_words(&tokens, vocabulary));
        labels.push(tag.clone());
    }

    (inputs, labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_vocabulary() -> VocabularyState {
        let mut state = VocabularyState::new();
        let patterns: Vec<String> = ["sample", "text", "example"]
            .iter()
            .map(|p| p.to_string())
            .collect();
        state.extend(&patterns, "demo").unwrap();
        state
    }

    #[test]
    fn marks_known_tokens_by_position() {
        let vocabulary = sample_vocabulary();
        let bag = bag_of_words(&["sample", "text"], &vocabulary);
        assert_eq!(bag, vec![1.0, 1.0, 0.0]);
    }

    #[test]
    fn unknown_tokens_are_ignored() {
        let vocabulary = sample_vocabulary();
        let bag = bag_of_words(&["sample", "unknown"], &vocabulary);
        assert_eq!(bag, vec![1.0, 0.0, 0.0]);
    }

    #[test]
    fn length_always_matches_vocabulary() {
        let vocabulary = sample_vocabulary();
        for tokens in [&["sample"][..], &[][..], &["x", "y", "z", "w"][..]] {
            assert_eq!(bag_of_words(tokens, &vocabulary).len(), vocabulary.len());
        }
    }

    #[test]
    fn repeated_tokens_are_idempotent() {
        let vocabulary = sample_vocabulary();
        let once = bag_of_words(&["text"], &vocabulary);
        let twice = bag_of_words(&["text", "text", "text"], &vocabulary);
        assert_eq!(once, twice);
    }

    #[test]
    fn training_data_is_one_hot_per_pair() {
        let mut state = VocabularyState::new();
        state.extend(&["sample1".to_string()], "tag1").unwrap();
        state.extend(&["sample2".to_string()], "tag2").unwrap();

        let (inputs, labels) = training_data(&state);
        assert_eq!(inputs, vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
        assert_eq!(labels, vec!["tag1", "tag2"]);
    }
}
