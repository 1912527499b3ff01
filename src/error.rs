// src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Dataset file could not be read or written. Propagated unchanged.
    #[error("dataset i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset file exists but does not match the expected shape
    /// (missing `questions`, or an entry without `tag`/`keywords`).
    #[error("malformed dataset: {0}")]
    Json(#[from] serde_json::Error),

    /// A pattern offered for learning is already in the vocabulary, or
    /// appears twice in the same batch. Accepting it would leave the
    /// pattern index with a duplicate or a gap.
    #[error("pattern '{0}' is already in the vocabulary")]
    DuplicatePattern(String),
}
