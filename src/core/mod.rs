// src/core/mod.rs

pub mod engine;
pub mod normalizer;
pub mod types;
pub mod vectorizer;
pub mod vocabulary;
