// src/lib.rs

pub mod core;
pub mod error;
pub mod learning;
pub mod persistence;

pub use crate::core::engine::FeatureEngine;
pub use crate::error::{Error, Result};
