// src/persistence.rs
use crate::core::types::Dataset;
use crate::error::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes the whole dataset to `path` as UTF-8 JSON with 4-space indentation.
/// The write goes to a temp file in the target's directory first and is then
/// renamed over the target, so a crash mid-write never leaves a torn file.
pub fn save_dataset(dataset: &Dataset, path: &Path) -> Result<()> {
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
        dataset.serialize(&mut serializer)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(io::Error::from)?;
    Ok(())
}

/// Reads the whole dataset back from `path`. A missing file or a file that
/// does not match the dataset shape is fatal and propagates to the caller.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let dataset = serde_json::from_reader(reader)?;
    Ok(dataset)
}
