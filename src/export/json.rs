use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use std::fs::File;
use std::io::BufWriter;

/// Write the normalized entries as a pretty-printed JSON array.
pub fn write_json(path: &str, entries: &[Entry]) -> AppResult<()> {
    let file = File::create(path)?;

    serde_json::to_writer_pretty(BufWriter::new(file), entries)
        .map_err(|e| AppError::Export(e.to_string()))?;

    Ok(())
}
