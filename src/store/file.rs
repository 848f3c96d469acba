//! Flat-file handle for the hydration log (lightweight for CLI usage).

use crate::errors::AppResult;
use csv::StringRecord;
use std::path::{Path, PathBuf};

/// Column headers of the current log schema.
pub const HEADERS: [&str; 3] = ["Date", "Time", "Amount (ml)"];

/// Column headers of the old one-row-per-day schema.
pub const LEGACY_HEADERS: [&str; 2] = ["Date", "Water Intake (ml)"];

pub struct EntryStore {
    pub path: PathBuf,
}

impl EntryStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the raw table: the header record plus all data rows, with no
    /// normalization applied. Rows with a wrong field count are accepted
    /// here and coerced later.
    pub(crate) fn read_raw(&self) -> AppResult<(StringRecord, Vec<StringRecord>)> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)?;

        let headers = rdr.headers()?.clone();

        let mut rows = Vec::new();
        for rec in rdr.records() {
            rows.push(rec?);
        }

        Ok((headers, rows))
    }

    /// Rewrite the whole file: the current schema header plus the given
    /// pre-rendered rows.
    pub(crate) fn write_rows(&self, rows: &[[String; 3]]) -> AppResult<()> {
        let mut wtr = csv::Writer::from_path(&self.path)?;

        wtr.write_record(HEADERS)?;
        for row in rows {
            wtr.write_record(row)?;
        }

        wtr.flush()?;
        Ok(())
    }
}
