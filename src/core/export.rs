use crate::errors::{AppError, AppResult};
use crate::export::{self, ExportFormat};
use crate::store::file::EntryStore;
use crate::store::queries;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the normalized log to `path` in the requested format.
    /// An existing output file is only replaced with `force`.
    pub fn apply(
        store: &EntryStore,
        format: &ExportFormat,
        path: &str,
        force: bool,
    ) -> AppResult<()> {
        if Path::new(path).exists() && !force {
            return Err(AppError::Export(format!(
                "{} already exists (use --force to overwrite)",
                path
            )));
        }

        let entries = queries::load_entries(store)?;

        match format {
            ExportFormat::Csv => export::csv::write_csv(path, &entries)?,
            ExportFormat::Json => export::json::write_json(path, &entries)?,
        }

        export::notify_export_success(format.as_str(), Path::new(path));
        Ok(())
    }
}
