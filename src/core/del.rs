use crate::errors::{AppError, AppResult};
use crate::store::file::EntryStore;
use crate::store::queries;
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete entries by the 1-based ids shown by `list`.
    ///
    /// Ids are checked against a fresh load, so a stale id from an earlier
    /// listing cannot silently remove the wrong row.
    pub fn apply_ids(store: &EntryStore, ids: &[usize]) -> AppResult<usize> {
        let entries = queries::load_entries(store)?;
        if entries.is_empty() {
            return Err(AppError::NoEntries);
        }

        let mut positions = Vec::with_capacity(ids.len());
        for &id in ids {
            if id == 0 || id > entries.len() {
                return Err(AppError::InvalidEntryId(id));
            }
            positions.push(id - 1);
        }
        positions.sort_unstable();
        positions.dedup();

        queries::delete_positions(store, &positions)?;
        Ok(positions.len())
    }

    /// Delete every entry logged on the given date.
    pub fn apply_date(store: &EntryStore, date: NaiveDate) -> AppResult<usize> {
        let entries = queries::load_entries(store)?;

        let positions: Vec<usize> = entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_on(date))
            .map(|(i, _)| i)
            .collect();

        if positions.is_empty() {
            return Err(AppError::NoEntriesForDate(date.to_string()));
        }

        queries::delete_positions(store, &positions)?;
        Ok(positions.len())
    }
}
