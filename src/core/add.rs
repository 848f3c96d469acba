use crate::errors::AppResult;
use crate::models::entry::Entry;
use crate::store::file::EntryStore;
use crate::store::{queries, stats};
use chrono::NaiveDateTime;

pub struct AddLogic;

impl AddLogic {
    /// Append one intake event at the given instant.
    ///
    /// Returns the stored entry together with the running total for its
    /// day, so the caller can report progress toward the goal.
    pub fn apply(
        store: &EntryStore,
        amount_ml: u32,
        at: NaiveDateTime,
    ) -> AppResult<(Entry, u32)> {
        let entry = queries::append_entry(store, amount_ml, at)?;

        let entries = queries::load_entries(store)?;
        let total = stats::daily_total(&entries, at.date());

        Ok((entry, total))
    }
}
