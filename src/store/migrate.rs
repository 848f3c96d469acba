//! Schema checks for the hydration log file.
//!
//! Three cases are handled before any other access:
//! - no file yet: create an empty log with the current header
//! - legacy one-row-per-day schema: rewrite every row as a single entry
//! - anything else that is not the current schema: start over empty

use crate::errors::AppResult;
use crate::store::file::{EntryStore, HEADERS, LEGACY_HEADERS};
use crate::ui::messages::{success, warning};
use csv::StringRecord;

fn is_current_schema(headers: &StringRecord) -> bool {
    headers.len() == HEADERS.len()
        && headers.iter().zip(HEADERS).all(|(h, want)| h.trim() == want)
}

fn is_legacy_schema(headers: &StringRecord) -> bool {
    headers.len() == LEGACY_HEADERS.len()
        && headers
            .iter()
            .zip(LEGACY_HEADERS)
            .all(|(h, want)| h.trim() == want)
}

/// Rewrite legacy `(date, daily total)` rows as one entry per day at a
/// synthetic midnight time, so each day's historical total survives under
/// the per-event schema.
fn migrate_legacy_rows(store: &EntryStore, rows: &[StringRecord]) -> AppResult<()> {
    let migrated: Vec<[String; 3]> = rows
        .iter()
        .map(|rec| {
            let date = rec.get(0).unwrap_or("").to_string();
            let total: u32 = rec
                .get(1)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(0);
            [date, "00:00:00".to_string(), total.to_string()]
        })
        .collect();

    store.write_rows(&migrated)?;

    success(format!(
        "Migrated {} legacy daily totals to per-entry rows.",
        migrated.len()
    ));
    Ok(())
}

/// Public entry point: bring the log file to the current schema.
///
/// Idempotent: a file already in the current schema is left untouched, so
/// repeated calls produce byte-identical content.
pub fn run_pending_migrations(store: &EntryStore) -> AppResult<()> {
    if !store.exists() {
        store.write_rows(&[])?;
        return Ok(());
    }

    // A file that cannot even be read as a table is treated like a schema
    // mismatch below, not surfaced as an error.
    let Ok((headers, rows)) = store.read_raw() else {
        warning(format!(
            "Unreadable hydration log at {} — reinitializing empty.",
            store.path.display()
        ));
        return store.write_rows(&[]);
    };

    if is_current_schema(&headers) {
        return Ok(());
    }

    if is_legacy_schema(&headers) {
        warning("Legacy daily-total schema detected — migrating...");
        return migrate_legacy_rows(store, &rows);
    }

    warning(format!(
        "Unrecognized columns in {} — reinitializing empty log.",
        store.path.display()
    ));
    store.write_rows(&[])
}
