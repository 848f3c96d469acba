use crate::errors::AppResult;
use crate::store::file::EntryStore;
use crate::store::migrate::run_pending_migrations;

/// Initialize the hydration log.
/// Delegates all schema creation / upgrades to the migration engine.
pub fn init_store(store: &EntryStore) -> AppResult<()> {
    // NO direct file writes here.
    // The schema is guaranteed by migrations.

    run_pending_migrations(store)?;
    Ok(())
}
