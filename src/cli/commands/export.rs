use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;
use crate::store::file::EntryStore;
use crate::store::initialize::init_store;

/// Export the hydration log to a file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let store = EntryStore::new(&cfg.data_file);
        init_store(&store)?;

        ExportLogic::apply(&store, format, file, *force)?;
    }

    Ok(())
}
