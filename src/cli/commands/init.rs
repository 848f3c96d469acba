use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::file::EntryStore;
use crate::store::initialize::init_store;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the CSV hydration log, running any pending schema migration
pub fn handle(cli: &Cli) -> AppResult<()> {
    let data_path = Config::init_all(cli.log.clone(), cli.test)?;

    println!("⚙️  Initializing hydrolog…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Log file   : {}", data_path.display());

    let store = EntryStore::new(&data_path);
    init_store(&store)?;

    println!("✅ Hydration log ready at {}", data_path.display());
    println!("🎉 hydrolog initialization completed!");
    Ok(())
}
