use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::AppResult;
use crate::store::file::EntryStore;
use crate::store::initialize::init_store;
use crate::ui::messages::{success, warning};
use crate::utils::time;

/// Log one water intake.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { amount_ml, at } = cmd {
        //
        // 1. Amount bounds are a CLI concern; the store accepts any amount.
        //
        if *amount_ml == 0 {
            warning("Nothing to log: the amount must be greater than 0 ml.");
            return Ok(());
        }

        //
        // 2. Resolve the instant (explicit --at, or the wall clock)
        //
        let instant = match at {
            Some(s) => time::parse_instant(s)?,
            None => time::now(),
        };

        //
        // 3. Open the log
        //
        let store = EntryStore::new(&cfg.data_file);
        init_store(&store)?;

        //
        // 4. Execute logic
        //
        let (entry, total) = AddLogic::apply(&store, *amount_ml, instant)?;

        success(format!(
            "Added {} ml at {} ({} ml on {}).",
            entry.amount_ml,
            entry.time_str(),
            total,
            entry.date_str()
        ));

        if total >= cfg.daily_goal_ml {
            success(format!(
                "🎉 Daily goal reached: {} / {} ml!",
                total, cfg.daily_goal_ml
            ));
        }
    }

    Ok(())
}
