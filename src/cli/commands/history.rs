use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::file::EntryStore;
use crate::store::initialize::init_store;
use crate::store::{queries, stats};
use crate::ui::messages::header;
use crate::utils::date;

const BAR_WIDTH: usize = 20;

/// Proportional intake bar, full once the goal is reached.
fn bar(total_ml: u32, goal_ml: u32) -> String {
    if goal_ml == 0 {
        return String::new();
    }
    let filled = ((total_ml as u64 * BAR_WIDTH as u64) / goal_ml as u64).min(BAR_WIDTH as u64);
    "█".repeat(filled as usize)
}

/// Show daily totals for the trailing window, oldest first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { days, until } = cmd {
        let reference = match until {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.into()))?,
            None => date::today(),
        };

        let days = days.unwrap_or(cfg.history_days).max(1);

        let store = EntryStore::new(&cfg.data_file);
        init_store(&store)?;
        let entries = queries::load_entries(&store)?;

        let window = stats::history(&entries, days, reference);

        header(format!("Last {} days", days));
        for day in &window {
            println!(
                "{}  {:>5} ml  {}",
                day.date,
                day.total_ml,
                bar(day.total_ml, cfg.daily_goal_ml)
            );
        }
    }

    Ok(())
}
