use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::status::GoalProgress;
use crate::errors::{AppError, AppResult};
use crate::store::file::EntryStore;
use crate::store::initialize::init_store;
use crate::store::queries;
use crate::ui::messages::{droplet, info, success};
use crate::utils::date;

/// Show the daily total against the goal.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { date: date_str } = cmd {
        let day = match date_str {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.into()))?,
            None => date::today(),
        };

        let store = EntryStore::new(&cfg.data_file);
        init_store(&store)?;
        let entries = queries::load_entries(&store)?;

        let progress = GoalProgress::compute(&entries, day, cfg.daily_goal_ml);

        droplet(format!(
            "{}: {} / {} ml",
            progress.date, progress.total_ml, progress.goal_ml
        ));

        if progress.reached() {
            success("Daily goal reached!");
        } else {
            info(format!("{} ml to go.", progress.remaining_ml()));
        }
    }

    Ok(())
}
