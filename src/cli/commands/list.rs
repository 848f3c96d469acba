use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::status::GoalProgress;
use crate::errors::{AppError, AppResult};
use crate::store::file::EntryStore;
use crate::store::initialize::init_store;
use crate::store::queries;
use crate::ui::messages::{header, info};
use crate::utils::date;
use crate::utils::table::{Column, Table};

/// List logged entries with their ids.
///
/// The displayed id is the entry's position in the full log (1-based), so
/// it stays valid as a `del` argument even on a date-filtered view.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        date: date_str,
        all,
    } = cmd
    {
        let store = EntryStore::new(&cfg.data_file);
        init_store(&store)?;
        let entries = queries::load_entries(&store)?;

        if *all {
            header("Hydration log");

            if entries.is_empty() {
                info("The log is empty. Drink some water!");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::right("ID", 4),
                Column::left("Date", 10),
                Column::left("Time", 8),
                Column::right("Amount (ml)", 11),
            ]);
            for (idx, e) in entries.iter().enumerate() {
                table.add_row(vec![
                    (idx + 1).to_string(),
                    e.date_str(),
                    e.time_str(),
                    e.amount_ml.to_string(),
                ]);
            }
            print!("{}", table.render());
            return Ok(());
        }

        let day = match date_str {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.into()))?,
            None => date::today(),
        };

        header(format!("Entries for {}", day));

        let day_rows: Vec<(usize, _)> = entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_on(day))
            .collect();

        if day_rows.is_empty() {
            info("No entries yet for this day. Drink some water!");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::right("ID", 4),
            Column::left("Time", 8),
            Column::right("Amount (ml)", 11),
        ]);
        for (idx, e) in &day_rows {
            table.add_row(vec![
                (idx + 1).to_string(),
                e.time_str(),
                e.amount_ml.to_string(),
            ]);
        }
        print!("{}", table.render());

        let progress = GoalProgress::compute(&entries, day, cfg.daily_goal_ml);
        println!();
        println!(
            "Total: {} ml ({} ml to goal)",
            progress.total_ml,
            progress.remaining_ml()
        );
    }

    Ok(())
}
