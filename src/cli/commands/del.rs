use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::{AppError, AppResult};
use crate::store::file::EntryStore;
use crate::store::initialize::init_store;
use crate::ui::messages::{info, success, warning};
use crate::utils::date;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

fn entry_word(n: usize) -> &'static str {
    if n == 1 { "entry" } else { "entries" }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        ids,
        date: date_str,
    } = cmd
    {
        let store = EntryStore::new(&cfg.data_file);
        init_store(&store)?;

        //
        // Delete by date: every entry of that day goes
        //
        if let Some(ds) = date_str {
            let d = date::parse_date(ds).ok_or_else(|| AppError::InvalidDate(ds.into()))?;

            if !ask_confirmation(&format!(
                "Delete ALL entries for {}? This action is irreversible.",
                d
            )) {
                info("Operation cancelled.");
                return Ok(());
            }

            match DeleteLogic::apply_date(&store, d) {
                Ok(n) => success(format!("Deleted {} {} for {}.", n, entry_word(n), d)),
                Err(AppError::NoEntriesForDate(d)) => {
                    info(format!("No entries found for date {}.", d));
                }
                Err(e) => return Err(e),
            }
            return Ok(());
        }

        //
        // Delete by id (as displayed by `list`)
        //
        if ids.is_empty() {
            warning("Nothing to delete: pass entry ids or --date.");
            return Ok(());
        }

        let prompt = if ids.len() == 1 {
            format!("Delete entry #{}? This action is irreversible.", ids[0])
        } else {
            format!(
                "Delete {} entries? This action is irreversible.",
                ids.len()
            )
        };

        if !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let n = DeleteLogic::apply_ids(&store, ids)?;
        success(format!("Deleted {} {}.", n, entry_word(n)));
    }

    Ok(())
}
