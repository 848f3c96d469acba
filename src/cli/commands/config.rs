use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

/// Show the active configuration.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if *print_config {
            println!("Config file    : {}", Config::config_file().display());
            println!("Log file       : {}", cfg.data_file);
            println!("Daily goal     : {} ml", cfg.daily_goal_ml);
            println!("History window : {} days", cfg.history_days);
        }
    }

    Ok(())
}
