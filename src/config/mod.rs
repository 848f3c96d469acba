use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub data_file: String,
    #[serde(default = "default_goal")]
    pub daily_goal_ml: u32,
    #[serde(default = "default_history_days")]
    pub history_days: usize,
}

fn default_goal() -> u32 {
    3000
}
fn default_history_days() -> usize {
    7
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: Self::data_file().to_string_lossy().to_string(),
            daily_goal_ml: default_goal(),
            history_days: default_history_days(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("hydrolog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".hydrolog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("hydrolog.conf")
    }

    /// Return the default location of the CSV hydration log
    pub fn data_file() -> PathBuf {
        Self::config_dir().join("hydrolog.csv")
    }

    /// Load configuration from file, or fall back to defaults.
    /// A config file that fails to read or parse is reported and ignored so
    /// the tool stays usable.
    pub fn load() -> Self {
        let path = Self::config_file();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warning(format!("Ignoring unreadable config file: {}", e));
                    Self::default()
                }
            },
            Err(e) => {
                warning(format!("Ignoring unreadable config file: {}", e));
                Self::default()
            }
        }
    }

    /// Initialize the configuration file and resolve the log file location.
    /// Returns the path the hydration log will live at.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Log file: user provided or default
        let data_path = if let Some(name) = custom_name {
            let p = expand_tilde(&name);
            if p.is_absolute() { p } else { dir.join(p) }
        } else {
            Self::data_file()
        };

        let config = Config {
            data_file: data_path.to_string_lossy().to_string(),
            daily_goal_ml: default_goal(),
            history_days: default_history_days(),
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(data_path)
    }
}
