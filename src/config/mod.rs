use crate::core::calculator::projection::DEFAULT_WORK_DAY_HOURS;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::ensure_file;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod check;

const CONFIG_FILE_NAME: &str = "punch.conf";
const LOG_FILE_NAME: &str = ".clock";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default = "default_work_day_hours")]
    pub work_day_hours: f64,
    #[serde(default)]
    pub debug: bool,
}

fn default_log_file() -> String {
    Config::default_log_path().to_string_lossy().to_string()
}

fn default_work_day_hours() -> f64 {
    DEFAULT_WORK_DAY_HOURS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            work_day_hours: default_work_day_hours(),
            debug: false,
        }
    }
}

impl Config {
    fn home_dir() -> PathBuf {
        dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(Self::home_dir)
                .join("punch")
        } else {
            Self::home_dir().join(".punch")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE_NAME)
    }

    /// Default location of the punch log: `~/.clock`
    pub fn default_log_path() -> PathBuf {
        Self::home_dir().join(LOG_FILE_NAME)
    }

    pub fn log_path(&self) -> PathBuf {
        crate::utils::path::expand_tilde(&self.log_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(Config::default())
        }
    }

    /// Write the configuration file (unless `is_test`) and create the log file.
    pub fn init_all(custom_log: Option<String>, is_test: bool) -> AppResult<Self> {
        let config = Config {
            log_file: custom_log.unwrap_or_else(default_log_file),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            let yaml = serde_yaml::to_string(&config)?;
            fs::write(Self::config_file(), yaml)?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        let log_path = config.log_path();
        ensure_file(&log_path)?;
        success(format!("Log file:    {}", log_path.display()));

        Ok(config)
    }
}
