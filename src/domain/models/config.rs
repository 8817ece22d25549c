use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory holding the log file, relative to the working directory
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Name of the log file inside [`DEFAULT_LOG_DIR`]
pub const DEFAULT_LOG_FILE: &str = "logging.log";

/// Runtime settings for the datascience tooling
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Settings {
    /// Logging configuration
    #[serde(default)]
    pub logging: LogSettings,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LogSettings {
    /// Minimum level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for the log file, created on startup
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,

    /// Log file name inside `log_dir`
    #[serde(default = "default_log_file_name")]
    pub file_name: String,

    /// Also write every line to stdout
    #[serde(default = "default_true")]
    pub enable_stdout: bool,
}

impl LogSettings {
    /// Full path of the file sink
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(&self.file_name)
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_dir() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_DIR)
}

fn default_log_file_name() -> String {
    DEFAULT_LOG_FILE.to_string()
}

const fn default_true() -> bool {
    true
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_dir: default_log_dir(),
            file_name: default_log_file_name(),
            enable_stdout: default_true(),
        }
    }
}
