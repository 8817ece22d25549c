//! Datascience - logging bootstrap and YAML configuration loading
//!
//! Small shared layer for data science pipelines: a logging context that
//! writes `[<timestamp>: <LEVEL>: <message>]` lines to stdout and
//! `logs/logging.log`, and a loader that turns one YAML document into an
//! attribute-accessible [`ConfigBox`].
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): the config tree and runtime settings types
//! - **Infrastructure Layer** (`infrastructure`): logging, config loading, file helpers
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```no_run
//! use datascience::{read_yaml, LogSettings, Logger};
//!
//! fn main() -> anyhow::Result<()> {
//!     let logger = Logger::new(&LogSettings::default())?;
//!     let config = read_yaml(&logger, "config/config.yaml")?;
//!     println!("{:?}", config.field("artifacts_root")?);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::error::ConfigError;
pub use domain::models::{ConfigBox, ConfigValue, LogSettings, Settings};
pub use infrastructure::config::{read_yaml, SettingsError, SettingsLoader};
pub use infrastructure::files::{create_directories, load_json, save_json, FileError};
pub use infrastructure::logging::{Logger, LoggingError, LOGGER_NAME};
