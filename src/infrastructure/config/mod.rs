//! Configuration management infrastructure
//!
//! - `read_yaml`: load one YAML document into an attribute-accessible `ConfigBox`
//! - `SettingsLoader`: hierarchical runtime settings using figment
//!   (defaults, optional YAML file, environment overrides)

pub mod loader;
pub mod yaml;

pub use loader::{SettingsError, SettingsLoader, ENV_PREFIX, SETTINGS_FILE};
pub use yaml::read_yaml;
