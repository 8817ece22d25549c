use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::Settings;
use crate::infrastructure::logging::parse_log_level;

/// Project settings file, looked up in the working directory
pub const SETTINGS_FILE: &str = "datascience.yaml";

/// Prefix for environment overrides, e.g. `DATASCIENCE_LOGGING__LEVEL=debug`
pub const ENV_PREFIX: &str = "DATASCIENCE_";

/// Settings validation errors
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Log file name cannot be empty")]
    EmptyLogFileName,

    #[error("Log directory cannot be empty")]
    EmptyLogDir,
}

/// Settings loader with hierarchical merging
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `datascience.yaml` in the working directory (optional)
    /// 3. Environment variables (`DATASCIENCE_*` prefix, `__` separates nesting)
    pub fn load() -> Result<Settings> {
        let settings: Settings = Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Yaml::file(SETTINGS_FILE))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract settings from figment")?;

        Self::validate(&settings)?;
        Ok(settings)
    }

    /// Load settings from a specific file, ignoring the environment
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Settings> {
        let settings: Settings = Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .with_context(|| format!("Failed to load settings from {}", path.as_ref().display()))?;

        Self::validate(&settings)?;
        Ok(settings)
    }

    /// Validate settings after loading
    pub fn validate(settings: &Settings) -> Result<(), SettingsError> {
        let logging = &settings.logging;

        if parse_log_level(&logging.level).is_err() {
            return Err(SettingsError::InvalidLogLevel(logging.level.clone()));
        }

        if logging.file_name.trim().is_empty() {
            return Err(SettingsError::EmptyLogFileName);
        }

        if logging.log_dir.as_os_str().is_empty() {
            return Err(SettingsError::EmptyLogDir);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.logging.log_dir, PathBuf::from("logs"));
        assert_eq!(settings.logging.file_name, "logging.log");
        SettingsLoader::validate(&settings).expect("Default settings should be valid");
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "logging:\n  level: warn\n  enable_stdout: false").unwrap();
        file.flush().unwrap();

        let settings = SettingsLoader::load_from_file(file.path()).unwrap();

        assert_eq!(settings.logging.level, "warn");
        assert!(!settings.logging.enable_stdout);
        assert_eq!(
            settings.logging.file_name, "logging.log",
            "Default should persist when not overridden"
        );
    }

    #[test]
    fn test_load_from_file_rejects_invalid_level() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "logging:\n  level: chatty").unwrap();
        file.flush().unwrap();

        let err = SettingsLoader::load_from_file(file.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SettingsError>(),
            Some(SettingsError::InvalidLogLevel(level)) if level == "chatty"
        ));
    }

    #[test]
    fn test_env_override() {
        temp_env::with_vars(
            [
                ("DATASCIENCE_LOGGING__LEVEL", Some("debug")),
                ("DATASCIENCE_LOGGING__FILE_NAME", Some("pipeline.log")),
            ],
            || {
                let settings = SettingsLoader::load().unwrap();
                assert_eq!(settings.logging.level, "debug");
                assert_eq!(settings.logging.file_name, "pipeline.log");
                assert_eq!(settings.logging.log_dir, PathBuf::from("logs"));
            },
        );
    }

    #[test]
    fn test_validate_empty_file_name() {
        let mut settings = Settings::default();
        settings.logging.file_name = "  ".to_string();

        assert!(matches!(
            SettingsLoader::validate(&settings),
            Err(SettingsError::EmptyLogFileName)
        ));
    }

    #[test]
    fn test_validate_empty_log_dir() {
        let mut settings = Settings::default();
        settings.logging.log_dir = PathBuf::new();

        assert!(matches!(
            SettingsLoader::validate(&settings),
            Err(SettingsError::EmptyLogDir)
        ));
    }
}
