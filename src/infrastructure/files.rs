//! File helpers used alongside `read_yaml` by pipeline stages
//!
//! Directory creation plus JSON persistence for metrics and small artifacts.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_yaml::Value;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

use crate::domain::error::ConfigError;
use crate::domain::models::config_box::yaml_type_name;
use crate::domain::models::ConfigBox;
use crate::infrastructure::logging::Logger;

/// Errors from the JSON helpers
#[derive(Error, Debug)]
pub enum FileError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Create every directory in `paths`, parents included
///
/// Existing directories are left alone. With `verbose`, one line is logged
/// per directory.
pub fn create_directories<P: AsRef<Path>>(
    logger: &Logger,
    paths: &[P],
    verbose: bool,
) -> io::Result<()> {
    for path in paths {
        let path = path.as_ref();
        fs::create_dir_all(path)?;
        if verbose {
            logger.info(format_args!("created directory at: {}", path.display()));
        }
    }
    Ok(())
}

/// Write `value` as JSON with four-space indentation
pub fn save_json<T: Serialize + ?Sized>(
    logger: &Logger,
    path: impl AsRef<Path>,
    value: &T,
) -> Result<(), FileError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    writer.flush()?;

    logger.info(format_args!("json file saved at: {}", path.display()));
    Ok(())
}

/// Read a JSON object into a [`ConfigBox`]
pub fn load_json(logger: &Logger, path: impl AsRef<Path>) -> Result<ConfigBox, FileError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let config = match serde_json::from_str::<Value>(&content)? {
        Value::Mapping(mapping) => ConfigBox::try_from(mapping)?,
        other => {
            return Err(ConfigError::NotAMapping {
                found: yaml_type_name(&other),
            }
            .into())
        }
    };

    logger.info(format_args!(
        "json file loaded successfully from: {}",
        path.display()
    ));
    Ok(config)
}
