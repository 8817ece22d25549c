use serde_yaml::Value;
use std::fs;
use std::path::Path;

use crate::domain::error::ConfigError;
use crate::domain::models::config_box::yaml_type_name;
use crate::domain::models::ConfigBox;
use crate::infrastructure::logging::Logger;

/// Load a single YAML document as a [`ConfigBox`]
///
/// Logs `yaml file is loaded successfully <path>` at info through `logger`
/// on success. Failures are not logged.
///
/// # Arguments
/// * `logger` - Logging context receiving the success line
/// * `path` - YAML file to read
///
/// # Errors
/// * [`ConfigError::InvalidPath`] - `path` is empty; checked before any I/O
/// * [`ConfigError::EmptyDocument`] - the file is blank, or its document is
///   `null`, an empty mapping or a bare scalar
/// * [`ConfigError::NotAMapping`] - the document is a sequence
/// * [`ConfigError::Io`] / [`ConfigError::Parse`] - the underlying read or
///   parser error, unchanged
/// * [`ConfigError::UnsupportedKey`] / [`ConfigError::DuplicateKey`] - a
///   mapping key cannot be represented as a distinct string
pub fn read_yaml(logger: &Logger, path: impl AsRef<Path>) -> Result<ConfigBox, ConfigError> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(ConfigError::InvalidPath(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(ConfigError::EmptyDocument);
    }

    let config = match untag(serde_yaml::from_str(&content)?) {
        Value::Null => return Err(ConfigError::EmptyDocument),
        Value::Mapping(mapping) if mapping.is_empty() => return Err(ConfigError::EmptyDocument),
        Value::Mapping(mapping) => ConfigBox::try_from(mapping)?,
        // A bare scalar holds no fields to box
        Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            return Err(ConfigError::EmptyDocument)
        }
        other => {
            return Err(ConfigError::NotAMapping {
                found: yaml_type_name(&other),
            })
        }
    };

    logger.info(format_args!(
        "yaml file is loaded successfully {}",
        path.display()
    ));
    Ok(config)
}

fn untag(value: Value) -> Value {
    match value {
        Value::Tagged(tagged) => untag(tagged.value),
        other => other,
    }
}
