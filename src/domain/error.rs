use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a YAML config or reading fields out of it
///
/// `Io` and `Parse` carry the underlying error untouched; their `Display`
/// is the source error's own message.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("yaml file is empty")]
    EmptyDocument,

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid config path: {0:?}")]
    InvalidPath(PathBuf),

    #[error("Config document must be a mapping at the top level, found {found}")]
    NotAMapping { found: &'static str },

    #[error("Unsupported mapping key of type {0}")]
    UnsupportedKey(String),

    #[error("Duplicate mapping key after conversion to string: {0}")]
    DuplicateKey(String),

    #[error("Missing config key: {0}")]
    MissingKey(String),

    #[error("Config key '{key}' expected {expected}, found {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Failed to bind config to schema: {0}")]
    Extract(#[source] serde_yaml::Error),
}

impl ConfigError {
    /// True when the file to load does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io(err) if err.kind() == io::ErrorKind::NotFound)
    }
}
