//! Implementation of the `datascience show` command.

use anyhow::{anyhow, Result};
use clap::Args;
use std::path::PathBuf;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::ConfigValue;
use crate::infrastructure::config::read_yaml;
use crate::infrastructure::logging::Logger;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// YAML file to load
    pub path: PathBuf,

    /// Dotted path of a single value, e.g. `model.params.0`
    #[arg(short, long)]
    pub key: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct ShowOutput {
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub value: ConfigValue,
}

impl CommandOutput for ShowOutput {
    fn to_human(&self) -> String {
        serde_yaml::to_string(&self.value)
            .map(|yaml| yaml.trim_end().to_string())
            .unwrap_or_default()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: &ShowArgs, logger: &Logger, json_mode: bool) -> Result<()> {
    let config = read_yaml(logger, &args.path)?;

    let value = match &args.key {
        Some(key) => config
            .get_path(key)
            .cloned()
            .ok_or_else(|| anyhow!("Key '{}' not found in {}", key, args.path.display()))?,
        None => ConfigValue::Mapping(config),
    };

    output(
        &ShowOutput {
            path: args.path.clone(),
            key: args.key.clone(),
            value,
        },
        json_mode,
    );
    Ok(())
}
