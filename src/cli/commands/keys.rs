//! Implementation of the `datascience keys` command.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::cli::output::{output, CommandOutput};
use crate::infrastructure::config::read_yaml;
use crate::infrastructure::logging::Logger;

#[derive(Args, Debug)]
pub struct KeysArgs {
    /// YAML file to load
    pub path: PathBuf,
}

#[derive(Debug, serde::Serialize)]
pub struct KeysOutput {
    pub path: PathBuf,
    pub keys: Vec<String>,
}

impl CommandOutput for KeysOutput {
    fn to_human(&self) -> String {
        self.keys.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: &KeysArgs, logger: &Logger, json_mode: bool) -> Result<()> {
    let config = read_yaml(logger, &args.path)?;

    output(
        &KeysOutput {
            path: args.path.clone(),
            keys: config.keys().map(str::to_string).collect(),
        },
        json_mode,
    );
    Ok(())
}
