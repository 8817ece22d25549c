//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::commands::keys::KeysArgs;
use super::commands::show::ShowArgs;

#[derive(Parser, Debug)]
#[command(name = "datascience")]
#[command(about = "Inspect pipeline YAML configs", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Settings file to use instead of datascience.yaml and the environment
    #[arg(long, global = true, value_name = "PATH")]
    pub settings: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a YAML config and print it, or one value from it
    Show(ShowArgs),

    /// List the top-level keys of a YAML config
    Keys(KeysArgs),
}
