//! Datascience CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::process::ExitCode;

use datascience::cli::commands::{keys, show};
use datascience::cli::{Cli, Commands};
use datascience::infrastructure::config::SettingsLoader;
use datascience::infrastructure::logging::Logger;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            datascience::cli::handle_error(&err, cli.json);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let settings = match &cli.settings {
        Some(path) => SettingsLoader::load_from_file(path)?,
        None => SettingsLoader::load()?,
    };

    // Stdout carries the JSON document in --json mode, so log lines go to stderr.
    // Dropped at the end of `run`, flushing the file sink.
    let logger = if cli.json {
        Logger::with_console(&settings.logging, io::stderr)
    } else {
        Logger::new(&settings.logging)
    }
    .context("Failed to initialize logging")?;
    logger.install()?;

    match &cli.command {
        Commands::Show(args) => show::execute(args, &logger, cli.json),
        Commands::Keys(args) => keys::execute(args, &logger, cli.json),
    }
}
