use super::format::BracketFormat;
use crate::domain::models::LogSettings;
use std::fmt::Display;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::dispatcher::SetGlobalDefaultError;
use tracing::level_filters::LevelFilter;
use tracing::{Dispatch, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{self, InitError, Rotation};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Target attached to every event emitted through a [`Logger`]
pub const LOGGER_NAME: &str = "data science logger";

/// Environment variable overriding the level directive (`RUST_LOG` syntax)
pub const LOG_ENV_VAR: &str = "DATASCIENCE_LOG";

/// Logging initialization errors
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Failed to create log directory {}: {source}", path.display())]
    CreateLogDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to open log file: {0}")]
    Appender(#[from] InitError),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLevel(String),

    #[error("A global logger is already installed: {0}")]
    SetGlobalDefault(#[from] SetGlobalDefaultError),
}

/// Process logging context
///
/// Writes `[<timestamp>: <LEVEL>: <message>]` lines to the log file and,
/// when enabled, to a console sink (stdout unless built with
/// [`Logger::with_console`]). Construct once at startup and hand `&Logger` to
/// whatever needs to log. File writes go through a background worker;
/// dropping the logger flushes them.
///
/// The threshold is `settings.level` unless [`LOG_ENV_VAR`] is set, in which
/// case its directives replace it for both sinks. `DATASCIENCE_LOG=error`
/// therefore silences the info lines `read_yaml` emits, and
/// `DATASCIENCE_LOG=debug` lets debug lines through.
#[derive(Debug)]
pub struct Logger {
    dispatch: Dispatch,
    log_file: PathBuf,
    _guard: WorkerGuard,
}

impl Logger {
    /// Build a logger writing to the log file and stdout
    ///
    /// Does not touch global state. Creates the log directory if missing and
    /// opens the log file in append mode before anything is written.
    ///
    /// # Arguments
    /// * `settings` - Level, log directory, file name and stdout toggle
    ///
    /// # Errors
    /// * [`LoggingError::InvalidLevel`] - `settings.level` is not a known level;
    ///   checked before any I/O
    /// * [`LoggingError::CreateLogDir`] - the log directory cannot be created
    /// * [`LoggingError::Appender`] - the log file cannot be opened
    pub fn new(settings: &LogSettings) -> Result<Self, LoggingError> {
        Self::with_console(settings, io::stdout)
    }

    /// Build a logger whose console sink writes to `console` instead of stdout
    ///
    /// The console sink is still governed by `settings.enable_stdout`. The
    /// binary passes `io::stderr` when stdout carries machine-readable output.
    ///
    /// # Arguments
    /// * `settings` - Level, log directory, file name and console toggle
    /// * `console` - Writer factory for the console sink
    ///
    /// # Errors
    /// Same as [`Logger::new`]
    pub fn with_console<W>(settings: &LogSettings, console: W) -> Result<Self, LoggingError>
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let level = parse_log_level(&settings.level)?;

        fs::create_dir_all(&settings.log_dir).map_err(|source| LoggingError::CreateLogDir {
            path: settings.log_dir.clone(),
            source,
        })?;

        let file_appender = rolling::Builder::new()
            .rotation(Rotation::NEVER)
            .filename_prefix(settings.file_name.as_str())
            .build(&settings.log_dir)?;
        let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

        let env_filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(level).into())
            .with_env_var(LOG_ENV_VAR)
            .from_env_lossy();

        let file_layer = fmt::layer()
            .event_format(BracketFormat)
            .with_ansi(false)
            .with_writer(non_blocking_file);

        let console_layer = settings.enable_stdout.then(|| {
            fmt::layer()
                .event_format(BracketFormat)
                .with_ansi(false)
                .with_writer(console)
        });

        let subscriber = tracing_subscriber::registry()
            .with(env_filter)
            .with(file_layer)
            .with(console_layer);

        Ok(Self {
            dispatch: Dispatch::new(subscriber),
            log_file: settings.log_file(),
            _guard: guard,
        })
    }

    /// Route plain `tracing` macros anywhere in the process through this logger
    ///
    /// # Errors
    /// Returns [`LoggingError::SetGlobalDefault`] if a global subscriber is
    /// already installed
    pub fn install(&self) -> Result<(), LoggingError> {
        tracing::dispatcher::set_global_default(self.dispatch.clone())?;
        Ok(())
    }

    /// Run `f` with this logger as the thread's default subscriber
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    /// Log `message` at debug level
    ///
    /// Dropped under the default `info` threshold.
    ///
    /// # Arguments
    /// * `message` - Line body; written after the timestamp and level
    pub fn debug(&self, message: impl Display) {
        self.in_scope(|| tracing::debug!(target: LOGGER_NAME, "{message}"));
    }

    /// Log `message` at info level
    ///
    /// # Arguments
    /// * `message` - Line body; written after the timestamp and level
    pub fn info(&self, message: impl Display) {
        self.in_scope(|| tracing::info!(target: LOGGER_NAME, "{message}"));
    }

    /// Log `message` at warn level, rendered as `WARNING`
    ///
    /// # Arguments
    /// * `message` - Line body; written after the timestamp and level
    pub fn warn(&self, message: impl Display) {
        self.in_scope(|| tracing::warn!(target: LOGGER_NAME, "{message}"));
    }

    /// Log `message` at error level
    ///
    /// Logging never fails; sink write errors are swallowed by the subscriber.
    ///
    /// # Arguments
    /// * `message` - Line body; written after the timestamp and level
    pub fn error(&self, message: impl Display) {
        self.in_scope(|| tracing::error!(target: LOGGER_NAME, "{message}"));
    }

    /// Path of the file sink
    pub fn log_file(&self) -> &Path {
        &self.log_file
    }
}

/// Parse log level string to Level
///
/// Accepts `warning` as an alias for `warn`, case-insensitively.
///
/// # Errors
/// Returns [`LoggingError::InvalidLevel`] for any other string
pub fn parse_log_level(level: &str) -> Result<Level, LoggingError> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(LoggingError::InvalidLevel(level.to_string())),
    }
}
