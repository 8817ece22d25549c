//! Logging infrastructure
//!
//! Structured logging using tracing, tracing-subscriber and tracing-appender:
//! - `[<timestamp>: <LEVEL>: <message>]` line format
//! - stdout and append-mode file sinks
//! - level threshold with env override

pub mod format;
pub mod logger;

pub use format::{level_name, BracketFormat, TIMESTAMP_FORMAT};
pub use logger::{parse_log_level, Logger, LoggingError, LOGGER_NAME, LOG_ENV_VAR};

// Re-export tracing macros for convenience
pub use tracing::{debug, error, info, instrument, trace, warn};
