//! Infrastructure layer module
//!
//! Adapters that touch the outside world:
//! - Logging (stdout and file sinks)
//! - YAML config loading and runtime settings
//! - File helpers for pipeline artifacts

pub mod config;
pub mod files;
pub mod logging;
