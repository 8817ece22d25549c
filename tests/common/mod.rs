//! Common test utilities for integration tests

#![allow(dead_code)]

use datascience::{LogSettings, Logger};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Create a temporary directory for test isolation
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Log settings pointing at `<root>/logs/logging.log`
pub fn log_settings(root: &Path, enable_stdout: bool) -> LogSettings {
    LogSettings {
        log_dir: root.join("logs"),
        enable_stdout,
        ..LogSettings::default()
    }
}

/// Logger writing only to a file under `root`
pub fn file_logger(root: &Path) -> Logger {
    Logger::new(&log_settings(root, false)).expect("Failed to create logger")
}

/// Write `content` to `<dir>/<name>` and return the path
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write fixture");
    path
}

/// Drop the logger so pending lines hit disk, then read the log file
pub fn flush_and_read(logger: Logger) -> String {
    let log_file = logger.log_file().to_path_buf();
    drop(logger);
    fs::read_to_string(log_file).expect("Failed to read log file")
}

/// In-memory console sink; clones share one buffer
#[derive(Clone, Default)]
pub struct ConsoleCapture(Arc<Mutex<Vec<u8>>>);

impl ConsoleCapture {
    /// Everything written so far
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).expect("console output is UTF-8")
    }
}

impl Write for ConsoleCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Logger with the console sink enabled and captured, plus the capture handle
pub fn captured_logger(root: &Path) -> (Logger, ConsoleCapture) {
    let capture = ConsoleCapture::default();
    let sink = capture.clone();
    let logger = Logger::with_console(&log_settings(root, true), move || sink.clone())
        .expect("Failed to create logger");
    (logger, capture)
}

/// Text after the timestamp, e.g. `INFO: message]`
pub fn after_timestamp(line: &str) -> &str {
    line.split_once(": ").map_or(line, |(_, rest)| rest)
}
