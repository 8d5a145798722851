//! Logging setup
//!
//! Log lines always go to stdout. When a log file is configured they are also
//! appended to that file through a non-blocking writer; the returned guard
//! must be held until exit so buffered lines are flushed.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Errors that can occur while installing the subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Log path has no file name: {0}")]
    NoFileName(PathBuf),

    #[error("Failed to open log file: {0}")]
    Appender(#[from] InitError),
}

/// Filter for the given verbosity flags
pub fn filter_for(verbose: u8, quiet: bool) -> EnvFilter {
    if quiet {
        return EnvFilter::new("error");
    }
    match verbose {
        0 => EnvFilter::new("mashina_crawler=info,warn"),
        1 => EnvFilter::new("mashina_crawler=debug,info"),
        2 => EnvFilter::new("mashina_crawler=trace,debug"),
        _ => EnvFilter::new("trace"),
    }
}

/// Opens `path` for appending, creating its directory when missing
pub fn log_file_appender(path: &Path) -> Result<RollingFileAppender, LoggingError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| LoggingError::NoFileName(path.to_path_buf()))?;
    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(directory)?;
    Ok(appender)
}

/// Installs the global subscriber
///
/// # Returns
///
/// * `Ok(Some(guard))` - Logging to stdout and to `log_path`
/// * `Ok(None)` - Logging to stdout only
/// * `Err(LoggingError)` - The log file could not be opened
pub fn init(
    verbose: u8,
    quiet: bool,
    log_path: Option<&Path>,
) -> Result<Option<WorkerGuard>, LoggingError> {
    let (file_layer, guard) = match log_path {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(log_file_appender(path)?);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let console_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false);

    tracing_subscriber::registry()
        .with(filter_for(verbose, quiet))
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}
