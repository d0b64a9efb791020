//! Logging bootstrap for the CLI.
//!
//! One global subscriber serves the whole process: a compact stderr layer
//! for interactive use, plus an optional verbose file layer that keeps a
//! record of long assembly runs.

use crate::error::{CliError, Result};
use std::fs::File;
use std::path::Path;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// The level ceiling selected by the `-q`/`-v` switches. Quiet wins over
/// any verbosity; otherwise a bare invocation logs warnings and each `-v`
/// opens one more level.
fn level_ceiling(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Assembles the subscriber without installing it, so tests can scope it
/// to a single closure instead of claiming the process-wide default.
fn build_subscriber(
    ceiling: LevelFilter,
    log_file: Option<&Path>,
) -> Result<impl tracing::Subscriber + Send + Sync + use<>> {
    let stderr_layer = fmt::layer()
        .compact()
        .with_ansi(true)
        .with_target(false)
        .with_writer(std::io::stderr);

    let file_layer = match log_file {
        Some(path) => {
            let file = File::create(path).map_err(CliError::Io)?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_thread_ids(true)
                    .with_target(true)
                    .with_writer(file),
            )
        }
        None => None,
    };

    Ok(tracing_subscriber::registry()
        .with(ceiling)
        .with(stderr_layer)
        .with(file_layer))
}

/// Installs the global tracing subscriber for this process.
pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<&Path>) -> Result<()> {
    build_subscriber(level_ceiling(verbosity, quiet), log_file)?.init();
    Ok(())
}
