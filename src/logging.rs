//! Logging initialisation.
//!
//! Events go to stderr and are appended to a log file. The level filter
//! defaults to `info` and can be overridden with `RUST_LOG`.

use std::sync::Mutex;

use camino::Utf8Path;
use cap_std::fs_utf8::{File, OpenOptions};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::instagram::HarvestError;
use crate::storage::{open_or_create_dir, split_file_path};

const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber writing to stderr and `log_file`.
///
/// # Errors
///
/// Returns [`HarvestError::Io`] when the log file cannot be opened, and
/// [`HarvestError::Configuration`] when a global subscriber is already set.
pub fn init(log_file: &Utf8Path) -> Result<(), HarvestError> {
    let file = open_log_file(log_file)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .try_init()
        .map_err(|error| HarvestError::Configuration {
            message: format!("failed to install logger: {error}"),
        })
}

fn open_log_file(path: &Utf8Path) -> Result<File, HarvestError> {
    let (parent, file_name) = split_file_path(path, "log")?;
    let dir = open_or_create_dir(parent, "log")?;
    dir.open_with(file_name, OpenOptions::new().create(true).append(true))
        .map_err(|error| HarvestError::Io {
            message: format!("failed to open log file '{path}': {error}"),
        })
}
