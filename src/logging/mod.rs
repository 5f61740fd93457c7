//! Process-wide log sink.
//!
//! One file-based sink with a fixed file name and a fixed `info` threshold,
//! initialized exactly once at process start and never reconfigured. Library
//! consumers that skip [`init`] simply get no diagnostics; every loader and
//! synthesis path still returns a value.

use std::path::Path;
use tracing::Level;

/// Fixed log file name, appended to on every run.
pub const LOG_FILE_NAME: &str = "firebase-stack.log";

/// Installs the global subscriber writing to `dir/firebase-stack.log`.
///
/// The appender is synchronous and append-only; there is no background
/// writer thread. Panics if a global subscriber is already set, so call it
/// once, from `main`.
pub fn init(dir: impl AsRef<Path>) {
    let appender = tracing_appender::rolling::never(dir.as_ref(), LOG_FILE_NAME);
    tracing_subscriber::fmt()
        .with_writer(appender)
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .with_target(false)
        .init();
}
