//! Project settings discovery.
//!
//! Scans a directory for a YAML settings document and returns the parsed
//! [`ProjectSettings`]. The loader never fails: any scan or parse error is
//! logged against the process-wide sink and the empty settings value is
//! returned instead, so callers always receive a value. Missing required
//! fields are not detected here; they surface later as
//! [`SynthError::MissingField`](crate::synth::SynthError::MissingField) in the
//! declarative layer.
//!
//! # Examples
//!
//! ```rust,no_run
//! use firebase_stack::config::load_project_info;
//!
//! let settings = load_project_info(".");
//! if settings.is_empty() {
//!     eprintln!("no project.yaml found");
//! }
//! ```

pub mod models;


use crate::config::models::ProjectSettings;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{error, info};

/// Name fragment that marks a directory entry as the settings document.
/// Matching is by substring: `my-project.yaml.bak` and `xproject.yamlx`
/// both qualify.
pub const SETTINGS_FILE_MARKER: &str = "project.yaml";

/// Errors swallowed by [`load_project_info`] after logging.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Wrapper for `std::io::Error`.
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    /// Wrapper for `serde_yaml::Error`.
    #[error("failed to parse settings document: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Scans the immediate entries of `dir` for files whose name contains
/// [`SETTINGS_FILE_MARKER`] and parses the last match as YAML.
///
/// Entries are visited in lexicographic file-name order, so with several
/// matching files the lexicographically last one wins deterministically.
/// On any failure (unreadable directory, unparsable document) the error is
/// logged and the empty settings value is returned; a malformed document is
/// never partially applied.
pub fn load_project_info(dir: impl AsRef<Path>) -> ProjectSettings {
    let dir = dir.as_ref();
    match scan_dir(dir) {
        Ok(settings) => settings,
        Err(err) => {
            error!(dir = %dir.display(), %err, "project settings scan failed");
            ProjectSettings::default()
        }
    }
}

fn scan_dir(dir: &Path) -> Result<ProjectSettings, ConfigError> {
    info!(dir = %dir.display(), "scanning for project settings");

    let mut settings = ProjectSettings::default();
    let mut entries = fs::read_dir(dir)?.collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let resolved = std::path::absolute(entry.path())?;
        info!(path = %resolved.display(), "scanned entry");
        if entry.file_name().to_string_lossy().contains(SETTINGS_FILE_MARKER) {
            settings = read_yaml_file(&resolved)?;
        }
    }

    info!(?settings, "project settings resolved");
    Ok(settings)
}

/// Reads and parses one YAML settings document.
pub fn read_yaml_file(path: &Path) -> Result<ProjectSettings, ConfigError> {
    Ok(serde_yaml::from_str(&fs::read_to_string(path)?)?)
}
