//! JSON file operations with schema validation
//!
//! Provides functions to read snapshot and config files with serde validation.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::{Result, StudioflowError};
use crate::schemas::{Config, ProjectSnapshot};

use super::paths::get_config_path;

/// Read and deserialize a JSON file.
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidJson` - If the file is not valid JSON or does not match the expected schema
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StudioflowError::FileNotFound(format!("File not found: {}", path.display()))
        } else {
            StudioflowError::Io(e)
        }
    })?;

    serde_json::from_str(&content).map_err(|e| {
        StudioflowError::InvalidJson(format!("Invalid JSON in file {}: {}", path.display(), e))
    })
}

/// Read the config.json file under `root`, or defaults if there is none.
pub fn read_config(root: &Path) -> Result<Config> {
    let path = get_config_path(root);
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    debug!(path = %path.display(), "reading config");
    read_json(&path)
}

/// Read a project snapshot file.
pub fn read_snapshot(path: &Path) -> Result<ProjectSnapshot> {
    debug!(path = %path.display(), "reading project snapshot");
    read_json(path)
}
