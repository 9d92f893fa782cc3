//! File system utilities for studioflow
//!
//! Provides path resolution and JSON file reading.

mod json;
mod paths;

pub use json::{read_config, read_json, read_snapshot};
pub use paths::{get_config_path, get_studioflow_dir, resolve_cwd, resolve_snapshot_path};
