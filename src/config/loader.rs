//! Configuration loading with defaults

use std::path::Path;

use crate::errors::{Result, StudioflowError};
use crate::fs;
use crate::schemas::Config;

/// Highest config schema version this build understands.
pub const SUPPORTED_SCHEMA_VERSION: u32 = 1;

/// Load configuration from `root`, falling back to defaults.
///
/// If `.studioflow/config.json` exists it is read and missing fields take
/// their defaults. If it doesn't exist, the default configuration is returned.
///
/// # Errors
/// * `InvalidJson` - If the file cannot be parsed
/// * `ConfigError` - If the file declares a newer schema version
pub fn load_config(root: &Path) -> Result<Config> {
    let config = fs::read_config(root)?;
    if config.schema_version > SUPPORTED_SCHEMA_VERSION {
        return Err(StudioflowError::ConfigError(format!(
            "config schema_version {} is newer than supported version {}",
            config.schema_version, SUPPORTED_SCHEMA_VERSION
        )));
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::OutputFormat;
    use std::fs as std_fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_defaults() {
        let temp = TempDir::new().unwrap();

        let config = load_config(temp.path()).unwrap();
        assert_eq!(config.schema_version, 1);
        assert!(!config.include_gallery_step);
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_load_config_from_file() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".studioflow");
        std_fs::create_dir(&dir).unwrap();

        let config_content = r#"{
            "include_gallery_step": true,
            "output": "json"
        }"#;
        std_fs::write(dir.join("config.json"), config_content).unwrap();

        let config = load_config(temp.path()).unwrap();
        assert!(config.include_gallery_step);
        assert_eq!(config.output, OutputFormat::Json);
        // Default for unspecified field
        assert_eq!(config.schema_version, 1);
    }

    #[test]
    fn test_load_config_rejects_newer_schema() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".studioflow");
        std_fs::create_dir(&dir).unwrap();
        std_fs::write(dir.join("config.json"), r#"{"schema_version": 2}"#).unwrap();

        let err = load_config(temp.path()).unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");
    }
}
