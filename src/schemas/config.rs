//! Config schema - Configuration for studioflow

use serde::{Deserialize, Serialize};

/// Output format for CLI reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Main configuration for studioflow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Report the gallery step alongside steps 1-3
    #[serde(default)]
    pub include_gallery_step: bool,

    /// Default output format for `steps`, `transitions` and `catalog`.
    /// `--json` always wins.
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: 1,
            include_gallery_step: false,
            output: OutputFormat::Text,
        }
    }
}
