//! Catalog command - Print the status catalog

use std::path::Path;

use crate::cli::wants_json;
use crate::config::load_config;
use crate::domain::{StatusItem, STATUS_CATALOG};
use crate::errors::{Result, StudioflowError};
use crate::fs::resolve_cwd;

pub async fn run(cwd: Option<&Path>, json: bool) -> Result<()> {
    let config = load_config(&resolve_cwd(cwd))?;
    if wants_json(json, &config) {
        let out = serde_json::to_string_pretty(STATUS_CATALOG)
            .map_err(|e| StudioflowError::wrap(e, "serializing catalog"))?;
        println!("{}", out);
    } else {
        print!("{}", render_catalog(STATUS_CATALOG));
    }
    Ok(())
}

pub fn render_catalog(items: &[StatusItem]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                "{:<20} {:<20} {:<8} {:<13} {}\n",
                item.value, item.label, item.color, item.icon, item.description
            )
        })
        .collect()
}
