//! Transitions command - List the legal next statuses for a module

use std::path::Path;

use crate::cli::{parse_kind, parse_status, wants_json};
use crate::config::load_config;
use crate::domain::{get_available_transitions, StatusOption};
use crate::errors::{Result, StudioflowError};
use crate::fs::resolve_cwd;
use crate::schemas::ModuleStatus;

/// Print the available choices for a module of `kind` in `status`
pub async fn run(cwd: Option<&Path>, kind: &str, status: &str, json: bool) -> Result<()> {
    let kind = parse_kind(kind)?;
    let status = parse_status(status)?;
    let config = load_config(&resolve_cwd(cwd))?;
    let options = get_available_transitions(status, kind);

    if wants_json(json, &config) {
        let out = serde_json::to_string_pretty(&options)
            .map_err(|e| StudioflowError::wrap(e, "serializing transitions"))?;
        println!("{}", out);
    } else {
        print!("{}", render_options(status, &options));
    }
    Ok(())
}

pub fn render_options(current: ModuleStatus, options: &[StatusOption]) -> String {
    options
        .iter()
        .map(|option| {
            let marker = if option.value == current { "*" } else { " " };
            format!("{} {:<20} {}\n", marker, option.value, option.label)
        })
        .collect()
}
