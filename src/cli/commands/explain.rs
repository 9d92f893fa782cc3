//! Explain command - Show which rule decides a step

use std::path::Path;

use crate::cli::parse_step;
use crate::domain::{explain_step, AccessDecision};
use crate::errors::Result;
use crate::fs::{read_snapshot, resolve_cwd, resolve_snapshot_path};
use crate::schemas::{ModuleKind, StepAccess};

/// Explain one step of a snapshot file
pub async fn run(cwd: Option<&Path>, snapshot: &Path, step: &str) -> Result<()> {
    let kind = parse_step(step)?;
    let root = resolve_cwd(cwd);
    let project = read_snapshot(&resolve_snapshot_path(&root, snapshot))?;

    println!("{}", render_decision(kind, &explain_step(kind, &project)));
    Ok(())
}

pub fn render_decision(kind: ModuleKind, decision: &AccessDecision) -> String {
    format!(
        "step {} ({}): {} - {}",
        kind.position(),
        kind,
        StepAccess::from_accessible(decision.is_accessible()),
        decision.describe()
    )
}
