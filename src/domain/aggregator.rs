//! Workflow aggregator
//!
//! Turns a raw project snapshot into ready-to-use [`StepInfo`] descriptors.
//! Every call recomputes from the snapshot it is given; nothing is cached.

use std::collections::BTreeMap;

use tracing::trace;

use crate::schemas::{ModuleKind, NormalizedModule, ProjectSnapshot, StepAccess, StepInfo};

use super::accessibility::{evaluate_step, AccessDecision};
use super::catalog::is_owner_editable;
use super::normalizer::normalize_project;

/// Steps reported by [`get_project_steps_status`]. The gallery is left out;
/// its state shows through the terminal freeze on the other steps.
pub const REPORTED_STEPS: [ModuleKind; 3] = [
    ModuleKind::Proposal,
    ModuleKind::Moodboard,
    ModuleKind::Selection,
];

/// Build the descriptor for one step from already-normalized modules.
pub fn step_info(step: ModuleKind, modules: &[NormalizedModule; 4]) -> StepInfo {
    let decision = evaluate_step(step, modules);
    let accessible = decision.is_accessible();
    let module = modules[step.index()];

    trace!(
        step = step.position(),
        kind = %step,
        rule = ?decision,
        accessible,
        "evaluated step"
    );

    StepInfo {
        status: StepAccess::from_accessible(accessible),
        can_view: accessible,
        can_edit: accessible && module.exists && module.status.is_some_and(is_owner_editable),
        module_exists: module.exists,
        module_status: module.status,
    }
}

/// Compute the descriptor for one step of a project.
pub fn get_step_status(step: ModuleKind, project: &ProjectSnapshot) -> StepInfo {
    step_info(step, &normalize_project(project))
}

/// Like [`get_step_status`] but addressed by 1-based position.
///
/// Returns None for positions outside 1..=4.
pub fn get_step_status_at(position: u8, project: &ProjectSnapshot) -> Option<StepInfo> {
    ModuleKind::from_position(position).map(|step| get_step_status(step, project))
}

/// Descriptors for steps 1-3, keyed by position.
pub fn get_project_steps_status(project: &ProjectSnapshot) -> BTreeMap<u8, StepInfo> {
    steps_status(project, &REPORTED_STEPS)
}

/// Descriptors for all four steps, keyed by position.
pub fn get_pipeline_steps_status(project: &ProjectSnapshot) -> BTreeMap<u8, StepInfo> {
    steps_status(project, &ModuleKind::ALL)
}

fn steps_status(project: &ProjectSnapshot, steps: &[ModuleKind]) -> BTreeMap<u8, StepInfo> {
    let modules = normalize_project(project);
    steps
        .iter()
        .map(|&step| (step.position(), step_info(step, &modules)))
        .collect()
}

/// Which rule decides a step, for diagnostics.
pub fn explain_step(step: ModuleKind, project: &ProjectSnapshot) -> AccessDecision {
    evaluate_step(step, &normalize_project(project))
}
