//! Validation rules for module actions
//!
//! Guards consulted by mutation endpoints before they persist anything.
//! Each returns a [`ValidationResult`] whose reason is safe to show a user.

use crate::schemas::{Action, ModuleKind, ModuleStatus, ProjectSnapshot};

use super::accessibility::evaluate_step;
use super::catalog::is_draft;
use super::normalizer::normalize_project;
use super::transitions::{decide_transition, TransitionResult};

/// Result of a validation check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the validation passed
    pub valid: bool,

    /// Reason for failure (if valid is false)
    pub reason: Option<String>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        ValidationResult {
            valid: true,
            reason: None,
        }
    }

    /// Create a failed validation result
    pub fn failure(reason: impl Into<String>) -> Self {
        ValidationResult {
            valid: false,
            reason: Some(reason.into()),
        }
    }
}

/// Validate an action against a module's status alone.
pub fn validate_action(kind: ModuleKind, status: ModuleStatus, action: Action) -> ValidationResult {
    match decide_transition(kind, status, action) {
        TransitionResult::Success { .. } => ValidationResult::success(),
        TransitionResult::Error { error } => ValidationResult::failure(error),
    }
}

/// Only drafts may be deleted.
pub fn can_delete(status: ModuleStatus) -> ValidationResult {
    if !is_draft(status) {
        return ValidationResult::failure(format!(
            "only draft modules can be deleted, this one is {}",
            status
        ));
    }
    ValidationResult::success()
}

/// A module can be created when its slot is empty and its step is accessible.
pub fn can_create(kind: ModuleKind, project: &ProjectSnapshot) -> ValidationResult {
    let modules = normalize_project(project);
    if modules[kind.index()].exists {
        return ValidationResult::failure(format!("{} already exists", kind));
    }

    let decision = evaluate_step(kind, &modules);
    if !decision.is_accessible() {
        return ValidationResult::failure(format!(
            "cannot start {}: {}",
            kind,
            decision.describe()
        ));
    }
    ValidationResult::success()
}

/// Validate an action on a module in the context of the whole project.
pub fn can_act(kind: ModuleKind, action: Action, project: &ProjectSnapshot) -> ValidationResult {
    let modules = normalize_project(project);
    let module = modules[kind.index()];
    if !module.exists {
        return ValidationResult::failure(format!("{} does not exist", kind));
    }

    let decision = evaluate_step(kind, &modules);
    if !decision.is_accessible() {
        return ValidationResult::failure(format!("{} is locked: {}", kind, decision.describe()));
    }

    match module.status {
        Some(status) => validate_action(kind, status, action),
        None => ValidationResult::failure(format!("{} has an unrecognized status", kind)),
    }
}
