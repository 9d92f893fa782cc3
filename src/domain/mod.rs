//! Workflow coordination logic
//!
//! Status catalog, transition table, module normalization and the
//! cross-module step accessibility rules. Everything here is pure: no I/O,
//! no shared state.

mod accessibility;
mod aggregator;
mod catalog;
mod normalizer;
mod pipeline;
mod transitions;
mod validation;

// Property-based tests (compiled only in test builds)
#[cfg(test)]
mod property_tests;

pub use accessibility::{evaluate_step, is_step_accessible, AccessDecision};
pub use aggregator::{
    explain_step, get_pipeline_steps_status, get_project_steps_status, get_step_status,
    get_step_status_at, step_info, REPORTED_STEPS,
};
pub use catalog::{
    get_status_item, is_awaiting_client, is_completed, is_draft, is_owner_editable,
    is_payment_pending, needs_revision, status_item, status_options, status_options_for,
    StatusItem, StatusOption, STATUS_CATALOG,
};
pub use normalizer::{normalize_module, normalize_project};
pub use pipeline::{PipelineEvent, PipelineState};
pub use transitions::{
    can_transition_for, can_transition_to, decide_transition, get_available_transitions,
    get_next_status, get_next_status_for, reachable_from, TransitionResult, NEXT_STATUS_TABLE,
    TRANSITION_EDGES,
};
pub use validation::{can_act, can_create, can_delete, validate_action, ValidationResult};
