//! Transition table
//!
//! Static adjacency data for module statuses and the `(status, action)`
//! lookup that decides where an action leads. Nothing here mutates or
//! persists a module; callers apply the decided status themselves.

use crate::schemas::{Action, ModuleKind, ModuleStatus};

use super::catalog::{status_options, StatusOption};

/// Every legal `(from, to)` status edge. Pairs not listed are illegal.
pub const TRANSITION_EDGES: &[(ModuleStatus, ModuleStatus)] = &[
    (ModuleStatus::Draft, ModuleStatus::AwaitingClient),
    (ModuleStatus::AwaitingClient, ModuleStatus::RevisionRequested),
    (ModuleStatus::AwaitingClient, ModuleStatus::PaymentPending),
    (ModuleStatus::AwaitingClient, ModuleStatus::Completed),
    (ModuleStatus::RevisionRequested, ModuleStatus::AwaitingClient),
    (ModuleStatus::PaymentPending, ModuleStatus::Completed),
];

/// Kind-independent `(current, action) -> next` lookup.
pub const NEXT_STATUS_TABLE: &[(ModuleStatus, Action, ModuleStatus)] = &[
    (ModuleStatus::Draft, Action::Submit, ModuleStatus::AwaitingClient),
    (ModuleStatus::RevisionRequested, Action::Submit, ModuleStatus::AwaitingClient),
    (ModuleStatus::AwaitingClient, Action::Validate, ModuleStatus::Completed),
    (ModuleStatus::AwaitingClient, Action::RequestRevision, ModuleStatus::RevisionRequested),
    (ModuleStatus::PaymentPending, Action::Payment, ModuleStatus::Completed),
];

/// Whether the ordered pair is a legal edge.
pub fn can_transition_to(from: ModuleStatus, to: ModuleStatus) -> bool {
    TRANSITION_EDGES.contains(&(from, to))
}

/// Kind-aware variant of [`can_transition_to`].
///
/// A kind that collects payment cannot go from `awaiting_client` straight
/// to `completed`, and no kind moves out of or into a status it never
/// occupies.
pub fn can_transition_for(kind: ModuleKind, from: ModuleStatus, to: ModuleStatus) -> bool {
    if !kind.uses_status(from) || !kind.uses_status(to) {
        return false;
    }
    match (from, to) {
        (ModuleStatus::AwaitingClient, ModuleStatus::Completed) => !kind.collects_payment(),
        _ => can_transition_to(from, to),
    }
}

/// Every status directly reachable from `from`.
pub fn reachable_from(from: ModuleStatus) -> Vec<ModuleStatus> {
    TRANSITION_EDGES
        .iter()
        .filter(|(source, _)| *source == from)
        .map(|(_, target)| *target)
        .collect()
}

/// Look up the status an action leads to.
///
/// An unknown `(current, action)` pair is a no-op: `current` comes back
/// unchanged and the caller treats that as a rejected action.
pub fn get_next_status(current: ModuleStatus, action: Action) -> ModuleStatus {
    lookup_next(current, action).unwrap_or(current)
}

/// Kind-aware variant of [`get_next_status`].
///
/// Kinds that collect payment go through `payment_pending` when the client
/// validates instead of completing right away.
pub fn get_next_status_for(kind: ModuleKind, current: ModuleStatus, action: Action) -> ModuleStatus {
    lookup_next_for(kind, current, action).unwrap_or(current)
}

fn lookup_next(current: ModuleStatus, action: Action) -> Option<ModuleStatus> {
    NEXT_STATUS_TABLE
        .iter()
        .find(|(status, act, _)| *status == current && *act == action)
        .map(|(_, _, next)| *next)
}

fn lookup_next_for(kind: ModuleKind, current: ModuleStatus, action: Action) -> Option<ModuleStatus> {
    if !kind.uses_status(current) {
        return None;
    }
    match (current, action) {
        (ModuleStatus::AwaitingClient, Action::Validate) if kind.collects_payment() => {
            Some(ModuleStatus::PaymentPending)
        }
        _ => lookup_next(current, action).filter(|next| kind.uses_status(*next)),
    }
}

/// Legal choices for a module: its current status plus every status the
/// kind can reach from it in one edge.
pub fn get_available_transitions(current: ModuleStatus, kind: ModuleKind) -> Vec<StatusOption> {
    status_options()
        .into_iter()
        .filter(|option| option.value == current || can_transition_for(kind, current, option.value))
        .collect()
}

/// Outcome of deciding an action on one module
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionResult {
    /// The action is legal and moves the module between these statuses
    Success {
        from: ModuleStatus,
        to: ModuleStatus,
    },
    /// The action is not allowed in the current status
    Error {
        /// User-facing reason
        error: String,
    },
}

impl TransitionResult {
    /// Check if the transition was successful
    pub fn is_success(&self) -> bool {
        matches!(self, TransitionResult::Success { .. })
    }

    /// Check if the transition failed
    pub fn is_error(&self) -> bool {
        matches!(self, TransitionResult::Error { .. })
    }

    /// Get the target status if the transition was successful
    pub fn next_status(&self) -> Option<ModuleStatus> {
        match self {
            TransitionResult::Success { to, .. } => Some(*to),
            TransitionResult::Error { .. } => None,
        }
    }

    /// Get the error message if the transition failed
    pub fn error(self) -> Option<String> {
        match self {
            TransitionResult::Success { .. } => None,
            TransitionResult::Error { error } => Some(error),
        }
    }
}

/// Decide what an action does to a module of the given kind and status.
pub fn decide_transition(kind: ModuleKind, current: ModuleStatus, action: Action) -> TransitionResult {
    match lookup_next_for(kind, current, action) {
        Some(next) if can_transition_for(kind, current, next) => TransitionResult::Success {
            from: current,
            to: next,
        },
        _ => TransitionResult::Error {
            error: format!(
                "Cannot {} a {} that is {}",
                action.as_str().replace('_', " "),
                kind,
                current.as_str().replace('_', " ")
            ),
        },
    }
}
