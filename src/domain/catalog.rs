//! Status catalog
//!
//! Display metadata for every recognized module status, plus the status
//! predicates used by callers. The catalog is immutable static data.

use serde::Serialize;

use crate::schemas::{ModuleKind, ModuleStatus};

/// Display metadata for one status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusItem {
    pub value: ModuleStatus,
    pub label: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

/// A selectable `{value, label}` pair for presenting status choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusOption {
    pub value: ModuleStatus,
    pub label: &'static str,
}

/// The canonical status catalog, in display order.
pub const STATUS_CATALOG: &[StatusItem] = &[
    StatusItem {
        value: ModuleStatus::Draft,
        label: "Draft",
        description: "Being prepared by the studio, not visible to the client yet",
        icon: "pencil",
        color: "gray",
    },
    StatusItem {
        value: ModuleStatus::AwaitingClient,
        label: "Awaiting client",
        description: "Sent to the client and waiting for an answer",
        icon: "clock",
        color: "blue",
    },
    StatusItem {
        value: ModuleStatus::RevisionRequested,
        label: "Revision requested",
        description: "The client asked for changes",
        icon: "rotate-ccw",
        color: "orange",
    },
    StatusItem {
        value: ModuleStatus::PaymentPending,
        label: "Payment pending",
        description: "Approved by the client, waiting for payment",
        icon: "credit-card",
        color: "purple",
    },
    StatusItem {
        value: ModuleStatus::Completed,
        label: "Completed",
        description: "Approved and settled",
        icon: "check-circle",
        color: "green",
    },
];

pub const COMPLETED_STATUSES: &[ModuleStatus] = &[ModuleStatus::Completed];
pub const DRAFT_STATUSES: &[ModuleStatus] = &[ModuleStatus::Draft];
pub const AWAITING_CLIENT_STATUSES: &[ModuleStatus] = &[ModuleStatus::AwaitingClient];
pub const REVISION_STATUSES: &[ModuleStatus] = &[ModuleStatus::RevisionRequested];
pub const PAYMENT_PENDING_STATUSES: &[ModuleStatus] = &[ModuleStatus::PaymentPending];

/// Statuses in which the owner may still change the module's content.
pub const OWNER_EDITABLE_STATUSES: &[ModuleStatus] =
    &[ModuleStatus::Draft, ModuleStatus::RevisionRequested];

/// Look up display metadata for a raw status string.
///
/// Returns None for unrecognized input so callers can fall back to a
/// neutral rendering.
pub fn get_status_item(status: &str) -> Option<&'static StatusItem> {
    STATUS_CATALOG.iter().find(|item| item.value.as_str() == status)
}

/// Look up display metadata for a typed status.
pub fn status_item(status: ModuleStatus) -> &'static StatusItem {
    // The catalog lists every variant; the match keeps that checked.
    let index = match status {
        ModuleStatus::Draft => 0,
        ModuleStatus::AwaitingClient => 1,
        ModuleStatus::RevisionRequested => 2,
        ModuleStatus::PaymentPending => 3,
        ModuleStatus::Completed => 4,
    };
    &STATUS_CATALOG[index]
}

/// The full option list, in catalog order.
pub fn status_options() -> Vec<StatusOption> {
    STATUS_CATALOG
        .iter()
        .map(|item| StatusOption {
            value: item.value,
            label: item.label,
        })
        .collect()
}

/// The option list restricted to the statuses a module kind can occupy.
pub fn status_options_for(kind: ModuleKind) -> Vec<StatusOption> {
    status_options()
        .into_iter()
        .filter(|option| kind.uses_status(option.value))
        .collect()
}

pub fn is_completed(status: ModuleStatus) -> bool {
    COMPLETED_STATUSES.contains(&status)
}

pub fn is_draft(status: ModuleStatus) -> bool {
    DRAFT_STATUSES.contains(&status)
}

pub fn is_awaiting_client(status: ModuleStatus) -> bool {
    AWAITING_CLIENT_STATUSES.contains(&status)
}

pub fn needs_revision(status: ModuleStatus) -> bool {
    REVISION_STATUSES.contains(&status)
}

pub fn is_payment_pending(status: ModuleStatus) -> bool {
    PAYMENT_PENDING_STATUSES.contains(&status)
}

/// Whether the owner can edit a module in this status.
pub fn is_owner_editable(status: ModuleStatus) -> bool {
    OWNER_EDITABLE_STATUSES.contains(&status)
}
