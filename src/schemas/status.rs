//! Status schema - Module lifecycle statuses and client/owner actions

use serde::{Deserialize, Serialize};

/// Lifecycle status of an existing module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleStatus {
    /// Being prepared by the owner, not yet shown to the client
    Draft,
    /// Submitted and waiting for the client's answer
    AwaitingClient,
    /// Client asked for changes
    RevisionRequested,
    /// Validated by the client, waiting for payment
    PaymentPending,
    /// Resolved
    Completed,
}

impl ModuleStatus {
    /// Every status, in catalog order.
    pub const ALL: [ModuleStatus; 5] = [
        ModuleStatus::Draft,
        ModuleStatus::AwaitingClient,
        ModuleStatus::RevisionRequested,
        ModuleStatus::PaymentPending,
        ModuleStatus::Completed,
    ];

    /// The persisted string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleStatus::Draft => "draft",
            ModuleStatus::AwaitingClient => "awaiting_client",
            ModuleStatus::RevisionRequested => "revision_requested",
            ModuleStatus::PaymentPending => "payment_pending",
            ModuleStatus::Completed => "completed",
        }
    }
}

impl std::fmt::Display for ModuleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for ModuleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(ModuleStatus::Draft),
            "awaiting_client" => Ok(ModuleStatus::AwaitingClient),
            "revision_requested" => Ok(ModuleStatus::RevisionRequested),
            "payment_pending" => Ok(ModuleStatus::PaymentPending),
            "completed" => Ok(ModuleStatus::Completed),
            _ => Err(format!("Unknown module status: {}", s)),
        }
    }
}

/// An action a caller asks to perform on a module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Owner sends the module to the client
    Submit,
    /// Client approves the module
    Validate,
    /// Client asks for changes
    RequestRevision,
    /// Client pays
    Payment,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::Submit,
        Action::Validate,
        Action::RequestRevision,
        Action::Payment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Submit => "submit",
            Action::Validate => "validate",
            Action::RequestRevision => "request_revision",
            Action::Payment => "payment",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "submit" => Ok(Action::Submit),
            "validate" => Ok(Action::Validate),
            "request_revision" => Ok(Action::RequestRevision),
            "payment" => Ok(Action::Payment),
            _ => Err(format!("Unknown action: {}", s)),
        }
    }
}
