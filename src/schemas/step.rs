//! Step schema - Derived per-step accessibility descriptor

use serde::{Deserialize, Serialize};

use super::ModuleStatus;

/// Whether a step can currently be navigated to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepAccess {
    Accessible,
    Locked,
}

impl StepAccess {
    pub fn from_accessible(accessible: bool) -> Self {
        if accessible {
            StepAccess::Accessible
        } else {
            StepAccess::Locked
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StepAccess::Accessible => "accessible",
            StepAccess::Locked => "locked",
        }
    }
}

impl std::fmt::Display for StepAccess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Computed on demand for one pipeline position; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepInfo {
    pub status: StepAccess,
    pub can_view: bool,
    pub can_edit: bool,
    pub module_exists: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_status: Option<ModuleStatus>,
}

impl StepInfo {
    pub fn is_accessible(&self) -> bool {
        self.status == StepAccess::Accessible
    }
}
