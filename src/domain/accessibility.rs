//! Step accessibility evaluator
//!
//! Decides from the normalized state of all four modules whether a step
//! may currently be opened. Rules are checked in order and the first match
//! decides:
//!
//! 1. nothing exists yet: every step is open
//! 2. the gallery is completed: only completed steps stay open
//! 3. the queried module exists: open
//! 4. an earlier module exists and is not completed: locked
//! 5. a later module exists and is not completed: locked
//! 6. otherwise open
//!
//! Together these keep at most one non-completed module alive at a time.

use serde::Serialize;

use crate::schemas::{ModuleKind, NormalizedModule};

/// The rule that settled a step's accessibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "rule")]
pub enum AccessDecision {
    /// No module exists yet
    Bootstrap,
    /// The gallery is completed; the step is open iff its own module is
    TerminalFreeze { completed: bool },
    /// The step's module already exists
    Existing,
    /// An earlier module is still in progress
    BlockedByEarlier { blocker: ModuleKind },
    /// A later module is already in progress
    BlockedByLater { blocker: ModuleKind },
    /// Nothing blocks the step
    Open,
}

impl AccessDecision {
    pub fn is_accessible(&self) -> bool {
        match self {
            AccessDecision::Bootstrap | AccessDecision::Existing | AccessDecision::Open => true,
            AccessDecision::TerminalFreeze { completed } => *completed,
            AccessDecision::BlockedByEarlier { .. } | AccessDecision::BlockedByLater { .. } => {
                false
            }
        }
    }

    /// Short human-readable explanation.
    pub fn describe(&self) -> String {
        match self {
            AccessDecision::Bootstrap => "no module exists yet, every step is open".to_string(),
            AccessDecision::TerminalFreeze { completed: true } => {
                "gallery is completed and this step is completed".to_string()
            }
            AccessDecision::TerminalFreeze { completed: false } => {
                "gallery is completed and this step is not".to_string()
            }
            AccessDecision::Existing => "module already exists".to_string(),
            AccessDecision::BlockedByEarlier { blocker } => {
                format!("{} is still in progress", blocker)
            }
            AccessDecision::BlockedByLater { blocker } => {
                format!("{} is already in progress", blocker)
            }
            AccessDecision::Open => "no other module is in progress".to_string(),
        }
    }
}

/// Work out which rule decides the accessibility of `step`.
pub fn evaluate_step(step: ModuleKind, modules: &[NormalizedModule; 4]) -> AccessDecision {
    if modules.iter().all(|module| !module.exists) {
        return AccessDecision::Bootstrap;
    }

    if modules[ModuleKind::Gallery.index()].is_completed() {
        return AccessDecision::TerminalFreeze {
            completed: modules[step.index()].is_completed(),
        };
    }

    if modules[step.index()].exists {
        return AccessDecision::Existing;
    }

    let (earlier, rest) = modules.split_at(step.index());
    let later = &rest[1..];

    if let Some(offset) = earlier.iter().position(NormalizedModule::is_open) {
        return AccessDecision::BlockedByEarlier {
            blocker: ModuleKind::ALL[offset],
        };
    }

    if let Some(offset) = later.iter().position(NormalizedModule::is_open) {
        return AccessDecision::BlockedByLater {
            blocker: ModuleKind::ALL[step.index() + 1 + offset],
        };
    }

    AccessDecision::Open
}

/// Whether `step` is accessible given the four normalized modules.
pub fn is_step_accessible(step: ModuleKind, modules: &[NormalizedModule; 4]) -> bool {
    evaluate_step(step, modules).is_accessible()
}
