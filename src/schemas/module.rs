//! Module schema - Pipeline positions and the normalized module view

use serde::{Deserialize, Serialize};

use super::ModuleStatus;

/// The four deliverables of a project, in pipeline order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleKind {
    Proposal,
    Moodboard,
    Selection,
    Gallery,
}

impl ModuleKind {
    /// All kinds in pipeline order. Index `i` holds the kind at position `i + 1`.
    pub const ALL: [ModuleKind; 4] = [
        ModuleKind::Proposal,
        ModuleKind::Moodboard,
        ModuleKind::Selection,
        ModuleKind::Gallery,
    ];

    /// 1-based pipeline position.
    pub fn position(&self) -> u8 {
        match self {
            ModuleKind::Proposal => 1,
            ModuleKind::Moodboard => 2,
            ModuleKind::Selection => 3,
            ModuleKind::Gallery => 4,
        }
    }

    /// 0-based index into a four-slot module array.
    pub fn index(&self) -> usize {
        usize::from(self.position() - 1)
    }

    /// Look up the kind at a 1-based position. Returns None outside 1..=4.
    pub fn from_position(position: u8) -> Option<ModuleKind> {
        match position {
            1..=4 => Some(Self::ALL[usize::from(position - 1)]),
            _ => None,
        }
    }

    /// Whether this kind ever enters the given status.
    ///
    /// Only the proposal (deposit) and the gallery (final payment) collect
    /// money, so they are the only kinds that pass through `payment_pending`.
    pub fn uses_status(&self, status: ModuleStatus) -> bool {
        match status {
            ModuleStatus::PaymentPending => self.collects_payment(),
            _ => true,
        }
    }

    /// Whether validating this kind leads to a payment step.
    pub fn collects_payment(&self) -> bool {
        matches!(self, ModuleKind::Proposal | ModuleKind::Gallery)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleKind::Proposal => "proposal",
            ModuleKind::Moodboard => "moodboard",
            ModuleKind::Selection => "selection",
            ModuleKind::Gallery => "gallery",
        }
    }
}

impl std::fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for ModuleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "proposal" => Ok(ModuleKind::Proposal),
            "moodboard" => Ok(ModuleKind::Moodboard),
            "selection" => Ok(ModuleKind::Selection),
            "gallery" => Ok(ModuleKind::Gallery),
            other => other
                .parse::<u8>()
                .ok()
                .and_then(ModuleKind::from_position)
                .ok_or_else(|| format!("Unknown module kind: {}", s)),
        }
    }
}

/// Canonical `{exists, status}` view of one module slot.
///
/// `status` is None either when the module is absent or when its stored
/// status is not a recognized value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NormalizedModule {
    pub exists: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ModuleStatus>,
}

impl NormalizedModule {
    /// A slot with no module.
    pub const ABSENT: NormalizedModule = NormalizedModule {
        exists: false,
        status: None,
    };

    /// A present module with a known status.
    pub fn present(status: ModuleStatus) -> Self {
        NormalizedModule {
            exists: true,
            status: Some(status),
        }
    }

    /// Present and `completed`.
    pub fn is_completed(&self) -> bool {
        self.exists && self.status == Some(ModuleStatus::Completed)
    }

    /// Present and anything other than `completed`, including unknown statuses.
    pub fn is_open(&self) -> bool {
        self.exists && !self.is_completed()
    }
}

impl From<Option<ModuleStatus>> for NormalizedModule {
    fn from(status: Option<ModuleStatus>) -> Self {
        match status {
            Some(status) => NormalizedModule::present(status),
            None => NormalizedModule::ABSENT,
        }
    }
}
