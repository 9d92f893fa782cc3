//! Project snapshot schema - One consistent read of a project's four modules

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ModuleKind;

/// Raw, un-normalized view of a project as handed over by the persistence layer.
///
/// Each module slot keeps whatever shape upstream produced (null, a record,
/// or a list of records) until it goes through the normalizer. All four
/// slots must come from the same read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    /// When the snapshot was read
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub proposal: Option<serde_json::Value>,

    #[serde(default)]
    pub moodboard: Option<serde_json::Value>,

    #[serde(default)]
    pub selection: Option<serde_json::Value>,

    #[serde(default)]
    pub gallery: Option<serde_json::Value>,
}

impl ProjectSnapshot {
    /// The raw value stored for one module kind.
    pub fn module(&self, kind: ModuleKind) -> Option<&serde_json::Value> {
        match kind {
            ModuleKind::Proposal => self.proposal.as_ref(),
            ModuleKind::Moodboard => self.moodboard.as_ref(),
            ModuleKind::Selection => self.selection.as_ref(),
            ModuleKind::Gallery => self.gallery.as_ref(),
        }
    }

    /// Return a new snapshot with one module slot replaced
    pub fn with_module(mut self, kind: ModuleKind, raw: Option<serde_json::Value>) -> Self {
        match kind {
            ModuleKind::Proposal => self.proposal = raw,
            ModuleKind::Moodboard => self.moodboard = raw,
            ModuleKind::Selection => self.selection = raw,
            ModuleKind::Gallery => self.gallery = raw,
        }
        self
    }
}
