//! Whole-pipeline state machine
//!
//! Models a project as the vector of its four module statuses and derives
//! the legal moves from the evaluator and the transition table. Used to
//! check cross-module properties over every reachable state instead of
//! hand-picked scenarios.

use std::collections::{HashSet, VecDeque};

use serde_json::json;

use crate::schemas::{Action, ModuleKind, ModuleStatus, NormalizedModule, ProjectSnapshot};

use super::accessibility::is_step_accessible;
use super::transitions::decide_transition;

/// A move on the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineEvent {
    /// Owner creates the module in `draft`
    Create(ModuleKind),
    /// An action on an existing module
    Apply(ModuleKind, Action),
    /// Owner deletes a draft module
    Delete(ModuleKind),
}

impl PipelineEvent {
    /// Every possible event, legal or not.
    pub fn all() -> Vec<PipelineEvent> {
        ModuleKind::ALL
            .iter()
            .flat_map(|&kind| {
                std::iter::once(PipelineEvent::Create(kind))
                    .chain(Action::ALL.iter().map(move |&action| PipelineEvent::Apply(kind, action)))
                    .chain(std::iter::once(PipelineEvent::Delete(kind)))
            })
            .collect()
    }
}

/// Status of each module slot, in pipeline order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PipelineState {
    pub modules: [Option<ModuleStatus>; 4],
}

impl PipelineState {
    /// A project with no modules.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn status(&self, kind: ModuleKind) -> Option<ModuleStatus> {
        self.modules[kind.index()]
    }

    pub fn normalized(&self) -> [NormalizedModule; 4] {
        self.modules.map(NormalizedModule::from)
    }

    /// Modules that exist and are not completed.
    pub fn open_modules(&self) -> Vec<ModuleKind> {
        ModuleKind::ALL
            .into_iter()
            .filter(|kind| matches!(self.status(*kind), Some(s) if s != ModuleStatus::Completed))
            .collect()
    }

    fn accessible(&self, kind: ModuleKind) -> bool {
        is_step_accessible(kind, &self.normalized())
    }

    fn with_status(mut self, kind: ModuleKind, status: Option<ModuleStatus>) -> Self {
        self.modules[kind.index()] = status;
        self
    }

    /// Create a draft module. None if the slot is taken or the step is locked.
    pub fn create(&self, kind: ModuleKind) -> Option<Self> {
        if self.status(kind).is_some() || !self.accessible(kind) {
            return None;
        }
        Some(self.with_status(kind, Some(ModuleStatus::Draft)))
    }

    /// Apply an action. None if the module is missing, locked, or the action is illegal.
    pub fn apply(&self, kind: ModuleKind, action: Action) -> Option<Self> {
        let current = self.status(kind)?;
        if !self.accessible(kind) {
            return None;
        }
        decide_transition(kind, current, action)
            .next_status()
            .map(|next| self.with_status(kind, Some(next)))
    }

    /// Delete a draft module. None for any other status.
    pub fn delete(&self, kind: ModuleKind) -> Option<Self> {
        match self.status(kind) {
            Some(ModuleStatus::Draft) if self.accessible(kind) => Some(self.with_status(kind, None)),
            _ => None,
        }
    }

    /// Apply one event.
    pub fn step(&self, event: PipelineEvent) -> Option<Self> {
        match event {
            PipelineEvent::Create(kind) => self.create(kind),
            PipelineEvent::Apply(kind, action) => self.apply(kind, action),
            PipelineEvent::Delete(kind) => self.delete(kind),
        }
    }

    /// Every legal event with the state it leads to.
    pub fn successors(&self) -> Vec<(PipelineEvent, PipelineState)> {
        PipelineEvent::all()
            .into_iter()
            .filter_map(|event| self.step(event).map(|next| (event, next)))
            .collect()
    }

    /// All states reachable from the empty pipeline, in breadth-first order.
    pub fn reachable_states() -> Vec<PipelineState> {
        let start = PipelineState::empty();
        let mut seen = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);
        let mut order = Vec::new();

        while let Some(state) = queue.pop_front() {
            order.push(state);
            for (_, next) in state.successors() {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        order
    }

    /// Render as a snapshot the aggregator accepts.
    pub fn to_snapshot(&self) -> ProjectSnapshot {
        ModuleKind::ALL
            .into_iter()
            .fold(ProjectSnapshot::default(), |project, kind| {
                let raw = self
                    .status(kind)
                    .map(|status| json!({ "status": status.as_str() }));
                project.with_module(kind, raw)
            })
    }
}
