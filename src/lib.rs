//! Studioflow - Workflow coordination for client-facing creative projects
//!
//! A project moves through four deliverables (proposal, moodboard,
//! selection, gallery), each with its own lifecycle status. This library
//! provides:
//! - The status catalog and the legal transition table
//! - Normalization of raw module records from the persistence layer
//! - The step accessibility rules across all four modules
//! - Config and snapshot loading plus a small inspection CLI

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fs;
pub mod schemas;

// Re-export commonly used types
pub use errors::{Result, StudioflowError};
pub use schemas::{
    Action, Config, ModuleKind, ModuleStatus, NormalizedModule, ProjectSnapshot, StepAccess,
    StepInfo,
};
