//! Schema types for studioflow
//!
//! Serde types shared by the domain logic, the loaders and the CLI.

mod config;
mod module;
mod project;
mod status;
mod step;

pub use config::{Config, OutputFormat};
pub use module::{ModuleKind, NormalizedModule};
pub use project::ProjectSnapshot;
pub use status::{Action, ModuleStatus};
pub use step::{StepAccess, StepInfo};
