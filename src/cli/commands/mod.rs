//! CLI command implementations

pub mod catalog;
pub mod explain;
pub mod next;
pub mod steps;
pub mod transitions;
