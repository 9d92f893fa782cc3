//! CLI module for studioflow
//!
//! Provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::errors::{Result, StudioflowError};
use crate::schemas::{Action, Config, ModuleKind, ModuleStatus, OutputFormat};

/// Studioflow - Inspect the workflow state of creative projects
#[derive(Parser, Debug)]
#[command(name = "studioflow")]
#[command(version)]
#[command(about = "Inspect step accessibility and legal status transitions for creative projects")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override the working directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the accessibility of each step for a project snapshot
    Steps {
        /// Path to a project snapshot JSON file
        snapshot: PathBuf,

        /// Include the gallery step
        #[arg(long)]
        all: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Explain which rule decides a step's accessibility
    Explain {
        /// Path to a project snapshot JSON file
        snapshot: PathBuf,

        /// Step position (1-4) or module kind (proposal, moodboard, selection, gallery)
        step: String,
    },

    /// Show the status an action leads to
    Next {
        /// Module kind (proposal, moodboard, selection, gallery)
        kind: String,

        /// Current status (draft, awaiting_client, revision_requested, payment_pending, completed)
        status: String,

        /// Action (submit, validate, request_revision, payment)
        action: String,
    },

    /// List the statuses a module can move to
    Transitions {
        /// Module kind (proposal, moodboard, selection, gallery)
        kind: String,

        /// Current status
        status: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the status catalog
    Catalog {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Parse a module kind argument (name or 1-based position).
pub fn parse_kind(value: &str) -> Result<ModuleKind> {
    value.parse().map_err(StudioflowError::InvalidArgument)
}

/// Parse a step argument. Same forms as [`parse_kind`], reported as a bad step.
pub fn parse_step(value: &str) -> Result<ModuleKind> {
    value.parse().map_err(StudioflowError::InvalidStep)
}

/// Whether a command should print JSON: an explicit `--json` flag, or the
/// configured default output format.
pub fn wants_json(flag: bool, config: &Config) -> bool {
    flag || config.output == OutputFormat::Json
}

/// Parse a module status argument.
pub fn parse_status(value: &str) -> Result<ModuleStatus> {
    value.parse().map_err(StudioflowError::InvalidArgument)
}

/// Parse an action argument.
pub fn parse_action(value: &str) -> Result<Action> {
    value.parse().map_err(StudioflowError::InvalidArgument)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps_command() {
        let cli = Cli::try_parse_from(["studioflow", "steps", "snap.json", "--all"]).unwrap();
        match cli.command {
            Some(Commands::Steps { snapshot, all, json }) => {
                assert_eq!(snapshot, PathBuf::from("snap.json"));
                assert!(all);
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_next_command() {
        let cli = Cli::try_parse_from([
            "studioflow",
            "--verbose",
            "next",
            "gallery",
            "awaiting_client",
            "validate",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Next { .. })));
    }

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_kind("2").unwrap(), ModuleKind::Moodboard);
        assert_eq!(parse_kind("invoice").unwrap_err().code(), "INVALID_ARGUMENT");
        assert_eq!(parse_step("3").unwrap(), ModuleKind::Selection);
        assert_eq!(parse_step("9").unwrap_err().code(), "INVALID_STEP");
        assert_eq!(parse_status("completed").unwrap(), ModuleStatus::Completed);
        assert_eq!(parse_status("done").unwrap_err().code(), "INVALID_ARGUMENT");
        assert_eq!(parse_action("payment").unwrap(), Action::Payment);
        assert!(parse_action("pay").is_err());
    }

    #[test]
    fn test_wants_json_follows_config() {
        let text = Config::default();
        let json = Config {
            output: OutputFormat::Json,
            ..Config::default()
        };
        assert!(!wants_json(false, &text));
        assert!(wants_json(true, &text));
        assert!(wants_json(false, &json));
    }
}
