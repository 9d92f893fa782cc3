//! Next command - Decide where an action leads

use tracing::warn;

use crate::cli::{parse_action, parse_kind, parse_status};
use crate::domain::{decide_transition, TransitionResult};
use crate::errors::Result;

/// Print the status an action leads to, or why it is rejected
pub async fn run(kind: &str, status: &str, action: &str) -> Result<()> {
    let kind = parse_kind(kind)?;
    let status = parse_status(status)?;
    let action = parse_action(action)?;

    match decide_transition(kind, status, action) {
        TransitionResult::Success { from, to } => println!("{} -> {}", from, to),
        TransitionResult::Error { error } => {
            warn!(%kind, %status, %action, "action rejected");
            println!("rejected: {}", error);
        }
    }
    Ok(())
}
