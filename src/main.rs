//! Studioflow CLI - Inspect the workflow state of creative projects

use clap::Parser;
use studioflow::cli::{Cli, Commands};
use studioflow::errors::to_exit_code;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error [{}]: {}", e.code(), e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

async fn run(cli: Cli) -> studioflow::Result<()> {
    match cli.command {
        Some(Commands::Steps {
            snapshot,
            all,
            json,
        }) => studioflow::cli::commands::steps::run(cli.cwd.as_deref(), &snapshot, all, json).await,
        Some(Commands::Explain { snapshot, step }) => {
            studioflow::cli::commands::explain::run(cli.cwd.as_deref(), &snapshot, &step).await
        }
        Some(Commands::Next {
            kind,
            status,
            action,
        }) => studioflow::cli::commands::next::run(&kind, &status, &action).await,
        Some(Commands::Transitions { kind, status, json }) => {
            studioflow::cli::commands::transitions::run(cli.cwd.as_deref(), &kind, &status, json).await
        }
        Some(Commands::Catalog { json }) => {
            studioflow::cli::commands::catalog::run(cli.cwd.as_deref(), json).await
        }
        None => {
            // Default to showing help - clap handles this
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
