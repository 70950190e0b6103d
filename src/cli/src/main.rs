//! ASG CLI entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use asg_cli::commands::{dispatch, Cli};

#[tokio::main]
async fn main() {
    // Initialize tracing (stderr keeps command output clean)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match dispatch(cli).await {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
