//! # inventory-cli
//!
//! Command-line front end for the inventory backend. Every mutation goes
//! through a [`ProductFormController`](inventory_client::ProductFormController),
//! so the CLI gets the same validation, notifications and refresh behaviour
//! as any other page.
//!
//! ## Module Organization
//! - [`commands`] - clap definitions and the list/add/edit/delete handlers
//! - [`error`] - CLI error type and exit codes
//! - [`render`] - product table output

pub mod commands;
pub mod error;
pub mod render;

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub use commands::Cli;
pub use error::{CliError, CliResult};

/// Parses arguments, runs the selected command and maps the outcome to an
/// exit code.
pub async fn run() -> ExitCode {
    let cli = Cli::parse();

    init_tracing();
    info!("Starting inventory CLI");

    let mut out = std::io::stdout();
    match cli.run(&mut out).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=inventory_client=trace` - Show trace for the client crate only
/// - Default: INFO, DEBUG for the inventory crates
///
/// Logs go to stderr so the product table on stdout stays clean.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,inventory=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
