//! atpl CLI - copy starter project templates into place
//!
//! This is the main entry point for the atpl command-line interface.

mod cli;
mod commands;
mod output;
mod utils;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize rustls crypto provider (required for rustls 0.23+)
    // This must be done before any TLS operations
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    // Parse CLI args
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose, cli.quiet);

    // Run command. All exit-code policy lives here: resolution and copy
    // failures exit 1, a user-declined overwrite is a normal exit 0.
    let result = match cli.template.as_deref() {
        None => {
            commands::print_usage().await;
            return ExitCode::FAILURE;
        }
        Some(cli::LIST_COMMAND) => commands::list::run().await,
        Some(template) => commands::new::run(template, cli.project.as_deref(), cli.force).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    // Diagnostics go to stderr; stdout stays reserved for command output
    // (the `list` command in particular).
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
