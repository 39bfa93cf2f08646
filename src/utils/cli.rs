//! Running the CLI

// Allow exits because in this file we ideally handle all errors with known exit codes
#![allow(clippy::exit)]

use crate::server::app::serve;
use clap::Parser;
use std::env;

/// Vitrine serves a portfolio's project list and keeps it in sync
/// with the configured account's public repositories.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Vitrine cli subcommands
    #[command(subcommand)]
    subcommands: Subcommands,
}

///
#[derive(Clone, clap::Subcommand)]
enum Subcommands {
    /// Run the portfolio HTTP server
    Serve {
        /// Port on which to listen.
        #[arg(short, long, default_value_t = 9001)]
        port: u16,
    },
}

///
fn init_tracing() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();
}

/// Main entrypoint to application
///
/// # Errors
/// Errors if the server cannot bind its listening port.
pub fn run() -> std::io::Result<()> {
    init_tracing();
    tracing::debug!("Starting application");
    let cli = Cli::parse();
    let Ok(account) = env::var("SOURCE_ACCOUNT") else {
        tracing::error!(
            "error: `SOURCE_ACCOUNT` is not set. Export the account whose repositories should be showcased."
        );
        std::process::exit(1);
    };

    match cli.subcommands {
        Subcommands::Serve { port } => serve(&account, port),
    }
}
