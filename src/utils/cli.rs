//! Running the CLI

// Allow exits because in this file we ideally handle all errors with known exit codes
#![allow(clippy::exit)]

use crate::server::app::serve;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Folio serves a JSON catalogue of authors and books over HTTP,
/// backed by a relational store. Set `DATABASE_URL` to point at a
/// Postgres or `SQLite` database; a local `SQLite` file is used otherwise.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Folio cli subcommands
    #[command(subcommand)]
    subcommands: Subcommands,
}

///
#[derive(Clone, clap::Subcommand)]
enum Subcommands {
    /// Serve the catalogue API
    Serve {
        /// Address to bind to.
        #[arg(short, long, default_value_t = String::from("127.0.0.1"))]
        bind: String,
        /// Port on which to serve the API.
        #[arg(short, long, default_value_t = 8080)]
        port: u16,
    },
}

///
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Main entrypoint to application
///
/// # Errors
/// Errors if the server cannot bind its address.
pub fn run() -> std::io::Result<()> {
    init_tracing();
    tracing::debug!("Starting application");
    let cli = Cli::parse();

    match cli.subcommands {
        Subcommands::Serve { bind, port } => serve(&bind, port),
    }
}
