//! bookstack server binary
//!
//! Parses the CLI, wires up logging, and serves the catalog API.

use anyhow::Result;
use bookstack::api::{create_router, AppState};
use bookstack::cli::Cli;
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    let state = AppState::new();
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind((cli.host.as_str(), cli.port)).await?;
    info!("bookstack listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
