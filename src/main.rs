//! acadsched - print the initial study-program listing.
//!
//! Thin CLI front for the client library: loads configuration from the
//! environment, fetches the first page of study programs, and prints it.
//! An unreachable backend prints an empty listing rather than failing.

use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use acadsched::loader::load_initial_study_programs;
use acadsched::{ApiClient, Config};

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let config = Config::from_env()?;
    let mut client = ApiClient::new(config.base_url)?;
    if let Some(token) = config.access_token {
        client.set_token(token);
    }

    let study_programs = load_initial_study_programs(&client).await;
    info!(count = study_programs.len(), "loaded initial study programs");

    if study_programs.is_empty() {
        println!("No study programs available.");
        return Ok(());
    }

    for program in &study_programs {
        println!("{:>6}  {:<40}  {}", program.id, program.name, program.faculty_name);
    }

    Ok(())
}
