//! itemctl - item service command-line entry point
//!
//! - `serve`: run the HTTP item service
//! - `ping`: check that the store is reachable

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(name = "itemctl", version, about = "HTTP item service over Postgres")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the item API on `/`
    Serve(commands::ServeArgs),

    /// Check database connectivity and exit
    Ping(config::StoreArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing, so .env values feed the env fallbacks.
    let dotenv = config::load_dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();
    match dotenv {
        Some(path) => tracing::info!("Loaded configuration from {}", path.display()),
        None => tracing::debug!("No .env file found, using environment only"),
    }

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Ping(args) => commands::run_ping(args).await?,
    }

    Ok(())
}
