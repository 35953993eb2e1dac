//! HTTP server command
//!
//! Opens the store, serves `/` until SIGINT/SIGTERM, then closes the store.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use itemctl_server::http::server::{DEFAULT_ALLOW_ORIGIN, DEFAULT_PORT};
use itemctl_server::{lifecycle, run_server, IdGenerator, ItemRepo, ServerConfig, StoreConfig, StoreGateway};
use tokio_util::sync::CancellationToken;

use crate::config::StoreArgs;

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, env = "BIND_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Origin sent in Access-Control-Allow-Origin (CORS)
    #[arg(long, env = "CORS_ALLOW_ORIGIN", default_value = DEFAULT_ALLOW_ORIGIN)]
    pub allow_origin: String,

    #[command(flatten)]
    pub store: StoreArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = ServerConfig::new(SocketAddr::new(args.host, args.port), &args.allow_origin)
        .context("Invalid server configuration")?;

    let store_config = StoreConfig::from(args.store);
    let gateway = StoreGateway::open(&store_config)
        .await
        .context("Failed to connect to database")?;

    let repo = ItemRepo::new(gateway.pool().clone(), IdGenerator::new());

    let shutdown = CancellationToken::new();
    let signals = lifecycle::spawn_signal_listener(shutdown.clone());

    tracing::info!("Starting item server on {}", config.bind_addr);
    let served = run_server(Arc::new(repo), config, shutdown.clone()).await;

    // Server may have stopped on its own (bind error); release the listener task.
    shutdown.cancel();
    if let Err(e) = signals.await {
        tracing::warn!("signal listener ended abnormally: {}", e);
    }

    gateway.close().await;
    served.context("Server error")?;

    Ok(())
}
