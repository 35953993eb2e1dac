//! Store liveness check

use anyhow::{Context, Result};
use itemctl_server::{StoreConfig, StoreGateway};

use crate::config::StoreArgs;

/// Open the store, ping it, close it.
pub async fn run_ping(args: StoreArgs) -> Result<()> {
    let config = StoreConfig::from(args);
    let gateway = StoreGateway::open(&config)
        .await
        .context("Failed to connect to database")?;
    gateway.close().await;

    println!("database reachable");
    Ok(())
}
