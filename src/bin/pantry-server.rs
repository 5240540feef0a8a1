// ABOUTME: Entry point for the pantry HTTP server
// ABOUTME: Initialises logging, then loads configuration, applies flag overrides and opens storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Pantry Server Binary
//!
//! Starts the ingredient selection API.

use anyhow::{Context, Result};
use clap::Parser;
use pantry_server::{
    config::{environment::ServerConfig, DatabaseUrl},
    database_plugins::factory::create_store,
    logging,
    server::PantryServer,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "pantry-server")]
#[command(about = "Pantry - ingredient catalog and selection API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database location (`sqlite:<path>`, `sqlite::memory:` or a file path)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;
    info!("Starting Pantry server");

    let mut config = ServerConfig::from_env()?;
    apply_overrides(&mut config, &args)?;

    let store = create_store(&config.database).await?;

    if let Err(e) = PantryServer::new(config, store).run().await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}

/// Command-line flags win over environment variables
fn apply_overrides(config: &mut ServerConfig, args: &Args) -> Result<()> {
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(url) = args.database_url.as_deref() {
        config.database.url = DatabaseUrl::parse_url(url).context("Invalid --database-url")?;
    }
    Ok(())
}
