//! HTTP server command
//!
//! Opens the database, ensures the schema exists, and serves the item API
//! until Ctrl+C or SIGTERM.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use itemctl_server::db::{create_pool_with_options, run_migrations};
use itemctl_server::http::{run_server, ServerConfig};

use crate::config::ItemctlConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:8000)
    #[arg(long, short = 'b', env = "ITEMCTL_BIND")]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long)]
    pub max_connections: Option<u32>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config: &ItemctlConfig) -> Result<()> {
    let database_url = args.database_url.unwrap_or_else(|| config.database_url());
    let max_connections = args.max_connections.unwrap_or_else(|| config.max_connections());
    let bind = args.bind.unwrap_or_else(|| config.bind());

    tracing::info!(%bind, max_connections, "Starting itemctl server");

    let pool = create_pool_with_options(&database_url, max_connections)
        .await
        .with_context(|| format!("Failed to open database at {}", database_url))?;

    run_migrations(&pool)
        .await
        .context("Failed to create items schema")?;

    let server_config = ServerConfig {
        bind_addr: bind,
        cors_permissive: args.cors_permissive || config.cors_permissive(),
    };

    // Blocks until shutdown
    run_server(pool, server_config)
        .await
        .context("Server error")?;

    Ok(())
}
