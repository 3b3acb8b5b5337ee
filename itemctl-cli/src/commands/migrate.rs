//! Schema creation command

use anyhow::{Context, Result};
use clap::Parser;

use itemctl_server::db::{create_pool, run_migrations, ItemRepo};

use crate::config::ItemctlConfig;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Create the items table if missing, then exit
pub async fn run_migrate(args: MigrateArgs, config: &ItemctlConfig) -> Result<()> {
    let database_url = args.database_url.unwrap_or_else(|| config.database_url());

    let pool = create_pool(&database_url)
        .await
        .with_context(|| format!("Failed to open database at {}", database_url))?;

    run_migrations(&pool)
        .await
        .context("Failed to create items schema")?;

    let count = ItemRepo::new(&pool)
        .count()
        .await
        .context("Failed to count items")?;
    pool.close().await;

    println!("Schema ready at {} ({} items)", database_url, count);
    Ok(())
}
