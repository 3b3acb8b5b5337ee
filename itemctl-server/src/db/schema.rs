//! Table schema for items
//!
//! Idempotent: safe to run on every startup.

use sqlx::SqlitePool;

/// Create the `items` table and its index if missing.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running item migrations...");

    // AUTOINCREMENT keeps ids from being reused after the newest row is deleted
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT,
            price REAL NOT NULL,
            tax REAL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS ix_items_name ON items (name)")
        .execute(pool)
        .await?;

    tracing::info!("item migrations complete");
    Ok(())
}
