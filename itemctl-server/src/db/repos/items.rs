//! Item repository
//!
//! One SQL statement per operation:
//! - create: INSERT ... RETURNING
//! - update: UPDATE ... RETURNING (full replacement, atomic)
//! - delete: DELETE, NotFound when no row was affected

use sqlx::{FromRow, SqlitePool};

use crate::models::{ItemFields, ItemId, Pagination};

/// Item record from database
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub tax: Option<f64>,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    fn item_not_found(id: ItemId) -> Self {
        Self::NotFound {
            resource: "item",
            id: id.to_string(),
        }
    }
}

/// Item repository
pub struct ItemRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ItemRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new item and return it with its assigned id.
    #[tracing::instrument(skip_all, fields(name = fields.name()))]
    pub async fn create(&self, fields: &ItemFields) -> Result<Item, DbError> {
        let item: Item = sqlx::query_as(
            r#"
            INSERT INTO items (name, description, price, tax)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, description, price, tax
            "#,
        )
        .bind(fields.name())
        .bind(fields.description())
        .bind(fields.price())
        .bind(fields.tax())
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(id = item.id, "item created");
        Ok(item)
    }

    /// List items in insertion order.
    pub async fn list(&self, page: Pagination) -> Result<Vec<Item>, DbError> {
        let items: Vec<Item> = sqlx::query_as(
            r#"
            SELECT id, name, description, price, tax
            FROM items
            ORDER BY id ASC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(page.sql_limit())
        .bind(page.sql_offset())
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }

    /// Get a single item by id.
    pub async fn get(&self, id: ItemId) -> Result<Item, DbError> {
        sqlx::query_as("SELECT id, name, description, price, tax FROM items WHERE id = ?")
            .bind(id.get())
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::item_not_found(id))
    }

    /// Replace every mutable field of an item.
    ///
    /// Omitted optional fields are written as NULL.
    #[tracing::instrument(skip(self, fields), fields(id = %id))]
    pub async fn update(&self, id: ItemId, fields: &ItemFields) -> Result<Item, DbError> {
        sqlx::query_as(
            r#"
            UPDATE items
            SET name = ?, description = ?, price = ?, tax = ?
            WHERE id = ?
            RETURNING id, name, description, price, tax
            "#,
        )
        .bind(fields.name())
        .bind(fields.description())
        .bind(fields.price())
        .bind(fields.tax())
        .bind(id.get())
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::item_not_found(id))
    }

    /// Delete an item by id.
    #[tracing::instrument(skip(self), fields(id = %id))]
    pub async fn delete(&self, id: ItemId) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id.get())
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::item_not_found(id));
        }
        Ok(())
    }

    /// Count stored items.
    pub async fn count(&self) -> Result<i64, DbError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM items")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}
