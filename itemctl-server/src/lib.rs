//! itemctl-server: HTTP CRUD service for items
//!
//! Five routes over a single SQLite table:
//! create, list, get, full-replacement update, and delete.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, run_migrations, DbError, Item, ItemRepo};
pub use http::{build_router, run_server, ApiError, ServerConfig};
pub use models::{ItemFields, ItemId, ValidationError};
