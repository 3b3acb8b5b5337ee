//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - Connection pool shared through `AppState` - no Arc<Mutex<Connection>>
//! - Rely on DB constraints (NOT NULL, AUTOINCREMENT) for invariants
//! - Single-statement writes so every operation is atomic

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_memory_pool, create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
pub use schema::run_migrations;
