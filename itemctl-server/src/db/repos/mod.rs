//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - One statement per operation, RETURNING the affected row
//! - NotFound derived from the statement result, never check-then-write

pub mod items;

pub use items::{DbError, Item, ItemRepo};
