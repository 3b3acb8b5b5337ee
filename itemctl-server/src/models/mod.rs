//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod item;
pub mod pagination;
pub mod validation;

pub use item::{ItemFields, ItemId};
pub use pagination::{Pagination, PaginationParams};
pub use validation::ValidationError;
