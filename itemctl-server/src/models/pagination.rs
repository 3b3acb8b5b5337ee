//! Offset/limit window for list queries

use serde::Deserialize;

/// Maximum items returned by a bounded list
pub const MAX_LIMIT: u32 = 1000;

/// List window. `limit: None` returns every remaining row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub offset: u32,
    pub limit: Option<u32>,
}

impl Pagination {
    /// Create a window, clamping `limit` to 1..=1000.
    pub fn new(offset: u32, limit: Option<u32>) -> Self {
        Self {
            offset,
            limit: limit.map(|l| l.clamp(1, MAX_LIMIT)),
        }
    }

    /// SQL LIMIT value. SQLite treats a negative limit as unbounded.
    pub fn sql_limit(&self) -> i64 {
        self.limit.map(i64::from).unwrap_or(-1)
    }

    /// SQL OFFSET value.
    pub fn sql_offset(&self) -> i64 {
        i64::from(self.offset)
    }
}

/// Query parameters for `GET /items`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        Self::new(params.offset.unwrap_or(0), params.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_by_default() {
        let p = Pagination::from(PaginationParams::default());
        assert_eq!(p.sql_offset(), 0);
        assert_eq!(p.sql_limit(), -1);
    }

    #[test]
    fn clamps_limit() {
        assert_eq!(Pagination::new(0, Some(0)).limit, Some(1));
        assert_eq!(Pagination::new(0, Some(5000)).limit, Some(1000));
        assert_eq!(Pagination::new(10, Some(25)).sql_limit(), 25);
    }
}
