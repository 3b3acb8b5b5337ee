//! Validation error types

use std::fmt;

/// Validation error for item input
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Required field was not supplied
    Missing { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Value doesn't match the required format (e.g., integer id)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Numeric field is NaN or infinite
    NotFinite { field: &'static str },

    /// Numeric field is below zero
    Negative { field: &'static str },

    /// Request body or query could not be decoded
    Malformed { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
            Self::NotFinite { field } => write!(f, "{} must be a finite number", field),
            Self::Negative { field } => write!(f, "{} cannot be negative", field),
            Self::Malformed { reason } => write!(f, "malformed request: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}
