//! Item field validation
//!
//! `ItemFields` holds every mutable column of an item. It is the only way
//! to write to the `items` table, so all writes go through the checks below.

use super::ValidationError;

/// Maximum length for item names
pub const MAX_NAME_LEN: usize = 255;

/// Maximum length for item descriptions
pub const MAX_DESCRIPTION_LEN: usize = 4096;

/// Validated mutable fields of an item
#[derive(Debug, Clone, PartialEq)]
pub struct ItemFields {
    name: String,
    description: Option<String>,
    price: f64,
    tax: Option<f64>,
}

impl ItemFields {
    /// Validate and build the mutable fields of an item.
    ///
    /// # Rules
    /// - `name` non-blank, at most 255 characters
    /// - `description` at most 4096 characters
    /// - `price` and `tax` finite and not negative
    ///
    /// # Example
    /// ```
    /// use itemctl_server::models::ItemFields;
    ///
    /// assert!(ItemFields::new("lamp", None, 12.5, Some(1.0)).is_ok());
    /// assert!(ItemFields::new("  ", None, 12.5, None).is_err());
    /// assert!(ItemFields::new("lamp", None, -1.0, None).is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        price: f64,
        tax: Option<f64>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }

        if name.chars().count() > MAX_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "name",
                max: MAX_NAME_LEN,
            });
        }

        if let Some(desc) = &description {
            if desc.chars().count() > MAX_DESCRIPTION_LEN {
                return Err(ValidationError::TooLong {
                    field: "description",
                    max: MAX_DESCRIPTION_LEN,
                });
            }
        }

        check_amount("price", price)?;
        if let Some(tax) = tax {
            check_amount("tax", tax)?;
        }

        Ok(Self {
            name,
            description,
            price,
            tax,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn tax(&self) -> Option<f64> {
        self.tax
    }
}

fn check_amount(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative { field });
    }
    Ok(())
}

/// Item id parsed from a path segment
///
/// Any integer is accepted; ids that were never assigned (zero, negatives)
/// are reported as not found by the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(i64);

impl ItemId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Parse an id from a path segment.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidFormat {
                field: "id",
                reason: "must be an integer",
            })
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
