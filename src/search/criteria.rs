use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Type selection that matches every property type
pub const ANY_KIND: &str = "Any";

/// Property type constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KindFilter {
    Any,
    /// Case-sensitive exact match against `Property::kind`
    Exactly(String),
}

impl KindFilter {
    pub fn accepts(&self, kind: &str) -> bool {
        match self {
            KindFilter::Any => true,
            KindFilter::Exactly(wanted) => wanted == kind,
        }
    }
}

impl From<&str> for KindFilter {
    fn from(value: &str) -> Self {
        if value == ANY_KIND {
            KindFilter::Any
        } else {
            KindFilter::Exactly(value.to_string())
        }
    }
}

/// Search parameters for narrowing the catalog.
/// Every field is optional; an unset field imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Property type (House, Flat, or Any)
    pub kind: Option<KindFilter>,
    /// Minimum price, inclusive
    pub min_price: Option<i64>,
    /// Maximum price, inclusive
    pub max_price: Option<i64>,
    /// Minimum number of bedrooms, inclusive
    pub min_bedrooms: Option<i64>,
    /// Maximum number of bedrooms, inclusive
    pub max_bedrooms: Option<i64>,
    /// Case-insensitive substring of the postal code area
    pub postal_code_area: Option<String>,
    /// Listed on or after this date
    pub added_after: Option<NaiveDate>,
}

impl SearchCriteria {
    pub fn with_kind(self, kind: impl Into<KindFilter>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..self
        }
    }

    pub fn with_price_range(self, min: Option<i64>, max: Option<i64>) -> Self {
        Self {
            min_price: min,
            max_price: max,
            ..self
        }
    }

    pub fn with_bedroom_range(self, min: Option<i64>, max: Option<i64>) -> Self {
        Self {
            min_bedrooms: min,
            max_bedrooms: max,
            ..self
        }
    }

    pub fn with_postal_code_area(self, area: impl Into<String>) -> Self {
        Self {
            postal_code_area: Some(area.into()),
            ..self
        }
    }

    pub fn with_added_after(self, date: NaiveDate) -> Self {
        Self {
            added_after: Some(date),
            ..self
        }
    }

    /// True when no field constrains the result.
    pub fn is_unconstrained(&self) -> bool {
        let postal_unset = self
            .postal_code_area
            .as_deref()
            .map_or(true, str::is_empty);
        self.kind.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.min_bedrooms.is_none()
            && self.max_bedrooms.is_none()
            && postal_unset
            && self.added_after.is_none()
    }
}
