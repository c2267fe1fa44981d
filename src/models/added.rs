use chrono::{Month, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Listing date as stored in the dataset: a numeric year and day with the
/// month spelled out.
///
/// The calendar date is resolved once, when the record is built or
/// deserialized. Month names are matched case-insensitively against full
/// English names and three-letter abbreviations. A record whose month or day
/// cannot be resolved keeps its raw fields but has no calendar date, and never
/// satisfies an "added after" constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AddedFields", into = "AddedFields")]
pub struct AddedDate {
    year: i32,
    month: String,
    day: u32,
    resolved: Option<NaiveDate>,
}

#[derive(Serialize, Deserialize)]
struct AddedFields {
    month: String,
    day: u32,
    year: i32,
}

impl AddedDate {
    pub fn new(year: i32, month: impl Into<String>, day: u32) -> Self {
        let month = month.into();
        let resolved = resolve(year, &month, day);
        Self {
            year,
            month,
            day,
            resolved,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> &str {
        &self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// The calendar date, or `None` when the month name or day is invalid.
    pub fn date(&self) -> Option<NaiveDate> {
        self.resolved
    }
}

impl fmt::Display for AddedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}, {}", self.month, self.day, self.year)
    }
}

impl From<AddedFields> for AddedDate {
    fn from(fields: AddedFields) -> Self {
        Self::new(fields.year, fields.month, fields.day)
    }
}

impl From<AddedDate> for AddedFields {
    fn from(added: AddedDate) -> Self {
        Self {
            month: added.month,
            day: added.day,
            year: added.year,
        }
    }
}

fn resolve(year: i32, month: &str, day: u32) -> Option<NaiveDate> {
    let month: Month = month.trim().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month.number_from_month(), day)
}
