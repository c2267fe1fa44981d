use super::criteria::{KindFilter, SearchCriteria};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Type choices offered by the search form
pub const PROPERTY_KINDS: [&str; 3] = ["House", "Flat", "Any"];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%B %d, %Y"];

/// Search form exactly as the user filled it in. Text fields hold whatever
/// was typed; [`SearchForm::to_criteria`] turns them into typed bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchForm {
    pub kind: Option<String>,
    pub min_price: String,
    pub max_price: String,
    pub min_bedrooms: String,
    pub max_bedrooms: String,
    pub postal_code_area: String,
    pub added_after: Option<String>,
}

impl SearchForm {
    /// Build criteria from the form. Blank fields are unconstrained. A bound
    /// or date that does not parse is dropped with a warning rather than
    /// rejecting the search.
    pub fn to_criteria(&self) -> SearchCriteria {
        let kind = self
            .kind
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(KindFilter::from);

        let postal_code_area = Some(self.postal_code_area.trim().to_string()).filter(|p| !p.is_empty());

        SearchCriteria {
            kind,
            min_price: field_bound("min price", &self.min_price),
            max_price: field_bound("max price", &self.max_price),
            min_bedrooms: field_bound("min bedrooms", &self.min_bedrooms),
            max_bedrooms: field_bound("max bedrooms", &self.max_bedrooms),
            postal_code_area,
            added_after: self.added_after.as_deref().and_then(field_date),
        }
    }
}

/// Lenient integer parse: leading whitespace, an optional sign, then digits.
/// Anything after the digits is ignored; no digits at all yields `None`.
/// Values beyond the `i64` range saturate to `i64::MAX` / `i64::MIN`.
pub fn parse_bound(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, sign_len) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };
    let digits = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    let number = &trimmed[..sign_len + digits];
    Some(number.parse().unwrap_or(if negative { i64::MIN } else { i64::MAX }))
}

fn field_bound(field: &str, text: &str) -> Option<i64> {
    if text.trim().is_empty() {
        return None;
    }
    let bound = parse_bound(text);
    if bound.is_none() {
        warn!("Ignoring malformed {} '{}'", field, text);
    }
    bound
}

fn field_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let date = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok());
    if date.is_none() {
        warn!("Ignoring malformed added-after date '{}'", text);
    }
    date
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bound_lenient() {
        assert_eq!(parse_bound("200000"), Some(200000));
        assert_eq!(parse_bound("  42"), Some(42));
        assert_eq!(parse_bound("+7"), Some(7));
        assert_eq!(parse_bound("-5"), Some(-5));
        assert_eq!(parse_bound("300k"), Some(300));
        assert_eq!(parse_bound("12.5"), Some(12));
    }

    #[test]
    fn test_parse_bound_failures() {
        assert_eq!(parse_bound(""), None);
        assert_eq!(parse_bound("abc"), None);
        assert_eq!(parse_bound("-"), None);
        assert_eq!(parse_bound("$100"), None);
    }

    #[test]
    fn test_parse_bound_saturates_out_of_range() {
        assert_eq!(parse_bound("9223372036854775807"), Some(i64::MAX));
        assert_eq!(parse_bound("9223372036854775808"), Some(i64::MAX));
        assert_eq!(parse_bound("99999999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_bound("-9223372036854775808"), Some(i64::MIN));
        assert_eq!(parse_bound("-99999999999999999999"), Some(i64::MIN));
    }

    #[test]
    fn test_blank_form_is_unconstrained() {
        assert!(SearchForm::default().to_criteria().is_unconstrained());

        let spaces = SearchForm {
            kind: Some("  ".to_string()),
            min_price: "   ".to_string(),
            postal_code_area: " ".to_string(),
            added_after: Some(String::new()),
            ..SearchForm::default()
        };
        assert!(spaces.to_criteria().is_unconstrained());
    }

    #[test]
    fn test_malformed_bounds_are_dropped() {
        let form = SearchForm {
            min_price: "cheap".to_string(),
            max_price: "500000".to_string(),
            min_bedrooms: "two".to_string(),
            ..SearchForm::default()
        };
        let criteria = form.to_criteria();
        assert_eq!(criteria.min_price, None);
        assert_eq!(criteria.max_price, Some(500000));
        assert_eq!(criteria.min_bedrooms, None);
    }

    #[test]
    fn test_kind_and_postal_code() {
        let form = SearchForm {
            kind: Some("Any".to_string()),
            postal_code_area: " nw1 ".to_string(),
            ..SearchForm::default()
        };
        let criteria = form.to_criteria();
        assert_eq!(criteria.kind, Some(KindFilter::Any));
        assert_eq!(criteria.postal_code_area.as_deref(), Some("nw1"));
    }

    #[test]
    fn test_added_after_formats() {
        let iso = SearchForm {
            added_after: Some("2023-02-01".to_string()),
            ..SearchForm::default()
        };
        assert_eq!(iso.to_criteria().added_after, NaiveDate::from_ymd_opt(2023, 2, 1));

        let long = SearchForm {
            added_after: Some("February 1, 2023".to_string()),
            ..SearchForm::default()
        };
        assert_eq!(long.to_criteria().added_after, NaiveDate::from_ymd_opt(2023, 2, 1));

        let junk = SearchForm {
            added_after: Some("last week".to_string()),
            ..SearchForm::default()
        };
        assert_eq!(junk.to_criteria().added_after, None);
    }
}
