use super::criteria::SearchCriteria;
use crate::models::Property;
use serde::Serialize;

pub const NO_MATCHES_MESSAGE: &str = "No properties match your search criteria.";

/// Result of running a search over the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "properties", rename_all = "snake_case")]
pub enum SearchOutcome {
    Matches(Vec<Property>),
    NoMatches,
}

impl SearchOutcome {
    pub fn properties(&self) -> &[Property] {
        match self {
            SearchOutcome::Matches(properties) => properties,
            SearchOutcome::NoMatches => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.properties().len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties().is_empty()
    }
}

/// Properties satisfying every constraint in `criteria`, in input order.
pub fn filter(properties: &[Property], criteria: &SearchCriteria) -> Vec<Property> {
    properties
        .iter()
        .filter(|property| matches(property, criteria))
        .cloned()
        .collect()
}

/// Like [`filter`], but reports an empty result as [`SearchOutcome::NoMatches`].
pub fn search(properties: &[Property], criteria: &SearchCriteria) -> SearchOutcome {
    let results = filter(properties, criteria);
    if results.is_empty() {
        SearchOutcome::NoMatches
    } else {
        SearchOutcome::Matches(results)
    }
}

pub fn matches(property: &Property, criteria: &SearchCriteria) -> bool {
    kind_matches(property, criteria)
        && within(property.price, criteria.min_price, criteria.max_price)
        && within(i64::from(property.bedrooms), criteria.min_bedrooms, criteria.max_bedrooms)
        && postal_code_matches(property, criteria)
        && added_matches(property, criteria)
}

fn kind_matches(property: &Property, criteria: &SearchCriteria) -> bool {
    criteria
        .kind
        .as_ref()
        .map_or(true, |kind| kind.accepts(&property.kind))
}

fn within(value: i64, min: Option<i64>, max: Option<i64>) -> bool {
    min.map_or(true, |min| value >= min) && max.map_or(true, |max| value <= max)
}

fn postal_code_matches(property: &Property, criteria: &SearchCriteria) -> bool {
    match criteria.postal_code_area.as_deref() {
        None | Some("") => true,
        Some(area) => property
            .postal_code_area
            .to_lowercase()
            .contains(&area.to_lowercase()),
    }
}

// Undated records never satisfy an added-after constraint.
fn added_matches(property: &Property, criteria: &SearchCriteria) -> bool {
    match criteria.added_after {
        None => true,
        Some(threshold) => property.added.date().is_some_and(|added| added >= threshold),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::{property, with_added};
    use crate::search::{KindFilter, SearchForm};
    use chrono::NaiveDate;

    fn dataset() -> Vec<Property> {
        vec![
            with_added(property("1", "House", 300000, 3, "NW1"), 2023, "January", 5),
            with_added(property("2", "Flat", 150000, 1, "SE1"), 2023, "June", 10),
        ]
    }

    fn ids(properties: &[Property]) -> Vec<&str> {
        properties.iter().map(|p| p.id.as_str()).collect()
    }

    fn larger_dataset() -> Vec<Property> {
        vec![
            with_added(property("a", "House", 750000, 3, "BR5"), 2022, "October", 12),
            with_added(property("b", "Flat", 399995, 2, "BR6"), 2022, "September", 14),
            with_added(property("c", "House", 1250000, 5, "NW3"), 2023, "January", 20),
            with_added(property("d", "Flat", 275000, 1, "SE1"), 2023, "March", 3),
            with_added(property("e", "House", 895000, 4, "NW1"), 2023, "June", 10),
            with_added(property("f", "Flat", 620000, 3, "SW11"), 2023, "Augst", 28),
        ]
    }

    #[test]
    fn test_unconstrained_returns_everything_in_order() {
        let data = larger_dataset();
        let result = filter(&data, &SearchCriteria::default());
        assert_eq!(result, data);
    }

    #[test]
    fn test_type_filter() {
        let result = filter(&dataset(), &SearchCriteria::default().with_kind("Flat"));
        assert_eq!(ids(&result), vec!["2"]);
    }

    #[test]
    fn test_any_type_matches_all() {
        let result = filter(&dataset(), &SearchCriteria::default().with_kind(KindFilter::Any));
        assert_eq!(ids(&result), vec!["1", "2"]);
    }

    #[test]
    fn test_type_is_case_sensitive() {
        let result = filter(&dataset(), &SearchCriteria::default().with_kind("flat"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_min_price_from_form_text() {
        let form = SearchForm {
            min_price: "200000".to_string(),
            ..SearchForm::default()
        };
        let result = filter(&dataset(), &form.to_criteria());
        assert_eq!(ids(&result), vec!["1"]);
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let criteria = SearchCriteria::default().with_price_range(Some(150000), Some(300000));
        assert_eq!(ids(&filter(&dataset(), &criteria)), vec!["1", "2"]);

        let criteria = SearchCriteria::default().with_price_range(Some(150001), Some(299999));
        assert!(filter(&dataset(), &criteria).is_empty());
    }

    #[test]
    fn test_bedroom_bounds() {
        let criteria = SearchCriteria::default().with_bedroom_range(Some(2), None);
        assert_eq!(ids(&filter(&dataset(), &criteria)), vec!["1"]);

        let criteria = SearchCriteria::default().with_bedroom_range(None, Some(1));
        assert_eq!(ids(&filter(&dataset(), &criteria)), vec!["2"]);
    }

    #[test]
    fn test_malformed_bound_disables_only_that_bound() {
        let form = SearchForm {
            min_price: "lots".to_string(),
            max_bedrooms: "2".to_string(),
            ..SearchForm::default()
        };
        let result = filter(&dataset(), &form.to_criteria());
        assert_eq!(ids(&result), vec!["2"]);
    }

    #[test]
    fn test_postal_code_substring_case_insensitive() {
        let criteria = SearchCriteria::default().with_postal_code_area("nw");
        assert_eq!(ids(&filter(&dataset(), &criteria)), vec!["1"]);

        let criteria = SearchCriteria::default().with_postal_code_area("1");
        assert_eq!(ids(&filter(&dataset(), &criteria)), vec!["1", "2"]);
    }

    #[test]
    fn test_added_after_is_inclusive() {
        let threshold = NaiveDate::from_ymd_opt(2023, 6, 10).unwrap();
        let criteria = SearchCriteria::default().with_added_after(threshold);
        assert_eq!(ids(&filter(&dataset(), &criteria)), vec!["2"]);
    }

    #[test]
    fn test_added_after_excludes_unresolved_dates() {
        let threshold = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let criteria = SearchCriteria::default().with_added_after(threshold);
        let result = filter(&larger_dataset(), &criteria);
        assert_eq!(ids(&result), vec!["a", "b", "c", "d", "e"]);

        // without the date constraint the undated record is still listed
        assert_eq!(filter(&larger_dataset(), &SearchCriteria::default()).len(), 6);
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let criteria = SearchCriteria::default()
            .with_kind("House")
            .with_price_range(Some(800000), None)
            .with_postal_code_area("NW");
        assert_eq!(ids(&filter(&larger_dataset(), &criteria)), vec!["c", "e"]);

        let criteria = criteria.with_bedroom_range(None, Some(4));
        assert_eq!(ids(&filter(&larger_dataset(), &criteria)), vec!["e"]);
    }

    #[test]
    fn test_narrowing_a_bound_never_grows_the_result() {
        let data = larger_dataset();
        let mut previous = data.len();
        for min in (0..=1_400_000).step_by(50_000) {
            let criteria = SearchCriteria::default().with_price_range(Some(min), None);
            let count = filter(&data, &criteria).len();
            assert!(count <= previous, "min_price {} grew result", min);
            previous = count;
        }

        let mut previous = data.len();
        for max in (0..=6).rev() {
            let criteria = SearchCriteria::default().with_bedroom_range(None, Some(max));
            let count = filter(&data, &criteria).len();
            assert!(count <= previous, "max_bedrooms {} grew result", max);
            previous = count;
        }
    }

    #[test]
    fn test_huge_min_price_text_never_grows_the_result() {
        let inputs = [
            "0",
            "300000",
            "9223372036854775807",
            "9223372036854775808",
            "99999999999999999999",
        ];
        let counts: Vec<usize> = inputs
            .iter()
            .map(|min| {
                let form = SearchForm {
                    min_price: min.to_string(),
                    ..SearchForm::default()
                };
                filter(&dataset(), &form.to_criteria()).len()
            })
            .collect();
        assert_eq!(counts, vec![2, 1, 0, 0, 0]);
    }

    #[test]
    fn test_huge_negative_max_bedrooms_matches_nothing() {
        let form = SearchForm {
            max_bedrooms: "-99999999999999999999".to_string(),
            ..SearchForm::default()
        };
        assert!(filter(&dataset(), &form.to_criteria()).is_empty());
    }

    #[test]
    fn test_empty_matches_counts_as_empty() {
        let outcome = SearchOutcome::Matches(vec![]);
        assert_eq!(outcome.len(), 0);
        assert!(outcome.is_empty());
    }

    #[test]
    fn test_search_reports_no_matches() {
        let criteria = SearchCriteria::default().with_kind("Bungalow");
        let outcome = search(&dataset(), &criteria);
        assert_eq!(outcome, SearchOutcome::NoMatches);
        assert!(outcome.is_empty());
        assert!(outcome.properties().is_empty());

        let outcome = search(&dataset(), &SearchCriteria::default());
        assert_eq!(outcome.len(), 2);
    }
}
