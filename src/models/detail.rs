use super::Property;
use crate::config::Config;
use serde::Serialize;
use tracing::warn;
use url::Url;

/// Summary shown for a property in the listing and favorites regions
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PropertyCard {
    pub id: String,
    pub kind: String,
    pub bedrooms: u32,
    pub price: String,
    pub postal_code_area: String,
    pub added: String,
    pub picture: String,
}

impl PropertyCard {
    pub fn new(property: &Property, config: &Config) -> Self {
        Self {
            id: property.id.clone(),
            kind: property.kind.clone(),
            bedrooms: property.bedrooms,
            price: format_price(&config.currency_symbol, property.price),
            postal_code_area: property.postal_code_area.clone(),
            added: property.added.to_string(),
            picture: property.cover_picture(&config.fallback_picture).to_string(),
        }
    }
}

/// Everything the detail overlay shows for the inspected property
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PropertyDetail {
    pub id: String,
    pub title: String,
    pub price: String,
    pub bedrooms: u32,
    pub tenure: String,
    pub postal_code_area: String,
    pub added: String,
    pub description: String,
    pub gallery: Vec<String>,
    pub floor_plan: String,
    /// `None` when the configured map base is not a usable URL.
    pub map_url: Option<String>,
}

impl PropertyDetail {
    pub fn new(property: &Property, config: &Config) -> Self {
        let map_url = match map_embed_url(&config.map_embed_base, &property.location) {
            Ok(url) => Some(url.to_string()),
            Err(err) => {
                warn!("Cannot build map URL from '{}': {}", config.map_embed_base, err);
                None
            }
        };

        Self {
            id: property.id.clone(),
            title: format!("{} - {}", property.kind, property.location),
            price: format_price(&config.currency_symbol, property.price),
            bedrooms: property.bedrooms,
            tenure: property.tenure.clone(),
            postal_code_area: property.postal_code_area.clone(),
            added: property.added.to_string(),
            description: property.description.clone(),
            gallery: property.gallery(&config.fallback_picture),
            floor_plan: property.floor_plan_or(&config.fallback_floor_plan).to_string(),
            map_url,
        }
    }
}

/// Embedded map URL for a free-text location, query-escaped.
pub fn map_embed_url(base: &str, location: &str) -> Result<Url, url::ParseError> {
    Url::parse_with_params(base, &[("q", location), ("output", "embed")])
}

/// Price with thousands separators, e.g. `$1,250,000`.
pub fn format_price(symbol: &str, price: i64) -> String {
    let digits = price.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if price < 0 { "-" } else { "" };
    format!("{}{}{}", sign, symbol, grouped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::property;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price("$", 0), "$0");
        assert_eq!(format_price("$", 950), "$950");
        assert_eq!(format_price("$", 1000), "$1,000");
        assert_eq!(format_price("£", 1_250_000), "£1,250,000");
        assert_eq!(format_price("", 300000), "300,000");
    }

    #[test]
    fn test_map_url_escapes_location() {
        let url = map_embed_url("https://www.google.com/maps", "Petts Wood Road, Orpington BR5 & more")
            .unwrap();
        let query = url.query().unwrap();
        assert!(query.starts_with("q=Petts+Wood+Road%2C+Orpington+BR5+%26+more"));
        assert!(query.ends_with("&output=embed"));

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs[0].1, "Petts Wood Road, Orpington BR5 & more");
    }

    #[test]
    fn test_detail_substitutes_fallback_assets() {
        let config = Config::default();
        let mut p = property("1", "House", 300000, 3, "NW1");
        p.picture = None;

        let detail = PropertyDetail::new(&p, &config);
        assert_eq!(detail.floor_plan, config.fallback_floor_plan);
        assert_eq!(detail.gallery, vec![config.fallback_picture.clone()]);
        assert_eq!(detail.price, "$300,000");
        assert_eq!(detail.added, "January 5, 2023");
        assert_eq!(detail.title, "House - NW1 London");
        assert!(detail.map_url.unwrap().contains("output=embed"));
    }

    #[test]
    fn test_detail_without_usable_map_base() {
        let config = Config {
            map_embed_base: "not a url".to_string(),
            ..Config::default()
        };
        let detail = PropertyDetail::new(&property("1", "Flat", 1, 1, "SE1"), &config);
        assert!(detail.map_url.is_none());
    }

    #[test]
    fn test_card_summary() {
        let card = PropertyCard::new(&property("2", "Flat", 150000, 1, "SE1"), &Config::default());
        assert_eq!(card.kind, "Flat");
        assert_eq!(card.price, "$150,000");
        assert_eq!(card.picture, "images/2.jpg");
    }
}
