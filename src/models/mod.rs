mod added;
mod detail;

pub use added::AddedDate;
pub use detail::{format_price, map_embed_url, PropertyCard, PropertyDetail};

use serde::{Deserialize, Deserializer, Serialize};

/// Stable listing identifier. Datasets may carry ids as strings or numbers;
/// both normalise to the same textual form.
pub type PropertyId = String;

/// Core property data model, as it appears in the listings dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Property {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: PropertyId,
    /// House, Flat, ...
    #[serde(rename = "type")]
    pub kind: String,
    pub bedrooms: u32,
    pub price: i64,
    #[serde(default)]
    pub tenure: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "Postalcode area", alias = "postalCodeArea", default)]
    pub postal_code_area: String,
    pub added: AddedDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pictures: Vec<String>,
    #[serde(rename = "floorPlan", default, skip_serializing_if = "Option::is_none")]
    pub floor_plan: Option<String>,
}

impl Property {
    /// Gallery images: the pictures list, else the single card picture,
    /// else the fallback asset.
    pub fn gallery(&self, fallback: &str) -> Vec<String> {
        let pictures: Vec<String> = self
            .pictures
            .iter()
            .filter(|p| !p.trim().is_empty())
            .cloned()
            .collect();
        if !pictures.is_empty() {
            return pictures;
        }
        vec![self.cover_picture(fallback).to_string()]
    }

    /// Image shown on listing cards.
    pub fn cover_picture<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.picture
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .or_else(|| self.pictures.iter().map(String::as_str).find(|p| !p.trim().is_empty()))
            .unwrap_or(fallback)
    }

    pub fn floor_plan_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.floor_plan
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or(fallback)
    }
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<PropertyId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn property(id: &str, kind: &str, price: i64, bedrooms: u32, postal: &str) -> Property {
        Property {
            id: id.to_string(),
            kind: kind.to_string(),
            bedrooms,
            price,
            tenure: "Freehold".to_string(),
            description: format!("{} in {}", kind, postal),
            location: format!("{} London", postal),
            postal_code_area: postal.to_string(),
            added: AddedDate::new(2023, "January", 5),
            picture: Some(format!("images/{}.jpg", id)),
            pictures: vec![],
            floor_plan: None,
        }
    }

    pub fn with_added(mut property: Property, year: i32, month: &str, day: u32) -> Property {
        property.added = AddedDate::new(year, month, day);
        property
    }
}
