//! Validated, read-only property catalog.
//!
//! The catalog is built once from a dataset source and never mutated. Building
//! it enforces id uniqueness and non-negative prices, and reports records whose
//! listing date could not be resolved (those stay listed but never match an
//! "added after" search).

use crate::models::Property;
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that reject a dataset at load time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two records share an id.
    #[error("duplicate property id '{0}'")]
    DuplicateId(String),

    /// A record carries a negative price.
    #[error("property '{id}' has negative price {price}")]
    NegativePrice { id: String, price: i64 },
}

/// Top-level shape of the dataset document.
#[derive(Debug, Deserialize)]
pub struct Dataset {
    pub properties: Vec<Property>,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    properties: Vec<Property>,
    index: HashMap<String, usize>,
    undated: usize,
}

impl Catalog {
    pub fn from_properties(properties: Vec<Property>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(properties.len());
        let mut undated = 0;

        for (position, property) in properties.iter().enumerate() {
            if property.price < 0 {
                return Err(CatalogError::NegativePrice {
                    id: property.id.clone(),
                    price: property.price,
                });
            }
            if index.insert(property.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(property.id.clone()));
            }
            if property.added.date().is_none() {
                warn!(
                    "Property {} has unresolvable added date '{}'; excluded from added-after searches",
                    property.id, property.added
                );
                undated += 1;
            }
        }

        debug!("Catalog built with {} properties", properties.len());

        Ok(Self {
            properties,
            index,
            undated,
        })
    }

    /// All properties in dataset order.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn get(&self, id: &str) -> Option<&Property> {
        self.index.get(id).map(|&position| &self.properties[position])
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Number of records whose listing date did not resolve.
    pub fn undated_count(&self) -> usize {
        self.undated
    }
}
