use crate::models::{Property, PropertyId};
use std::collections::HashSet;
use tracing::debug;

/// Session-lifetime favorites, unique by property id and kept in the order
/// they were added.
#[derive(Debug, Clone, Default)]
pub struct FavoritesStore {
    entries: Vec<Property>,
    members: HashSet<PropertyId>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property. Returns `false` when it was already a favorite.
    pub fn add(&mut self, property: &Property) -> bool {
        if !self.members.insert(property.id.clone()) {
            debug!("Property {} already in favorites", property.id);
            return false;
        }
        self.entries.push(property.clone());
        debug!("Added property {} to favorites", property.id);
        true
    }

    /// Remove by id. Returns `false` when the id was not a favorite.
    pub fn remove(&mut self, id: &str) -> bool {
        if !self.members.remove(id) {
            return false;
        }
        self.entries.retain(|entry| entry.id != id);
        debug!("Removed property {} from favorites", id);
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.members.clear();
    }

    /// Favorites in insertion order.
    pub fn list(&self) -> &[Property] {
        &self.entries
    }

    pub fn contains(&self, id: &str) -> bool {
        self.members.contains(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
