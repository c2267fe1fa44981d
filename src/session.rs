//! Single owned state record for a browsing session.
//!
//! The search criteria, current results, favorites and inspected property only
//! change through [`Session::dispatch`], one [`Action`] at a time.

use crate::catalog::Catalog;
use crate::config::Config;
use crate::favorites::{DataTransfer, DropZone, FavoritesStore, TransferEnvelope};
use crate::models::{Property, PropertyCard, PropertyDetail, PropertyId};
use crate::search::{search, SearchCriteria, SearchForm, SearchOutcome, NO_MATCHES_MESSAGE};
use serde::Serialize;
use tracing::{debug, info};

/// User events the session reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ToggleAdvancedSearch,
    Search(SearchForm),
    ResetSearch,
    AddFavorite(PropertyId),
    RemoveFavorite(PropertyId),
    ClearFavorites,
    Drop {
        zone: DropZone,
        transfer: DataTransfer,
    },
    Select(PropertyId),
    CloseDetail,
}

#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    advanced_search_open: bool,
    criteria: SearchCriteria,
    results: SearchOutcome,
    favorites: FavoritesStore,
    inspected: Option<PropertyId>,
}

impl Session {
    /// Start a session showing the whole catalog.
    pub fn new(catalog: Catalog) -> Self {
        let criteria = SearchCriteria::default();
        let results = search(catalog.properties(), &criteria);
        Self {
            catalog,
            advanced_search_open: false,
            criteria,
            results,
            favorites: FavoritesStore::new(),
            inspected: None,
        }
    }

    /// Apply an action. Returns whether any observable state changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        debug!("Dispatching {:?}", action);
        match action {
            Action::ToggleAdvancedSearch => {
                self.advanced_search_open = !self.advanced_search_open;
                true
            }
            Action::Search(form) => {
                self.run_search(form.to_criteria());
                true
            }
            Action::ResetSearch => {
                self.run_search(SearchCriteria::default());
                true
            }
            Action::AddFavorite(id) => match self.catalog.get(&id) {
                Some(property) => self.favorites.add(property),
                None => {
                    debug!("Ignoring favorite for unknown property {}", id);
                    false
                }
            },
            Action::RemoveFavorite(id) => self.favorites.remove(&id),
            Action::ClearFavorites => {
                let changed = !self.favorites.is_empty();
                self.favorites.clear();
                changed
            }
            Action::Drop { zone, transfer } => self.drop_on(zone, &transfer),
            Action::Select(id) => {
                if self.catalog.get(&id).is_none() {
                    debug!("Ignoring selection of unknown property {}", id);
                    return false;
                }
                let changed = self.inspected.as_deref() != Some(id.as_str());
                self.inspected = Some(id);
                changed
            }
            Action::CloseDetail => self.inspected.take().is_some(),
        }
    }

    /// Payload for a drag gesture starting on a listing card, or `None` when
    /// the id is not in the catalog.
    pub fn drag_start(&self, id: &str) -> Option<DataTransfer> {
        let property = self.catalog.get(id)?;
        let mut transfer = DataTransfer::new();
        match TransferEnvelope::for_property(property).write_to(&mut transfer) {
            Ok(()) => Some(transfer),
            Err(err) => {
                debug!("Cannot start drag for {}: {}", id, err);
                None
            }
        }
    }

    // Malformed payloads and unknown ids leave the session untouched.
    fn drop_on(&mut self, zone: DropZone, transfer: &DataTransfer) -> bool {
        if !zone.adds_favorite() {
            return false;
        }
        let envelope = match TransferEnvelope::read_from(transfer) {
            Ok(envelope) => envelope,
            Err(err) => {
                debug!("Ignoring drop: {}", err);
                return false;
            }
        };
        match self.catalog.get(envelope.property_id()) {
            Some(property) => self.favorites.add(property),
            None => {
                debug!("Ignoring drop of unknown property {}", envelope.property_id());
                false
            }
        }
    }

    fn run_search(&mut self, criteria: SearchCriteria) {
        self.results = search(self.catalog.properties(), &criteria);
        info!(
            "Search matched {} of {} properties",
            self.results.len(),
            self.catalog.len()
        );
        self.criteria = criteria;
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    pub fn results(&self) -> &SearchOutcome {
        &self.results
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub fn inspected(&self) -> Option<&Property> {
        self.inspected.as_deref().and_then(|id| self.catalog.get(id))
    }

    pub fn advanced_search_open(&self) -> bool {
        self.advanced_search_open
    }

    /// Everything a presentation layer needs to render the session.
    pub fn view(&self, config: &Config) -> SessionView {
        SessionView {
            advanced_search_open: self.advanced_search_open,
            criteria: self.criteria.clone(),
            results: self
                .results
                .properties()
                .iter()
                .map(|p| PropertyCard::new(p, config))
                .collect(),
            no_matches: self.results.is_empty().then_some(NO_MATCHES_MESSAGE),
            favorites: self
                .favorites
                .list()
                .iter()
                .map(|p| PropertyCard::new(p, config))
                .collect(),
            can_clear_favorites: !self.favorites.is_empty(),
            inspected: self.inspected().map(|p| PropertyDetail::new(p, config)),
        }
    }
}

/// Renderable snapshot of a session
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SessionView {
    pub advanced_search_open: bool,
    pub criteria: SearchCriteria,
    pub results: Vec<PropertyCard>,
    pub no_matches: Option<&'static str>,
    pub favorites: Vec<PropertyCard>,
    pub can_clear_favorites: bool,
    pub inspected: Option<PropertyDetail>,
}
