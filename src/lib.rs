pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod favorites;
pub mod models;
pub mod search;
pub mod session;
pub mod sources;

pub use catalog::{Catalog, CatalogError};
pub use config::Config;
pub use favorites::FavoritesStore;
pub use models::Property;
pub use search::{filter, SearchCriteria, SearchForm};
pub use session::{Action, Session};
