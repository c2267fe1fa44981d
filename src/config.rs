use std::path::PathBuf;

pub const DEFAULT_FLOOR_PLAN: &str = "images/default_floorplan.jpg";
pub const DEFAULT_PICTURE: &str = "images/default_picture.jpg";
pub const DEFAULT_MAP_EMBED_BASE: &str = "https://www.google.com/maps";

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Dataset document to load; the bundled sample dataset when unset
    pub dataset: Option<PathBuf>,
    /// Asset shown when a listing has no usable floor plan
    pub fallback_floor_plan: String,
    /// Asset shown when a listing has no usable picture
    pub fallback_picture: String,
    /// Base URL of the embedded map service
    pub map_embed_base: String,
    pub currency_symbol: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: None,
            fallback_floor_plan: DEFAULT_FLOOR_PLAN.to_string(),
            fallback_picture: DEFAULT_PICTURE.to_string(),
            map_embed_base: DEFAULT_MAP_EMBED_BASE.to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

impl Config {
    pub fn with_dataset(mut self, dataset: Option<PathBuf>) -> Self {
        if dataset.is_some() {
            self.dataset = dataset;
        }
        self
    }
}
