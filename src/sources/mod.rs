pub mod embedded;
pub mod json_file;
pub mod traits;

pub use embedded::EmbeddedSource;
pub use json_file::JsonFileSource;
pub use traits::DatasetSource;

use crate::config::Config;

/// Pick the dataset source for a configuration: the configured file when
/// present, otherwise the bundled sample dataset.
pub fn from_config(config: &Config) -> Box<dyn DatasetSource> {
    match &config.dataset {
        Some(path) => Box::new(JsonFileSource::new(path.clone())),
        None => Box::new(EmbeddedSource),
    }
}
