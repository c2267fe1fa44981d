use crate::models::Property;
use crate::sources::json_file::parse_dataset;
use crate::sources::traits::DatasetSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::info;

const SAMPLE_DATASET: &str = include_str!("../../data/properties.json");

/// The sample dataset bundled into the binary
pub struct EmbeddedSource;

#[async_trait]
impl DatasetSource for EmbeddedSource {
    async fn load(&self) -> Result<Vec<Property>> {
        let properties = parse_dataset(SAMPLE_DATASET).context("Bundled dataset is invalid")?;
        info!("Loaded {} properties from bundled dataset", properties.len());
        Ok(properties)
    }

    fn source_name(&self) -> &'static str {
        "embedded"
    }
}
