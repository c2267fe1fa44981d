use crate::catalog::Dataset;
use crate::models::Property;
use crate::sources::traits::DatasetSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Dataset read from a JSON document on disk
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Parse a dataset document: either `{"properties": [...]}` or a bare array.
pub fn parse_dataset(json: &str) -> Result<Vec<Property>> {
    let value: serde_json::Value = serde_json::from_str(json).context("Dataset is not valid JSON")?;
    let properties = if value.is_array() {
        serde_json::from_value(value).context("Failed to decode property list")?
    } else {
        let dataset: Dataset =
            serde_json::from_value(value).context("Failed to decode dataset document")?;
        dataset.properties
    };
    Ok(properties)
}

#[async_trait]
impl DatasetSource for JsonFileSource {
    async fn load(&self) -> Result<Vec<Property>> {
        debug!("Reading dataset from {}", self.path.display());

        let json = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read dataset file {}", self.path.display()))?;

        let properties = parse_dataset(&json)
            .with_context(|| format!("Invalid dataset in {}", self.path.display()))?;

        info!("Loaded {} properties from {}", properties.len(), self.path.display());
        Ok(properties)
    }

    fn source_name(&self) -> &'static str {
        "json-file"
    }
}
