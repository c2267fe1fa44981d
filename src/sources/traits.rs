use crate::models::Property;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for all listing dataset sources
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Load every property record from the source
    async fn load(&self) -> Result<Vec<Property>>;

    /// Get the name of the dataset source
    fn source_name(&self) -> &'static str;
}
