//! Drag-and-drop transfer of listings into the favorites region.
//!
//! Drag start writes a [`TransferEnvelope`] naming the dragged property into the
//! gesture's [`DataTransfer`]. The drop side reads it back and resolves the id
//! against the catalog. Payloads from unrelated draggables fail to read and
//! the drop is ignored.

use crate::models::{Property, PropertyId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Data format key under which listings are transferred
pub const PROPERTY_FORMAT: &str = "application/x-staymate-property";

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("drag payload has no listing entry")]
    Missing,

    #[error("malformed drag payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("drag payload names an empty property id")]
    EmptyId,
}

/// Format-keyed payload carried by a drag gesture
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTransfer {
    items: BTreeMap<String, String>,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_data(&mut self, format: impl Into<String>, data: impl Into<String>) {
        self.items.insert(format.into(), data.into());
    }

    pub fn get_data(&self, format: &str) -> Option<&str> {
        self.items.get(format).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// What a drag gesture carries: the id of the dragged listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransferEnvelope {
    Property { id: PropertyId },
}

impl TransferEnvelope {
    pub fn for_property(property: &Property) -> Self {
        TransferEnvelope::Property {
            id: property.id.clone(),
        }
    }

    pub fn property_id(&self) -> &str {
        match self {
            TransferEnvelope::Property { id } => id,
        }
    }

    pub fn write_to(&self, transfer: &mut DataTransfer) -> Result<(), TransferError> {
        let payload = serde_json::to_string(self)?;
        transfer.set_data(PROPERTY_FORMAT, payload);
        Ok(())
    }

    pub fn read_from(transfer: &DataTransfer) -> Result<Self, TransferError> {
        let payload = transfer
            .get_data(PROPERTY_FORMAT)
            .ok_or(TransferError::Missing)?;
        let envelope: TransferEnvelope = serde_json::from_str(payload)?;
        if envelope.property_id().trim().is_empty() {
            return Err(TransferError::EmptyId);
        }
        Ok(envelope)
    }
}

/// Regions of the view that participate in drag-and-drop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropZone {
    Listings,
    Favorites,
}

/// Answer to a drag-over event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropEffect {
    /// Drop permitted; the platform's default rejection is suppressed
    Copy,
    None,
}

impl DropZone {
    /// Both regions accept drag-over so the pointer never shows a rejection.
    pub fn drag_over(self) -> DropEffect {
        match self {
            DropZone::Listings | DropZone::Favorites => DropEffect::Copy,
        }
    }

    /// Whether a drop in this region adds to favorites.
    pub fn adds_favorite(self) -> bool {
        matches!(self, DropZone::Favorites)
    }
}
