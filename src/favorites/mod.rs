mod store;
mod transfer;

pub use store::FavoritesStore;
pub use transfer::{
    DataTransfer, DropEffect, DropZone, TransferEnvelope, TransferError, PROPERTY_FORMAT,
};
