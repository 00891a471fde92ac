use crate::modules::volunteer_log::adapters::outbound::collection_store::save_collection;
use crate::modules::volunteer_log::core::collection::EntryCollection;
use crate::modules::volunteer_log::core::repair::{InvalidEntry, RepairOutcome, decode_slot, repair};
use crate::shared::infrastructure::entry_store::{EntryStore, StoreError};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("stored entries are not a JSON array: {0}")]
    Corrupt(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedEntries {
    pub collection: EntryCollection,
    pub dropped: Vec<InvalidEntry>,
}

/// Reads the slot, drops records without a usable work date and writes the
/// result back. Dropped records are gone for good.
pub struct LoadEntriesHandler<TStore>
where
    TStore: EntryStore + ?Sized + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> LoadEntriesHandler<TStore>
where
    TStore: EntryStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<LoadedEntries, LoadError> {
        let records = match self.store.read_slot().await? {
            Some(contents) => {
                decode_slot(&contents).map_err(|error| LoadError::Corrupt(error.to_string()))?
            }
            None => Vec::new(),
        };

        let RepairOutcome {
            collection,
            dropped,
        } = repair(records);
        for invalid in &dropped {
            tracing::warn!(position = invalid.position, reason = %invalid.reason, "dropping invalid entry");
        }

        save_collection(&*self.store, &collection).await?;

        tracing::info!(
            kept = collection.len(),
            dropped = dropped.len(),
            "entry store loaded"
        );
        Ok(LoadedEntries {
            collection,
            dropped,
        })
    }
}
