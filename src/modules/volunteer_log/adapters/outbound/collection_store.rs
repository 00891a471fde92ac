use crate::modules::volunteer_log::core::collection::EntryCollection;
use crate::shared::infrastructure::entry_store::{EntryStore, StoreError};

/// Serialize the full collection and replace the store slot with it.
pub async fn save_collection<TStore>(
    store: &TStore,
    collection: &EntryCollection,
) -> Result<(), StoreError>
where
    TStore: EntryStore + ?Sized,
{
    let contents =
        serde_json::to_string(collection).map_err(|error| StoreError::Encode(error.to_string()))?;
    store.write_slot(&contents).await
}
