use crate::modules::volunteer_log::adapters::outbound::mirror_dispatch::MirrorStatus;
use crate::modules::volunteer_log::core::collection::EntryCollection;
use crate::modules::volunteer_log::core::csv_export::CsvQuoting;
use crate::modules::volunteer_log::core::entry::Entry;
use crate::modules::volunteer_log::core::grouping::{MonthlyGroups, group_by_month};
use crate::modules::volunteer_log::use_cases::submit_entry::command::SubmitEntry;
use crate::modules::volunteer_log::use_cases::submit_entry::handler::{
    ApplicationError, SubmitEntryHandler,
};
use crate::shared::infrastructure::entry_store::EntryStore;
use crate::shared::infrastructure::remote_mirror::RemoteMirror;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Session state shared by every inbound surface.
///
/// The collection lives behind one mutex so each submission is a single
/// read-modify-write step against the store.
#[derive(Clone)]
pub struct AppState {
    pub entries: Arc<Mutex<EntryCollection>>,
    pub submit_handler: Arc<SubmitEntryHandler<dyn EntryStore, dyn RemoteMirror>>,
    pub csv_quoting: CsvQuoting,
    pub mirror_wait: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitReceipt {
    pub entry: Entry,
    pub mirror: MirrorStatus,
}

impl AppState {
    pub fn new(
        collection: EntryCollection,
        store: Arc<dyn EntryStore>,
        mirror: Arc<dyn RemoteMirror>,
        csv_quoting: CsvQuoting,
        mirror_wait: Duration,
    ) -> Self {
        Self {
            entries: Arc::new(Mutex::new(collection)),
            submit_handler: Arc::new(SubmitEntryHandler::new(store, mirror)),
            csv_quoting,
            mirror_wait,
        }
    }

    /// Append through the submit handler. On a store failure the session keeps
    /// the unsaved entry in memory, like the browser version did.
    pub async fn submit(&self, command: SubmitEntry) -> Result<SubmitReceipt, ApplicationError> {
        let submitted = {
            let mut entries = self.entries.lock().await;
            match self.submit_handler.handle(&entries, command).await {
                Ok(submitted) => {
                    *entries = submitted.collection.clone();
                    submitted
                }
                Err(error) => {
                    if let Some(unsaved) = error.unsaved_collection() {
                        *entries = unsaved.clone();
                    }
                    return Err(error);
                }
            }
        };

        let mirror = submitted.mirror.outcome(self.mirror_wait).await;
        Ok(SubmitReceipt {
            entry: submitted.entry,
            mirror,
        })
    }

    pub async fn snapshot(&self) -> EntryCollection {
        self.entries.lock().await.clone()
    }

    /// Full re-partition of the current collection.
    pub async fn monthly_groups(&self) -> MonthlyGroups {
        group_by_month(&*self.entries.lock().await)
    }
}
