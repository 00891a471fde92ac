use crate::modules::volunteer_log::adapters::outbound::collection_store::save_collection;
use crate::modules::volunteer_log::adapters::outbound::mirror_dispatch::{
    MirrorTicket, dispatch_to_mirror,
};
use crate::modules::volunteer_log::core::collection::EntryCollection;
use crate::modules::volunteer_log::core::entry::Entry;
use crate::modules::volunteer_log::use_cases::submit_entry::command::SubmitEntry;
use crate::modules::volunteer_log::use_cases::submit_entry::decide::decide_submit;
use crate::modules::volunteer_log::use_cases::submit_entry::decision::{DecideError, Decision};
use crate::shared::infrastructure::entry_store::{EntryStore, StoreError};
use crate::shared::infrastructure::remote_mirror::RemoteMirror;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("domain rejected: {0}")]
    Domain(#[from] DecideError),

    /// The collection still holds the new entry, but the store refused it.
    #[error("entry not saved, local storage is full: {source}")]
    PersistenceFull {
        collection: EntryCollection,
        source: StoreError,
    },

    #[error("entry not saved: {source}")]
    Persistence {
        collection: EntryCollection,
        source: StoreError,
    },
}

impl ApplicationError {
    /// In-memory collection including the entry that failed to persist.
    pub fn unsaved_collection(&self) -> Option<&EntryCollection> {
        match self {
            Self::PersistenceFull { collection, .. } | Self::Persistence { collection, .. } => {
                Some(collection)
            }
            Self::Domain(_) => None,
        }
    }
}

#[derive(Debug)]
pub struct Submitted {
    pub collection: EntryCollection,
    pub entry: Entry,
    pub mirror: MirrorTicket,
}

pub struct SubmitEntryHandler<TStore, TMirror>
where
    TStore: EntryStore + ?Sized + 'static,
    TMirror: RemoteMirror + ?Sized + 'static,
{
    store: Arc<TStore>,
    mirror: Arc<TMirror>,
}

impl<TStore, TMirror> SubmitEntryHandler<TStore, TMirror>
where
    TStore: EntryStore + ?Sized + 'static,
    TMirror: RemoteMirror + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>, mirror: Arc<TMirror>) -> Self {
        Self { store, mirror }
    }

    /// Validate, mirror in the background, append and persist the whole collection.
    /// The mirror outcome never affects the local write.
    pub async fn handle(
        &self,
        collection: &EntryCollection,
        command: SubmitEntry,
    ) -> Result<Submitted, ApplicationError> {
        let entry = match decide_submit(command) {
            Decision::Accepted { entry } => entry,
            Decision::Rejected { reason } => return Err(ApplicationError::Domain(reason)),
        };

        let mirror = dispatch_to_mirror(self.mirror.clone(), &entry);
        let next = collection.appended(entry.clone());

        match save_collection(&*self.store, &next).await {
            Ok(()) => Ok(Submitted {
                collection: next,
                entry,
                mirror,
            }),
            Err(source @ StoreError::QuotaExceeded { .. }) => {
                tracing::error!(error = %source, "entry kept in memory only");
                Err(ApplicationError::PersistenceFull {
                    collection: next,
                    source,
                })
            }
            Err(source) => {
                tracing::error!(error = %source, "entry kept in memory only");
                Err(ApplicationError::Persistence {
                    collection: next,
                    source,
                })
            }
        }
    }
}
