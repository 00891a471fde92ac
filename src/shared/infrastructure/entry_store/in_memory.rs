// In memory implementation of the EntryStore port.
//
// Purpose
// - Support handler tests and local development without touching the disk.
//
// Responsibilities
// - Hold the slot as a string, like browser storage does.
// - Reject writes above an optional byte quota.
// - Fail every call while toggled offline.

use crate::shared::infrastructure::entry_store::{EntryStore, StoreError};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryEntryStore {
    slot: RwLock<Option<String>>,
    quota: Option<usize>,
    offline: bool,
    writes: AtomicUsize,
}

impl InMemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            slot: RwLock::new(Some(contents.into())),
            ..Self::default()
        }
    }

    pub fn set_quota(&mut self, quota: usize) {
        self.quota = Some(quota);
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    pub async fn contents(&self) -> Option<String> {
        self.slot.read().await.clone()
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl EntryStore for InMemoryEntryStore {
    async fn read_slot(&self) -> Result<Option<String>, StoreError> {
        if self.offline {
            return Err(StoreError::Backend("Entry store offline".into()));
        }
        Ok(self.slot.read().await.clone())
    }

    async fn write_slot(&self, contents: &str) -> Result<(), StoreError> {
        if self.offline {
            return Err(StoreError::Backend("Entry store offline".into()));
        }
        if let Some(quota) = self.quota.filter(|quota| contents.len() > *quota) {
            return Err(StoreError::QuotaExceeded {
                attempted: contents.len(),
                quota,
            });
        }
        *self.slot.write().await = Some(contents.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
