// File backed implementation of the EntryStore port.
//
// The slot is one JSON file. Writes go to a sibling temp file which is then
// renamed over the slot, so a crash never leaves a half-written collection.

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::shared::infrastructure::entry_store::{EntryStore, StoreError};

pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

pub struct JsonFileEntryStore {
    path: PathBuf,
    quota_bytes: usize,
}

impl JsonFileEntryStore {
    pub fn new(path: impl Into<PathBuf>, quota_bytes: usize) -> Self {
        Self {
            path: path.into(),
            quota_bytes,
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait::async_trait]
impl EntryStore for JsonFileEntryStore {
    async fn read_slot(&self) -> Result<Option<String>, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) if contents.trim().is_empty() => Ok(None),
            Ok(contents) => Ok(Some(contents)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(StoreError::Backend(format!(
                "read {}: {error}",
                self.path.display()
            ))),
        }
    }

    async fn write_slot(&self, contents: &str) -> Result<(), StoreError> {
        if contents.len() > self.quota_bytes {
            return Err(StoreError::QuotaExceeded {
                attempted: contents.len(),
                quota: self.quota_bytes,
            });
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|error| {
                StoreError::Backend(format!("create directory {}: {error}", parent.display()))
            })?;
        }

        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, contents)
            .await
            .map_err(|error| {
                StoreError::Backend(format!("write {}: {error}", temp_path.display()))
            })?;
        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|error| {
                StoreError::Backend(format!("replace {}: {error}", self.path.display()))
            })?;

        tracing::debug!(path = %self.path.display(), bytes = contents.len(), "entry store written");
        Ok(())
    }
}
