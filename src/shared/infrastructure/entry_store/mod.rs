use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store quota exceeded: {attempted} bytes requested, {quota} allowed")]
    QuotaExceeded { attempted: usize, quota: usize },

    #[error("failed to encode entries: {0}")]
    Encode(String),

    #[error("backend error: {0}")]
    Backend(String),
}

/// A single named slot holding the serialized entry collection.
/// Reads and writes always cover the whole value.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// `None` when nothing has ever been saved.
    async fn read_slot(&self) -> Result<Option<String>, StoreError>;
    async fn write_slot(&self, contents: &str) -> Result<(), StoreError>;
}

pub mod in_memory;
pub mod json_file;
