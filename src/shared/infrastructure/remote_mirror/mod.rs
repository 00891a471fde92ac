use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value as Json;
use thiserror::Error;

/// Body posted to the remote collection endpoint: `{"data": <record>}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MirrorEnvelope {
    pub data: Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MirrorError {
    #[error("remote mirror unreachable: {0}")]
    Transport(String),

    #[error("remote mirror rejected the entry with status {0}")]
    Rejected(u16),

    #[error("remote mirror misconfigured: {0}")]
    Configuration(String),
}

/// Best-effort copy of each submitted record to a remote endpoint.
/// The response body is never read back.
#[async_trait]
pub trait RemoteMirror: Send + Sync {
    async fn publish(&self, envelope: &MirrorEnvelope) -> Result<(), MirrorError>;

    fn is_enabled(&self) -> bool {
        true
    }
}

pub mod disabled;
pub mod http;
pub mod in_memory;
