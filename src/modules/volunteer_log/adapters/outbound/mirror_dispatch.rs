use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::task::JoinHandle;

use crate::modules::volunteer_log::core::entry::Entry;
use crate::shared::infrastructure::remote_mirror::{MirrorEnvelope, MirrorError, RemoteMirror};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum MirrorStatus {
    Synced,
    Failed(String),
    Pending,
    Disabled,
}

impl MirrorStatus {
    /// Status label and optional detail, matching the serialized form.
    pub fn parts(&self) -> (&'static str, Option<String>) {
        match self {
            Self::Synced => ("synced", None),
            Self::Failed(detail) => ("failed", Some(detail.clone())),
            Self::Pending => ("pending", None),
            Self::Disabled => ("disabled", None),
        }
    }
}

/// Handle on a mirror call running in the background.
/// Dropping the ticket leaves the call running.
#[derive(Debug)]
pub struct MirrorTicket {
    handle: Option<JoinHandle<Result<(), MirrorError>>>,
}

impl MirrorTicket {
    pub fn disabled() -> Self {
        Self { handle: None }
    }

    /// Wait at most `wait` for the mirror outcome.
    pub async fn outcome(self, wait: Duration) -> MirrorStatus {
        let Some(handle) = self.handle else {
            return MirrorStatus::Disabled;
        };
        match tokio::time::timeout(wait, handle).await {
            Ok(Ok(Ok(()))) => MirrorStatus::Synced,
            Ok(Ok(Err(error))) => MirrorStatus::Failed(error.to_string()),
            Ok(Err(join_error)) => MirrorStatus::Failed(join_error.to_string()),
            Err(_) => MirrorStatus::Pending,
        }
    }
}

pub fn envelope_for(entry: &Entry) -> Result<MirrorEnvelope, MirrorError> {
    serde_json::to_value(entry)
        .map(|data| MirrorEnvelope { data })
        .map_err(|error| MirrorError::Configuration(error.to_string()))
}

/// Spawn the mirror call for `entry`. The local write path never waits on it.
pub fn dispatch_to_mirror<TMirror>(mirror: Arc<TMirror>, entry: &Entry) -> MirrorTicket
where
    TMirror: RemoteMirror + ?Sized + 'static,
{
    if !mirror.is_enabled() {
        return MirrorTicket::disabled();
    }
    let envelope = envelope_for(entry);
    let group_key = entry.derived_group_key();
    let handle = tokio::spawn(async move {
        let result = match envelope {
            Ok(envelope) => mirror.publish(&envelope).await,
            Err(error) => Err(error),
        };
        match &result {
            Ok(()) => tracing::debug!(%group_key, "entry mirrored"),
            Err(error) => {
                tracing::warn!(%group_key, %error, "remote mirror failed; entry kept locally")
            }
        }
        result
    });
    MirrorTicket {
        handle: Some(handle),
    }
}
