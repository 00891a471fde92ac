use std::time::Duration;

use crate::shared::infrastructure::remote_mirror::{MirrorEnvelope, MirrorError, RemoteMirror};

/// Posts each envelope as JSON to a collection endpoint (e.g. a spreadsheet API).
/// Any 2xx status counts as success.
pub struct HttpRemoteMirror {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpRemoteMirror {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, MirrorError> {
        let endpoint = endpoint.into();
        reqwest::Url::parse(&endpoint)
            .map_err(|error| MirrorError::Configuration(format!("{endpoint}: {error}")))?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| MirrorError::Configuration(error.to_string()))?;
        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl RemoteMirror for HttpRemoteMirror {
    async fn publish(&self, envelope: &MirrorEnvelope) -> Result<(), MirrorError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(envelope)
            .send()
            .await
            .map_err(|error| MirrorError::Transport(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MirrorError::Rejected(status.as_u16()));
        }
        Ok(())
    }
}
