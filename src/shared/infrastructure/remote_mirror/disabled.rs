use crate::shared::infrastructure::remote_mirror::{MirrorEnvelope, MirrorError, RemoteMirror};

/// Stand-in used when no endpoint is configured. Publishing is a no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledRemoteMirror;

#[async_trait::async_trait]
impl RemoteMirror for DisabledRemoteMirror {
    async fn publish(&self, _envelope: &MirrorEnvelope) -> Result<(), MirrorError> {
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        false
    }
}
