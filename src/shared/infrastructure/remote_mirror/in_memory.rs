use crate::shared::infrastructure::remote_mirror::{MirrorEnvelope, MirrorError, RemoteMirror};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryRemoteMirror {
    pub published: Mutex<Vec<MirrorEnvelope>>,
    offline: bool,
    delay_publish_ms: AtomicU64,
}

impl InMemoryRemoteMirror {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    pub fn set_delay_publish_ms(&self, ms: u64) {
        self.delay_publish_ms.store(ms, Ordering::SeqCst);
    }

    pub async fn published_count(&self) -> usize {
        self.published.lock().await.len()
    }
}

#[async_trait::async_trait]
impl RemoteMirror for InMemoryRemoteMirror {
    async fn publish(&self, envelope: &MirrorEnvelope) -> Result<(), MirrorError> {
        let delay = self.delay_publish_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        if self.offline {
            return Err(MirrorError::Transport("Remote mirror offline".into()));
        }
        self.published.lock().await.push(envelope.clone());
        Ok(())
    }
}
