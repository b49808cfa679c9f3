use std::time::Duration;

use rsvp_core::ports::{FadeTask, FadeTimerPort};
use tokio::sync::Mutex;
use tokio::task::AbortHandle;
use tokio::time::sleep;
use tracing::debug;

/// One pending fade at most; starting a new one aborts the previous task.
#[derive(Default)]
pub struct TokioFadeTimer {
    pending: Mutex<Option<AbortHandle>>,
}

impl TokioFadeTimer {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl FadeTimerPort for TokioFadeTimer {
    async fn start(&self, delay: Duration, on_elapsed: FadeTask) -> anyhow::Result<()> {
        let mut pending = self.pending.lock().await;
        if let Some(existing) = pending.take() {
            existing.abort();
            debug!("pending fade cancelled");
        }

        let handle = tokio::spawn(async move {
            sleep(delay).await;
            on_elapsed.await;
        });

        *pending = Some(handle.abort_handle());
        debug!(delay_ms = delay.as_millis() as u64, "fade timer started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        if let Some(handle) = self.pending.lock().await.take() {
            handle.abort();
            debug!("fade timer stopped");
        }
        Ok(())
    }
}
