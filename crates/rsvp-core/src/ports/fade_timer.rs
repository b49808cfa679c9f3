use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// Work to run once a fade delay has elapsed.
pub type FadeTask = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Single-slot delayed task: starting a new fade cancels the pending one.
#[async_trait::async_trait]
pub trait FadeTimerPort: Send + Sync {
    async fn start(&self, delay: Duration, on_elapsed: FadeTask) -> anyhow::Result<()>;
    async fn stop(&self) -> anyhow::Result<()>;
}
