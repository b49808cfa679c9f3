use crate::flow::RsvpView;

/// Rendering surface consuming view snapshots.
#[async_trait::async_trait]
pub trait FlowViewPort: Send + Sync {
    async fn render(&self, view: RsvpView);
}
