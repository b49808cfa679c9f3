use async_trait::async_trait;

use super::errors::SubmissionError;
use crate::flow::SubmissionPayload;

/// Third-party form endpoint.
#[async_trait]
pub trait FormSubmissionPort: Send + Sync {
    /// Send one payload. `Ok` means the endpoint answered 2xx.
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmissionError>;
}
