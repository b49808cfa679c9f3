use std::sync::Arc;

use rsvp_core::ports::{FormSubmissionPort, SubmissionError};
use rsvp_core::SubmissionPayload;
use tracing::{info, info_span, warn, Instrument};

/// Sends one RSVP to the form endpoint.
pub struct SubmitRsvp {
    form: Arc<dyn FormSubmissionPort>,
}

impl SubmitRsvp {
    pub fn new(form: Arc<dyn FormSubmissionPort>) -> Self {
        Self { form }
    }

    pub async fn execute(&self, payload: &SubmissionPayload) -> Result<(), SubmissionError> {
        let span = info_span!("usecase.submit_rsvp.execute", answer = payload.answer.as_str());
        async {
            match self.form.submit(payload).await {
                Ok(()) => {
                    info!("rsvp submission accepted");
                    Ok(())
                }
                Err(err) => {
                    warn!(error = %err, "rsvp submission failed");
                    Err(err)
                }
            }
        }
        .instrument(span)
        .await
    }
}
