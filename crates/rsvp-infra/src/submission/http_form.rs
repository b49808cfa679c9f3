//! Hosted form endpoint client.
//!
//! Posts the RSVP payload as JSON. Any 2xx answer is a success; the body of
//! a successful answer is not inspected.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use rsvp_core::ports::{FormSubmissionPort, SubmissionError};
use rsvp_core::SubmissionPayload;
use serde_json::Value;
use tracing::debug;

pub const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/mnjqjawj";

pub struct HttpFormSubmitter {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpFormSubmitter {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build form endpoint HTTP client")?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl FormSubmissionPort for HttpFormSubmitter {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmissionError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        let status = response.status();
        debug!(status = status.as_u16(), "form endpoint answered");
        if status.is_success() {
            return Ok(());
        }

        // An unreadable body only costs the detail, not the status.
        let body = response.text().await.unwrap_or_default();
        Err(SubmissionError::Rejected {
            status: status.as_u16(),
            detail: error_detail(&body),
        })
    }
}

/// `error`, else `message`, from a JSON error body.
fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["error", "message"].into_iter().find_map(|key| {
        value
            .get(key)
            .and_then(Value::as_str)
            .filter(|text| !text.trim().is_empty())
            .map(str::to_string)
    })
}
