use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum SubmissionError {
    /// The endpoint answered with a non-2xx status. `detail` carries the
    /// `error` or `message` field of the response body when present.
    #[error("form endpoint rejected submission with status {status}")]
    Rejected { status: u16, detail: Option<String> },

    /// No response was received.
    #[error("form endpoint unreachable: {0}")]
    Transport(String),
}

#[derive(Debug, Error)]
pub enum PreferenceStoreError {
    #[error("preference storage unavailable: {0}")]
    Unavailable(String),

    #[error("preference storage corrupted: {0}")]
    Corrupted(String),
}

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("session history unavailable")]
    Unavailable,
}
