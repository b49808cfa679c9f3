//! JSON body sent to the form endpoint.

use serde::{Deserialize, Serialize};

use super::{AttendingAnswer, GuestInput};

/// Submission payload.
///
/// `answers` duplicates `name`. The hosted form schema expects both keys, so
/// the redundancy is part of the wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub name: String,
    pub answers: String,
    pub answer: AttendingAnswer,
    pub address: String,
}

impl SubmissionPayload {
    pub fn new(name: &str, answer: AttendingAnswer, address: &str) -> Self {
        let name = name.trim().to_string();
        Self {
            answers: name.clone(),
            name,
            answer,
            address: address.trim().to_string(),
        }
    }

    /// Payload for a guest who declined; address is always empty.
    pub fn declined(input: &GuestInput) -> Self {
        Self::new(input.trimmed_name(), AttendingAnswer::No, "")
    }

    pub fn attending(input: &GuestInput) -> Self {
        Self::new(
            input.trimmed_name(),
            AttendingAnswer::Yes,
            input.trimmed_address(),
        )
    }
}
