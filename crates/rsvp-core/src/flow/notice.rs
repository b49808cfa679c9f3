use serde::Serialize;

use super::AttendingAnswer;
use crate::ports::errors::SubmissionError;

/// Inline message shown on the current step.
///
/// Kept language-neutral so the text follows the active bundle when the
/// guest switches language while the message is visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FlowNotice {
    /// Address submitted without a name.
    NameRequired,
    /// The form endpoint did not accept the submission.
    SubmissionFailed {
        answer: AttendingAnswer,
        error: SubmissionError,
    },
}
