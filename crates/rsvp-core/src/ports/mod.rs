//! Port interfaces for the application layer
//!
//! Ports define the contract between the RSVP flow orchestrator and the
//! host environment (form endpoint, preference storage, session history,
//! locale, timers, rendering surface). Implementations live in `rsvp-infra`
//! or in the host, and tests substitute fakes.

pub mod errors;
mod fade_timer;
mod form_submission;
mod locale;
mod preference_store;
mod session_history;
mod view;

pub use errors::{HistoryError, PreferenceStoreError, SubmissionError};
pub use fade_timer::{FadeTask, FadeTimerPort};
pub use form_submission::FormSubmissionPort;
pub use locale::LocalePort;
pub use preference_store::PreferenceStorePort;
pub use session_history::SessionHistoryPort;
pub use view::FlowViewPort;
