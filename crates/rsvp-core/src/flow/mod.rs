//! RSVP flow domain module.
//!
//! Step type, guest input, submission payload, history tagging and the pure
//! state machine that ties them together.

mod guest;
pub mod history;
mod notice;
mod payload;
pub mod state_machine;
mod step;
mod view;

pub use guest::GuestInput;
pub use history::{HistoryEntry, HistoryMode, HISTORY_STEP_KEY};
pub use notice::FlowNotice;
pub use payload::SubmissionPayload;
pub use state_machine::{
    FadeCause, PendingFade, RsvpAction, RsvpEvent, RsvpModel, RsvpStateMachine,
};
pub use step::{derive_step, AttendingAnswer, RsvpStep, StepFlags};
pub use view::RsvpView;
