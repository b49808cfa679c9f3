//! RSVP state machine.
//!
//! Defines a pure state transition function for the guest response flow.
//! Side effects (network submission, fade timers, session history) are
//! returned as [`RsvpAction`]s for the orchestrator to execute.

use tracing::debug;

use super::{
    AttendingAnswer, FlowNotice, GuestInput, HistoryMode, RsvpStep, SubmissionPayload,
};
use crate::ports::errors::SubmissionError;

/// Why a fade was scheduled. Decides what happens when it commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeCause {
    /// Guest opened the RSVP form from the landing page.
    Start,
    /// Guest answered "yes".
    Answer,
    /// The form endpoint accepted a submission.
    Submission,
    /// Back/forward navigation.
    History,
}

/// A step change waiting for its fade delay to elapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingFade {
    pub ticket: u64,
    pub target: RsvpStep,
    pub cause: FadeCause,
}

/// Controller state owned by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsvpModel {
    pub step: RsvpStep,
    pub input: GuestInput,
    pub notice: Option<FlowNotice>,
    pub is_submitting: bool,
    pub pending: Option<PendingFade>,
    next_ticket: u64,
}

impl Default for RsvpModel {
    fn default() -> Self {
        Self::at(RsvpStep::Landing)
    }
}

impl RsvpModel {
    pub fn at(step: RsvpStep) -> Self {
        Self {
            step,
            input: GuestInput::default(),
            notice: None,
            is_submitting: false,
            pending: None,
            next_ticket: 0,
        }
    }

    pub fn is_fading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn can_pick_attending(&self) -> bool {
        self.step == RsvpStep::Rsvp && self.input.has_name() && !self.is_submitting
    }

    pub fn can_submit_address(&self) -> bool {
        self.step == RsvpStep::Address && self.input.has_address() && !self.is_submitting
    }

    /// Replace any pending fade with a new one toward `target`.
    fn schedule(&mut self, target: RsvpStep, cause: FadeCause) -> RsvpAction {
        self.next_ticket += 1;
        let fade = PendingFade {
            ticket: self.next_ticket,
            target,
            cause,
        };
        self.pending = Some(fade);
        RsvpAction::ScheduleFade(fade)
    }
}

/// Events that drive the flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RsvpEvent {
    /// "Will you attend" pressed on the landing page.
    StartRsvp,
    EditName(String),
    EditAddress(String),
    PickAttending(AttendingAnswer),
    /// Address form submitted.
    SubmitAddress,
    /// Result from the orchestrator: endpoint returned 2xx.
    SubmissionSucceeded(AttendingAnswer),
    /// Result from the orchestrator: endpoint failed.
    SubmissionFailed {
        answer: AttendingAnswer,
        error: SubmissionError,
    },
    /// Fade timer fired.
    FadeElapsed { ticket: u64 },
    /// Back/forward navigation landed on an entry tagged with `target`.
    Navigate { target: RsvpStep },
    DismissError,
}

impl RsvpEvent {
    /// Short name for logs. Never includes what the guest typed.
    pub fn label(&self) -> &'static str {
        match self {
            RsvpEvent::StartRsvp => "start_rsvp",
            RsvpEvent::EditName(_) => "edit_name",
            RsvpEvent::EditAddress(_) => "edit_address",
            RsvpEvent::PickAttending(AttendingAnswer::Yes) => "pick_yes",
            RsvpEvent::PickAttending(AttendingAnswer::No) => "pick_no",
            RsvpEvent::SubmitAddress => "submit_address",
            RsvpEvent::SubmissionSucceeded(_) => "submission_succeeded",
            RsvpEvent::SubmissionFailed { .. } => "submission_failed",
            RsvpEvent::FadeElapsed { .. } => "fade_elapsed",
            RsvpEvent::Navigate { .. } => "navigate",
            RsvpEvent::DismissError => "dismiss_error",
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, RsvpEvent::EditName(_) | RsvpEvent::EditAddress(_))
    }
}

/// Side effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RsvpAction {
    /// Send the payload to the form endpoint and report back.
    Submit(SubmissionPayload),
    /// Start (or restart) the fade timer for this pending step change.
    ScheduleFade(PendingFade),
    /// Record the committed step in session history.
    SyncHistory { step: RsvpStep, mode: HistoryMode },
}

/// Pure RSVP state machine.
pub struct RsvpStateMachine;

impl RsvpStateMachine {
    pub fn transition(mut model: RsvpModel, event: RsvpEvent) -> (RsvpModel, Vec<RsvpAction>) {
        match event {
            RsvpEvent::StartRsvp if model.step == RsvpStep::Landing => {
                let action = model.schedule(RsvpStep::Rsvp, FadeCause::Start);
                (model, vec![action])
            }
            RsvpEvent::EditName(name) => {
                model.input.name = name;
                (model, Vec::new())
            }
            RsvpEvent::EditAddress(address) => {
                model.input.address = address;
                (model, Vec::new())
            }
            RsvpEvent::PickAttending(AttendingAnswer::Yes) if model.can_pick_attending() => {
                let action = model.schedule(RsvpStep::Address, FadeCause::Answer);
                (model, vec![action])
            }
            RsvpEvent::PickAttending(AttendingAnswer::No) if model.can_pick_attending() => {
                let payload = SubmissionPayload::declined(&model.input);
                model.is_submitting = true;
                model.notice = None;
                (model, vec![RsvpAction::Submit(payload)])
            }
            RsvpEvent::SubmitAddress
                if model.step == RsvpStep::Address && !model.is_submitting =>
            {
                if !model.input.has_name() {
                    model.notice = Some(FlowNotice::NameRequired);
                    return (model, Vec::new());
                }
                if !model.input.has_address() {
                    return (model, Vec::new());
                }
                let payload = SubmissionPayload::attending(&model.input);
                model.is_submitting = true;
                model.notice = None;
                (model, vec![RsvpAction::Submit(payload)])
            }
            RsvpEvent::SubmissionSucceeded(answer) if model.is_submitting => {
                model.is_submitting = false;
                model.notice = None;
                let target = match answer {
                    AttendingAnswer::No => RsvpStep::ThanksNo,
                    AttendingAnswer::Yes => RsvpStep::ThanksYes,
                };
                let action = model.schedule(target, FadeCause::Submission);
                (model, vec![action])
            }
            RsvpEvent::SubmissionFailed { answer, error } if model.is_submitting => {
                model.is_submitting = false;
                model.notice = Some(FlowNotice::SubmissionFailed { answer, error });
                (model, Vec::new())
            }
            RsvpEvent::FadeElapsed { ticket } => match model.pending {
                Some(fade) if fade.ticket == ticket => {
                    model.pending = None;
                    let previous = model.step;
                    model.step = fade.target;
                    match fade.cause {
                        FadeCause::Start => {
                            model.input.clear();
                            model.notice = None;
                        }
                        FadeCause::History => model.notice = None,
                        FadeCause::Answer | FadeCause::Submission => {}
                    }
                    let actions = if fade.cause == FadeCause::History {
                        vec![RsvpAction::SyncHistory {
                            step: fade.target,
                            mode: HistoryMode::Replace,
                        }]
                    } else if previous != fade.target {
                        vec![RsvpAction::SyncHistory {
                            step: fade.target,
                            mode: HistoryMode::Push,
                        }]
                    } else {
                        Vec::new()
                    };
                    (model, actions)
                }
                _ => {
                    debug!(ticket, "stale fade ignored");
                    (model, Vec::new())
                }
            },
            RsvpEvent::Navigate { target } => {
                if target == model.step && model.pending.is_none() {
                    return (model, Vec::new());
                }
                let action = model.schedule(target, FadeCause::History);
                (model, vec![action])
            }
            RsvpEvent::DismissError => {
                model.notice = None;
                (model, Vec::new())
            }
            event => {
                debug!(step = %model.step, event = event.label(), "event ignored in current state");
                (model, Vec::new())
            }
        }
    }
}
