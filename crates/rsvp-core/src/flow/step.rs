//! RSVP steps and the flag triple each one corresponds to.

use serde::{Deserialize, Serialize};

/// Attendance answer picked on the RSVP step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendingAnswer {
    Yes,
    No,
}

impl AttendingAnswer {
    pub fn as_str(self) -> &'static str {
        match self {
            AttendingAnswer::Yes => "yes",
            AttendingAnswer::No => "no",
        }
    }
}

/// The step a guest's response flow is currently on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsvpStep {
    /// Announcement with event details and the "will you attend" button.
    Landing,
    /// Name entry and the yes/no question.
    Rsvp,
    /// Mailing address entry (attending guests only).
    Address,
    /// Thank-you page after declining.
    ThanksNo,
    /// Thank-you page after sending an address.
    ThanksYes,
}

impl RsvpStep {
    pub const ALL: [RsvpStep; 5] = [
        RsvpStep::Landing,
        RsvpStep::Rsvp,
        RsvpStep::Address,
        RsvpStep::ThanksNo,
        RsvpStep::ThanksYes,
    ];

    /// Stable tag used in session history entries.
    pub fn tag(self) -> &'static str {
        match self {
            RsvpStep::Landing => "landing",
            RsvpStep::Rsvp => "rsvp",
            RsvpStep::Address => "address",
            RsvpStep::ThanksNo => "thanks_no",
            RsvpStep::ThanksYes => "thanks_yes",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|step| step.tag() == tag)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, RsvpStep::ThanksNo | RsvpStep::ThanksYes)
    }

    /// Canonical flag triple for this step.
    pub fn flags(self) -> StepFlags {
        match self {
            RsvpStep::Landing => StepFlags::default(),
            RsvpStep::Rsvp => StepFlags {
                rsvp_open: true,
                attending: None,
                submitted: false,
            },
            RsvpStep::Address => StepFlags {
                rsvp_open: true,
                attending: Some(AttendingAnswer::Yes),
                submitted: false,
            },
            RsvpStep::ThanksNo => StepFlags {
                rsvp_open: true,
                attending: Some(AttendingAnswer::No),
                submitted: true,
            },
            RsvpStep::ThanksYes => StepFlags {
                rsvp_open: true,
                attending: Some(AttendingAnswer::Yes),
                submitted: true,
            },
        }
    }
}

impl std::fmt::Display for RsvpStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// The three independent flags the step used to be derived from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepFlags {
    pub rsvp_open: bool,
    pub attending: Option<AttendingAnswer>,
    pub submitted: bool,
}

/// Derive the step from a flag triple.
///
/// Total over every combination. A declined answer always shows the decline
/// thank-you; any other submitted state shows the attending thank-you.
pub fn derive_step(flags: StepFlags) -> RsvpStep {
    if !flags.rsvp_open {
        return RsvpStep::Landing;
    }
    match (flags.attending, flags.submitted) {
        (Some(AttendingAnswer::No), _) => RsvpStep::ThanksNo,
        (_, true) => RsvpStep::ThanksYes,
        (None, false) => RsvpStep::Rsvp,
        (Some(AttendingAnswer::Yes), false) => RsvpStep::Address,
    }
}
