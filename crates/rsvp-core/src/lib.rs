//! # rsvp-core
//!
//! Core domain models and business logic for the wedding RSVP flow.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod config;
pub mod event;
pub mod flow;
pub mod i18n;
pub mod ports;

// Re-export commonly used types at the crate root
pub use config::FlowConfig;
pub use event::{EventDetails, WEDDING};
pub use flow::{
    AttendingAnswer, GuestInput, HistoryEntry, RsvpEvent, RsvpModel, RsvpStep, RsvpView,
    SubmissionPayload,
};
pub use i18n::{Language, Strings};
