//! RSVP flow use case.
//!
//! This module exposes the flow orchestrator.

mod context;
pub mod orchestrator;

pub use orchestrator::{FlowError, RsvpFlow};
