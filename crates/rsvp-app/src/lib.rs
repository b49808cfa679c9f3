//! RSVP application orchestration layer
//!
//! This crate drives the pure RSVP state machine: it executes side effects
//! through ports and publishes view snapshots to the rendering surface.

pub mod deps;
pub mod usecases;

pub use deps::{FlowDeps, FlowSettings};
pub use usecases::rsvp::{FlowError, RsvpFlow};
