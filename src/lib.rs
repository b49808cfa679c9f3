//! Wedding RSVP host.
//!
//! Wires the RSVP flow to concrete adapters and drives it from a terminal.

pub mod bootstrap;
pub mod terminal;
