//! Business logic use cases
//!
//! `RsvpFlow` is the only entry point for hosts; the smaller use cases are
//! the capabilities it is assembled from.

pub mod rsvp;
pub mod select_language;
pub mod submit_rsvp;

pub use select_language::SelectLanguage;
pub use submit_rsvp::SubmitRsvp;
