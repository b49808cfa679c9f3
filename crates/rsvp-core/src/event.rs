//! Language-neutral facts about the wedding shown on the landing step.
//!
//! Date and time are worded per language in the string bundles.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventDetails {
    pub venue_map_url: &'static str,
}

pub const WEDDING: EventDetails = EventDetails {
    venue_map_url: "https://www.google.com/maps/place/32267+Clubhouse+Way,+Millsboro,+DE+19966",
};
