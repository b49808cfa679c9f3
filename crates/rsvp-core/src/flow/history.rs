//! Session-history entries tagged with an RSVP step.
//!
//! The host page may keep its own keys in the history state object. Tagging
//! only ever writes [`HISTORY_STEP_KEY`] and leaves every other key intact.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::RsvpStep;

/// Reserved key holding the step tag inside a history state object.
pub const HISTORY_STEP_KEY: &str = "rsvpStep";

/// How a committed step is written to session history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryMode {
    Push,
    Replace,
}

/// One state object on the session-history stack.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryEntry(pub Value);

impl HistoryEntry {
    /// Merge the step tag into `base`. A non-object base is discarded.
    pub fn tagged(base: Option<&HistoryEntry>, step: RsvpStep) -> Self {
        let mut map = match base.map(|entry| &entry.0) {
            Some(Value::Object(existing)) => existing.clone(),
            _ => Map::new(),
        };
        map.insert(
            HISTORY_STEP_KEY.to_string(),
            Value::String(step.tag().to_string()),
        );
        Self(Value::Object(map))
    }

    /// Step recorded in this entry, if it carries a known tag.
    pub fn step(&self) -> Option<RsvpStep> {
        self.0
            .get(HISTORY_STEP_KEY)
            .and_then(Value::as_str)
            .and_then(RsvpStep::from_tag)
    }
}

impl From<Value> for HistoryEntry {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
