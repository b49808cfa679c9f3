//! # Flow Dependencies / 流程依赖
//!
//! Dependency grouping for `RsvpFlow` construction.
//!
//! **Note / 注意**: This is NOT a Builder pattern. No build steps, no
//! defaults, no hidden logic; just parameter grouping.

use std::sync::Arc;
use std::time::Duration;

use rsvp_core::ports::*;

/// Ports the flow talks to. All are required.
pub struct FlowDeps {
    pub form: Arc<dyn FormSubmissionPort>,
    pub preferences: Arc<dyn PreferenceStorePort>,
    pub history: Arc<dyn SessionHistoryPort>,
    pub locale: Arc<dyn LocalePort>,
    pub fade_timer: Arc<dyn FadeTimerPort>,
    pub view: Arc<dyn FlowViewPort>,
}

/// Tunables resolved by the host before mounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowSettings {
    pub fade_delay: Duration,
}

impl Default for FlowSettings {
    fn default() -> Self {
        Self {
            fade_delay: Duration::from_millis(180),
        }
    }
}
