use serde::Serialize;

use super::{FlowNotice, RsvpModel, RsvpStep};
use crate::i18n::{bundle, Language, Strings};

/// Snapshot published to the rendering surface after every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RsvpView {
    pub step: RsvpStep,
    pub name: String,
    pub address: String,
    pub notice: Option<FlowNotice>,
    /// `notice` rendered in `language`.
    pub error: Option<String>,
    pub is_submitting: bool,
    pub is_fading: bool,
    pub language: Language,
    pub can_pick_attending: bool,
    pub can_submit_address: bool,
}

impl RsvpView {
    pub fn new(model: &RsvpModel, language: Language) -> Self {
        let strings = bundle(language);
        Self {
            step: model.step,
            name: model.input.name.clone(),
            address: model.input.address.clone(),
            notice: model.notice.clone(),
            error: model.notice.as_ref().map(|notice| strings.notice(notice)),
            is_submitting: model.is_submitting,
            is_fading: model.is_fading(),
            language,
            can_pick_attending: model.can_pick_attending(),
            can_submit_address: model.can_submit_address(),
        }
    }

    pub fn strings(&self) -> &'static Strings {
        bundle(self.language)
    }

    /// Error to display. Thank-you pages never show one.
    pub fn visible_error(&self) -> Option<&str> {
        if self.step.is_terminal() {
            return None;
        }
        self.error.as_deref()
    }
}
