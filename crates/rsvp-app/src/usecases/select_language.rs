use std::sync::Arc;

use rsvp_core::i18n::{Language, LANGUAGE_STORAGE_KEY};
use rsvp_core::ports::{LocalePort, PreferenceStorePort};
use tracing::{debug, warn};

/// Picks the initial display language and persists manual choices.
///
/// Storage failures never surface: a read failure behaves like "no stored
/// preference", a write failure only loses persistence.
pub struct SelectLanguage {
    preferences: Arc<dyn PreferenceStorePort>,
    locale: Arc<dyn LocalePort>,
}

impl SelectLanguage {
    pub fn new(preferences: Arc<dyn PreferenceStorePort>, locale: Arc<dyn LocalePort>) -> Self {
        Self {
            preferences,
            locale,
        }
    }

    pub async fn resolve_initial(&self) -> Language {
        let stored = match self.preferences.get(LANGUAGE_STORAGE_KEY).await {
            Ok(stored) => stored,
            Err(err) => {
                warn!(error = %err, "reading language preference failed");
                None
            }
        };
        let locale = self.locale.preferred_locale();
        let language = Language::resolve(stored.as_deref(), locale.as_deref());
        debug!(?stored, ?locale, %language, "initial language resolved");
        language
    }

    pub async fn persist(&self, language: Language) {
        if let Err(err) = self
            .preferences
            .set(LANGUAGE_STORAGE_KEY, language.code())
            .await
        {
            warn!(error = %err, %language, "persisting language preference failed");
        }
    }
}
