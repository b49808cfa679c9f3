//! # Dependency Injection / 依赖注入模块
//!
//! The only place that sees `rsvp-app` and `rsvp-infra` together. It
//! assembles adapters; it makes no flow decisions.

use std::sync::Arc;

use rsvp_app::FlowDeps;
use rsvp_core::ports::{FlowViewPort, LocalePort, PreferenceStorePort};
use rsvp_infra::{
    EnvLocale, FilePreferenceStore, FixedLocale, HttpFormSubmitter, InMemoryPreferenceStore,
    InMemorySessionHistory, TokioFadeTimer,
};
use tracing::info;

use super::config::HostSettings;

/// Flow dependencies plus the concrete history the host navigates with.
pub struct WiredFlow {
    pub deps: FlowDeps,
    pub history: Arc<InMemorySessionHistory>,
}

pub fn wire_dependencies(
    settings: &HostSettings,
    view: Arc<dyn FlowViewPort>,
) -> anyhow::Result<WiredFlow> {
    let form = HttpFormSubmitter::new(settings.endpoint_url.clone(), settings.request_timeout)?;

    let preferences: Arc<dyn PreferenceStorePort> = match &settings.preferences_path {
        Some(path) => Arc::new(FilePreferenceStore::new(path.clone())),
        None => Arc::new(InMemoryPreferenceStore::new()),
    };

    let locale: Arc<dyn LocalePort> = match &settings.locale_override {
        Some(locale) => Arc::new(FixedLocale(Some(locale.clone()))),
        None => Arc::new(EnvLocale),
    };

    let history = Arc::new(InMemorySessionHistory::new());

    info!(
        endpoint = %form.endpoint(),
        preferences = ?settings.preferences_path,
        "dependencies wired"
    );

    Ok(WiredFlow {
        deps: FlowDeps {
            form: Arc::new(form),
            preferences,
            history: history.clone(),
            locale,
            fade_timer: Arc::new(TokioFadeTimer::new()),
            view,
        },
        history,
    })
}
