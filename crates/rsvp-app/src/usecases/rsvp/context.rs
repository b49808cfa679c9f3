use rsvp_core::{Language, RsvpModel};
use tokio::sync::{Mutex, MutexGuard};

/// Shared flow context containing state and dispatch lock.
///
/// ## Lock Ordering
/// When acquiring several locks, acquire `dispatch_lock` first, then `model`
/// or `language`.
/// - `dispatch_lock`: serializes transitions and language changes.
/// - `model` / `language`: short reads and writes, never held across port calls.
pub struct FlowContext {
    model: Mutex<RsvpModel>,
    language: Mutex<Language>,
    /// Ensures transition + execute_actions + publish runs atomically.
    /// Not held while a submission is in flight.
    dispatch_lock: Mutex<()>,
}

impl FlowContext {
    pub fn new(model: RsvpModel, language: Language) -> Self {
        Self {
            model: Mutex::new(model),
            language: Mutex::new(language),
            dispatch_lock: Mutex::new(()),
        }
    }

    pub async fn get_model(&self) -> RsvpModel {
        self.model.lock().await.clone()
    }

    /// This should only be called after acquiring `dispatch_lock`.
    pub async fn set_model(&self, model: RsvpModel) {
        *self.model.lock().await = model;
    }

    pub async fn get_language(&self) -> Language {
        *self.language.lock().await
    }

    /// This should only be called after acquiring `dispatch_lock`.
    pub async fn set_language(&self, language: Language) {
        *self.language.lock().await = language;
    }

    pub async fn acquire_dispatch_lock(&self) -> MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }
}
