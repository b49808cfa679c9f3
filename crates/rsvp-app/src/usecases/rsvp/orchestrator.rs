//! RSVP flow orchestrator.
//!
//! Coordinates the pure state machine with its side effects: form
//! submission, fade timers, session history and the rendering surface.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use rsvp_core::flow::{
    HistoryEntry, HistoryMode, PendingFade, RsvpAction, RsvpEvent, RsvpModel, RsvpStateMachine,
};
use rsvp_core::ports::{FadeTimerPort, FlowViewPort, SessionHistoryPort};
use rsvp_core::{AttendingAnswer, Language, RsvpStep, RsvpView, SubmissionPayload};
use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tracing::{debug, info, info_span, warn, Instrument};

use super::context::FlowContext;
use crate::deps::{FlowDeps, FlowSettings};
use crate::usecases::{SelectLanguage, SubmitRsvp};

/// Errors produced by the RSVP flow.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("rsvp flow has been torn down")]
    TornDown,
}

/// View-state controller for one guest's RSVP.
///
/// Every public operation returns the view after the operation settled.
/// Operations that submit to the form endpoint resolve once the endpoint
/// has answered; the intermediate "sending" view is published meanwhile.
pub struct RsvpFlow {
    core: Arc<FlowCore>,
    fade_driver: AbortHandle,
}

struct FlowCore {
    context: FlowContext,
    submit_rsvp: SubmitRsvp,
    select_language: SelectLanguage,
    history: Arc<dyn SessionHistoryPort>,
    fade_timer: Arc<dyn FadeTimerPort>,
    view_port: Arc<dyn FlowViewPort>,
    fade_delay: Duration,
    fade_tx: mpsc::UnboundedSender<u64>,
    torn_down: AtomicBool,
}

impl RsvpFlow {
    /// Resolve the language, tag the current history entry as `landing`,
    /// and publish the first view.
    ///
    /// Must be called within a tokio runtime.
    pub async fn mount(deps: FlowDeps, settings: FlowSettings) -> Self {
        let select_language = SelectLanguage::new(deps.preferences, deps.locale);
        let language = select_language.resolve_initial().await;
        let (fade_tx, fade_rx) = mpsc::unbounded_channel();

        let core = Arc::new(FlowCore {
            context: FlowContext::new(RsvpModel::default(), language),
            submit_rsvp: SubmitRsvp::new(deps.form),
            select_language,
            history: deps.history,
            fade_timer: deps.fade_timer,
            view_port: deps.view,
            fade_delay: settings.fade_delay,
            fade_tx,
            torn_down: AtomicBool::new(false),
        });

        core.sync_history(RsvpStep::Landing, HistoryMode::Replace);
        let fade_driver = tokio::spawn(drive_fades(Arc::downgrade(&core), fade_rx)).abort_handle();
        core.publish().await;
        info!(%language, fade_delay_ms = settings.fade_delay.as_millis() as u64, "rsvp flow mounted");

        Self { core, fade_driver }
    }

    pub async fn start_rsvp(&self) -> Result<RsvpView, FlowError> {
        self.core.dispatch(RsvpEvent::StartRsvp).await
    }

    pub async fn set_name(&self, name: impl Into<String>) -> Result<RsvpView, FlowError> {
        self.core.dispatch(RsvpEvent::EditName(name.into())).await
    }

    pub async fn set_address(&self, address: impl Into<String>) -> Result<RsvpView, FlowError> {
        self.core
            .dispatch(RsvpEvent::EditAddress(address.into()))
            .await
    }

    pub async fn pick_attending(&self, answer: AttendingAnswer) -> Result<RsvpView, FlowError> {
        self.core.dispatch(RsvpEvent::PickAttending(answer)).await
    }

    pub async fn submit_address(&self) -> Result<RsvpView, FlowError> {
        self.core.dispatch(RsvpEvent::SubmitAddress).await
    }

    pub async fn dismiss_error(&self) -> Result<RsvpView, FlowError> {
        self.core.dispatch(RsvpEvent::DismissError).await
    }

    /// Back/forward navigation landed on `entry`. Entries without a step tag
    /// belong to the host page and are ignored.
    pub async fn navigate(&self, entry: &HistoryEntry) -> Result<RsvpView, FlowError> {
        match entry.step() {
            Some(target) => self.core.dispatch(RsvpEvent::Navigate { target }).await,
            None => {
                self.core.ensure_mounted()?;
                debug!("navigation to untagged history entry ignored");
                Ok(self.core.view().await)
            }
        }
    }

    pub async fn set_language(&self, language: Language) -> Result<RsvpView, FlowError> {
        self.core.change_language(|_| language).await
    }

    pub async fn toggle_language(&self) -> Result<RsvpView, FlowError> {
        self.core.change_language(Language::toggled).await
    }

    pub async fn language(&self) -> Language {
        self.core.context.get_language().await
    }

    pub async fn view(&self) -> RsvpView {
        self.core.view().await
    }

    /// Cancel the pending fade and stop reacting to timers. In-flight
    /// submissions finish, but their results are dropped.
    pub async fn teardown(&self) {
        let _dispatch_guard = self.core.context.acquire_dispatch_lock().await;
        if self.core.torn_down.swap(true, Ordering::SeqCst) {
            return;
        }
        if let Err(err) = self.core.fade_timer.stop().await {
            warn!(error = %err, "stopping fade timer failed");
        }
        self.fade_driver.abort();
        info!("rsvp flow torn down");
    }
}

impl Drop for RsvpFlow {
    fn drop(&mut self) {
        self.core.torn_down.store(true, Ordering::SeqCst);
        self.fade_driver.abort();
    }
}

impl FlowCore {
    fn is_torn_down(&self) -> bool {
        self.torn_down.load(Ordering::SeqCst)
    }

    fn ensure_mounted(&self) -> Result<(), FlowError> {
        if self.is_torn_down() {
            return Err(FlowError::TornDown);
        }
        Ok(())
    }

    async fn view(&self) -> RsvpView {
        let model = self.context.get_model().await;
        let language = self.context.get_language().await;
        RsvpView::new(&model, language)
    }

    async fn publish(&self) {
        let view = self.view().await;
        self.view_port.render(view).await;
    }

    async fn dispatch(&self, event: RsvpEvent) -> Result<RsvpView, FlowError> {
        self.ensure_mounted()?;

        let span = info_span!("usecase.rsvp_flow.dispatch", event = event.label());
        async {
            let mut pending_events = vec![event];

            while let Some(event) = pending_events.pop() {
                let is_result = matches!(
                    event,
                    RsvpEvent::SubmissionSucceeded(_) | RsvpEvent::SubmissionFailed { .. }
                );
                let submissions = match self.apply(event).await {
                    Ok(submissions) => submissions,
                    // Teardown won the lock after the endpoint answered.
                    Err(FlowError::TornDown) if is_result => {
                        debug!("submission finished after teardown, result dropped");
                        return Ok(self.view().await);
                    }
                    Err(err) => return Err(err),
                };

                // Submissions run outside the dispatch lock; `is_submitting`
                // already rejects a second one.
                for payload in submissions {
                    let answer = payload.answer;
                    let result = self.submit_rsvp.execute(&payload).await;
                    if self.is_torn_down() {
                        debug!("submission finished after teardown, result dropped");
                        return Ok(self.view().await);
                    }
                    pending_events.push(match result {
                        Ok(()) => RsvpEvent::SubmissionSucceeded(answer),
                        Err(error) => RsvpEvent::SubmissionFailed { answer, error },
                    });
                }
            }

            Ok::<_, FlowError>(self.view().await)
        }
        .instrument(span)
        .await
    }

    /// Run one transition under the dispatch lock. Returns the payloads the
    /// caller must submit once the lock is released.
    async fn apply(&self, event: RsvpEvent) -> Result<Vec<SubmissionPayload>, FlowError> {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        // Teardown may have won the lock while this event waited.
        self.ensure_mounted()?;

        let current = self.context.get_model().await;
        let from = current.step;
        let label = event.label();
        let quiet = event.is_edit();
        let (next, actions) = RsvpStateMachine::transition(current, event);
        if quiet {
            debug!(step = %next.step, event = label, "rsvp field edited");
        } else {
            info!(
                from = %from,
                to = %next.step,
                event = label,
                fading = next.is_fading(),
                submitting = next.is_submitting,
                "rsvp state transition"
            );
        }
        self.context.set_model(next).await;

        let submissions = self.execute_actions(actions).await;
        self.publish().await;
        Ok(submissions)
    }

    async fn execute_actions(&self, actions: Vec<RsvpAction>) -> Vec<SubmissionPayload> {
        let mut submissions = Vec::new();
        for action in actions {
            match action {
                RsvpAction::Submit(payload) => {
                    debug!(answer = payload.answer.as_str(), "rsvp queued submission");
                    submissions.push(payload);
                }
                RsvpAction::ScheduleFade(fade) => self.schedule_fade(fade).await,
                RsvpAction::SyncHistory { step, mode } => self.sync_history(step, mode),
            }
        }
        submissions
    }

    async fn schedule_fade(&self, fade: PendingFade) {
        let ticket = fade.ticket;
        let fade_tx = self.fade_tx.clone();
        let on_elapsed = Box::pin(async move {
            // Receiver is gone after teardown.
            let _ = fade_tx.send(ticket);
        });

        match self.fade_timer.start(self.fade_delay, on_elapsed).await {
            Ok(()) => debug!(ticket, target = %fade.target, cause = ?fade.cause, "fade scheduled"),
            Err(err) => {
                // Without a timer the step would stay faded forever; commit now.
                warn!(error = %err, ticket, "fade timer unavailable, committing immediately");
                let _ = self.fade_tx.send(ticket);
            }
        }
    }

    fn sync_history(&self, step: RsvpStep, mode: HistoryMode) {
        let current = match self.history.current() {
            Ok(current) => current,
            Err(err) => {
                warn!(error = %err, %step, "session history unavailable, back/forward degraded");
                return;
            }
        };
        let entry = HistoryEntry::tagged(current.as_ref(), step);
        let result = match mode {
            HistoryMode::Push => self.history.push(entry),
            HistoryMode::Replace => self.history.replace(entry),
        };
        match result {
            Ok(()) => debug!(%step, ?mode, "history synced"),
            Err(err) => warn!(error = %err, %step, ?mode, "history sync failed"),
        }
    }

    async fn change_language(
        &self,
        pick: impl FnOnce(Language) -> Language,
    ) -> Result<RsvpView, FlowError> {
        self.ensure_mounted()?;
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        self.ensure_mounted()?;

        let previous = self.context.get_language().await;
        let language = pick(previous);
        self.context.set_language(language).await;
        self.select_language.persist(language).await;
        info!(from = %previous, to = %language, "display language changed");

        self.publish().await;
        Ok(self.view().await)
    }
}

/// Feeds fired fade tickets back into the flow.
async fn drive_fades(core: Weak<FlowCore>, mut fade_rx: mpsc::UnboundedReceiver<u64>) {
    while let Some(ticket) = fade_rx.recv().await {
        let Some(core) = core.upgrade() else {
            break;
        };
        if let Err(err) = core.dispatch(RsvpEvent::FadeElapsed { ticket }).await {
            debug!(error = %err, ticket, "fade dropped");
            break;
        }
    }
}
