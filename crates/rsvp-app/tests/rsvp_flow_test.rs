use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use mockall::mock;
use rsvp_app::{FlowDeps, FlowError, FlowSettings, RsvpFlow};
use rsvp_core::flow::{FlowNotice, HistoryEntry};
use rsvp_core::ports::{
    FlowViewPort, FormSubmissionPort, PreferenceStoreError, PreferenceStorePort,
    SessionHistoryPort, SubmissionError,
};
use rsvp_core::{AttendingAnswer, Language, RsvpStep, RsvpView, SubmissionPayload};
use rsvp_infra::{FixedLocale, InMemoryPreferenceStore, InMemorySessionHistory, TokioFadeTimer};
use serde_json::json;
use tokio::sync::Notify;

mock! {
    Form {}

    #[async_trait]
    impl FormSubmissionPort for Form {
        async fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmissionError>;
    }
}

#[derive(Default)]
struct RecordingView {
    views: Mutex<Vec<RsvpView>>,
}

impl RecordingView {
    fn rendered(&self) -> Vec<RsvpView> {
        self.views.lock().unwrap().clone()
    }
}

#[async_trait]
impl FlowViewPort for RecordingView {
    async fn render(&self, view: RsvpView) {
        self.views.lock().unwrap().push(view);
    }
}

struct BrokenPreferences;

#[async_trait]
impl PreferenceStorePort for BrokenPreferences {
    async fn get(&self, _key: &str) -> Result<Option<String>, PreferenceStoreError> {
        Err(PreferenceStoreError::Unavailable("storage disabled".into()))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), PreferenceStoreError> {
        Err(PreferenceStoreError::Unavailable("storage disabled".into()))
    }
}

/// Form endpoint that holds every request until released.
#[derive(Default)]
struct GatedForm {
    calls: AtomicUsize,
    release: Notify,
}

impl GatedForm {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn wait_for_calls(&self, expected: usize) {
        while self.calls() < expected {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl FormSubmissionPort for GatedForm {
    async fn submit(&self, _payload: &SubmissionPayload) -> Result<(), SubmissionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.release.notified().await;
        Ok(())
    }
}

struct Harness {
    flow: Arc<RsvpFlow>,
    history: Arc<InMemorySessionHistory>,
    view: Arc<RecordingView>,
}

async fn mount_with(
    form: Arc<dyn FormSubmissionPort>,
    preferences: Arc<dyn PreferenceStorePort>,
    locale: Option<&str>,
) -> Harness {
    let history = Arc::new(InMemorySessionHistory::new());
    let view = Arc::new(RecordingView::default());
    let deps = FlowDeps {
        form,
        preferences,
        history: history.clone(),
        locale: Arc::new(FixedLocale(locale.map(str::to_string))),
        fade_timer: Arc::new(TokioFadeTimer::new()),
        view: view.clone(),
    };
    let flow = Arc::new(RsvpFlow::mount(deps, FlowSettings::default()).await);
    Harness {
        flow,
        history,
        view,
    }
}

async fn mount(form: MockForm) -> Harness {
    mount_with(Arc::new(form), Arc::new(InMemoryPreferenceStore::new()), None).await
}

/// Let every pending fade elapse.
async fn settle() {
    tokio::time::sleep(Duration::from_secs(1)).await;
}

fn steps(history: &InMemorySessionHistory) -> Vec<Option<RsvpStep>> {
    history.entries().iter().map(HistoryEntry::step).collect()
}

async fn reach_address(harness: &Harness, name: &str) {
    harness.flow.start_rsvp().await.unwrap();
    settle().await;
    harness.flow.set_name(name).await.unwrap();
    harness
        .flow
        .pick_attending(AttendingAnswer::Yes)
        .await
        .unwrap();
    settle().await;
    assert_eq!(harness.flow.view().await.step, RsvpStep::Address);
}

#[tokio::test(start_paused = true)]
async fn attending_guest_submits_once_and_sees_thanks() {
    let mut form = MockForm::new();
    form.expect_submit()
        .withf(|payload| {
            payload.name == "Jane Doe"
                && payload.answers == "Jane Doe"
                && payload.answer == AttendingAnswer::Yes
                && payload.address == "1 Main St"
        })
        .times(1)
        .returning(|_| Ok(()));
    let harness = mount(form).await;

    let view = harness.flow.start_rsvp().await.unwrap();
    assert_eq!(view.step, RsvpStep::Landing);
    assert!(view.is_fading);
    settle().await;
    assert_eq!(harness.flow.view().await.step, RsvpStep::Rsvp);

    harness.flow.set_name("  Jane Doe ").await.unwrap();
    harness
        .flow
        .pick_attending(AttendingAnswer::Yes)
        .await
        .unwrap();
    settle().await;
    assert_eq!(harness.flow.view().await.step, RsvpStep::Address);

    harness.flow.set_address("1 Main St").await.unwrap();
    let view = harness.flow.submit_address().await.unwrap();
    assert!(!view.is_submitting);
    assert!(view.is_fading);
    settle().await;

    let view = harness.flow.view().await;
    assert_eq!(view.step, RsvpStep::ThanksYes);
    assert_eq!(view.visible_error(), None);

    // Resubmitting from the thank-you page does nothing.
    harness.flow.submit_address().await.unwrap();
    assert_eq!(harness.flow.view().await.step, RsvpStep::ThanksYes);
}

#[tokio::test(start_paused = true)]
async fn declining_guest_submits_with_empty_address() {
    let mut form = MockForm::new();
    form.expect_submit()
        .withf(|payload| payload.answer == AttendingAnswer::No && payload.address.is_empty())
        .times(1)
        .returning(|_| Ok(()));
    let harness = mount(form).await;

    harness.flow.start_rsvp().await.unwrap();
    settle().await;
    harness.flow.set_name("Kim").await.unwrap();
    harness
        .flow
        .pick_attending(AttendingAnswer::No)
        .await
        .unwrap();
    settle().await;

    assert_eq!(harness.flow.view().await.step, RsvpStep::ThanksNo);
    assert!(
        harness.view.rendered().iter().any(|view| view.is_submitting),
        "a sending view should have been published while the request was in flight"
    );
}

#[tokio::test(start_paused = true)]
async fn failed_submission_keeps_address_and_allows_retry() {
    let mut form = MockForm::new();
    let mut calls = 0;
    form.expect_submit().times(2).returning(move |_| {
        calls += 1;
        if calls == 1 {
            Err(SubmissionError::Rejected {
                status: 422,
                detail: Some("Form not active".to_string()),
            })
        } else {
            Ok(())
        }
    });
    let harness = mount(form).await;
    reach_address(&harness, "Jane Doe").await;

    harness.flow.set_address("1 Main St").await.unwrap();
    let view = harness.flow.submit_address().await.unwrap();
    assert_eq!(view.step, RsvpStep::Address);
    assert_eq!(view.visible_error(), Some("Form not active"));
    assert_eq!(view.address, "1 Main St");
    assert!(view.can_submit_address);

    harness.flow.submit_address().await.unwrap();
    settle().await;
    let view = harness.flow.view().await;
    assert_eq!(view.step, RsvpStep::ThanksYes);
    assert_eq!(view.notice, None);
}

#[tokio::test(start_paused = true)]
async fn cleared_name_blocks_address_submission() {
    let mut form = MockForm::new();
    form.expect_submit().never();
    let harness = mount(form).await;
    reach_address(&harness, "Jane Doe").await;

    harness.flow.set_name("   ").await.unwrap();
    harness.flow.set_address("1 Main St").await.unwrap();
    let view = harness.flow.submit_address().await.unwrap();

    assert_eq!(view.step, RsvpStep::Address);
    assert_eq!(view.notice, Some(FlowNotice::NameRequired));
    assert!(view.error.is_some());

    let view = harness.flow.dismiss_error().await.unwrap();
    assert_eq!(view.notice, None);
}

#[tokio::test(start_paused = true)]
async fn steps_are_recorded_in_session_history() {
    let mut form = MockForm::new();
    form.expect_submit().never();
    let harness = mount(form).await;

    assert_eq!(steps(&harness.history), vec![Some(RsvpStep::Landing)]);

    reach_address(&harness, "Jane Doe").await;
    assert_eq!(
        steps(&harness.history),
        vec![
            Some(RsvpStep::Landing),
            Some(RsvpStep::Rsvp),
            Some(RsvpStep::Address)
        ]
    );
    assert_eq!(harness.history.index(), 2);
}

#[tokio::test(start_paused = true)]
async fn back_and_forward_move_between_steps_without_submitting() {
    let mut form = MockForm::new();
    form.expect_submit().never();
    let harness = mount(form).await;
    reach_address(&harness, "Jane Doe").await;

    let back = harness.history.back().unwrap();
    harness.flow.navigate(&back).await.unwrap();
    settle().await;
    let view = harness.flow.view().await;
    assert_eq!(view.step, RsvpStep::Rsvp);
    assert_eq!(view.name, "Jane Doe");
    // Navigation replaces, it never grows the stack.
    assert_eq!(harness.history.len(), 3);

    let forward = harness.history.forward().unwrap();
    harness.flow.navigate(&forward).await.unwrap();
    settle().await;
    assert_eq!(harness.flow.view().await.step, RsvpStep::Address);
    assert_eq!(harness.history.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn untagged_history_entries_are_ignored() {
    let harness = mount(MockForm::new()).await;
    harness.flow.start_rsvp().await.unwrap();
    settle().await;

    let view = harness
        .flow
        .navigate(&HistoryEntry(json!({ "page": 2 })))
        .await
        .unwrap();
    settle().await;

    assert_eq!(view.step, RsvpStep::Rsvp);
    assert!(!view.is_fading);
    assert_eq!(harness.flow.view().await.step, RsvpStep::Rsvp);
}

#[tokio::test(start_paused = true)]
async fn host_history_keys_survive_tagging() {
    let history = Arc::new(InMemorySessionHistory::with_initial(HistoryEntry(
        json!({ "scroll": 40 }),
    )));
    let deps = FlowDeps {
        form: Arc::new(MockForm::new()),
        preferences: Arc::new(InMemoryPreferenceStore::new()),
        history: history.clone(),
        locale: Arc::new(FixedLocale(None)),
        fade_timer: Arc::new(TokioFadeTimer::new()),
        view: Arc::new(RecordingView::default()),
    };
    let flow = RsvpFlow::mount(deps, FlowSettings::default()).await;

    assert_eq!(
        history.current().unwrap().unwrap().0,
        json!({ "scroll": 40, "rsvpStep": "landing" })
    );

    flow.start_rsvp().await.unwrap();
    settle().await;
    assert_eq!(
        history.current().unwrap().unwrap().0,
        json!({ "scroll": 40, "rsvpStep": "rsvp" })
    );
}

#[tokio::test(start_paused = true)]
async fn stored_language_wins_and_toggle_persists() {
    let preferences = Arc::new(InMemoryPreferenceStore::with_value("wedding_lang", "ko"));
    let harness = mount_with(Arc::new(MockForm::new()), preferences.clone(), Some("en-US")).await;

    assert_eq!(harness.flow.language().await, Language::Ko);
    assert_eq!(harness.view.rendered()[0].language, Language::Ko);

    let view = harness.flow.toggle_language().await.unwrap();
    assert_eq!(view.language, Language::En);
    assert_eq!(
        preferences.get("wedding_lang").await.unwrap().as_deref(),
        Some("en")
    );

    harness.flow.set_language(Language::Ko).await.unwrap();
    assert_eq!(
        preferences.get("wedding_lang").await.unwrap().as_deref(),
        Some("ko")
    );
}

#[tokio::test(start_paused = true)]
async fn korean_locale_is_used_without_stored_preference() {
    let harness = mount_with(
        Arc::new(MockForm::new()),
        Arc::new(InMemoryPreferenceStore::with_value("wedding_lang", "fr")),
        Some("KO-kr"),
    )
    .await;

    assert_eq!(harness.flow.language().await, Language::Ko);
}

#[tokio::test(start_paused = true)]
async fn broken_storage_falls_back_and_still_switches_language() {
    let harness = mount_with(Arc::new(MockForm::new()), Arc::new(BrokenPreferences), None).await;

    assert_eq!(harness.flow.language().await, Language::En);
    let view = harness.flow.toggle_language().await.unwrap();
    assert_eq!(view.language, Language::Ko);
}

#[tokio::test(start_paused = true)]
async fn language_switch_keeps_flow_state() {
    let mut form = MockForm::new();
    form.expect_submit().never();
    let harness = mount(form).await;
    reach_address(&harness, "Jane Doe").await;
    harness.flow.set_address("1 Main St").await.unwrap();

    let view = harness.flow.toggle_language().await.unwrap();

    assert_eq!(view.step, RsvpStep::Address);
    assert_eq!(view.name, "Jane Doe");
    assert_eq!(view.address, "1 Main St");
    assert_eq!(view.language, Language::Ko);
}

#[tokio::test(start_paused = true)]
async fn teardown_cancels_pending_fade() {
    let harness = mount(MockForm::new()).await;
    harness.flow.start_rsvp().await.unwrap();

    harness.flow.teardown().await;
    settle().await;

    assert_eq!(harness.flow.view().await.step, RsvpStep::Landing);
    assert!(matches!(
        harness.flow.start_rsvp().await,
        Err(FlowError::TornDown)
    ));
    assert!(matches!(
        harness.flow.toggle_language().await,
        Err(FlowError::TornDown)
    ));

    // Second teardown is a no-op.
    harness.flow.teardown().await;
}

async fn mount_gated() -> (Harness, Arc<GatedForm>) {
    let form = Arc::new(GatedForm::default());
    let harness = mount_with(form.clone(), Arc::new(InMemoryPreferenceStore::new()), None).await;
    harness.flow.start_rsvp().await.unwrap();
    settle().await;
    harness.flow.set_name("Kim").await.unwrap();
    (harness, form)
}

#[tokio::test(start_paused = true)]
async fn second_answer_while_sending_does_not_submit_again() {
    let (harness, form) = mount_gated().await;

    let flow = harness.flow.clone();
    let first = tokio::spawn(async move { flow.pick_attending(AttendingAnswer::No).await });
    form.wait_for_calls(1).await;

    let view = harness
        .flow
        .pick_attending(AttendingAnswer::No)
        .await
        .unwrap();
    assert!(view.is_submitting);
    assert!(!view.can_pick_attending);
    assert_eq!(form.calls(), 1);

    // Other controls keep working while the request is open.
    let view = harness.flow.toggle_language().await.unwrap();
    assert_eq!(view.language, Language::Ko);
    assert!(view.is_submitting);

    form.release.notify_one();
    first.await.unwrap().unwrap();
    settle().await;

    assert_eq!(form.calls(), 1);
    assert_eq!(harness.flow.view().await.step, RsvpStep::ThanksNo);
}

#[tokio::test(start_paused = true)]
async fn submission_answered_after_teardown_is_dropped() {
    let (harness, form) = mount_gated().await;

    let flow = harness.flow.clone();
    let pending = tokio::spawn(async move { flow.pick_attending(AttendingAnswer::No).await });
    form.wait_for_calls(1).await;

    harness.flow.teardown().await;
    form.release.notify_one();

    let view = pending.await.unwrap().expect("late result is dropped silently");
    assert_eq!(view.step, RsvpStep::Rsvp);
    settle().await;

    let view = harness.flow.view().await;
    assert_eq!(view.step, RsvpStep::Rsvp);
    assert!(!view.is_fading);
    assert_eq!(form.calls(), 1);
}
