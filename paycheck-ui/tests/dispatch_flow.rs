//! End-to-end action flows through `dispatch`, with a recording clipboard
//! and a preference file in a temporary directory.

use paycheck_core::{PayFrequency, PaycheckCalculator};
use paycheck_ui::{
    actions::{
        COPY_FAILURE_MESSAGE, COPY_SUCCESS_MESSAGE, Collaborators, Effect, SUBSCRIBE_MESSAGE,
        UiAction, dispatch,
    },
    clipboard::{ClipboardError, ClipboardWriter},
    preferences::{PreferenceStore, TomlPreferenceStore, resolve_startup_theme},
    state::{AppState, ResultsView, ThemePreference, ToastKind},
};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

#[derive(Default)]
struct RecordingClipboard {
    writes: Vec<String>,
    fail: bool,
}

impl ClipboardWriter for RecordingClipboard {
    fn write_text(
        &mut self,
        text: &str,
    ) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Unavailable("no display".to_string()));
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}

struct Harness {
    state: AppState,
    calculator: PaycheckCalculator,
    clipboard: RecordingClipboard,
    store: TomlPreferenceStore,
    _dir: tempfile::TempDir,
}

impl Harness {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlPreferenceStore::new(dir.path().join("preferences.toml"));
        Self {
            state: AppState::new(ThemePreference::Light),
            calculator: PaycheckCalculator::default(),
            clipboard: RecordingClipboard::default(),
            store,
            _dir: dir,
        }
    }

    fn run(
        &mut self,
        action: UiAction,
    ) -> Vec<Effect> {
        let mut collab = Collaborators {
            calculator: &self.calculator,
            clipboard: &mut self.clipboard,
            preferences: &self.store,
        };
        dispatch(&mut self.state, action, &mut collab)
    }

    fn submit(
        &mut self,
        gross: &str,
        frequency: &str,
    ) -> Vec<Effect> {
        self.run(UiAction::Submit {
            gross: gross.to_string(),
            frequency: frequency.to_string(),
        })
    }
}

#[test]
fn submit_monthly_shows_breakdown() {
    let mut h = Harness::new();

    let effects = h.submit("120,000", "monthly");

    assert!(effects.is_empty());
    assert_eq!(h.state.results, ResultsView::Results);
    let breakdown = h.state.last_breakdown.as_ref().unwrap();
    assert_eq!(breakdown.frequency, PayFrequency::Monthly);
    assert_eq!(breakdown.net_pay, dec!(6835));
    assert_eq!(breakdown.summary(), "Net Pay: $6,835.00 (Monthly)");
}

#[test]
fn submit_with_unknown_frequency_uses_annual() {
    let mut h = Harness::new();

    h.submit("52000", "");

    let breakdown = h.state.last_breakdown.as_ref().unwrap();
    assert_eq!(breakdown.frequency, PayFrequency::Annual);
    assert_eq!(breakdown.periods, 1);
    assert_eq!(breakdown.gross_period_pay, dec!(52000));
}

#[test]
fn zero_or_negative_gross_shows_no_results() {
    for gross in ["0", "-1000", "abc"] {
        let mut h = Harness::new();
        h.submit("52000", "weekly");

        h.submit(gross, "weekly");

        assert_eq!(h.state.results, ResultsView::NoResults, "input {gross:?}");
        assert!(h.state.last_breakdown.is_none(), "input {gross:?}");
    }
}

#[test]
fn clear_returns_to_empty_state() {
    let mut h = Harness::new();
    h.submit("52000", "weekly");

    let effects = h.run(UiAction::Clear);

    assert_eq!(effects, vec![Effect::ClearGrossInput]);
    assert_eq!(h.state.results, ResultsView::Empty);
    assert!(h.state.last_breakdown.is_none());
}

#[test]
fn copy_all_without_results_is_a_no_op() {
    let mut h = Harness::new();

    let effects = h.run(UiAction::CopyAll);

    assert!(effects.is_empty());
    assert!(h.clipboard.writes.is_empty());
    assert!(h.state.toast.is_none());
}

#[test]
fn copy_all_after_clear_is_a_no_op() {
    let mut h = Harness::new();
    h.submit("52000", "weekly");
    h.run(UiAction::Clear);

    assert!(h.run(UiAction::CopyAll).is_empty());
    assert!(h.clipboard.writes.is_empty());
}

#[test]
fn copy_all_writes_breakdown_and_toasts() {
    let mut h = Harness::new();
    h.submit("52000", "weekly");

    let effects = h.run(UiAction::CopyAll);

    let writes = &h.clipboard.writes;
    assert_eq!(writes.len(), 1);
    assert!(writes[0].starts_with("Gross Pay: $1,000.00\n"));
    assert!(writes[0].ends_with("Net Pay (Take-Home): $683.50"));

    let toast = h.state.toast.as_ref().unwrap();
    assert_eq!(toast.message, COPY_SUCCESS_MESSAGE);
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(effects, vec![Effect::ShowToast(toast.id)]);
}

#[test]
fn copy_failure_is_reported_and_keeps_results() {
    let mut h = Harness::new();
    h.clipboard.fail = true;
    h.submit("52000", "weekly");

    h.run(UiAction::CopyAll);

    let toast = h.state.toast.as_ref().unwrap();
    assert_eq!(toast.message, COPY_FAILURE_MESSAGE);
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(h.state.results, ResultsView::Results);
    assert!(h.state.last_breakdown.is_some());
}

#[test]
fn theme_toggle_is_persisted() {
    let mut h = Harness::new();

    let effects = h.run(UiAction::ToggleTheme);

    assert_eq!(effects, vec![Effect::ApplyTheme(ThemePreference::Dark)]);
    assert_eq!(h.store.load_theme().unwrap(), Some(ThemePreference::Dark));
    assert_eq!(
        resolve_startup_theme(&h.store, || false),
        ThemePreference::Dark
    );

    h.run(UiAction::ToggleTheme);
    assert_eq!(h.store.load_theme().unwrap(), Some(ThemePreference::Light));
}

#[test]
fn subscribe_clears_field_and_confirms() {
    let mut h = Harness::new();

    let effects = h.run(UiAction::Subscribe {
        email: "someone@example.com".to_string(),
    });

    let toast = h.state.toast.as_ref().unwrap();
    assert_eq!(toast.message, SUBSCRIBE_MESSAGE);
    assert_eq!(
        effects,
        vec![Effect::ClearEmailInput, Effect::ShowToast(toast.id)]
    );
}
