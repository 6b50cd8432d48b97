//! UI action dispatch.
//!
//! Every user interaction is turned into a [`UiAction`] and routed through
//! [`dispatch`] to a plain handler function. Handlers mutate [`AppState`]
//! and return the [`Effect`]s the view still has to apply to widgets it
//! owns (input fields, the gpui theme, toast timers).

use paycheck_core::{PayFrequency, PaycheckCalculator};
use tracing::{debug, error, info, warn};

use crate::{
    clipboard::ClipboardWriter,
    preferences::PreferenceStore,
    state::{AppState, ThemePreference, ToastKind},
    utils::parse_gross_pay,
};

pub const COPY_SUCCESS_MESSAGE: &str = "Copied full breakdown to clipboard!";
pub const COPY_FAILURE_MESSAGE: &str = "Failed to copy breakdown.";
pub const SUBSCRIBE_MESSAGE: &str = "Subscribed! Thanks for joining.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    /// Calculator form submitted with the raw field contents.
    Submit { gross: String, frequency: String },
    Clear,
    CopyAll,
    ToggleTheme,
    ToggleMenu,
    Subscribe { email: String },
}

impl UiAction {
    /// Variant name for logs. Field contents stay out of the log.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Submit { .. } => "submit",
            Self::Clear => "clear",
            Self::CopyAll => "copy_all",
            Self::ToggleTheme => "toggle_theme",
            Self::ToggleMenu => "toggle_menu",
            Self::Subscribe { .. } => "subscribe",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    ClearGrossInput,
    ClearEmailInput,
    ApplyTheme(ThemePreference),
    /// Schedule auto-dismiss for the toast with this id.
    ShowToast(u64),
}

/// External services the handlers talk to.
pub struct Collaborators<'a> {
    pub calculator: &'a PaycheckCalculator,
    pub clipboard: &'a mut dyn ClipboardWriter,
    pub preferences: &'a dyn PreferenceStore,
}

pub fn dispatch(
    state: &mut AppState,
    action: UiAction,
    collab: &mut Collaborators<'_>,
) -> Vec<Effect> {
    debug!(action = action.kind(), "dispatching");
    match action {
        UiAction::Submit { gross, frequency } => {
            handle_submit(state, collab.calculator, &gross, &frequency)
        }
        UiAction::Clear => handle_clear(state),
        UiAction::CopyAll => handle_copy_all(state, collab.clipboard),
        UiAction::ToggleTheme => handle_toggle_theme(state, collab.preferences),
        UiAction::ToggleMenu => handle_toggle_menu(state),
        UiAction::Subscribe { email } => handle_subscribe(state, &email),
    }
}

fn handle_submit(
    state: &mut AppState,
    calculator: &PaycheckCalculator,
    gross: &str,
    frequency: &str,
) -> Vec<Effect> {
    let gross_annual_pay = match parse_gross_pay(gross) {
        Ok(value) => value,
        Err(e) => {
            debug!(%e, "no results for submitted gross pay");
            state.show_no_results();
            return Vec::new();
        }
    };

    let frequency = PayFrequency::from_token(frequency);
    let breakdown = calculator.calculate(gross_annual_pay, frequency);
    info!(%frequency, net_pay = %breakdown.formatted_net_pay(), "paycheck calculated");
    state.show_results(breakdown);
    Vec::new()
}

fn handle_clear(state: &mut AppState) -> Vec<Effect> {
    state.show_empty();
    vec![Effect::ClearGrossInput]
}

fn handle_copy_all(
    state: &mut AppState,
    clipboard: &mut dyn ClipboardWriter,
) -> Vec<Effect> {
    let Some(text) = state.last_breakdown.as_ref().map(|b| b.clipboard_text()) else {
        return Vec::new();
    };

    let id = match clipboard.write_text(&text) {
        Ok(()) => state.show_toast(COPY_SUCCESS_MESSAGE, ToastKind::Success),
        Err(e) => {
            error!(%e, "could not copy breakdown");
            state.show_toast(COPY_FAILURE_MESSAGE, ToastKind::Error)
        }
    };
    vec![Effect::ShowToast(id)]
}

fn handle_toggle_theme(
    state: &mut AppState,
    preferences: &dyn PreferenceStore,
) -> Vec<Effect> {
    state.theme = state.theme.toggled();
    if let Err(e) = preferences.save_theme(state.theme) {
        warn!(%e, "theme preference not persisted");
    }
    vec![Effect::ApplyTheme(state.theme)]
}

fn handle_toggle_menu(state: &mut AppState) -> Vec<Effect> {
    state.nav_open = !state.nav_open;
    Vec::new()
}

fn handle_subscribe(
    state: &mut AppState,
    email: &str,
) -> Vec<Effect> {
    if email.trim().is_empty() {
        return Vec::new();
    }
    let id = state.show_toast(SUBSCRIBE_MESSAGE, ToastKind::Success);
    vec![Effect::ClearEmailInput, Effect::ShowToast(id)]
}
