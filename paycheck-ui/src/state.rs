//! Application state for the paycheck estimator UI.
//!
//! Owned by the root view and handed to the action handlers; nothing here
//! is global.

use std::{fmt, str::FromStr, time::Duration};

use paycheck_core::PaycheckBreakdown;
use serde::{Deserialize, Serialize};

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl FromStr for ThemePreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme '{other}', expected 'light' or 'dark'")),
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the results panel is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResultsView {
    /// Nothing entered yet, or the form was cleared.
    #[default]
    Empty,
    /// The last submission had no usable gross pay.
    NoResults,
    /// A breakdown is on screen.
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient notification. `id` ties an auto-dismiss timer to the toast
/// it was started for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Most recently displayed breakdown; the only input to copy-all.
    pub last_breakdown: Option<PaycheckBreakdown>,
    pub results: ResultsView,
    pub theme: ThemePreference,
    pub nav_open: bool,
    pub toast: Option<Toast>,
    next_toast_id: u64,
}

impl AppState {
    pub fn new(theme: ThemePreference) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }

    pub fn show_results(
        &mut self,
        breakdown: PaycheckBreakdown,
    ) {
        self.last_breakdown = Some(breakdown);
        self.results = ResultsView::Results;
    }

    pub fn show_no_results(&mut self) {
        self.last_breakdown = None;
        self.results = ResultsView::NoResults;
    }

    pub fn show_empty(&mut self) {
        self.last_breakdown = None;
        self.results = ResultsView::Empty;
    }

    /// Replaces the current toast and returns the new toast's id.
    pub fn show_toast(
        &mut self,
        message: impl Into<String>,
        kind: ToastKind,
    ) -> u64 {
        self.next_toast_id += 1;
        let id = self.next_toast_id;
        self.toast = Some(Toast {
            id,
            message: message.into(),
            kind,
        });
        id
    }

    /// Clears the toast only if it is still the one identified by `id`.
    pub fn dismiss_toast(
        &mut self,
        id: u64,
    ) -> bool {
        if self.toast.as_ref().is_some_and(|t| t.id == id) {
            self.toast = None;
            true
        } else {
            false
        }
    }
}
