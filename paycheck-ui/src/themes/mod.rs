#[cfg(target_os = "linux")]
mod linux_portal;
mod palette;

use std::sync::OnceLock;

use gpui::{App, WindowAppearance};
use tracing::debug;

use crate::state::ThemePreference;

pub use palette::{Rgba, apply_palette};

/// Whether the desktop is in dark mode.
///
/// On Linux the desktop portal is asked first; everywhere else (and when
/// the portal has no answer) the window appearance reported by gpui decides.
pub fn system_prefers_dark(cx: &App) -> bool {
    #[cfg(target_os = "linux")]
    if let Some(dark) = linux_portal::prefers_dark() {
        return dark;
    }

    matches!(
        cx.window_appearance(),
        WindowAppearance::Dark | WindowAppearance::VibrantDark
    )
}

/// Holds the system accent after the first lookup.
#[derive(Debug, Default)]
pub struct AccentCache(OnceLock<Option<Rgba>>);

impl AccentCache {
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Runs `read` on first use only; later calls return the stored value.
    pub fn get_or_read(
        &self,
        read: impl FnOnce() -> Option<Rgba>,
    ) -> Option<Rgba> {
        *self.0.get_or_init(read)
    }
}

static SYSTEM_ACCENT: AccentCache = AccentCache::new();

fn read_system_accent() -> Option<Rgba> {
    #[cfg(target_os = "linux")]
    {
        linux_portal::accent_color()
    }
    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}

/// Applies the light or dark palette and redraws every window.
pub fn apply_theme(
    theme: ThemePreference,
    cx: &mut App,
) {
    let accent = SYSTEM_ACCENT.get_or_read(|| {
        let accent = read_system_accent();
        if accent.is_none() {
            debug!("system accent color unavailable; using default accent");
        }
        accent
    });

    apply_palette(cx, theme, accent);
    cx.refresh_windows();
    debug!(%theme, "theme applied");
}
