use std::path::PathBuf;

use anyhow::Result;
use gpui::{
    App, AppContext, Bounds, KeyBinding, Menu, MenuItem, TitlebarOptions, WindowBounds,
    WindowOptions,
};
use gpui_component::Root;
use tracing::{info, warn};

use crate::{
    Quit,
    clipboard::SystemClipboard,
    components::{PaycheckWindow, WindowPreferences, header::APP_TITLE},
    preferences::{
        MemoryPreferenceStore, PreferenceStore, TomlPreferenceStore, resolve_startup_theme,
    },
    quit,
    state::{AppState, ThemePreference},
    themes::{apply_theme, system_prefers_dark},
};

/// Startup settings taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Preference file location; the platform config dir when `None`.
    pub preferences_path: Option<PathBuf>,
    /// Theme for this session only, not written to the store.
    pub theme_override: Option<ThemePreference>,
}

pub fn setup_app(app_cx: &mut App) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);

    app_cx.activate(true);

    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    app_cx.on_action(quit);
    app_cx
        .on_window_closed(|cx: &mut App| {
            if cx.windows().is_empty() {
                info!("Last window closed");
                quit(&Quit, cx);
            }
        })
        .detach();

    app_cx.set_menus(vec![Menu {
        name: APP_TITLE.into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}

fn open_preference_store(options: &LaunchOptions) -> Box<dyn PreferenceStore> {
    if let Some(path) = &options.preferences_path {
        return Box::new(TomlPreferenceStore::new(path));
    }
    match TomlPreferenceStore::in_config_dir() {
        Ok(store) => Box::new(store),
        Err(error) => {
            warn!(%error, "theme preference will not be saved across restarts");
            Box::new(MemoryPreferenceStore::new())
        }
    }
}

/// Resolves the startup theme, applies it and opens the estimator window.
pub fn open_main_window(
    options: LaunchOptions,
    cx: &mut App,
) -> Result<()> {
    let preferences = open_preference_store(&options);
    let theme = match options.theme_override {
        Some(theme) => theme,
        None => resolve_startup_theme(preferences.as_ref(), || system_prefers_dark(cx)),
    };
    info!(%theme, "starting paycheck estimator");
    apply_theme(theme, cx);

    let window_prefs = WindowPreferences::default();
    let bounds = Bounds::centered(None, window_prefs.size, cx);

    cx.open_window(
        WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(APP_TITLE.into()),
                ..Default::default()
            }),
            ..Default::default()
        },
        move |window, cx| {
            let view = cx.new(|cx| {
                PaycheckWindow::new(
                    AppState::new(theme),
                    Box::new(SystemClipboard::new()),
                    preferences,
                    window,
                    cx,
                )
            });
            cx.new(|cx| Root::new(view, window, cx))
        },
    )?;

    Ok(())
}
