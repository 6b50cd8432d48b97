pub mod actions;
pub mod clipboard;
pub mod components;
pub mod gui;
pub mod logging;
pub mod preferences;
pub mod state;
pub mod themes;
pub mod utils;

use gpui::App;
pub use gui::{LaunchOptions, open_main_window, setup_app};
use tracing::info;

gpui::actions!(paycheck_estimator, [Quit]);

// Takes a reference to the action (often unused) and mutable app context
pub fn quit(
    _: &Quit,
    cx: &mut App,
) {
    info!("Executing quit handler");
    cx.quit();
}
