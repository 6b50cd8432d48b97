use std::path::PathBuf;

use clap::Parser;
use gpui::Application;
use tracing::error;

use paycheck_ui::{
    LaunchOptions,
    logging::{LoggingOptions, init_logging},
    open_main_window, setup_app,
    state::ThemePreference,
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Paycheck estimator: gross annual pay in, per-period breakdown out.
#[derive(Debug, Parser)]
struct Cli {
    /// Log filter, e.g. `debug` or `info,paycheck_ui=trace`. Overrides RUST_LOG.
    #[arg(long)]
    log_level: Option<String>,

    /// Also append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Do not write log records to stdout.
    #[arg(long)]
    no_stdout_log: bool,

    /// Preferences file (defaults to the platform config directory).
    #[arg(long)]
    preferences: Option<PathBuf>,

    /// Start in this theme without saving it.
    #[arg(long, value_parser = parse_theme)]
    theme: Option<ThemePreference>,
}

fn parse_theme(s: &str) -> Result<ThemePreference, String> {
    s.parse()
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(&LoggingOptions {
        level: cli.log_level,
        file: cli.log_file,
        stdout: !cli.no_stdout_log,
    })?;

    let launch = LaunchOptions {
        preferences_path: cli.preferences,
        theme_override: cli.theme,
    };

    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |cx| {
            setup_app(cx);
            if let Err(error) = open_main_window(launch, cx) {
                error!(?error, "could not open main window");
                cx.quit();
            }
        });

    Ok(())
}
