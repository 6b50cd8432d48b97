use gpui::{App, ClickEvent, IntoElement, ParentElement, Styled, Window, div};
use gpui_component::{StyledExt, Theme, h_flex, v_flex};

use crate::{components::make_ghost_button, state::ThemePreference};

pub const APP_TITLE: &str = "Paycheck Estimator";

/// Sections listed in the navigation panel.
pub const NAV_LINKS: &[&str] = &["Calculator", "How it works", "Newsletter"];

/// Title bar with the menu and theme toggles.
pub fn render_header<M, T>(
    theme: ThemePreference,
    on_toggle_menu: M,
    on_toggle_theme: T,
    cx: &App,
) -> impl IntoElement + use<M, T>
where
    M: Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    T: Fn(&ClickEvent, &mut Window, &mut App) + 'static,
{
    let theme_label = if theme.is_dark() { "Light mode" } else { "Dark mode" };

    h_flex()
        .w_full()
        .justify_between()
        .items_center()
        .pb_2()
        .border_b_1()
        .border_color(Theme::global(cx).colors.border)
        .child(
            h_flex()
                .gap_2()
                .items_center()
                .child(make_ghost_button("menu-toggle", "☰", on_toggle_menu))
                .child(div().text_xl().font_semibold().child(APP_TITLE)),
        )
        .child(make_ghost_button("theme-toggle", theme_label, on_toggle_theme))
}

pub fn render_nav_panel(cx: &App) -> impl IntoElement {
    let colors = &Theme::global(cx).colors;

    v_flex()
        .w_full()
        .gap_1()
        .p_2()
        .rounded_md()
        .bg(colors.sidebar)
        .text_color(colors.sidebar_foreground)
        .children(NAV_LINKS.iter().map(|link| div().px_2().py_1().child(*link)))
}
