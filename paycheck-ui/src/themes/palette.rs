use gpui::{App, Hsla};
use gpui_component::Theme;

use crate::state::ThemePreference;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

pub fn rgba(
    r: f32,
    g: f32,
    b: f32,
    a: f32,
) -> Rgba {
    Rgba { r, g, b, a }
}

fn with_alpha(
    color: Rgba,
    a: f32,
) -> Rgba {
    Rgba { a, ..color }
}

/// Light and dark colour sets for the estimator window.
#[derive(Clone, Copy, Debug)]
struct Palette {
    accent: Rgba,
    window_bg: Rgba,
    control_bg: Rgba,
    label: Rgba,
    secondary_label: Rgba,
    tertiary_label: Rgba,
    separator: Rgba,
    selected_text_bg: Rgba,
    on_accent: Rgba,
    unemphasized_bg: Rgba,
    red: Rgba,
    orange: Rgba,
    yellow: Rgba,
    green: Rgba,
    teal: Rgba,
    blue: Rgba,
    purple: Rgba,
    pink: Rgba,
}

pub(crate) fn rgba_to_hsla(color: Rgba) -> Hsla {
    let max = color.r.max(color.g).max(color.b);
    let min = color.r.min(color.g).min(color.b);
    let l = (max + min) / 2.0;

    if (max - min).abs() < f32::EPSILON {
        return Hsla {
            h: 0.0,
            s: 0.0,
            l,
            a: color.a,
        };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if (max - color.r).abs() < f32::EPSILON {
        ((color.g - color.b) / d + if color.g < color.b { 6.0 } else { 0.0 }) / 6.0
    } else if (max - color.g).abs() < f32::EPSILON {
        ((color.b - color.r) / d + 2.0) / 6.0
    } else {
        ((color.r - color.g) / d + 4.0) / 6.0
    };

    Hsla {
        h,
        s,
        l,
        a: color.a,
    }
}

fn apply(
    target: &mut Hsla,
    color: Rgba,
) {
    *target = rgba_to_hsla(color);
}

fn hover_variant(base: Hsla) -> Hsla {
    let shift = if base.l > 0.5 { -0.05 } else { 0.05 };
    Hsla {
        l: (base.l + shift).clamp(0.0, 1.0),
        ..base
    }
}

fn active_variant(base: Hsla) -> Hsla {
    let shift = if base.l > 0.5 { -0.10 } else { 0.10 };
    Hsla {
        l: (base.l + shift).clamp(0.0, 1.0),
        ..base
    }
}

/// Near-black or near-white, whichever reads on `background`.
fn text_on(background: Rgba) -> Rgba {
    if rgba_to_hsla(background).l > 0.55 {
        rgba(0.08, 0.08, 0.08, 1.0)
    } else {
        rgba(0.97, 0.97, 0.97, 1.0)
    }
}

fn build_palette(
    dark: bool,
    accent: Option<Rgba>,
) -> Palette {
    let default_accent = if dark {
        rgba(0.45, 0.64, 1.0, 1.0)
    } else {
        rgba(0.16, 0.36, 0.95, 1.0)
    };
    let accent = accent.unwrap_or(default_accent);
    let on_accent = text_on(accent);

    if dark {
        Palette {
            accent,
            window_bg: rgba(0.10, 0.11, 0.12, 1.0),
            control_bg: rgba(0.16, 0.17, 0.19, 1.0),
            label: rgba(0.92, 0.93, 0.95, 1.0),
            secondary_label: rgba(0.74, 0.76, 0.79, 1.0),
            tertiary_label: rgba(0.58, 0.60, 0.64, 1.0),
            separator: rgba(0.28, 0.30, 0.33, 1.0),
            selected_text_bg: with_alpha(accent, 0.85),
            on_accent,
            unemphasized_bg: rgba(0.23, 0.24, 0.27, 1.0),
            red: rgba(0.93, 0.33, 0.32, 1.0),
            orange: rgba(0.95, 0.59, 0.24, 1.0),
            yellow: rgba(0.94, 0.79, 0.30, 1.0),
            green: rgba(0.34, 0.78, 0.45, 1.0),
            teal: rgba(0.31, 0.76, 0.73, 1.0),
            blue: rgba(0.40, 0.68, 1.0, 1.0),
            purple: rgba(0.72, 0.52, 0.98, 1.0),
            pink: rgba(0.95, 0.47, 0.76, 1.0),
        }
    } else {
        Palette {
            accent,
            window_bg: rgba(0.97, 0.97, 0.98, 1.0),
            control_bg: rgba(1.0, 1.0, 1.0, 1.0),
            label: rgba(0.13, 0.13, 0.14, 1.0),
            secondary_label: rgba(0.32, 0.33, 0.35, 1.0),
            tertiary_label: rgba(0.47, 0.48, 0.51, 1.0),
            separator: rgba(0.81, 0.82, 0.84, 1.0),
            selected_text_bg: with_alpha(accent, 0.90),
            on_accent,
            unemphasized_bg: rgba(0.92, 0.93, 0.95, 1.0),
            red: rgba(0.86, 0.25, 0.24, 1.0),
            orange: rgba(0.91, 0.49, 0.10, 1.0),
            yellow: rgba(0.85, 0.67, 0.18, 1.0),
            green: rgba(0.17, 0.66, 0.30, 1.0),
            teal: rgba(0.14, 0.63, 0.60, 1.0),
            blue: rgba(0.20, 0.46, 0.97, 1.0),
            purple: rgba(0.56, 0.35, 0.88, 1.0),
            pink: rgba(0.84, 0.27, 0.57, 1.0),
        }
    }
}

/// Writes the light or dark palette into the gpui-component global theme.
pub fn apply_palette(
    cx: &mut App,
    theme: ThemePreference,
    accent: Option<Rgba>,
) {
    let palette = build_palette(theme.is_dark(), accent);
    let colors = &mut Theme::global_mut(cx).colors;

    // ── Primary ───────────────────────────────────────────────────
    apply(&mut colors.primary, palette.accent);
    apply(&mut colors.primary_foreground, palette.on_accent);
    let accent_hsla = rgba_to_hsla(palette.accent);
    colors.primary_hover = hover_variant(accent_hsla);
    colors.primary_active = active_variant(accent_hsla);

    // ── Accent / background / foreground ──────────────────────────
    apply(&mut colors.accent, palette.unemphasized_bg);
    apply(&mut colors.accent_foreground, palette.label);
    apply(&mut colors.background, palette.window_bg);
    apply(&mut colors.foreground, palette.label);

    // ── Secondary / muted / popover ───────────────────────────────
    apply(&mut colors.secondary, palette.unemphasized_bg);
    apply(&mut colors.secondary_foreground, palette.secondary_label);
    let unemphasized_hsla = rgba_to_hsla(palette.unemphasized_bg);
    colors.secondary_hover = hover_variant(unemphasized_hsla);
    colors.secondary_active = active_variant(unemphasized_hsla);
    apply(&mut colors.muted, palette.unemphasized_bg);
    apply(&mut colors.muted_foreground, palette.tertiary_label);
    apply(&mut colors.popover, palette.control_bg);
    apply(&mut colors.popover_foreground, palette.label);

    // ── Borders / selection / ring ────────────────────────────────
    apply(&mut colors.border, palette.separator);
    apply(&mut colors.input, palette.separator);
    apply(&mut colors.ring, palette.accent);
    apply(&mut colors.selection, palette.selected_text_bg);
    apply(&mut colors.caret, palette.accent);
    apply(&mut colors.link, palette.accent);

    // ── Semantic colors ───────────────────────────────────────────
    apply(&mut colors.danger, palette.red);
    apply(&mut colors.danger_foreground, palette.on_accent);
    apply(&mut colors.success, palette.green);
    apply(&mut colors.success_foreground, palette.on_accent);
    apply(&mut colors.warning, palette.orange);
    apply(&mut colors.info, palette.blue);

    // ── Named palette (breakdown rows) ────────────────────────────
    apply(&mut colors.red, palette.red);
    apply(&mut colors.green, palette.green);
    apply(&mut colors.blue, palette.blue);
    apply(&mut colors.yellow, palette.yellow);
    apply(&mut colors.cyan, palette.teal);
    apply(&mut colors.magenta, palette.pink);
    apply(&mut colors.chart_4, palette.purple);

    // ── Surfaces ──────────────────────────────────────────────────
    apply(&mut colors.title_bar, palette.window_bg);
    apply(&mut colors.title_bar_border, palette.separator);
    apply(&mut colors.sidebar, palette.control_bg);
    apply(&mut colors.sidebar_foreground, palette.label);
    apply(&mut colors.sidebar_border, palette.separator);
    apply(&mut colors.list, palette.control_bg);
    apply(&mut colors.list_hover, palette.unemphasized_bg);
    apply(&mut colors.list_active, palette.accent);
    apply(&mut colors.group_box, palette.control_bg);
    apply(&mut colors.group_box_foreground, palette.label);
    apply(&mut colors.overlay, rgba(0.0, 0.0, 0.0, 0.4));
}
