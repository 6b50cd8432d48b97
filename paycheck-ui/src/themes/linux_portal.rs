//! Appearance settings from the XDG Desktop Portal (session D-Bus).

use zbus::{
    blocking::{Connection, Proxy},
    zvariant::OwnedValue,
};

use super::palette::{Rgba, rgba};

const PORTAL_SERVICE: &str = "org.freedesktop.portal.Desktop";
const PORTAL_PATH: &str = "/org/freedesktop/portal/desktop";
const PORTAL_INTERFACE: &str = "org.freedesktop.portal.Settings";
const APPEARANCE_NAMESPACE: &str = "org.freedesktop.appearance";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ColorScheme {
    NoPreference,
    PreferDark,
    PreferLight,
}

fn normalize_channel(value: f32) -> f32 {
    if value > 1.0 {
        (value / 255.0).clamp(0.0, 1.0)
    } else {
        value.clamp(0.0, 1.0)
    }
}

fn read_portal_setting(key: &str) -> Option<OwnedValue> {
    let connection = Connection::session().ok()?;
    let proxy = Proxy::new(&connection, PORTAL_SERVICE, PORTAL_PATH, PORTAL_INTERFACE).ok()?;

    proxy.call("ReadOne", &(APPEARANCE_NAMESPACE, key)).ok()
}

fn color_scheme_from_raw(raw: u32) -> Option<ColorScheme> {
    match raw {
        0 => Some(ColorScheme::NoPreference),
        1 => Some(ColorScheme::PreferDark),
        2 => Some(ColorScheme::PreferLight),
        _ => None,
    }
}

fn parse_color_scheme(value: OwnedValue) -> Option<ColorScheme> {
    let raw = value
        .try_clone()
        .ok()
        .and_then(|v| u32::try_from(v).ok())
        .or_else(|| {
            value
                .try_clone()
                .ok()
                .and_then(|v| i32::try_from(v).ok())
                .and_then(|v| u32::try_from(v).ok())
        })?;

    color_scheme_from_raw(raw)
}

fn parse_accent_color(value: OwnedValue) -> Option<Rgba> {
    let (r, g, b) = value
        .try_clone()
        .ok()
        .and_then(|v| <(f64, f64, f64)>::try_from(v).ok())?;

    Some(rgba(
        normalize_channel(r as f32),
        normalize_channel(g as f32),
        normalize_channel(b as f32),
        1.0,
    ))
}

/// `Some(dark)` when the desktop states a preference, `None` otherwise.
pub fn prefers_dark() -> Option<bool> {
    match read_portal_setting("color-scheme").and_then(parse_color_scheme) {
        Some(ColorScheme::PreferDark) => Some(true),
        Some(ColorScheme::PreferLight) => Some(false),
        Some(ColorScheme::NoPreference) | None => std::env::var("GTK_THEME")
            .ok()
            .map(|theme| theme.to_ascii_lowercase().contains("dark")),
    }
}

pub fn accent_color() -> Option<Rgba> {
    read_portal_setting("accent-color").and_then(parse_accent_color)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn color_scheme_codes() {
        assert_eq!(color_scheme_from_raw(1), Some(ColorScheme::PreferDark));
        assert_eq!(color_scheme_from_raw(2), Some(ColorScheme::PreferLight));
        assert_eq!(color_scheme_from_raw(0), Some(ColorScheme::NoPreference));
        assert_eq!(color_scheme_from_raw(7), None);
    }

    #[test]
    fn channels_in_byte_range_are_scaled() {
        assert_eq!(normalize_channel(255.0), 1.0);
        assert_eq!(normalize_channel(0.25), 0.25);
        assert_eq!(normalize_channel(-1.0), 0.0);
    }
}
