//! # Theme Configuration
//!
//! Centralized colors for the light and dark dashboard themes. All visual
//! styling reads from `Theme` so switching themes is a single lookup.

use eframe::egui::{self, Color32};
use shared::ThemePreference;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color32,
    pub card_background: Color32,
    pub card_border: Color32,
    /// Primary text color (main content)
    pub text_primary: Color32,
    /// Secondary text color (less prominent)
    pub text_muted: Color32,
    /// Filler days of neighboring months
    pub text_filler: Color32,
    /// Selected day background and today ring
    pub accent: Color32,
    pub accent_text: Color32,
    pub hover_background: Color32,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            background: Color32::from_rgb(248, 249, 251),
            card_background: Color32::WHITE,
            card_border: Color32::from_rgb(226, 228, 233),
            text_primary: Color32::from_rgb(30, 30, 35),
            text_muted: Color32::from_rgb(110, 114, 124),
            text_filler: Color32::from_rgba_unmultiplied(110, 114, 124, 100),
            accent: Color32::from_rgb(0, 122, 255),
            accent_text: Color32::WHITE,
            hover_background: Color32::from_rgb(235, 240, 250),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(18, 18, 22),
            card_background: Color32::from_rgb(30, 31, 36),
            card_border: Color32::from_rgb(52, 54, 60),
            text_primary: Color32::from_rgb(236, 236, 240),
            text_muted: Color32::from_rgb(150, 153, 162),
            text_filler: Color32::from_rgba_unmultiplied(150, 153, 162, 90),
            accent: Color32::from_rgb(10, 132, 255),
            accent_text: Color32::WHITE,
            hover_background: Color32::from_rgb(44, 46, 54),
        }
    }

    pub fn for_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Light => Self::light(),
            ThemePreference::Dark => Self::dark(),
        }
    }
}

/// Install egui visuals matching the theme preference
pub fn apply_theme(ctx: &egui::Context, preference: ThemePreference) {
    let theme = Theme::for_preference(preference);
    let mut visuals = match preference {
        ThemePreference::Light => egui::Visuals::light(),
        ThemePreference::Dark => egui::Visuals::dark(),
    };
    visuals.panel_fill = theme.background;
    visuals.window_fill = theme.card_background;
    visuals.selection.bg_fill = theme.accent;
    ctx.set_visuals(visuals);
}

/// Parse a "#RRGGBB" appointment color; unparseable input falls back to gray
pub fn parse_hex_color(hex: &str) -> Color32 {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        return Color32::GRAY;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => Color32::from_rgb(r, g, b),
        _ => Color32::GRAY,
    }
}

/// Darker variant of an appointment color for accent bars
pub fn darken(color: Color32, factor: f32) -> Color32 {
    let scale = |channel: u8| (channel as f32 * factor).round().clamp(0.0, 255.0) as u8;
    Color32::from_rgb(scale(color.r()), scale(color.g()), scale(color.b()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_palette_colors() {
        assert_eq!(parse_hex_color("#007AFF"), Color32::from_rgb(0, 122, 255));
        assert_eq!(parse_hex_color("#00C7BE"), Color32::from_rgb(0, 199, 190));
        assert_eq!(parse_hex_color("FF2D55"), Color32::from_rgb(255, 45, 85));
    }

    #[test]
    fn test_parse_invalid_falls_back() {
        assert_eq!(parse_hex_color("#12345"), Color32::GRAY);
        assert_eq!(parse_hex_color("#GGGGGG"), Color32::GRAY);
        assert_eq!(parse_hex_color(""), Color32::GRAY);
    }

    #[test]
    fn test_darken() {
        assert_eq!(darken(Color32::from_rgb(100, 200, 50), 0.7), Color32::from_rgb(70, 140, 35));
    }
}
