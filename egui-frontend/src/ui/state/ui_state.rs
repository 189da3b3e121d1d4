//! # UI State Module
//!
//! This module contains general UI state that affects the overall user experience
//! but is not specific to any particular component.
//!
//! ## Responsibilities:
//! - Sidebar visibility
//! - Light/dark theme
//! - Mobile vs. desktop viewport detection
//! - Error message display

use shared::{CalendarLayoutMode, ThemePreference};

/// General UI state owned by the app and passed to whoever reads it
#[derive(Debug)]
pub struct UIState {
    /// Whether the sidebar overlay is open (mobile only; desktop always shows it)
    pub sidebar_open: bool,

    pub theme: ThemePreference,

    /// Viewport narrower than the configured breakpoint
    pub is_mobile: bool,

    /// Error message to display to the user
    pub error_message: Option<String>,
}

impl UIState {
    pub fn new(theme: ThemePreference) -> Self {
        Self {
            sidebar_open: false,
            theme,
            is_mobile: false,
            error_message: None,
        }
    }

    pub fn open_sidebar(&mut self) {
        self.sidebar_open = true;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        log::info!("🎨 Theme switched to {}", self.theme);
    }

    /// Re-evaluate the mobile flag for a viewport width. Returns true when
    /// the flag changed.
    pub fn update_viewport_width(&mut self, width: f32, breakpoint: f32) -> bool {
        let is_mobile = width < breakpoint;
        if is_mobile == self.is_mobile {
            return false;
        }
        self.is_mobile = is_mobile;
        if !is_mobile {
            // The desktop sidebar is docked, not an overlay
            self.sidebar_open = false;
        }
        true
    }

    pub fn layout_mode(&self) -> CalendarLayoutMode {
        if self.is_mobile {
            CalendarLayoutMode::Scrolling
        } else {
            CalendarLayoutMode::Paged
        }
    }

    /// Clear any error messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_breakpoint() {
        let mut state = UIState::new(ThemePreference::Light);
        assert!(!state.update_viewport_width(1200.0, 768.0));
        assert_eq!(state.layout_mode(), CalendarLayoutMode::Paged);

        assert!(state.update_viewport_width(500.0, 768.0));
        assert!(state.is_mobile);
        assert_eq!(state.layout_mode(), CalendarLayoutMode::Scrolling);

        // Exactly at the breakpoint counts as desktop
        assert!(state.update_viewport_width(768.0, 768.0));
        assert!(!state.is_mobile);
    }

    #[test]
    fn test_sidebar_closes_when_leaving_mobile() {
        let mut state = UIState::new(ThemePreference::Light);
        state.update_viewport_width(400.0, 768.0);
        state.open_sidebar();
        assert!(state.sidebar_open);

        state.update_viewport_width(1024.0, 768.0);
        assert!(!state.sidebar_open);
    }

    #[test]
    fn test_toggle_theme() {
        let mut state = UIState::new(ThemePreference::Light);
        state.toggle_theme();
        assert_eq!(state.theme, ThemePreference::Dark);
        state.toggle_theme();
        assert_eq!(state.theme, ThemePreference::Light);
    }
}
