//! # UI Components Module
//!
//! This module organizes all UI components for the appointment dashboard.
//! Each submodule handles a specific aspect of the user interface.
//!
//! ## Module Organization:
//! - `theme` - Light and dark color sets and egui visuals
//! - `header` - Title bar, settings menu and error banner
//! - `sidebar` - Docked or overlay options sidebar
//! - `calendar_renderer` - Annual calendar in paged or scrolling layout
//! - `appointments_panel` - Selected day's appointment list
//! - `modals` - Appointment details and add-appointment preview

pub mod appointments_panel;
pub mod calendar_renderer;
pub mod header;
pub mod modals;
pub mod sidebar;
pub mod theme;

pub use theme::*;
