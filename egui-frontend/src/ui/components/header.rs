//! # Header Module
//!
//! This module renders the dashboard header: the sidebar toggle on mobile
//! widths, the title and the settings menu.
//!
//! ## Key Functions:
//! - `render_header()` - title bar with the menu and settings buttons
//! - `render_settings_menu()` - theme toggle plus placeholder entries
//! - `render_messages()` - error banner below the header

use eframe::egui;

use crate::ui::app_state::AppointmentDashboardApp;
use crate::ui::components::theme::Theme;
use shared::ThemePreference;

impl AppointmentDashboardApp {
    /// Render the header
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        let theme = Theme::for_preference(self.ui.theme);

        ui.horizontal(|ui| {
            if self.ui.is_mobile {
                let menu = ui.add(egui::Button::new(egui::RichText::new("☰").size(18.0)).frame(false));
                if menu.on_hover_text("Abrir menu").clicked() {
                    log::info!("📂 Opening sidebar");
                    self.ui.open_sidebar();
                }
            }

            let (subtitle, title) = header_titles(self.ui.is_mobile);
            ui.vertical(|ui| {
                if let Some(subtitle) = subtitle {
                    ui.add(
                        egui::Label::new(egui::RichText::new(subtitle).small().color(theme.text_muted))
                            .selectable(false),
                    );
                }
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(title)
                            .size(20.0)
                            .strong()
                            .color(theme.text_primary),
                    )
                    .selectable(false),
                );
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                self.render_settings_menu(ui);
            });
        });
    }

    fn render_settings_menu(&mut self, ui: &mut egui::Ui) {
        ui.menu_button(egui::RichText::new("⚙").size(18.0), |ui| {
            let toggle_label = match self.ui.theme {
                ThemePreference::Light => "🌙 Modo escuro",
                ThemePreference::Dark => "☀ Modo claro",
            };
            if ui.button(toggle_label).clicked() {
                self.ui.toggle_theme();
                ui.close_menu();
            }

            ui.separator();

            for entry in ["Preferências", "Notificações", "Conta e segurança"] {
                if ui.button(entry).clicked() {
                    log::info!("⚙ Settings entry selected: {}", entry);
                    ui.close_menu();
                }
            }
        });
    }

    /// Error banner; the ✕ dismisses it
    pub fn render_messages(&mut self, ui: &mut egui::Ui) {
        let Some(message) = self.ui.error_message.clone() else {
            return;
        };

        egui::Frame::none()
            .fill(egui::Color32::from_rgb(255, 235, 235))
            .rounding(6.0)
            .inner_margin(egui::Margin::symmetric(10.0, 6.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(format!("❌ {}", message)).color(egui::Color32::from_rgb(180, 30, 30)));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("✕").clicked() {
                            self.ui.clear_messages();
                        }
                    });
                });
            });
        ui.add_space(6.0);
    }
}

/// Subtitle and title for the header. Mobile widths drop the subtitle.
fn header_titles(is_mobile: bool) -> (Option<&'static str>, &'static str) {
    if is_mobile {
        (None, "Dashboard")
    } else {
        (Some("Agendamentos"), "Dashboard")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_titles() {
        assert_eq!(header_titles(false), (Some("Agendamentos"), "Dashboard"));
        assert_eq!(header_titles(true), (None, "Dashboard"));
    }
}
