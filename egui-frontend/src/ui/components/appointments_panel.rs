//! # Appointments Panel Module
//!
//! The panel below the calendar listing the selected day's appointments.
//!
//! ## Features:
//! - Long date heading and a close button that clears the selection
//! - One colored card per appointment, in start-time order
//! - "Select a date" and "no appointments" placeholders
//! - Add-appointment button opening a draft preview

use eframe::egui;
use backend::domain::{AgendaView, AppointmentCard};

use crate::ui::app_state::AppointmentDashboardApp;
use crate::ui::components::theme::{darken, parse_hex_color, Theme};

enum PanelAction {
    Close,
    OpenAppointment(String),
    AddAppointment,
}

impl AppointmentDashboardApp {
    /// Render the appointments panel
    pub fn render_appointments_panel(&mut self, ui: &mut egui::Ui) {
        let theme = Theme::for_preference(self.ui.theme);
        let agenda = self.backend.agenda_for(self.calendar.selected_date);
        let mut action = None;

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(egui::RichText::new("Agendamentos").size(18.0).strong().color(theme.text_primary));
                if let Some(heading) = agenda.heading() {
                    ui.label(egui::RichText::new(heading).color(theme.text_muted));
                }
            });
            if agenda.date().is_some() {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("✕").on_hover_text("Fechar").clicked() {
                        action = Some(PanelAction::Close);
                    }
                });
            }
        });
        ui.separator();

        let footer_height = if agenda.date().is_some() { 40.0 } else { 0.0 };
        let mut scroll = egui::ScrollArea::vertical()
            .id_source("appointments_list")
            .auto_shrink([false, false])
            .max_height((ui.available_height() - footer_height).max(60.0));
        if self.panel_scroll_reset.replace(false) {
            scroll = scroll.vertical_scroll_offset(0.0);
        }

        scroll.show(ui, |ui| match agenda.placeholder() {
            Some(message) => {
                ui.add_space(24.0);
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(message).color(theme.text_muted));
                });
            }
            None => {
                for appointment in agenda.appointments() {
                    let card = self.backend.appointment_service.card_for(appointment);
                    if render_appointment_card(ui, &card).clicked() {
                        action = Some(PanelAction::OpenAppointment(card.id.clone()));
                    }
                    ui.add_space(6.0);
                }
            }
        });

        if let AgendaView::Empty { .. } | AgendaView::Appointments { .. } = agenda {
            ui.separator();
            let add = egui::Button::new(
                egui::RichText::new("+ Adicionar Agendamento").color(theme.accent_text).strong(),
            )
            .fill(theme.accent)
            .min_size(egui::vec2(ui.available_width(), 28.0));
            if ui.add(add).clicked() {
                action = Some(PanelAction::AddAppointment);
            }
        }

        match action {
            Some(PanelAction::Close) => self.handle_close_panel(),
            Some(PanelAction::OpenAppointment(id)) => self.handle_appointment_click(&id),
            Some(PanelAction::AddAppointment) => self.handle_add_appointment(),
            None => {}
        }
    }
}

/// Render one appointment card; the whole card is clickable
pub fn render_appointment_card(ui: &mut egui::Ui, card: &AppointmentCard) -> egui::Response {
    let color = parse_hex_color(&card.color);
    let white = egui::Color32::WHITE;

    let inner = egui::Frame::none()
        .fill(color)
        .rounding(8.0)
        .inner_margin(egui::Margin {
            left: 14.0,
            right: 10.0,
            top: 8.0,
            bottom: 8.0,
        })
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(&card.title).strong().color(white));
            ui.label(egui::RichText::new(&card.time_range).small().color(white));
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(format!("👤 {}", card.number_of_people)).small().color(white));
                ui.add_space(12.0);
                ui.label(egui::RichText::new(format!("👥 {}", card.assigned_staff)).small().color(white));
            });
        });

    // Darker bar along the left edge
    let rect = inner.response.rect;
    let bar = egui::Rect::from_min_max(rect.min, egui::pos2(rect.min.x + 4.0, rect.max.y));
    ui.painter().rect_filled(
        bar,
        egui::Rounding {
            nw: 8.0,
            sw: 8.0,
            ne: 0.0,
            se: 0.0,
        },
        darken(color, 0.7),
    );

    inner
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}
