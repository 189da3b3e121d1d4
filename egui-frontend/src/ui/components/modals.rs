//! # Modals Module
//!
//! The appointment details modal and the add-appointment preview. Both are
//! centered windows over a dimmed, input-blocking backdrop. Clicking the
//! backdrop, the close button or pressing ESC closes them.

use eframe::egui;
use backend::domain::{AppointmentDetails, AppointmentDraft};

use crate::ui::app_state::AppointmentDashboardApp;
use crate::ui::components::theme::{parse_hex_color, Theme};

const MODAL_WIDTH: f32 = 420.0;

impl AppointmentDashboardApp {
    /// Render any open modal
    pub fn render_modals(&mut self, ctx: &egui::Context) {
        if let Some(appointment) = self.modal.selected_appointment.clone() {
            let details = self.backend.appointment_service.details_for(&appointment);
            if !self.render_details_modal(ctx, &details) {
                log::info!("🪟 Closing details for appointment {}", details.id);
                self.modal.close_appointment();
            }
        } else if let Some(draft) = self.modal.draft.clone() {
            if !self.render_draft_modal(ctx, &draft) {
                self.modal.close_draft();
            }
        }

        self.modal.modal_just_opened = false;
    }

    /// Returns false once the modal should close
    fn render_details_modal(&self, ctx: &egui::Context, details: &AppointmentDetails) -> bool {
        let theme = Theme::for_preference(self.ui.theme);
        let backdrop_clicked = show_backdrop(ctx);

        let mut keep_open = true;
        egui::Window::new("appointment_details")
            .id(egui::Id::new("appointment_details_modal"))
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .fixed_size(egui::vec2(MODAL_WIDTH, 0.0))
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                let color = parse_hex_color(&details.color);
                egui::Frame::none()
                    .fill(color)
                    .rounding(6.0)
                    .inner_margin(12.0)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(&details.title)
                                    .size(20.0)
                                    .strong()
                                    .color(egui::Color32::WHITE),
                            );
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                if ui.button("✕").on_hover_text("Fechar").clicked() {
                                    keep_open = false;
                                }
                            });
                        });
                    });

                ui.add_space(10.0);
                egui::ScrollArea::vertical().max_height(420.0).show(ui, |ui| {
                    section_heading(ui, "🕑 Horário", &theme);
                    ui.label(egui::RichText::new(details.schedule_label()).color(theme.text_muted));
                    ui.add_space(12.0);

                    section_heading(ui, &format!("👤 {}", details.clients_heading), &theme);
                    name_list(ui, &details.client_names, details.clients_placeholder(), &theme);
                    ui.add_space(12.0);

                    section_heading(ui, &format!("👥 {}", details.staff_heading), &theme);
                    name_list(ui, &details.staff_names, details.staff_placeholder(), &theme);
                });
            });

        if backdrop_clicked && !self.modal.modal_just_opened {
            keep_open = false;
        }
        keep_open
    }

    fn render_draft_modal(&self, ctx: &egui::Context, draft: &AppointmentDraft) -> bool {
        let theme = Theme::for_preference(self.ui.theme);
        let backdrop_clicked = show_backdrop(ctx);

        let mut keep_open = true;
        egui::Window::new("Novo agendamento")
            .id(egui::Id::new("appointment_draft_modal"))
            .collapsible(false)
            .resizable(false)
            .fixed_size(egui::vec2(MODAL_WIDTH, 0.0))
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let (swatch, _) = ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::hover());
                    ui.painter().rect_filled(swatch, 4.0, parse_hex_color(&draft.color));
                    ui.label(egui::RichText::new(&draft.heading).color(theme.text_primary));
                });
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new("O cadastro de agendamentos ainda não está disponível.")
                        .color(theme.text_muted),
                );
                ui.add_space(8.0);
                if ui.button("Fechar").clicked() {
                    keep_open = false;
                }
            });

        if backdrop_clicked && !self.modal.modal_just_opened {
            keep_open = false;
        }
        keep_open
    }
}

fn section_heading(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    ui.label(egui::RichText::new(text).strong().color(theme.text_primary));
    ui.add_space(4.0);
}

fn name_list(ui: &mut egui::Ui, names: &[String], placeholder: Option<&str>, theme: &Theme) {
    if let Some(message) = placeholder {
        ui.label(egui::RichText::new(message).color(theme.text_muted));
        return;
    }
    for name in names {
        egui::Frame::none()
            .fill(theme.hover_background)
            .rounding(4.0)
            .inner_margin(egui::Margin::symmetric(8.0, 4.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(egui::RichText::new(name).color(theme.text_primary));
            });
        ui.add_space(2.0);
    }
}

/// Dim and block everything behind the modal. Returns true when the
/// backdrop itself was clicked.
fn show_backdrop(ctx: &egui::Context) -> bool {
    let screen = ctx.screen_rect();
    egui::Area::new(egui::Id::new("modal_backdrop"))
        .order(egui::Order::Middle)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            ui.painter().rect_filled(screen, 0.0, egui::Color32::from_black_alpha(128));
            ui.allocate_rect(screen, egui::Sense::click()).clicked()
        })
        .inner
}
