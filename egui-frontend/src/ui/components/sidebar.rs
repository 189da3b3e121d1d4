//! # Sidebar Module
//!
//! Options sidebar. Docked on the left at desktop widths; on mobile widths
//! it is an overlay opened from the header menu button and closed with its
//! ✕, the backdrop or ESC.

use eframe::egui;

use crate::ui::app_state::AppointmentDashboardApp;
use crate::ui::components::theme::Theme;

const SIDEBAR_WIDTH: f32 = 240.0;

impl AppointmentDashboardApp {
    /// Render the sidebar for the current viewport mode
    pub fn render_sidebar(&mut self, ctx: &egui::Context) {
        let theme = Theme::for_preference(self.ui.theme);

        if !self.ui.is_mobile {
            egui::SidePanel::left("options_sidebar")
                .resizable(false)
                .exact_width(SIDEBAR_WIDTH)
                .show(ctx, |ui| {
                    sidebar_contents(ui, &theme);
                });
            return;
        }

        if !self.ui.sidebar_open {
            return;
        }

        let screen = ctx.screen_rect();
        let backdrop_clicked = egui::Area::new(egui::Id::new("sidebar_backdrop"))
            .order(egui::Order::Middle)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                ui.painter().rect_filled(screen, 0.0, egui::Color32::from_black_alpha(100));
                ui.allocate_rect(screen, egui::Sense::click()).clicked()
            })
            .inner;

        let mut close = backdrop_clicked;
        egui::Area::new(egui::Id::new("sidebar_overlay"))
            .order(egui::Order::Foreground)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(theme.card_background)
                    .inner_margin(12.0)
                    .show(ui, |ui| {
                        ui.set_width(SIDEBAR_WIDTH.min(screen.width() * 0.8));
                        ui.set_min_height(screen.height() - 24.0);
                        ui.horizontal(|ui| {
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                if ui.button("✕").on_hover_text("Fechar menu").clicked() {
                                    close = true;
                                }
                            });
                        });
                        sidebar_contents(ui, &theme);
                    });
            });

        if close {
            log::info!("📂 Closing sidebar");
            self.ui.close_sidebar();
        }
    }
}

fn sidebar_contents(ui: &mut egui::Ui, theme: &Theme) {
    ui.add_space(8.0);
    ui.label(egui::RichText::new("Opções").size(18.0).strong().color(theme.text_primary));
    ui.add_space(8.0);
    ui.label(egui::RichText::new("Opções serão adicionadas aqui").color(theme.text_muted));
}
