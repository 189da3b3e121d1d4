//! # App Coordinator Module
//!
//! This module contains the main update loop, wiring the state structs to
//! the rendering components every frame.
//!
//! ## Application Flow:
//! 1. Apply the theme and re-evaluate the viewport width
//! 2. Arm or fire the deferred scroll-to-current-month
//! 3. Handle global input (ESC key)
//! 4. Render sidebar, header, appointments panel and calendar
//! 5. Render any active modal on top

use std::time::Duration;

use chrono::Datelike;
use eframe::egui;

use crate::ui::app_state::AppointmentDashboardApp;
use crate::ui::components::apply_theme;

impl eframe::App for AppointmentDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        apply_theme(ctx, self.ui.theme);
        self.handle_viewport_width(ctx.screen_rect().width());

        let now = ctx.input(|i| i.time);
        // Re-armed whenever the displayed year changes
        self.calendar.sync_scroll_request(self.today.month(), now);
        if self.calendar.pending_scroll().is_some() {
            ctx.request_repaint_after(Duration::from_millis(self.backend.config.scroll_settle_delay_ms));
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.handle_escape();
        }

        self.render_sidebar(ctx);

        egui::TopBottomPanel::top("header")
            .exact_height(56.0)
            .show(ctx, |ui| {
                self.render_header(ui);
            });

        let panel_height = ctx.screen_rect().height() * 0.35;
        egui::TopBottomPanel::bottom("appointments_panel")
            .resizable(true)
            .default_height(panel_height)
            .min_height(140.0)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                self.render_appointments_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_messages(ui);
            egui::ScrollArea::vertical()
                .id_source("calendar_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.render_annual_calendar(ui, now);
                });
        });

        self.render_modals(ctx);
    }
}
