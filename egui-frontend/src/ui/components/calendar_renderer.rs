//! # Calendar Renderer Module
//!
//! Renders the annual calendar: year navigation, the paged month grid for
//! desktop widths and the horizontal carousel for mobile widths.
//!
//! ## Key Functions:
//! - `render_annual_calendar()` - year header plus the layout-specific body
//! - `render_month()` - one month card with weekday headers and day buttons
//!
//! Month grids come from the backend calendar service each frame; clicks are
//! handed back to `handle_day_click`, which ignores filler days.

use eframe::egui;
use backend::domain::locale;
use shared::{CalendarDay, CalendarLayoutMode, CalendarMonth};

use crate::ui::app_state::AppointmentDashboardApp;
use crate::ui::components::theme::Theme;

const CELL_SIZE: f32 = 26.0;
const MONTH_CARD_SPACING: f32 = 10.0;
const MONTH_CARD_WIDTH: f32 = CELL_SIZE * 7.0 + 24.0;

impl AppointmentDashboardApp {
    /// Render the annual calendar section
    pub fn render_annual_calendar(&mut self, ui: &mut egui::Ui, now: f64) {
        let theme = Theme::for_preference(self.ui.theme);

        self.render_year_navigation(ui, &theme);
        ui.add_space(8.0);

        let clicked = match self.calendar.layout_mode {
            CalendarLayoutMode::Paged => self.render_paged_months(ui, &theme),
            CalendarLayoutMode::Scrolling => self.render_scrolling_months(ui, &theme, now),
        };

        if let Some(day) = clicked {
            self.handle_day_click(&day);
        }
    }

    fn render_year_navigation(&mut self, ui: &mut egui::Ui, theme: &Theme) {
        ui.horizontal(|ui| {
            if ui.button("◀").on_hover_text("Ano anterior").clicked() {
                self.calendar.navigate_to_previous_year();
            }

            egui::Frame::none()
                .stroke(egui::Stroke::new(1.0, theme.card_border))
                .fill(theme.card_background)
                .rounding(6.0)
                .inner_margin(egui::Margin::symmetric(10.0, 4.0))
                .show(ui, |ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(self.calendar.displayed_year.to_string())
                                .size(22.0)
                                .strong()
                                .color(theme.text_primary),
                        )
                        .selectable(false),
                    );
                });

            if ui.button("▶").on_hover_text("Próximo ano").clicked() {
                self.calendar.navigate_to_next_year();
            }
        });
    }

    fn render_paged_months(&mut self, ui: &mut egui::Ui, theme: &Theme) -> Option<CalendarDay> {
        let months = self.backend.calendar_service.build_page(
            self.calendar.displayed_year,
            self.calendar.current_page,
            self.calendar.months_per_page,
            self.today,
            self.calendar.selected_date,
        );

        // 4 columns on wide screens, fewer as the window narrows
        let columns = ((ui.available_width() + MONTH_CARD_SPACING) / (MONTH_CARD_WIDTH + MONTH_CARD_SPACING))
            .floor()
            .clamp(1.0, 4.0) as usize;

        let mut clicked = None;
        for row in months.chunks(columns) {
            ui.horizontal_top(|ui| {
                ui.spacing_mut().item_spacing.x = MONTH_CARD_SPACING;
                for month in row {
                    if let Some(day) = render_month(ui, month, theme) {
                        clicked = Some(day);
                    }
                }
            });
            ui.add_space(MONTH_CARD_SPACING);
        }

        if self.calendar.total_pages() > 1 {
            ui.horizontal(|ui| {
                let previous = ui.add_enabled(self.calendar.has_previous_page(), egui::Button::new("◀"));
                if previous.on_hover_text("Página anterior").clicked() {
                    self.calendar.navigate_to_previous_page();
                }

                ui.label(
                    egui::RichText::new(format!(
                        "Página {} de {}",
                        self.calendar.current_page + 1,
                        self.calendar.total_pages()
                    ))
                    .small()
                    .color(theme.text_muted),
                );

                let next = ui.add_enabled(self.calendar.has_next_page(), egui::Button::new("▶"));
                if next.on_hover_text("Próxima página").clicked() {
                    self.calendar.navigate_to_next_page();
                }
            });
        }

        clicked
    }

    fn render_scrolling_months(&mut self, ui: &mut egui::Ui, theme: &Theme, now: f64) -> Option<CalendarDay> {
        let months = self.backend.calendar_service.build_year(
            self.calendar.displayed_year,
            self.today,
            self.calendar.selected_date,
        );
        let scroll_target = self
            .calendar
            .take_due_scroll(now, self.backend.config.scroll_settle_delay_secs());

        let mut clicked = None;
        egui::ScrollArea::horizontal()
            .id_source("month_carousel")
            .show(ui, |ui| {
                ui.horizontal_top(|ui| {
                    for month in &months {
                        let response = ui.vertical(|ui| render_month(ui, month, theme));
                        if let Some(day) = response.inner {
                            clicked = Some(day);
                        }
                        if scroll_target == Some(month.month) {
                            log::debug!("📅 Scrolling to month {}", month.month);
                            response.response.scroll_to_me(Some(egui::Align::Min));
                        }
                    }
                });
            });

        clicked
    }
}

/// Render a single month card. Returns the day that was clicked, if any.
pub fn render_month(ui: &mut egui::Ui, month: &CalendarMonth, theme: &Theme) -> Option<CalendarDay> {
    let mut clicked = None;

    egui::Frame::none()
        .fill(theme.card_background)
        .stroke(egui::Stroke::new(1.0, theme.card_border))
        .rounding(8.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.set_width(CELL_SIZE * 7.0 + 8.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(locale::month_title(month.month))
                        .strong()
                        .color(theme.text_primary),
                );
            });
            ui.add_space(4.0);

            egui::Grid::new(("month_grid", month.year, month.month))
                .num_columns(7)
                .spacing(egui::vec2(2.0, 2.0))
                .show(ui, |ui| {
                    for label in locale::weekday_header_labels(month.first_day_of_week) {
                        ui.add_sized(
                            egui::vec2(CELL_SIZE, 14.0),
                            egui::Label::new(egui::RichText::new(label).size(9.0).color(theme.text_muted)),
                        );
                    }
                    ui.end_row();

                    for week in month.weeks() {
                        for day in week {
                            if day_button(ui, day, theme).clicked() {
                                clicked = Some(day.clone());
                            }
                        }
                        ui.end_row();
                    }
                });
        });

    clicked
}

fn day_button(ui: &mut egui::Ui, day: &CalendarDay, theme: &Theme) -> egui::Response {
    let text_color = if !day.is_current_month() {
        theme.text_filler
    } else if day.is_selected {
        theme.accent_text
    } else {
        theme.text_primary
    };

    let mut text = egui::RichText::new(day.day.to_string()).size(11.0).color(text_color);
    if day.is_selected {
        text = text.strong();
    }

    let fill = if day.is_selected && day.is_current_month() {
        theme.accent
    } else {
        egui::Color32::TRANSPARENT
    };
    let stroke = if day.is_today && !day.is_selected {
        egui::Stroke::new(1.0, theme.accent)
    } else {
        egui::Stroke::NONE
    };

    let button = egui::Button::new(text)
        .fill(fill)
        .stroke(stroke)
        .rounding(4.0)
        .min_size(egui::vec2(CELL_SIZE, CELL_SIZE));

    ui.add_enabled(day.is_selectable(), button)
}
